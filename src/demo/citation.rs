use once_cell::sync::Lazy;
use regex::Regex;

static CLAUSE_CITATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Clause\s+(\d+)\.(\d+)").expect("valid clause citation pattern"));

/// Maps a citation as written on a fact ("Clause 2.2", "3.1", "7",
/// "Schedule 1", "Preamble") to the id of the clause it points at.
///
/// Input is trusted to come from the registry. Anything malformed still yields
/// an id, which simply misses the content catalog later.
pub fn resolve_citation(source: &str) -> String {
    if source == "Preamble" {
        return "preamble".to_string();
    }

    let lowered = source.to_lowercase();
    if lowered.contains("schedule 1") {
        return "schedule-1".to_string();
    }
    if lowered.contains("schedule 2") {
        return "schedule-2".to_string();
    }

    if let Some(caps) = CLAUSE_CITATION.captures(source) {
        return format!("clause-{}-{}", &caps[1], &caps[2]);
    }

    let mut parts = source.split('.');
    let major = parts.next().unwrap_or_default();
    match parts.next() {
        Some(minor) => format!("clause-{}-{}", major, minor),
        None => format!("clause-{}", major),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_citation;

    #[test]
    fn resolves_every_citation_shape() {
        assert_eq!(resolve_citation("Clause 2.2"), "clause-2-2");
        assert_eq!(resolve_citation("clause 8.2"), "clause-8-2");
        assert_eq!(resolve_citation("Schedule 1"), "schedule-1");
        assert_eq!(resolve_citation("see SCHEDULE 2, para 3"), "schedule-2");
        assert_eq!(resolve_citation("Preamble"), "preamble");
        assert_eq!(resolve_citation("8.2"), "clause-8-2");
        assert_eq!(resolve_citation("7"), "clause-7");
    }

    #[test]
    fn preamble_match_is_exact() {
        assert_eq!(resolve_citation("preamble"), "clause-preamble");
    }

    #[test]
    fn malformed_citations_still_produce_an_id() {
        assert_eq!(resolve_citation("1.2.3"), "clause-1-2");
        assert_eq!(resolve_citation(""), "clause-");
    }

    #[test]
    fn every_fixture_source_lands_on_authored_content() {
        let registry = crate::demo::registry::Registry::shared();
        for category in registry.fact_categories() {
            for fact in &category.items {
                let clause_id = resolve_citation(fact.source);
                assert!(
                    registry.has_clause_content(&clause_id),
                    "{} cites {} -> {}",
                    fact.id,
                    fact.source,
                    clause_id
                );
            }
        }
    }
}
