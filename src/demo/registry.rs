use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::demo::fixtures;
use crate::demo::models::{
    Block, ClauseContent, ClauseNode, Definition, Fact, FactCategory, Inline, Insight, Loop,
};

pub const PLACEHOLDER_BODY: &str = "Clause content would be displayed here...";
pub const UNKNOWN_CLAUSE_TITLE: &str = "Unknown Clause";

static SHARED: Lazy<Registry> = Lazy::new(Registry::from_fixtures);

/// Read-only catalog of everything the demo can point at.
///
/// Built once; the fact -> category index is derived at construction so
/// that jumping to a fact never scans the category lists.
#[derive(Debug)]
pub struct Registry {
    outline: Vec<ClauseNode>,
    definitions: Vec<Definition>,
    fact_categories: Vec<FactCategory>,
    insights: Vec<Insight>,
    loops: Vec<Loop>,
    clause_contents: HashMap<String, ClauseContent>,
    definition_index: HashMap<&'static str, usize>,
    fact_index: HashMap<&'static str, (usize, usize)>,
    insight_index: HashMap<&'static str, usize>,
}

impl Registry {
    pub fn shared() -> &'static Registry {
        &SHARED
    }

    pub fn from_fixtures() -> Self {
        Self::new(
            fixtures::outline(),
            fixtures::definitions(),
            fixtures::fact_categories(),
            fixtures::insights(),
            fixtures::loops(),
            fixtures::clause_contents(),
        )
    }

    pub fn new(
        outline: Vec<ClauseNode>,
        definitions: Vec<Definition>,
        fact_categories: Vec<FactCategory>,
        insights: Vec<Insight>,
        loops: Vec<Loop>,
        clause_contents: Vec<ClauseContent>,
    ) -> Self {
        let definition_index = definitions.iter().enumerate().map(|(i, d)| (d.id, i)).collect();
        let insight_index = insights.iter().enumerate().map(|(i, s)| (s.id, i)).collect();

        let mut fact_index = HashMap::new();
        for (ci, category) in fact_categories.iter().enumerate() {
            for (fi, fact) in category.items.iter().enumerate() {
                if fact_index.insert(fact.id, (ci, fi)).is_some() {
                    tracing::warn!("Duplicate fact id {} in category {}", fact.id, category.id);
                }
            }
        }

        let clause_contents = clause_contents
            .into_iter()
            .map(|content| (content.id.clone(), content))
            .collect();

        Self {
            outline,
            definitions,
            fact_categories,
            insights,
            loops,
            clause_contents,
            definition_index,
            fact_index,
            insight_index,
        }
    }

    pub fn outline(&self) -> &[ClauseNode] {
        &self.outline
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    pub fn fact_categories(&self) -> &[FactCategory] {
        &self.fact_categories
    }

    pub fn insights(&self) -> &[Insight] {
        &self.insights
    }

    pub fn loops(&self) -> &[Loop] {
        &self.loops
    }

    pub fn get_definition(&self, id: &str) -> Option<&Definition> {
        self.definition_index.get(id).map(|&i| &self.definitions[i])
    }

    pub fn get_fact(&self, id: &str) -> Option<&Fact> {
        self.fact_index
            .get(id)
            .map(|&(ci, fi)| &self.fact_categories[ci].items[fi])
    }

    /// Reverse lookup: the category that owns `fact_id`.
    pub fn get_fact_category(&self, fact_id: &str) -> Option<&FactCategory> {
        self.fact_index.get(fact_id).map(|&(ci, _)| &self.fact_categories[ci])
    }

    pub fn get_insight(&self, id: &str) -> Option<&Insight> {
        self.insight_index.get(id).map(|&i| &self.insights[i])
    }

    pub fn get_loop(&self, id: &str) -> Option<&Loop> {
        self.loops.iter().find(|l| l.id == id)
    }

    pub fn find_outline_node(&self, id: &str) -> Option<&ClauseNode> {
        self.outline.iter().find_map(|node| node.find(id))
    }

    pub fn has_clause_content(&self, clause_id: &str) -> bool {
        self.clause_contents.contains_key(clause_id)
    }

    /// Never fails. Ids without authored text get a placeholder body, titled
    /// from the outline when the id appears there.
    pub fn get_clause_content(&self, clause_id: &str) -> ClauseContent {
        if let Some(content) = self.clause_contents.get(clause_id) {
            return content.clone();
        }

        let (number, title) = match self.find_outline_node(clause_id) {
            Some(node) => (node.number, node.title),
            None => ("", UNKNOWN_CLAUSE_TITLE),
        };
        ClauseContent {
            id: clause_id.to_string(),
            number: number.to_string(),
            title: title.to_string(),
            content: vec![Block::Paragraph(vec![Inline::Text { text: PLACEHOLDER_BODY }])],
        }
    }
}
