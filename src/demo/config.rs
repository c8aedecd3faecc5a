use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::demo::view_state::{IntelligenceTab, StructureTab, ViewState};

pub const DEFAULT_INITIAL_CLAUSE: &str = "clause-2-2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialView {
    #[default]
    Structure,
    Clause,
    Intelligence,
}

/// The ways the landing page embeds the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoVariant {
    Structure,
    Clause,
    Insights,
    Facts,
    Loops,
}

/// Per-instance options. Deserializes from the camelCase object a page
/// embeds, with every field optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DemoConfig {
    pub initial_view: InitialView,
    /// Off: clause-tree clicks do nothing and the back button is hidden.
    pub allow_navigation: bool,
    pub initial_clause_id: String,
    pub initial_intelligence_tab: IntelligenceTab,
    pub hidden_tabs: HashSet<IntelligenceTab>,
    pub embedded: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            initial_view: InitialView::Structure,
            allow_navigation: true,
            initial_clause_id: DEFAULT_INITIAL_CLAUSE.to_string(),
            initial_intelligence_tab: IntelligenceTab::Insights,
            hidden_tabs: HashSet::new(),
            embedded: false,
        }
    }
}

impl DemoConfig {
    pub fn for_variant(variant: DemoVariant) -> Self {
        let (initial_view, initial_intelligence_tab) = match variant {
            DemoVariant::Structure => (InitialView::Structure, IntelligenceTab::Insights),
            DemoVariant::Clause => (InitialView::Clause, IntelligenceTab::Insights),
            DemoVariant::Insights => (InitialView::Intelligence, IntelligenceTab::Insights),
            DemoVariant::Facts => (InitialView::Intelligence, IntelligenceTab::Facts),
            DemoVariant::Loops => (InitialView::Intelligence, IntelligenceTab::Loops),
        };
        Self { initial_view, initial_intelligence_tab, ..Self::default() }
    }

    pub fn initial_state(&self) -> ViewState {
        match self.initial_view {
            InitialView::Structure => ViewState::structure(StructureTab::Outline),
            InitialView::Clause => ViewState::clause(self.initial_clause_id.clone()),
            InitialView::Intelligence => ViewState::intelligence(self.initial_intelligence_tab, None),
        }
    }

    pub fn is_tab_hidden(&self, tab: IntelligenceTab) -> bool {
        self.hidden_tabs.contains(&tab)
    }

    pub fn visible_intelligence_tabs(&self) -> Vec<IntelligenceTab> {
        IntelligenceTab::ALL.into_iter().filter(|tab| !self.is_tab_hidden(*tab)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config: DemoConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.initial_state(), ViewState::structure(StructureTab::Outline));
    }

    #[test]
    fn parses_camel_case_options() {
        let config: DemoConfig = serde_json::from_str(
            r#"{"initialView":"clause","allowNavigation":false,"initialClauseId":"clause-5-2","hiddenTabs":["facts"]}"#,
        )
        .unwrap();
        assert!(!config.allow_navigation);
        assert_eq!(config.initial_state(), ViewState::clause("clause-5-2"));
        assert!(config.is_tab_hidden(IntelligenceTab::Facts));
        assert_eq!(
            config.visible_intelligence_tabs(),
            vec![IntelligenceTab::Loops, IntelligenceTab::Insights]
        );
    }

    #[test]
    fn variants_pick_their_starting_panel() {
        assert_eq!(
            DemoConfig::for_variant(DemoVariant::Facts).initial_state(),
            ViewState::intelligence(IntelligenceTab::Facts, None)
        );
        assert_eq!(
            DemoConfig::for_variant(DemoVariant::Loops).initial_state(),
            ViewState::intelligence(IntelligenceTab::Loops, None)
        );
        assert_eq!(
            DemoConfig::for_variant(DemoVariant::Insights).initial_state(),
            ViewState::intelligence(IntelligenceTab::Insights, None)
        );
        assert_eq!(
            DemoConfig::for_variant(DemoVariant::Clause).initial_state(),
            ViewState::clause(DEFAULT_INITIAL_CLAUSE)
        );
    }
}
