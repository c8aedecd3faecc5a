use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureTab {
    #[default]
    Outline,
    Definitions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntelligenceTab {
    Loops,
    #[default]
    Insights,
    Facts,
}

impl IntelligenceTab {
    pub const ALL: [IntelligenceTab; 3] =
        [IntelligenceTab::Loops, IntelligenceTab::Insights, IntelligenceTab::Facts];
}

/// What the demo panel is currently showing. The sub-tab travels with the
/// state so history restores it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ViewState {
    Structure {
        tab: StructureTab,
    },
    Clause {
        #[serde(rename = "clauseId")]
        clause_id: String,
    },
    Intelligence {
        tab: IntelligenceTab,
        #[serde(rename = "highlightId", skip_serializing_if = "Option::is_none")]
        highlight_id: Option<String>,
    },
}

impl ViewState {
    pub fn structure(tab: StructureTab) -> Self {
        ViewState::Structure { tab }
    }

    pub fn clause(clause_id: impl Into<String>) -> Self {
        ViewState::Clause { clause_id: clause_id.into() }
    }

    pub fn intelligence(tab: IntelligenceTab, highlight_id: Option<String>) -> Self {
        ViewState::Intelligence { tab, highlight_id }
    }

    pub fn clause_id(&self) -> Option<&str> {
        match self {
            ViewState::Clause { clause_id } => Some(clause_id),
            ViewState::Structure { .. } | ViewState::Intelligence { .. } => None,
        }
    }

    pub fn structure_tab(&self) -> Option<StructureTab> {
        match self {
            ViewState::Structure { tab } => Some(*tab),
            ViewState::Clause { .. } | ViewState::Intelligence { .. } => None,
        }
    }

    pub fn intelligence_tab(&self) -> Option<IntelligenceTab> {
        match self {
            ViewState::Intelligence { tab, .. } => Some(*tab),
            ViewState::Structure { .. } | ViewState::Clause { .. } => None,
        }
    }
}

/// Back stack of previously shown states, most recent last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<ViewState>,
}

impl NavigationHistory {
    pub fn push(&mut self, state: ViewState) {
        self.entries.push(state);
    }

    pub fn pop(&mut self) -> Option<ViewState> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ViewState] {
        &self.entries
    }
}
