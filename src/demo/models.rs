use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClauseNode {
    pub id: &'static str,
    pub number: &'static str,
    pub title: &'static str,
    pub children: Vec<ClauseNode>,
}

impl ClauseNode {
    pub fn leaf(id: &'static str, number: &'static str, title: &'static str) -> Self {
        Self { id, number, title, children: Vec::new() }
    }

    pub fn branch(
        id: &'static str,
        number: &'static str,
        title: &'static str,
        children: Vec<ClauseNode>,
    ) -> Self {
        Self { id, number, title, children }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first search through this node and everything below it.
    pub fn find(&self, id: &str) -> Option<&ClauseNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillCategory {
    Definition,
    Amount,
    Date,
    Duration,
    Percentage,
}

/// An inline annotation embedded in clause text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pill {
    pub category: PillCategory,
    pub label: &'static str,
    pub definition_id: Option<&'static str>,
    pub fact_id: Option<&'static str>,
    pub insight_id: Option<&'static str>,
}

impl Pill {
    pub fn is_clickable(&self) -> bool {
        self.definition_id.is_some() || self.fact_id.is_some() || self.insight_id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Inline {
    Text { text: &'static str },
    Pill(Pill),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "inlines", rename_all = "lowercase")]
pub enum Block {
    Heading(Vec<Inline>),
    Paragraph(Vec<Inline>),
    Bullets(Vec<Vec<Inline>>),
}

impl Block {
    fn inlines(&self) -> Box<dyn Iterator<Item = &Inline> + '_> {
        match self {
            Block::Heading(runs) | Block::Paragraph(runs) => Box::new(runs.iter()),
            Block::Bullets(items) => Box::new(items.iter().flatten()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClauseContent {
    pub id: String,
    pub number: String,
    pub title: String,
    pub content: Vec<Block>,
}

impl ClauseContent {
    pub fn pills(&self) -> impl Iterator<Item = &Pill> + '_ {
        self.content.iter().flat_map(Block::inlines).filter_map(|inline| match inline {
            Inline::Pill(pill) => Some(pill),
            Inline::Text { .. } => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub id: &'static str,
    pub term: &'static str,
    pub definition: &'static str,
    pub used_in: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    pub id: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    /// Citation string such as "Clause 8.2", "3.1" or "Schedule 2".
    pub source: &'static str,
    pub party: Option<&'static str>,
    pub semantic_confidence: u8,
    pub cross_ref_confidence: u8,
    pub related_insight_id: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FactIcon {
    Users,
    Scale,
    Shield,
    Dollar,
    Calendar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: FactIcon,
    pub items: Vec<Fact>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Optimization,
    Compliance,
    Risk,
    Consistency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: &'static str,
    pub title: &'static str,
    pub explanation: &'static str,
    /// Clause id, not a citation.
    pub clause: &'static str,
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub target_fact_id: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoopMessage {
    pub id: &'static str,
    pub user_id: &'static str,
    pub user_name: &'static str,
    #[serde(rename = "isAI")]
    pub is_ai: bool,
    pub content: &'static str,
    pub timestamp: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Loop {
    pub id: &'static str,
    pub title: &'static str,
    pub status: LoopStatus,
    pub updated_at: &'static str,
    pub messages: Vec<LoopMessage>,
}

impl Loop {
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}
