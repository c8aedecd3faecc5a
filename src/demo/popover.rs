use serde::{Deserialize, Serialize};

use crate::demo::models::{Insight, Pill};

const ANNOTATION_TOP_OFFSET: f64 = 4.0;
const ANNOTATION_LEFT_OFFSET: f64 = 40.0;
const ANNOTATION_MIN_LEFT: f64 = 8.0;
const INSIGHT_MENU_WIDTH: f64 = 180.0;
const INSIGHT_MENU_GAP: f64 = 8.0;
const INSIGHT_MENU_HEIGHT_ONE_ACTION: f64 = 44.0;
const INSIGHT_MENU_HEIGHT_TWO_ACTIONS: f64 = 80.0;

/// On-screen rectangle, as reported by the host's layout.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Offset of the overlay inside the demo's containing box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Anchor {
    pub top: f64,
    pub left: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "id", rename_all = "camelCase")]
pub enum PopoverAction {
    ViewDefinition(String),
    ViewFact(String),
    ViewInsight(String),
    HighlightInDocument(String),
    ViewRelatedFact(String),
}

impl PopoverAction {
    pub fn label(&self) -> &'static str {
        match self {
            PopoverAction::ViewDefinition(_) => "View definition",
            PopoverAction::ViewFact(_) => "View fact",
            PopoverAction::ViewInsight(_) => "View insight",
            PopoverAction::HighlightInDocument(_) => "Highlight in document",
            PopoverAction::ViewRelatedFact(_) => "View related fact",
        }
    }
}

/// The ids an annotation carries. Any subset may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationTarget {
    pub definition_id: Option<String>,
    pub fact_id: Option<String>,
    pub insight_id: Option<String>,
}

impl From<&Pill> for AnnotationTarget {
    fn from(pill: &Pill) -> Self {
        Self {
            definition_id: pill.definition_id.map(str::to_string),
            fact_id: pill.fact_id.map(str::to_string),
            insight_id: pill.insight_id.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PopoverKind {
    Annotation,
    InsightContext {
        #[serde(rename = "insightId")]
        insight_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popover {
    pub kind: PopoverKind,
    pub anchor: Anchor,
    pub actions: Vec<PopoverAction>,
}

/// Actions in fixed order: definition, fact, insight. Absent ids are skipped.
pub fn annotation_actions(target: &AnnotationTarget) -> Vec<PopoverAction> {
    let mut actions = Vec::with_capacity(3);
    if let Some(id) = &target.definition_id {
        actions.push(PopoverAction::ViewDefinition(id.clone()));
    }
    if let Some(id) = &target.fact_id {
        actions.push(PopoverAction::ViewFact(id.clone()));
    }
    if let Some(id) = &target.insight_id {
        actions.push(PopoverAction::ViewInsight(id.clone()));
    }
    actions
}

pub fn insight_context_actions(insight: &Insight) -> Vec<PopoverAction> {
    let mut actions = vec![PopoverAction::HighlightInDocument(insight.clause.to_string())];
    if let Some(fact_id) = insight.target_fact_id {
        actions.push(PopoverAction::ViewRelatedFact(fact_id.to_string()));
    }
    actions
}

/// Just below the trigger, nudged left, never closer than the minimum to the
/// container's left edge.
pub fn annotation_anchor(trigger: &Rect, container: &Rect) -> Anchor {
    Anchor {
        top: trigger.bottom - container.top + ANNOTATION_TOP_OFFSET,
        left: (trigger.left - container.left - ANNOTATION_LEFT_OFFSET).max(ANNOTATION_MIN_LEFT),
    }
}

/// Above the trigger, right edges aligned.
pub fn insight_context_anchor(trigger: &Rect, container: &Rect, has_target_fact: bool) -> Anchor {
    let menu_height = if has_target_fact {
        INSIGHT_MENU_HEIGHT_TWO_ACTIONS
    } else {
        INSIGHT_MENU_HEIGHT_ONE_ACTION
    };
    Anchor {
        top: trigger.top - container.top - menu_height - INSIGHT_MENU_GAP,
        left: trigger.right - container.left - INSIGHT_MENU_WIDTH,
    }
}

/// Owns the single overlay a demo can show. Opening another replaces it.
#[derive(Debug, Default)]
pub struct PopoverController {
    open: Option<Popover>,
}

impl PopoverController {
    pub fn current(&self) -> Option<&Popover> {
        self.open.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Returns false, and leaves nothing open, when the target has no ids.
    pub fn open_annotation(&mut self, trigger: &Rect, container: &Rect, target: &AnnotationTarget) -> bool {
        let actions = annotation_actions(target);
        if actions.is_empty() {
            self.open = None;
            return false;
        }
        self.open = Some(Popover {
            kind: PopoverKind::Annotation,
            anchor: annotation_anchor(trigger, container),
            actions,
        });
        true
    }

    pub fn open_insight_context(&mut self, trigger: &Rect, container: &Rect, insight: &Insight) {
        self.open = Some(Popover {
            kind: PopoverKind::InsightContext { insight_id: insight.id.to_string() },
            anchor: insight_context_anchor(trigger, container, insight.target_fact_id.is_some()),
            actions: insight_context_actions(insight),
        });
    }

    /// Idempotent. Returns whether something was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    /// Closes the overlay and hands back the chosen action. An index past the
    /// end leaves the overlay open.
    pub fn take_action(&mut self, index: usize) -> Option<PopoverAction> {
        let action = self.open.as_ref()?.actions.get(index)?.clone();
        self.open = None;
        Some(action)
    }

    /// A press outside the overlay's rendered bounds dismisses it.
    pub fn on_pointer_down(&mut self, point: Point, rendered: &Rect) -> bool {
        if self.open.is_some() && !rendered.contains(point) {
            return self.close();
        }
        false
    }

    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" {
            return self.close();
        }
        false
    }
}
