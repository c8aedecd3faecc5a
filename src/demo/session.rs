use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::demo::citation::resolve_citation;
use crate::demo::config::DemoConfig;
use crate::demo::fixtures::DEFAULT_EXPANDED_CATEGORIES;
use crate::demo::models::{ClauseContent, Loop, Pill};
use crate::demo::popover::{AnnotationTarget, Point, Popover, PopoverAction, PopoverController, Rect};
use crate::demo::registry::Registry;
use crate::demo::timers::{TimerEvent, TimerHandle, Timers};
use crate::demo::view_state::{IntelligenceTab, NavigationHistory, StructureTab, ViewState};

pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(2000);
/// Lets the definitions tab switch settle before scrolling.
pub const DEFINITION_SCROLL_DELAY: Duration = Duration::from_millis(100);
/// Covers the view transition and category expand animation.
pub const PANEL_SCROLL_DELAY: Duration = Duration::from_millis(350);

/// Something the host should do in response to time passing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    HighlightCleared,
    ScrollTo {
        #[serde(rename = "elementId")]
        element_id: String,
    },
}

#[derive(Debug)]
struct Highlight {
    id: String,
    expiry: TimerHandle,
}

/// Everything a renderer needs to draw the demo at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoSnapshot {
    pub view: ViewState,
    pub can_go_back: bool,
    pub highlighted_id: Option<String>,
    pub active_loop_id: Option<String>,
    pub expanded_categories: BTreeMap<String, bool>,
    pub visible_intelligence_tabs: Vec<IntelligenceTab>,
    pub popover: Option<Popover>,
}

/// One interactive demo instance. Instances share nothing but the read-only
/// registry.
#[derive(Debug)]
pub struct DemoSession<'r> {
    registry: &'r Registry,
    config: DemoConfig,
    current: ViewState,
    history: NavigationHistory,
    highlight: Option<Highlight>,
    pending_scroll: Option<TimerHandle>,
    active_loop_id: Option<String>,
    expanded_categories: BTreeMap<String, bool>,
    popovers: PopoverController,
    timers: Timers,
}

impl DemoSession<'static> {
    pub fn new(config: DemoConfig) -> Self {
        DemoSession::with_registry(Registry::shared(), config)
    }
}

impl<'r> DemoSession<'r> {
    pub fn with_registry(registry: &'r Registry, config: DemoConfig) -> Self {
        let mut expanded_categories: BTreeMap<String, bool> = registry
            .fact_categories()
            .iter()
            .map(|category| (category.id.to_string(), false))
            .collect();
        for (id, expanded) in DEFAULT_EXPANDED_CATEGORIES {
            if let Some(flag) = expanded_categories.get_mut(*id) {
                *flag = *expanded;
            }
        }

        Self {
            registry,
            current: config.initial_state(),
            config,
            history: NavigationHistory::default(),
            highlight: None,
            pending_scroll: None,
            active_loop_id: None,
            expanded_categories,
            popovers: PopoverController::default(),
            timers: Timers::default(),
        }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn current(&self) -> &ViewState {
        &self.current
    }

    pub fn history(&self) -> &[ViewState] {
        self.history.entries()
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    pub fn navigate_to(&mut self, next: ViewState) {
        tracing::debug!("navigate {:?} -> {:?}", self.current, next);
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(previous);
    }

    /// Returns false, changing nothing, when there is nowhere to go back to.
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                tracing::debug!("back {:?} -> {:?}", self.current, previous);
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.config.allow_navigation && !self.history.is_empty()
    }

    /// Back to the configured starting point. Category expansion is kept.
    pub fn reset(&mut self) {
        self.current = self.config.initial_state();
        self.history.clear();
        self.active_loop_id = None;
        self.highlight = None;
        self.pending_scroll = None;
        self.timers.clear();
        self.popovers.close();
    }

    pub fn select_structure_tab(&mut self, tab: StructureTab) -> bool {
        match &mut self.current {
            ViewState::Structure { tab: current } => {
                *current = tab;
                true
            }
            ViewState::Clause { .. } | ViewState::Intelligence { .. } => false,
        }
    }

    /// Switching tabs always leaves any open loop thread.
    pub fn select_intelligence_tab(&mut self, tab: IntelligenceTab) -> bool {
        if self.config.is_tab_hidden(tab) {
            tracing::debug!("ignoring hidden tab {:?}", tab);
            return false;
        }
        match &mut self.current {
            ViewState::Intelligence { tab: current, .. } => {
                *current = tab;
                self.active_loop_id = None;
                true
            }
            ViewState::Structure { .. } | ViewState::Clause { .. } => false,
        }
    }

    pub fn view_definition(&mut self, definition_id: &str) {
        self.navigate_to(ViewState::structure(StructureTab::Definitions));
        self.set_highlight(definition_id);
        self.popovers.close();
        self.schedule_scroll(DEFINITION_SCROLL_DELAY, format!("definition-{}", definition_id));
    }

    pub fn view_fact(&mut self, fact_id: &str) {
        self.navigate_to(ViewState::intelligence(IntelligenceTab::Facts, Some(fact_id.to_string())));
        let registry = self.registry;
        match registry.get_fact_category(fact_id) {
            Some(category) => {
                self.expanded_categories.insert(category.id.to_string(), true);
            }
            None => tracing::debug!("fact {} has no category", fact_id),
        }
        self.set_highlight(fact_id);
        self.popovers.close();
        self.schedule_scroll(PANEL_SCROLL_DELAY, format!("fact-{}", fact_id));
    }

    pub fn view_insight(&mut self, insight_id: &str) {
        self.navigate_to(ViewState::intelligence(IntelligenceTab::Insights, Some(insight_id.to_string())));
        self.set_highlight(insight_id);
        self.popovers.close();
        self.schedule_scroll(PANEL_SCROLL_DELAY, format!("insight-{}", insight_id));
    }

    pub fn view_clause_by_source(&mut self, source: &str) {
        let clause_id = resolve_citation(source);
        self.navigate_to(ViewState::clause(clause_id));
    }

    /// Gated by `allow_navigation`. Returns whether the view changed.
    pub fn select_clause_from_tree(&mut self, clause_id: &str) -> bool {
        if !self.config.allow_navigation {
            tracing::debug!("navigation disabled, ignoring clause {}", clause_id);
            return false;
        }
        self.navigate_to(ViewState::clause(clause_id));
        true
    }

    /// Jumps to the clause a definition is introduced in, when it has one.
    pub fn view_definition_usage(&mut self, definition_id: &str) -> bool {
        let Some(used_in) = self.registry.get_definition(definition_id).and_then(|d| d.used_in) else {
            return false;
        };
        self.navigate_to(ViewState::clause(used_in));
        true
    }

    /// Same gate as clause-tree clicks.
    pub fn view_fact_source(&mut self, fact_id: &str) -> bool {
        if !self.config.allow_navigation {
            tracing::debug!("navigation disabled, ignoring source of {}", fact_id);
            return false;
        }
        let Some(source) = self.registry.get_fact(fact_id).map(|f| f.source) else {
            return false;
        };
        self.view_clause_by_source(source);
        true
    }

    pub fn view_related_insight(&mut self, fact_id: &str) -> bool {
        let Some(insight_id) = self.registry.get_fact(fact_id).and_then(|f| f.related_insight_id) else {
            return false;
        };
        self.view_insight(insight_id);
        true
    }

    pub fn current_clause(&self) -> Option<ClauseContent> {
        self.current.clause_id().map(|id| self.registry.get_clause_content(id))
    }

    // ---------------------------------------------------------------------
    // Highlight and deferred work
    // ---------------------------------------------------------------------

    /// Replaces any earlier highlight; only the latest one's expiry stays
    /// scheduled.
    pub fn set_highlight(&mut self, id: &str) {
        if let Some(previous) = self.highlight.take() {
            self.timers.cancel(previous.expiry);
        }
        let expiry = self.timers.schedule(HIGHLIGHT_DURATION, TimerEvent::ClearHighlight);
        self.highlight = Some(Highlight { id: id.to_string(), expiry });
    }

    pub fn highlighted_id(&self) -> Option<&str> {
        self.highlight.as_ref().map(|h| h.id.as_str())
    }

    pub fn highlight_expires_at(&self) -> Option<Duration> {
        self.highlight.as_ref().and_then(|h| self.timers.deadline(&h.expiry))
    }

    /// At most one scroll is pending; a newer one supersedes it.
    fn schedule_scroll(&mut self, delay: Duration, element_id: String) {
        if let Some(previous) = self.pending_scroll.take() {
            self.timers.cancel(previous);
        }
        self.pending_scroll = Some(self.timers.schedule(delay, TimerEvent::ScrollTo { element_id }));
    }

    /// Moves the session clock forward and returns whatever came due.
    pub fn advance(&mut self, by: Duration) -> Vec<Effect> {
        self.timers
            .advance(by)
            .into_iter()
            .filter_map(|event| match event {
                TimerEvent::ClearHighlight => self.highlight.take().map(|_| Effect::HighlightCleared),
                TimerEvent::ScrollTo { element_id } => {
                    self.pending_scroll = None;
                    Some(Effect::ScrollTo { element_id })
                }
            })
            .collect()
    }

    // ---------------------------------------------------------------------
    // Loops and fact categories
    // ---------------------------------------------------------------------

    pub fn open_loop(&mut self, loop_id: &str) -> bool {
        if self.registry.get_loop(loop_id).is_none() {
            tracing::debug!("unknown loop {}", loop_id);
            return false;
        }
        self.active_loop_id = Some(loop_id.to_string());
        true
    }

    pub fn close_loop(&mut self) {
        self.active_loop_id = None;
    }

    pub fn active_loop(&self) -> Option<&'r Loop> {
        let registry = self.registry;
        self.active_loop_id.as_deref().and_then(|id| registry.get_loop(id))
    }

    pub fn toggle_fact_category(&mut self, category_id: &str) -> Option<bool> {
        let flag = self.expanded_categories.get_mut(category_id)?;
        *flag = !*flag;
        Some(*flag)
    }

    pub fn is_category_expanded(&self, category_id: &str) -> bool {
        self.expanded_categories.get(category_id).copied().unwrap_or(false)
    }

    // ---------------------------------------------------------------------
    // Popovers
    // ---------------------------------------------------------------------

    pub fn popover(&self) -> Option<&Popover> {
        self.popovers.current()
    }

    pub fn open_annotation(&mut self, trigger: &Rect, container: &Rect, target: &AnnotationTarget) -> bool {
        self.popovers.open_annotation(trigger, container, target)
    }

    pub fn open_pill(&mut self, trigger: &Rect, container: &Rect, pill: &Pill) -> bool {
        self.open_annotation(trigger, container, &AnnotationTarget::from(pill))
    }

    pub fn open_insight_context(&mut self, trigger: &Rect, container: &Rect, insight_id: &str) -> bool {
        let registry = self.registry;
        let Some(insight) = registry.get_insight(insight_id) else {
            return false;
        };
        self.popovers.open_insight_context(trigger, container, insight);
        true
    }

    /// Runs the chosen menu entry; the overlay is closed afterwards either way.
    pub fn choose_popover_action(&mut self, index: usize) -> bool {
        let Some(action) = self.popovers.take_action(index) else {
            return false;
        };
        tracing::debug!("popover action {:?}", action);
        match action {
            PopoverAction::ViewDefinition(id) => self.view_definition(&id),
            PopoverAction::ViewFact(id) | PopoverAction::ViewRelatedFact(id) => self.view_fact(&id),
            PopoverAction::ViewInsight(id) => self.view_insight(&id),
            PopoverAction::HighlightInDocument(clause_id) => {
                self.select_clause_from_tree(&clause_id);
            }
        }
        self.popovers.close();
        true
    }

    pub fn on_pointer_down(&mut self, point: Point, rendered: &Rect) -> bool {
        self.popovers.on_pointer_down(point, rendered)
    }

    pub fn on_key(&mut self, key: &str) -> bool {
        self.popovers.on_key(key)
    }

    pub fn snapshot(&self) -> DemoSnapshot {
        DemoSnapshot {
            view: self.current.clone(),
            can_go_back: self.can_go_back(),
            highlighted_id: self.highlighted_id().map(str::to_string),
            active_loop_id: self.active_loop_id.clone(),
            expanded_categories: self.expanded_categories.clone(),
            visible_intelligence_tabs: self.config.visible_intelligence_tabs(),
            popover: self.popovers.current().cloned(),
        }
    }
}
