use std::time::Duration;

use lexdemo::demo::popover::{PopoverAction, Point, Rect};
use lexdemo::demo::session::{Effect, HIGHLIGHT_DURATION, PANEL_SCROLL_DELAY};
use lexdemo::demo::view_state::{IntelligenceTab, StructureTab, ViewState};
use lexdemo::{DemoConfig, DemoSession, DemoVariant};

fn container() -> Rect {
    Rect::new(100.0, 50.0, 700.0, 650.0)
}

#[test]
fn walkthrough_from_outline_to_fact_and_back() {
    let mut session = DemoSession::new(DemoConfig::default());
    assert_eq!(session.current(), &ViewState::structure(StructureTab::Outline));

    assert!(session.select_clause_from_tree("clause-2-2"));
    let clause = session.current_clause().unwrap();
    assert_eq!(clause.number, "2.2");

    let pill = clause
        .pills()
        .find(|pill| pill.fact_id == Some("constraint-availability"))
        .cloned()
        .unwrap();
    let trigger = Rect::new(300.0, 200.0, 320.0, 260.0);
    assert!(session.open_pill(&trigger, &container(), &pill));

    let popover = session.popover().unwrap();
    assert_eq!(
        popover.actions,
        vec![
            PopoverAction::ViewFact("constraint-availability".to_string()),
            PopoverAction::ViewInsight("sug-3".to_string()),
        ]
    );
    assert_eq!(popover.anchor.top, 224.0);
    assert_eq!(popover.anchor.left, 110.0);

    assert!(session.choose_popover_action(0));
    assert!(session.popover().is_none());
    assert_eq!(
        session.current(),
        &ViewState::intelligence(IntelligenceTab::Facts, Some("constraint-availability".to_string()))
    );
    assert!(session.is_category_expanded("constraints"));
    assert_eq!(session.highlighted_id(), Some("constraint-availability"));
    assert_eq!(
        session.history(),
        &[ViewState::structure(StructureTab::Outline), ViewState::clause("clause-2-2")]
    );

    let effects = session.advance(PANEL_SCROLL_DELAY);
    assert_eq!(
        effects,
        vec![Effect::ScrollTo { element_id: "fact-constraint-availability".to_string() }]
    );
    let effects = session.advance(HIGHLIGHT_DURATION - PANEL_SCROLL_DELAY);
    assert_eq!(effects, vec![Effect::HighlightCleared]);
    assert_eq!(session.highlighted_id(), None);

    assert!(session.go_back());
    assert_eq!(session.current(), &ViewState::clause("clause-2-2"));
    assert_eq!(session.history(), &[ViewState::structure(StructureTab::Outline)]);
    assert!(session.go_back());
    assert!(!session.go_back());
    assert_eq!(session.current(), &ViewState::structure(StructureTab::Outline));
}

#[test]
fn citation_from_a_fact_lands_on_its_clause() {
    let mut session = DemoSession::new(DemoConfig::for_variant(DemoVariant::Facts));
    assert!(session.view_fact_source("constraint-availability"));
    assert_eq!(session.current(), &ViewState::clause("clause-2-2"));

    session.view_clause_by_source("Schedule 2, Service Credits");
    assert_eq!(session.current(), &ViewState::clause("schedule-2"));
    assert_eq!(session.history().len(), 2);
}

#[test]
fn later_highlight_outlives_the_earlier_timer() {
    let mut session = DemoSession::new(DemoConfig::default());
    session.view_definition("def-1");
    session.advance(Duration::from_millis(1500));
    session.view_insight("sug-3");

    session.advance(Duration::from_millis(600));
    assert_eq!(session.highlighted_id(), Some("sug-3"));
    session.advance(Duration::from_millis(1400));
    assert_eq!(session.highlighted_id(), None);
}

#[test]
fn embedded_demo_without_navigation() {
    let config: DemoConfig = serde_json::from_str(
        r#"{"initialView":"clause","allowNavigation":false,"hiddenTabs":["loops"],"embedded":true}"#,
    )
    .unwrap();
    let mut session = DemoSession::new(config);
    assert_eq!(session.current(), &ViewState::clause("clause-2-2"));

    assert!(!session.select_clause_from_tree("clause-3-1"));
    assert_eq!(session.current(), &ViewState::clause("clause-2-2"));

    session.view_insight("sug-3");
    assert!(!session.can_go_back());
    assert!(!session.select_intelligence_tab(IntelligenceTab::Loops));
    assert_eq!(
        session.snapshot().visible_intelligence_tabs,
        vec![IntelligenceTab::Insights, IntelligenceTab::Facts]
    );
}

#[test]
fn escape_and_outside_clicks_dismiss_the_menu() {
    let mut session = DemoSession::new(DemoConfig::for_variant(DemoVariant::Insights));
    let trigger = Rect::new(200.0, 300.0, 220.0, 340.0);
    assert!(session.open_insight_context(&trigger, &container(), "sug-3"));

    let rendered = Rect::new(228.0, 300.0, 308.0, 480.0);
    assert!(!session.on_pointer_down(Point { x: 310.0, y: 250.0 }, &rendered));
    assert!(session.popover().is_some());
    assert!(!session.on_key("Enter"));
    assert!(session.on_key("Escape"));
    assert!(session.popover().is_none());

    assert!(session.open_insight_context(&trigger, &container(), "sug-3"));
    assert!(session.on_pointer_down(Point { x: 10.0, y: 10.0 }, &rendered));
    assert!(session.popover().is_none());
}
