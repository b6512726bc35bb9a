use chrono::Duration;
use kittest::Queryable;
use storefront_ui::state::{PageCommand, State};
use storefront_ui::widgets::SCROLL_TO_TOP_LABEL;

use crate::common::{TestCtx, embedded_document};

mod common;

#[test]
fn test_button_hidden_at_top_of_page() {
    let mut ctx = TestCtx::new_app();

    let harness = ctx.harness_mut();
    harness.step();

    assert!(harness.query_by_label(SCROLL_TO_TOP_LABEL).is_none());
    assert!(ctx.state().scroll().is_some());
}

#[test]
fn test_smooth_scroll_reaches_top() {
    let mut state = State::test(embedded_document());
    state.observe_scroll(600.0);
    assert!(state.scroll().unwrap().is_visible());

    state.commands.enqueue(PageCommand::ScrollToTop);
    state.flush_commands();
    assert_eq!(state.scroll_target(), Some(600.0));

    state.advance_time(Duration::milliseconds(200));
    let halfway = state.scroll_target().unwrap();
    assert!((halfway - 300.0).abs() < 1.0, "eased midpoint was {halfway}");

    state.advance_time(Duration::milliseconds(200));
    assert_eq!(state.scroll_target(), Some(0.0));
    assert_eq!(state.scroll_target(), None);
    assert!(!state.scroll().unwrap().is_visible());
}

#[test]
fn test_second_click_restarts_from_current_offset() {
    let mut state = State::test(embedded_document());
    state.observe_scroll(800.0);

    state.commands.enqueue(PageCommand::ScrollToTop);
    state.flush_commands();
    state.advance_time(Duration::milliseconds(100));
    let partway = state.scroll_target().unwrap();
    assert!(partway < 800.0 && partway > 0.0);

    state.commands.enqueue(PageCommand::ScrollToTop);
    state.flush_commands();
    assert_eq!(state.scroll_target(), Some(partway));

    state.advance_time(Duration::milliseconds(300));
    assert!(state.scroll_target().unwrap() > 0.0);
    state.advance_time(Duration::milliseconds(100));
    assert_eq!(state.scroll_target(), Some(0.0));
}

#[test]
fn test_scroll_does_not_touch_pagination() {
    let mut state = State::test(embedded_document());
    state.observe_scroll(600.0);

    state.commands.enqueue(PageCommand::ScrollToTop);
    state.flush_commands();

    let paginator = state.paginator().unwrap();
    assert!(!paginator.is_loading());
    assert_eq!(paginator.current_page(), 1);
}
