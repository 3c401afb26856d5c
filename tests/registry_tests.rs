// tests/registry_tests.rs
mod common;

use common::MockHost;
use cursortrail::history::{NavCommand, NavigatorRegistry};
use cursortrail::host::{BufferId, EditorHost, Position};
use std::time::Duration;

const DECAY: Duration = Duration::from_millis(300);

fn registry() -> NavigatorRegistry {
    NavigatorRegistry::new(100, DECAY, 3)
}

fn row(r: usize) -> Position {
    Position::new(r, 0)
}

/// Builds history through manual pushes, which are immune to debounce
/// timing and keep these tests independent of the wall clock.
fn push_at(
    registry: &mut NavigatorRegistry,
    host: &mut MockHost,
    buffer: BufferId,
    position: Position,
) {
    host.set_cursor_position(buffer, position);
    registry.dispatch(host, Some(buffer), NavCommand::Push);
}

#[test]
fn test_navigators_are_created_lazily() {
    let mut host = MockHost::new();
    let mut registry = registry();
    assert!(registry.is_empty());

    registry.handle_cursor_moved(&mut host, BufferId(1), row(0), row(50), 50);
    assert_eq!(registry.len(), 1);

    registry.dispatch(&mut host, Some(BufferId(2)), NavCommand::Push);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_histories_are_independent_per_buffer() {
    let mut host = MockHost::new();
    let mut registry = registry();
    let (a, b) = (BufferId(1), BufferId(2));

    push_at(&mut registry, &mut host, a, row(10));
    push_at(&mut registry, &mut host, a, row(20));
    push_at(&mut registry, &mut host, b, row(90));

    assert_eq!(registry.get(a).unwrap().timeline().len(), 2);
    assert_eq!(registry.get(b).unwrap().timeline().len(), 1);

    // Navigating in one buffer moves only that buffer's cursor.
    assert!(registry.dispatch(&mut host, Some(a), NavCommand::Previous));
    assert_eq!(host.cursor_position(a), row(10));
    assert_eq!(host.cursor_position(b), row(90));
}

#[test]
fn test_dispatch_previous_and_next() {
    let mut host = MockHost::new();
    let mut registry = registry();
    let buffer = BufferId(0);

    for r in [0, 25, 50] {
        push_at(&mut registry, &mut host, buffer, row(r));
    }

    assert!(registry.dispatch(&mut host, Some(buffer), NavCommand::Previous));
    assert_eq!(host.cursor_position(buffer), row(25));
    assert!(registry.dispatch(&mut host, Some(buffer), NavCommand::Previous));
    assert_eq!(host.cursor_position(buffer), row(0));
    // Boundary: no movement, no cursor command.
    assert!(!registry.dispatch(&mut host, Some(buffer), NavCommand::Previous));
    assert_eq!(host.cursor_position(buffer), row(0));

    assert!(registry.dispatch(&mut host, Some(buffer), NavCommand::Next));
    assert_eq!(host.cursor_position(buffer), row(25));
    assert!(registry.dispatch(&mut host, Some(buffer), NavCommand::Next));
    assert!(!registry.dispatch(&mut host, Some(buffer), NavCommand::Next));
    assert_eq!(host.cursor_position(buffer), row(50));
}

#[test]
fn test_dispatch_without_active_buffer_is_a_noop() {
    let mut host = MockHost::new();
    let mut registry = registry();

    for command in [
        NavCommand::Previous,
        NavCommand::Next,
        NavCommand::Push,
        NavCommand::Clear,
    ] {
        assert!(!registry.dispatch(&mut host, None, command));
    }
    assert!(registry.is_empty());
}

#[test]
fn test_dispatch_clear_empties_history() {
    let mut host = MockHost::new();
    let mut registry = registry();
    let buffer = BufferId(0);

    push_at(&mut registry, &mut host, buffer, row(10));
    push_at(&mut registry, &mut host, buffer, row(60));

    assert!(registry.dispatch(&mut host, Some(buffer), NavCommand::Clear));
    assert_eq!(host.live_anchors(), 0);

    // Navigation after clear is still a silent no-op.
    assert!(!registry.dispatch(&mut host, Some(buffer), NavCommand::Previous));
    assert!(!registry.dispatch(&mut host, Some(buffer), NavCommand::Next));
}

#[test]
fn test_buffer_close_releases_anchors() {
    let mut host = MockHost::new();
    let mut registry = registry();
    let buffer = BufferId(0);

    push_at(&mut registry, &mut host, buffer, row(10));
    push_at(&mut registry, &mut host, buffer, row(60));
    assert_eq!(host.live_anchors(), 2);

    registry.handle_buffer_closed(&mut host, buffer);

    assert!(registry.is_empty());
    assert_eq!(host.live_anchors(), 0);
    assert_eq!(host.created, host.released);
}

#[test]
fn test_close_of_unknown_buffer_is_harmless() {
    let mut host = MockHost::new();
    let mut registry = registry();
    registry.handle_buffer_closed(&mut host, BufferId(42));
    assert!(registry.is_empty());
}

#[test]
fn test_capacity_change_reshapes_live_timelines() {
    let mut host = MockHost::new();
    let mut registry = registry();
    let (a, b) = (BufferId(1), BufferId(2));

    for r in 0..10 {
        push_at(&mut registry, &mut host, a, row(r));
        push_at(&mut registry, &mut host, b, row(r + 100));
    }

    registry.set_max_history(&mut host, 4);

    for buffer in [a, b] {
        let timeline = registry.get(buffer).unwrap().timeline();
        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline.capacity(), 4);
    }
    // The newest entries survive; trimming took the oldest end.
    assert!(registry.dispatch(&mut host, Some(a), NavCommand::Previous));
    assert_eq!(host.cursor_position(a), row(8));

    // Navigators created after the change pick up the new bound.
    push_at(&mut registry, &mut host, BufferId(3), row(0));
    assert_eq!(
        registry.get(BufferId(3)).unwrap().timeline().capacity(),
        4
    );
}

#[test]
fn test_capacity_change_clamps_to_minimum() {
    let mut host = MockHost::new();
    let mut registry = registry();
    registry.set_max_history(&mut host, 0);
    assert_eq!(registry.max_history_size(), 1);
}

#[test]
fn test_shutdown_releases_everything() {
    let mut host = MockHost::new();
    let mut registry = registry();

    for buffer in [BufferId(1), BufferId(2), BufferId(3)] {
        push_at(&mut registry, &mut host, buffer, row(10));
        push_at(&mut registry, &mut host, buffer, row(20));
    }
    assert_eq!(host.live_anchors(), 6);

    registry.shutdown(&mut host);

    assert!(registry.is_empty());
    assert_eq!(host.live_anchors(), 0);
    assert_eq!(host.created, host.released);
}
