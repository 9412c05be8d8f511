//! Single-list confinement and mode-switch resets.

use crate::source::Cursor;
use crate::tests::fixture::FixtureSource;
use crate::view::{ListMode, MultilistView};

fn library() -> MultilistView<FixtureSource> {
    let mut view = MultilistView::new();
    view.set_source(FixtureSource::new(vec![
        ("Installed", vec!["A", "B", "C"]),
        ("Not Installed", vec!["D", "E"]),
    ]));
    view.set_frame_height(4);
    view
}

#[test]
fn test_single_list_mode_pins_cursor_to_sublist() {
    let mut view = library();
    view.single_list_mode("Not Installed");
    assert_eq!(view.mode(), ListMode::Single { sublist: 1 });
    assert_eq!(view.cursor(), Cursor::new(1, 0));

    // No navigation sequence may leave the active sublist.
    view.move_up();
    assert_eq!(view.cursor(), Cursor::new(1, 0));
    view.prev_sublist();
    assert_eq!(view.cursor(), Cursor::new(1, 0));
    view.move_end();
    assert_eq!(view.cursor(), Cursor::new(1, 1));
    view.move_down(); // saturates at the last item, no boundary crossing
    assert_eq!(view.cursor(), Cursor::new(1, 1));
    view.next_sublist();
    assert_eq!(view.cursor(), Cursor::new(1, 0));
    view.move_home();
    assert_eq!(view.cursor(), Cursor::new(1, 0));
    assert_eq!(view.mode(), ListMode::Single { sublist: 1 });
}

#[test]
fn test_single_list_mode_unknown_key_is_a_no_op() {
    let mut view = library();
    view.move_down();
    let cursor = view.cursor();
    view.single_list_mode("Uplay");
    assert_eq!(view.mode(), ListMode::Multi);
    assert_eq!(view.cursor(), cursor);
}

#[test]
fn test_multi_list_mode_resets_cursor_and_viewport() {
    let mut view = library();
    view.single_list_mode("Not Installed");
    view.move_end();

    view.multi_list_mode();
    assert_eq!(view.mode(), ListMode::Multi);
    assert_eq!(view.cursor(), Cursor::new(0, 0));
    assert_eq!(view.viewport_top(), 0);
}

#[test]
fn test_single_list_mode_on_empty_sublist_is_inert() {
    let mut view = MultilistView::new();
    view.set_source(FixtureSource::new(vec![
        ("Installed", vec!["A"]),
        ("Wishlist", vec![]),
    ]));
    view.single_list_mode("Wishlist");
    assert_eq!(view.mode(), ListMode::Single { sublist: 1 });

    // Nothing to select: navigation and activation are safe no-ops.
    view.move_down();
    view.move_end();
    view.open_selected();
    assert_eq!(view.cursor(), Cursor::new(1, 0));

    view.multi_list_mode();
    assert_eq!(view.cursor(), Cursor::new(0, 0));
}

#[test]
fn test_source_swap_resets_mode() {
    let mut view = library();
    view.single_list_mode("Not Installed");
    view.set_source(FixtureSource::new(vec![("Steam", vec!["X"])]));
    assert_eq!(view.mode(), ListMode::Multi);
    assert_eq!(view.cursor(), Cursor::new(0, 0));
    assert_eq!(view.viewport_top(), 0);
}
