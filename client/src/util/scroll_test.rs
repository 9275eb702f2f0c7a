use std::cell::Cell;

use super::*;

struct FakeContainer {
    scroll_top: Cell<i32>,
    scroll_height: Cell<i32>,
    writes: Cell<u32>,
}

impl FakeContainer {
    fn new(scroll_height: i32) -> Self {
        Self { scroll_top: Cell::new(0), scroll_height: Cell::new(scroll_height), writes: Cell::new(0) }
    }
}

impl ScrollTarget for FakeContainer {
    fn scroll_height(&self) -> i32 {
        self.scroll_height.get()
    }

    fn set_scroll_top(&self, value: i32) {
        self.scroll_top.set(value);
        self.writes.set(self.writes.get() + 1);
    }
}

#[test]
fn scroll_to_bottom_moves_to_max_extent() {
    let container = FakeContainer::new(480);
    scroll_to_bottom(Some(&container));
    assert_eq!(container.scroll_top.get(), 480);
}

#[test]
fn scroll_to_bottom_twice_matches_once() {
    let once = FakeContainer::new(300);
    scroll_to_bottom(Some(&once));

    let twice = FakeContainer::new(300);
    scroll_to_bottom(Some(&twice));
    scroll_to_bottom(Some(&twice));

    assert_eq!(once.scroll_top.get(), twice.scroll_top.get());
}

#[test]
fn scroll_to_bottom_follows_growing_content() {
    let container = FakeContainer::new(100);
    scroll_to_bottom(Some(&container));
    container.scroll_height.set(160);
    scroll_to_bottom(Some(&container));
    assert_eq!(container.scroll_top.get(), 160);
    assert_eq!(container.writes.get(), 2);
}

#[test]
fn scroll_to_bottom_unmounted_is_noop() {
    scroll_to_bottom::<FakeContainer>(None);
}
