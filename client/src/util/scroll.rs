//! Keeps the newest chat message in view.
//!
//! The message container is held as an explicit `NodeRef`, bound when the
//! chat dialog mounts. Scrolling is deferred briefly so the browser can lay out
//! the appended bubble before its scroll height is measured.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use leptos::html::Div;
use leptos::prelude::*;

/// Delay between a log mutation and the scroll that reveals it.
pub const SCROLL_DELAY_MS: u32 = 100;

/// Anything with a vertical scroll position and extent.
pub trait ScrollTarget {
    fn scroll_height(&self) -> i32;
    fn set_scroll_top(&self, value: i32);
}

#[cfg(feature = "hydrate")]
impl ScrollTarget for web_sys::Element {
    fn scroll_height(&self) -> i32 {
        web_sys::Element::scroll_height(self)
    }

    fn set_scroll_top(&self, value: i32) {
        web_sys::Element::set_scroll_top(self, value);
    }
}

/// Move `target` to its maximum scroll position. `None` (unmounted) is a no-op.
pub fn scroll_to_bottom<T: ScrollTarget + ?Sized>(target: Option<&T>) {
    if let Some(target) = target {
        target.set_scroll_top(target.scroll_height());
    }
}

/// Handle to the chat message container.
#[derive(Clone, Copy)]
pub struct ScrollSync {
    container: NodeRef<Div>,
}

impl ScrollSync {
    #[must_use]
    pub fn new() -> Self {
        Self { container: NodeRef::new() }
    }

    /// Node ref to bind on the scrollable message list.
    #[must_use]
    pub fn container(&self) -> NodeRef<Div> {
        self.container
    }

    /// Scroll the container to the bottom after `SCROLL_DELAY_MS`.
    pub fn schedule(self) {
        #[cfg(feature = "hydrate")]
        {
            let container = self.container;
            gloo_timers::callback::Timeout::new(SCROLL_DELAY_MS, move || {
                let el = container.try_get_untracked().flatten();
                let target: Option<&web_sys::Element> = el.as_ref().map(AsRef::as_ref);
                scroll_to_bottom(target);
            })
            .forget();
        }
    }
}

impl Default for ScrollSync {
    fn default() -> Self {
        Self::new()
    }
}
