//! Side navigation menu shown under the navbar on narrow viewports.

#[cfg(test)]
#[path = "side_menu_test.rs"]
mod side_menu_test;

use leptos::prelude::*;

/// A navigation entry in the side menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const SIDE_MENU_ITEMS: &[MenuItem] = &[
    MenuItem { label: "Dashboard", path: "/" },
    MenuItem { label: "Income", path: "/income" },
    MenuItem { label: "Expense", path: "/expense" },
];

/// Whether `item` is the entry named by the route's active menu.
fn is_active(item: &MenuItem, active_menu: &str) -> bool {
    item.label == active_menu
}

/// Menu list. `active_menu` is forwarded from the route and only used to
/// highlight the matching entry. `on_select` fires when an entry is clicked.
#[component]
pub fn SideMenu(#[prop(into)] active_menu: String, on_select: Callback<()>) -> impl IntoView {
    view! {
        <nav class="side-menu">
            {SIDE_MENU_ITEMS
                .iter()
                .map(|item| {
                    let active = is_active(item, &active_menu);
                    view! {
                        <a
                            class="side-menu__item"
                            class:side-menu__item--active=active
                            href=item.path
                            on:click=move |_| on_select.run(())
                        >
                            {item.label}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
