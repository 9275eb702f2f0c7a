//! Expense-tracker screens reachable from the side menu.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

/// Shared page frame: navbar plus the page heading.
#[component]
fn MenuPage(active_menu: &'static str) -> impl IntoView {
    view! {
        <Navbar active_menu=active_menu/>
        <main class="page">
            <h1 class="page__title">{active_menu}</h1>
        </main>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <MenuPage active_menu="Dashboard"/> }
}

#[component]
pub fn IncomePage() -> impl IntoView {
    view! { <MenuPage active_menu="Income"/> }
}

#[component]
pub fn ExpensePage() -> impl IntoView {
    view! { <MenuPage active_menu="Expense"/> }
}
