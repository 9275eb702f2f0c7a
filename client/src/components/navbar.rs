//! Top navigation bar with the side-menu toggle and the chatbot launcher.

use leptos::prelude::*;

use crate::components::chat_dialog::ChatDialog;
use crate::components::side_menu::SideMenu;
use crate::state::chat::ChatState;
use crate::state::ui::UiState;
use crate::util::scroll::ScrollSync;

/// Sticky navbar.
///
/// Owns the panel flags, the conversation and the scroll handle. They live as
/// long as this navbar instance; the chat dialog mounting and unmounting does
/// not reset them.
#[component]
pub fn Navbar(#[prop(into)] active_menu: String) -> impl IntoView {
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());
    let scroll = ScrollSync::new();

    let side_menu_open = move || ui.get().side_menu_open;
    let chat_open = move || ui.get().chat_open;

    let toggle_side_menu = move |_| ui.update(UiState::toggle_side_menu);
    let close_side_menu = Callback::new(move |()| ui.update(UiState::close_side_menu));
    let open_chat = move |_| ui.update(UiState::open_chat);
    let close_chat = Callback::new(move |()| ui.update(UiState::close_chat));

    view! {
        <div class="navbar">
            <button class="navbar__menu-toggle" on:click=toggle_side_menu aria-label="Toggle menu">
                {move || if side_menu_open() { "\u{2715}" } else { "\u{2630}" }}
            </button>

            <h2 class="navbar__title">"Expense Tracker"</h2>

            <button class="navbar__chat-toggle" on:click=open_chat aria-label="Open Chatbot">
                "\u{1F4AC}"
            </button>

            <Show when=side_menu_open>
                <div class="navbar__side-menu">
                    <SideMenu active_menu=active_menu.clone() on_select=close_side_menu/>
                </div>
            </Show>

            <Show when=chat_open>
                <ChatDialog chat=chat scroll=scroll on_close=close_chat/>
            </Show>
        </div>
    }
}
