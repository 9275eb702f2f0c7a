//! Chatbot dialog: message history, pending indicator and input form.

use leptos::prelude::*;

use crate::net::reply::HttpReplyClient;
use crate::state::chat::{ChatMessage, ChatState, Sender};
use crate::util::chat_turn::{begin_turn, finish_turn};
use crate::util::scroll::ScrollSync;

/// Chat surface. The conversation and scroll handle belong to the navbar, so
/// closing the dialog keeps the history.
#[component]
pub fn ChatDialog(chat: RwSignal<ChatState>, scroll: ScrollSync, on_close: Callback<()>) -> impl IntoView {
    let client = HttpReplyClient::default();
    let messages = Memo::new(move |_| {
        chat.with(|c| {
            c.log
                .messages()
                .iter()
                .enumerate()
                .map(|(index, message)| (message.clone(), c.is_pending_at(index)))
                .collect::<Vec<_>>()
        })
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(turn) = begin_turn(&chat, move || scroll.schedule()) else {
            return;
        };
        let client = client.clone();
        leptos::task::spawn_local(async move {
            finish_turn(&chat, &client, turn, move || scroll.schedule()).await;
        });
    };

    let can_send = move || chat.with(ChatState::can_submit);

    view! {
        <div class="chat-dialog__backdrop">
            <div class="chat-dialog">
                <button class="chat-dialog__close" on:click=move |_| on_close.run(()) aria-label="Close Chatbot">
                    "\u{2715}"
                </button>
                <h3 class="chat-dialog__title">
                    <span class="chat-dialog__icon">"\u{1F4AC}"</span>
                    " Chatbot"
                </h3>

                <div class="chat-dialog__messages" node_ref=scroll.container()>
                    {move || {
                        let messages = messages.get();
                        if messages.is_empty() {
                            return view! {
                                <p class="chat-dialog__empty">"Start a conversation..."</p>
                            }
                                .into_any();
                        }

                        messages
                            .into_iter()
                            .map(|(message, pending)| view! { <ChatBubble message=message pending=pending/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>

                <form class="chat-dialog__form" on:submit=on_submit>
                    <input
                        class="chat-dialog__input"
                        type="text"
                        placeholder="Type your message..."
                        prop:value=move || chat.with(|c| c.input.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            chat.update(|c| c.input = value);
                        }
                    />
                    <button type="submit" class="chat-dialog__send" disabled=move || !can_send()>
                        "Send"
                    </button>
                </form>
            </div>
        </div>
    }
}

/// One message row: bot turns on the left with the bot avatar, user turns on
/// the right with the "U" avatar. `pending` marks the outstanding placeholder.
#[component]
fn ChatBubble(message: ChatMessage, pending: bool) -> impl IntoView {
    let is_user = message.sender == Sender::User;

    view! {
        <div class="chat-dialog__row" class:chat-dialog__row--user=is_user>
            {(!is_user).then(|| view! { <div class="chat-dialog__avatar chat-dialog__avatar--bot">"\u{1F4AC}"</div> })}
            <div
                class="chat-dialog__bubble"
                class:chat-dialog__bubble--user=is_user
                class:chat-dialog__bubble--pending=pending
            >
                {message.text}
            </div>
            {is_user.then(|| view! { <div class="chat-dialog__avatar chat-dialog__avatar--user">"U"</div> })}
        </div>
    }
}
