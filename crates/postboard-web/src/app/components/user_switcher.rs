use leptos::prelude::*;

use crate::app::services::use_feed;

/// "Login as" buttons, one per switchable user
#[component]
pub fn UserSwitcher() -> impl IntoView {
    let feed = use_feed();
    let selected = feed.selected();

    let buttons = feed
        .switchable_users()
        .into_iter()
        .map(|user| {
            let id = user.as_str().to_string();
            let label = format!("User {id}");
            let feed = feed.clone();
            let active_id = id.clone();
            view! {
                <button
                    class=move || {
                        if selected.get().as_str() == active_id {
                            "btn btn-contained"
                        } else {
                            "btn btn-outlined"
                        }
                    }
                    style="margin-left: 8px; font-size: 0.8rem; padding: 4px 10px;"
                    on:click=move |_| {
                        log::info!("Switching to user {id}");
                        feed.select_user(&id);
                    }
                >
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="user-switcher">
            <span style="font-size: 0.75rem; margin-right: 8px;">"Login as:"</span>
            {buttons}
        </div>
    }
}
