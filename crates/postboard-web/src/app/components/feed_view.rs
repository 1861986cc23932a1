use leptos::ev;
use leptos::prelude::*;
use postboard_app::{FeedState, PostDraft};

use super::{AddPost, GlobalFeed, ProfilePanel, UserSwitcher};
use crate::app::services::use_feed;

/// Profile + global feed for the selected user
#[component]
pub fn FeedView() -> impl IntoView {
    let feed = use_feed();
    let state = feed.state();
    let notice = feed.notice();

    // Owned here so the form keeps its text while the panels re-render.
    let draft = RwSignal::new(PostDraft::default());

    let listener = window_event_listener(ev::popstate, {
        let feed = feed.clone();
        move |_| feed.on_location_change()
    });
    on_cleanup(move || listener.remove());

    feed.refresh();

    let dismiss = {
        let feed = feed.clone();
        move |_: ev::MouseEvent| feed.dismiss_notice()
    };

    view! {
        <div class="feed-view">
            <div
                class="feed-header"
                style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 32px;"
            >
                <h2 style="font-size: 1.25rem; font-weight: 600; margin: 0;">"Social Explorer"</h2>
                <UserSwitcher />
            </div>

            <Show when=move || notice.get().is_some()>
                <div
                    class="notice"
                    style="display: flex; justify-content: space-between; padding: 8px 12px; margin-bottom: 16px; border-radius: 4px; background: #fdecea; color: #611a15; font-size: 0.8rem;"
                >
                    <span>{move || notice.get().unwrap_or_default()}</span>
                    <button class="btn-text" on:click=dismiss.clone()>"Dismiss"</button>
                </div>
            </Show>

            {move || match state.get() {
                FeedState::Idle | FeedState::Loading { .. } => {
                    view! {
                        <div
                            class="spinner"
                            role="progressbar"
                            style="width: 24px; height: 24px; margin: 50px auto; border: 3px solid #c5cae9; border-top-color: #3f51b5; border-radius: 50%;"
                        ></div>
                    }
                        .into_any()
                }
                FeedState::Failed { message } => {
                    view! { <p class="error" style="color: #f44336;">"Error: " {message}</p> }
                        .into_any()
                }
                FeedState::Loaded(snapshot) => {
                    view! {
                        <div
                            class="feed-grid"
                            style="display: grid; grid-template-columns: minmax(0, 1fr) minmax(0, 2fr); gap: 24px;"
                        >
                            <div>
                                <ProfilePanel user=snapshot.user />
                                <AddPost draft=draft />
                            </div>
                            <div>
                                <GlobalFeed posts=snapshot.all_posts />
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
