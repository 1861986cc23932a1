use leptos::prelude::*;
use postboard_app::Post;

use crate::app::services::use_feed;

/// One deletable post in the profile panel
#[component]
pub fn PostItem(post: Post) -> impl IntoView {
    let feed = use_feed();
    let id = post.id.clone();

    view! {
        <div
            class="post-item"
            style="padding: 6px 10px; margin-top: 6px; border: 1px solid #e0e0e0; border-radius: 4px; background-color: #fafafa;"
        >
            <p style="font-size: 0.85rem; font-weight: 600; line-height: 1.2; margin: 0;">{post.title}</p>
            <p style="color: #616161; font-size: 0.75rem; margin: 2px 0 0; line-height: 1.3;">
                {post.content.unwrap_or_default()}
            </p>
            <button
                class="btn-text btn-secondary"
                style="margin-top: 4px; font-size: 0.65rem; padding: 0 4px;"
                on:click=move |_| feed.delete_post(id.clone())
            >
                "Delete"
            </button>
        </div>
    }
}
