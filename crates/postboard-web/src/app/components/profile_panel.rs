use leptos::prelude::*;
use postboard_app::UserProfile;

use super::PostItem;

/// Selected user's details and their own posts
#[component]
pub fn ProfilePanel(user: Option<UserProfile>) -> impl IntoView {
    let body = user.map(|user| {
        let posts = user
            .posts
            .into_iter()
            .map(|post| view! { <PostItem post=post /> })
            .collect::<Vec<_>>();

        view! {
            <div style="margin-top: 8px;">
                <p style="font-size: 0.8rem; margin: 0;"><strong>{user.name}</strong></p>
                <p style="font-size: 0.75rem; color: #757575; margin: 0;">{user.email}</p>
                <div style="margin-top: 16px;">
                    <p style="font-size: 0.75rem; font-weight: 700; color: #3f51b5; margin: 0;">
                        "YOUR POSTS"
                    </p>
                    {posts}
                </div>
            </div>
        }
    });

    view! {
        <section class="panel" style="padding: 12px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.2);">
            <span style="font-size: 0.65rem; font-weight: 700; color: #9e9e9e; text-transform: uppercase;">
                "My Profile"
            </span>
            {body}
        </section>
    }
}
