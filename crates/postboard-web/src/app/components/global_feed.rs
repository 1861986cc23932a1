use leptos::prelude::*;
use postboard_app::FeedPost;

/// Every post from every user, read-only
#[component]
pub fn GlobalFeed(posts: Vec<FeedPost>) -> impl IntoView {
    let cards = posts
        .into_iter()
        .map(|post| {
            let author = post.author_name().unwrap_or_default().to_string();
            view! {
                <div
                    class="feed-card"
                    style="padding: 12px; margin-bottom: 12px; border: 1px solid #e0e0e0; border-radius: 4px; background-color: #fafafa;"
                >
                    <p style="font-size: 0.65rem; font-weight: 700; color: #3f51b5; margin: 0;">"@" {author}</p>
                    <p style="font-size: 0.85rem; font-weight: 600; margin: 2px 0 0;">{post.title}</p>
                    <p style="font-size: 0.75rem; color: #616161; margin: 0;">
                        {post.content.unwrap_or_default()}
                    </p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section
            class="panel"
            style="padding: 16px; border-radius: 8px; min-height: 80vh; box-shadow: 0 1px 3px rgba(0,0,0,0.2);"
        >
            <h3 style="font-size: 0.875rem; font-weight: 700; color: #3f51b5; margin: 0 0 16px;">"GLOBAL FEED"</h3>
            {cards}
        </section>
    }
}
