//! Plain-text rendering of a feed snapshot.

use postboard_app::FeedSnapshot;
use std::fmt::Write;

/// Profile block followed by the global feed.
pub fn snapshot(snapshot: &FeedSnapshot) -> String {
    let mut out = String::new();

    match &snapshot.user {
        Some(user) => {
            let _ = writeln!(out, "My Profile");
            let _ = writeln!(out, "  {} <{}>", user.name, user.email);
            let _ = writeln!(out, "  YOUR POSTS");
            if user.posts.is_empty() {
                let _ = writeln!(out, "    (none)");
            }
            for post in &user.posts {
                let _ = writeln!(out, "    [{}] {}", post.id, post.title);
                if let Some(content) = post.content.as_deref().filter(|c| !c.is_empty()) {
                    let _ = writeln!(out, "        {content}");
                }
            }
        }
        None => {
            let _ = writeln!(out, "My Profile");
            let _ = writeln!(out, "  (no user)");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "GLOBAL FEED");
    for post in &snapshot.all_posts {
        let author = post.author_name().unwrap_or("unknown");
        let _ = writeln!(out, "  @{author}  [{}] {}", post.id, post.title);
        if let Some(content) = post.content.as_deref().filter(|c| !c.is_empty()) {
            let _ = writeln!(out, "      {content}");
        }
    }

    out.trim_end().to_string()
}
