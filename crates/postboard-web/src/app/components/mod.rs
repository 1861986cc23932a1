mod add_post;
mod feed_view;
mod global_feed;
mod page_shell;
mod post_item;
mod profile_panel;
mod user_switcher;

pub use add_post::AddPost;
pub use feed_view::FeedView;
pub use global_feed::GlobalFeed;
pub use page_shell::PageShell;
pub use post_item::PostItem;
pub use profile_panel::ProfilePanel;
pub use user_switcher::UserSwitcher;
