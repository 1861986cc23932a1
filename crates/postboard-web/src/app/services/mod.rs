//! Browser-side services shared through context

mod browser_navigator;
mod feed_handle;

pub use browser_navigator::BrowserNavigator;
pub use feed_handle::{use_feed, FeedHandle, WebFeedController};
