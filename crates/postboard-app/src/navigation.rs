//! Selected-user state and the location service it is persisted through
//!
//! The selected user is the only client state that survives a reload; it
//! lives in the page URL as a query parameter. Access to the URL and history
//! goes through [`Navigator`] so the feed workflow never touches browser
//! globals directly.

use parking_lot::Mutex;
use std::fmt;
use url::Url;

use crate::errors::{AppError, AppResult};
use crate::views::UserId;

// =============================================================================
// SelectedUserId
// =============================================================================

/// Whose profile is displayed and who owns newly created posts
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectedUserId(UserId);

impl SelectedUserId {
    /// Resolve a raw parameter value, falling back when it is absent or
    /// not a well-formed identifier.
    pub fn resolve(raw: Option<&str>, fallback: &SelectedUserId) -> Self {
        match raw.map(str::trim) {
            Some(value) if Self::is_well_formed(value) => Self(UserId::new(value)),
            _ => fallback.clone(),
        }
    }

    /// Parse a value that must already be well formed.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let value = raw.trim();
        if Self::is_well_formed(value) {
            Ok(Self(UserId::new(value)))
        } else {
            Err(AppError::Input(format!("invalid user id: {raw:?}")))
        }
    }

    /// Identifiers are positive integers in the server's 32-bit id range,
    /// written without sign or leading zeros.
    pub fn is_well_formed(value: &str) -> bool {
        match value.parse::<i32>() {
            Ok(n) => n > 0 && n.to_string() == value,
            Err(_) => false,
        }
    }

    /// Borrow as a remote user id.
    pub fn user_id(&self) -> &UserId {
        &self.0
    }

    /// Borrow the raw string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for SelectedUserId {
    fn default() -> Self {
        Self(UserId::new("1"))
    }
}

impl fmt::Display for SelectedUserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// Location and history service
pub trait Navigator {
    /// Value of `key` in the current location's query string.
    fn query_param(&self, key: &str) -> Option<String>;

    /// Push a history entry with `key=value` set, without navigating.
    fn push_query_param(&self, key: &str, value: &str) -> AppResult<()>;

    /// Reload the whole document.
    fn reload(&self) -> AppResult<()>;
}

impl<N: Navigator + ?Sized> Navigator for std::sync::Arc<N> {
    fn query_param(&self, key: &str) -> Option<String> {
        (**self).query_param(key)
    }

    fn push_query_param(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).push_query_param(key, value)
    }

    fn reload(&self) -> AppResult<()> {
        (**self).reload()
    }
}

// =============================================================================
// URL helpers
// =============================================================================

/// Read `key` from the query string of `href`.
pub fn read_query_param(href: &str, key: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Return `href` with `key` set to `value`, other parameters preserved.
pub fn with_query_param(href: &str, key: &str, value: &str) -> AppResult<String> {
    let mut url =
        Url::parse(href).map_err(|e| AppError::Navigation(format!("invalid location {href}: {e}")))?;
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair(key, value);
    Ok(url.into())
}

// =============================================================================
// MemoryNavigator
// =============================================================================

#[derive(Debug)]
struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
    reloads: usize,
}

/// In-memory history stack
///
/// Behaves like the browser's session history: pushing truncates forward
/// entries, `back`/`forward` move the cursor without creating entries.
#[derive(Debug)]
pub struct MemoryNavigator {
    history: Mutex<MemoryHistory>,
}

impl MemoryNavigator {
    /// Start with a single entry at `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            history: Mutex::new(MemoryHistory {
                entries: vec![href.into()],
                cursor: 0,
                reloads: 0,
            }),
        }
    }

    /// Current location.
    pub fn href(&self) -> String {
        let history = self.history.lock();
        history.entries[history.cursor].clone()
    }

    /// Number of history entries.
    pub fn len(&self) -> usize {
        self.history.lock().entries.len()
    }

    /// Always false; a navigator has at least one entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Step back one entry. Returns false at the start of history.
    pub fn back(&self) -> bool {
        let mut history = self.history.lock();
        if history.cursor == 0 {
            return false;
        }
        history.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns false at the end of history.
    pub fn forward(&self) -> bool {
        let mut history = self.history.lock();
        if history.cursor + 1 >= history.entries.len() {
            return false;
        }
        history.cursor += 1;
        true
    }

    /// How many times `reload` was requested.
    pub fn reloads(&self) -> usize {
        self.history.lock().reloads
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new("http://localhost/")
    }
}

impl Navigator for MemoryNavigator {
    fn query_param(&self, key: &str) -> Option<String> {
        read_query_param(&self.href(), key)
    }

    fn push_query_param(&self, key: &str, value: &str) -> AppResult<()> {
        let next = with_query_param(&self.href(), key, value)?;
        let mut history = self.history.lock();
        let keep = history.cursor + 1;
        history.entries.truncate(keep);
        history.entries.push(next);
        history.cursor = keep;
        Ok(())
    }

    fn reload(&self) -> AppResult<()> {
        self.history.lock().reloads += 1;
        Ok(())
    }
}
