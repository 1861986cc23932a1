/// Feed Handle
///
/// Bridges the portable `FeedController` into Leptos: the controller decides
/// what to request and which response to keep, the handle mirrors its state
/// into signals after every step.
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use postboard_app::{
    FeedController, FeedState, FetchOutcome, HttpTransport, PostDraft, PostId, SelectedUserId,
    UserId,
};

use super::BrowserNavigator;

/// Controller type used by the browser frontend
pub type WebFeedController = FeedController<HttpTransport, BrowserNavigator>;

/// Shared feed state for all components
#[derive(Clone)]
pub struct FeedHandle {
    controller: Arc<WebFeedController>,
    state: RwSignal<FeedState>,
    selected: RwSignal<SelectedUserId>,
    notice: RwSignal<Option<String>>,
}

impl FeedHandle {
    pub fn new(controller: WebFeedController) -> Self {
        let selected = controller.selected_user();
        Self {
            controller: Arc::new(controller),
            state: RwSignal::new(FeedState::Idle),
            selected: RwSignal::new(selected),
            notice: RwSignal::new(None),
        }
    }

    pub fn state(&self) -> ReadSignal<FeedState> {
        self.state.read_only()
    }

    pub fn selected(&self) -> ReadSignal<SelectedUserId> {
        self.selected.read_only()
    }

    /// Last mutation failure, for the notice banner.
    pub fn notice(&self) -> ReadSignal<Option<String>> {
        self.notice.read_only()
    }

    pub fn switchable_users(&self) -> Vec<UserId> {
        self.controller.config().switchable_user_ids()
    }

    fn sync(&self) {
        self.state.set(self.controller.state());
        self.selected.set(self.controller.selected_user());
        self.notice
            .set(self.controller.mutation_error().map(|err| err.describe()));
    }

    /// Issue the combined read for the current selection.
    pub fn refresh(&self) {
        let handle = self.clone();
        spawn_local(async move {
            let pending = handle.controller.refresh();
            handle.sync();
            if pending.await == FetchOutcome::Stale {
                log::debug!("Ignored response for a superseded selection");
            }
            handle.sync();
        });
    }

    /// Switcher click.
    pub fn select_user(&self, id: &str) {
        match self.controller.select_user(id) {
            Ok(()) => self.refresh(),
            Err(err) => log::error!("Failed to switch to user {id}: {err}"),
        }
    }

    /// Browser back/forward.
    pub fn on_location_change(&self) {
        if self.controller.sync_from_location() {
            self.refresh();
        }
    }

    pub fn delete_post(&self, id: PostId) {
        let handle = self.clone();
        spawn_local(async move {
            if let Err(err) = handle.controller.delete_post(&id).await {
                log::error!("Failed to delete post {id}: {err}");
            }
            handle.sync();
        });
    }

    /// Submit the compose form, returning the draft cleared on success or
    /// untouched on failure.
    pub async fn submit(&self, mut draft: PostDraft) -> PostDraft {
        if let Err(err) = self.controller.submit(&mut draft).await {
            log::error!("Failed to create post: {err}");
        }
        self.sync();
        draft
    }

    pub fn dismiss_notice(&self) {
        self.controller.clear_mutation_error();
        self.notice.set(None);
    }
}

/// Feed handle provided by `App`.
pub fn use_feed() -> FeedHandle {
    use_context::<FeedHandle>().expect("FeedHandle context")
}
