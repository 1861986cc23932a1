use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use postboard_app::PostDraft;

use crate::app::services::use_feed;

/// Post-creation form
///
/// The draft signal is owned by the caller so that a refetch, which
/// re-renders the panels, does not lose typed text. Failures show in the
/// feed notice.
#[component]
pub fn AddPost(draft: RwSignal<PostDraft>) -> impl IntoView {
    let feed = use_feed();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let pending = draft.get_untracked();
        let feed = feed.clone();
        spawn_local(async move {
            let after = feed.submit(pending).await;
            draft.set(after);
        });
    };

    view! {
        <section
            class="panel"
            style="padding: 12px; margin-top: 16px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.2);"
        >
            <span style="display: block; margin-bottom: 8px; font-size: 0.65rem; font-weight: 700; color: #9e9e9e; text-transform: uppercase;">
                "Create New Post"
            </span>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Title"
                    style="width: 100%; font-size: 0.8rem; margin: 4px 0; padding: 6px;"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.set_title(event_target_value(&ev)))
                />
                <textarea
                    placeholder="Content"
                    rows="2"
                    style="width: 100%; font-size: 0.8rem; margin: 4px 0; padding: 6px;"
                    prop:value=move || draft.with(|d| d.content.clone())
                    on:input=move |ev| draft.update(|d| d.set_content(event_target_value(&ev)))
                ></textarea>
                <div style="margin-top: 8px; text-align: right;">
                    <button
                        type="submit"
                        class="btn btn-contained"
                        style="font-size: 0.7rem; padding: 4px 12px;"
                    >
                        "Add Post"
                    </button>
                </div>
            </form>
        </section>
    }
}
