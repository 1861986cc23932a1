use leptos::prelude::*;

/// Fixed-width layout container
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    view! {
        <main
            class="page-shell"
            style="max-width: 1280px; margin: 30px auto 0; padding: 0 24px; font-family: Roboto, Helvetica, Arial, sans-serif;"
        >
            {children()}
        </main>
    }
}
