use leptos::prelude::*;

mod components;
pub mod services;

use components::{FeedView, PageShell};
use postboard_app::{AppConfig, FeedClient, FeedController, HttpTransport};
use services::{BrowserNavigator, FeedHandle};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let config =
        AppConfig::default().with_endpoint_override(option_env!("POSTBOARD_GRAPHQL_URL"));
    if let Err(err) = config.validate() {
        log::error!("Invalid configuration: {err}");
    }
    log::info!("Using GraphQL endpoint {}", config.graphql_endpoint);

    let transport = HttpTransport::new(config.graphql_endpoint.clone());
    let controller = FeedController::new(FeedClient::new(transport), BrowserNavigator, config);

    provide_context(FeedHandle::new(controller));

    view! {
        <PageShell>
            <FeedView />
        </PageShell>
    }
}
