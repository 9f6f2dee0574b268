//! axum application serving the Leptos routes.

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{App, shell};
use crate::navigation::Navigation;

/// Build the HTTP router: Leptos routes generated from [`App`], static files
/// from the site root for everything else.
pub fn build_router(navigation: Navigation, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list({
        let navigation = navigation.clone();
        move || view! { <App navigation=navigation.clone() /> }
    });
    tracing::debug!(routes = routes.len(), "leptos routes generated");

    let site_root = leptos_options.site_root.clone();
    Router::new()
        .leptos_routes(&leptos_options, routes, {
            let options = leptos_options.clone();
            move || shell(options.clone(), navigation.clone())
        })
        .fallback_service(ServeDir::new(&*site_root))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}
