use leptos::prelude::*;
use leptos_meta::{MetaTags, provide_meta_context};
#[cfg(not(feature = "ssr"))]
use leptos_router::components::Redirect;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::navigation::Navigation;
use crate::pages::OrdersPage;
use crate::routes::View;

/// HTML document rendered by the server around [`App`].
pub fn shell(options: LeptosOptions, navigation: Navigation) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="theme-color" content="#f8f6f1" media="(prefers-color-scheme: light)" />
                <meta name="theme-color" content="#1a1a1a" media="(prefers-color-scheme: dark)" />
                <link rel="stylesheet" href="/pkg/orders-web.css" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App navigation />
            </body>
        </html>
    }
}

/// Application root. Every path goes through the route table held by
/// `navigation`; the router only tracks the location.
///
/// `/` gets its own route because the wildcard needs at least one segment on
/// the server.
#[component]
pub fn App(navigation: Navigation) -> impl IntoView {
    provide_meta_context();

    let base = navigation.base().to_string();
    let outlet = move || view! { <RouteOutlet navigation=navigation.clone() /> };

    view! {
        <Router base=base>
            <Routes fallback=outlet.clone()>
                <Route path=path!("/") view=outlet.clone() />
                <Route path=path!("/*any") view=outlet />
            </Routes>
        </Router>
    }
}

#[component]
fn RouteOutlet(navigation: Navigation) -> impl IntoView {
    let location = use_location();

    move || {
        let pathname = location.pathname.get();
        match navigation.resolve(navigation.strip_base(&pathname)) {
            Ok(resolution) if resolution.is_redirect() => {
                tracing::debug!(from = %pathname, to = %resolution.path, "redirecting");
                redirect(&navigation, resolution.path)
            }
            Ok(resolution) => mount(resolution.view),
            Err(err) => {
                tracing::error!(path = %pathname, "navigation failed: {}", err);
                view! { <p>{err.to_string()}</p> }.into_any()
            }
        }
    }
}

fn mount(view: View) -> AnyView {
    match view {
        View::Orders => view! { <OrdersPage /> }.into_any(),
    }
}

/// Server responses carry the base-joined URL in `Location`.
#[cfg(feature = "ssr")]
fn redirect(navigation: &Navigation, path: String) -> AnyView {
    leptos_axum::redirect(&navigation.href(&path));
    ().into_any()
}

/// In the browser the router prefixes the base itself.
#[cfg(not(feature = "ssr"))]
fn redirect(_navigation: &Navigation, path: String) -> AnyView {
    view! { <Redirect path /> }.into_any()
}
