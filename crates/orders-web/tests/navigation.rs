//! Resolution behaviour of the application's route table.

use orders_web::navigation::{HistoryMode, Navigation};
use orders_web::routes::{self, DEFAULT_PATH, RoutePattern, RouteTarget, View};

fn navigation() -> Navigation {
    Navigation::new(routes::routes(), HistoryMode::web("/")).expect("application table is valid")
}

#[test]
fn every_path_reaches_the_orders_view() {
    let nav = navigation();
    let paths = [
        "",
        "/",
        "/orders",
        "/orders/",
        "/ORDERS",
        "/orders/42",
        "/nonexistent",
        "/nonexistent/nested/path",
        "/a//b///c/",
        "/?query=1",
        "/unknown#fragment",
        "relative/path",
    ];

    for path in paths {
        let resolution = nav
            .resolve(path)
            .unwrap_or_else(|e| panic!("{} did not resolve: {}", path, e));
        assert_eq!(resolution.view, View::Orders, "path {}", path);
        assert_eq!(resolution.path, DEFAULT_PATH, "path {}", path);
        assert!(resolution.redirects <= 1, "path {} took {} hops", path, resolution.redirects);
    }
}

#[test]
fn root_redirects_once_to_orders() {
    let resolution = navigation().resolve("/").unwrap();
    assert_eq!(resolution.view, View::Orders);
    assert_eq!(resolution.name, Some("Orders"));
    assert_eq!(resolution.redirects, 1);
    assert_eq!(resolution.redirected_from.as_deref(), Some("/"));
}

#[test]
fn unknown_nested_path_redirects_through_catch_all() {
    let nav = navigation();

    let (entry, params) = nav.match_route("/nonexistent/nested/path").unwrap();
    assert_eq!(entry.pattern, RoutePattern::CatchAll);
    assert_eq!(entry.target, RouteTarget::Redirect(DEFAULT_PATH));
    assert_eq!(params.path_match, vec!["nonexistent", "nested", "path"]);

    let resolution = nav.resolve("/nonexistent/nested/path").unwrap();
    assert_eq!(resolution.view, View::Orders);
    assert_eq!(resolution.redirects, 1);
    assert_eq!(
        resolution.redirected_from.as_deref(),
        Some("/nonexistent/nested/path")
    );
}

#[test]
fn default_path_binds_view_without_redirect() {
    let resolution = navigation().resolve(DEFAULT_PATH).unwrap();
    assert_eq!(resolution.view, View::Orders);
    assert_eq!(resolution.name, Some("Orders"));
    assert!(!resolution.is_redirect());
    assert_eq!(resolution.redirected_from, None);
}

#[test]
fn literal_entry_shadows_catch_all() {
    let nav = navigation();
    for path in ["/orders", "/orders/", "/Orders?x=1"] {
        let (entry, _) = nav.match_route(path).unwrap();
        assert!(!entry.pattern.is_catch_all(), "catch-all reached for {}", path);
        assert_eq!(entry.pattern, RoutePattern::Static(DEFAULT_PATH));
    }
}

#[test]
fn repeated_resolution_is_stable() {
    let nav = navigation();
    let first = nav.resolve(DEFAULT_PATH).unwrap();
    let second = nav.resolve(DEFAULT_PATH).unwrap();
    assert_eq!(first, second);
}

#[test]
fn sub_path_deployment() {
    let nav = Navigation::new(routes::routes(), HistoryMode::web("/shop/")).unwrap();
    assert_eq!(nav.base(), "/shop");

    let resolution = nav.resolve(nav.strip_base("/shop/orders")).unwrap();
    assert!(!resolution.is_redirect());

    let resolution = nav.resolve(nav.strip_base("/shop")).unwrap();
    assert_eq!(resolution.redirected_from.as_deref(), Some("/"));
    assert_eq!(nav.href(&resolution.path), "/shop/orders");
}

#[test]
fn config_navigation_uses_application_table() {
    let nav = Navigation::from_config().unwrap();
    assert_eq!(nav.routes(), routes::routes());
    assert_eq!(nav.landing_path(), DEFAULT_PATH);
}
