//! Resolver wiring: pairs the route table with a history mode and resolves
//! request paths against it.
//!
//! One [`Navigation`] is built at startup and handed to [`crate::app::App`].
//! Everything downstream receives it from there.

use std::borrow::Cow;

use crate::config::CONFIG;
use crate::routes::{
    self, DEFAULT_PATH, DEFAULT_ROUTE_NAME, RouteEntry, RouteParams, RoutePattern, RouteTableError,
    RouteTarget, View, normalize_path,
};

/// Redirect hops followed before giving up on a path.
pub const MAX_REDIRECTS: usize = 8;

/// How the current path is reflected in the address bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryMode {
    /// Browser history API, with every URL rooted at `base`.
    Web { base: Cow<'static, str> },
}

impl HistoryMode {
    /// Browser history rooted at `base`. `"/"` and `""` both mean the site
    /// root; anything else is stored with a leading and no trailing slash.
    pub fn web(base: impl Into<Cow<'static, str>>) -> Self {
        Self::Web {
            base: normalize_base(base.into()),
        }
    }

    /// Normalized base path, empty when rooted at `/`.
    pub fn base(&self) -> &str {
        match self {
            Self::Web { base } => base,
        }
    }
}

fn normalize_base(base: Cow<'static, str>) -> Cow<'static, str> {
    if base.trim_matches('/').is_empty() {
        return Cow::Borrowed("");
    }
    if base.starts_with('/') && !base.ends_with('/') {
        return base;
    }
    Cow::Owned(format!("/{}", base.trim_matches('/')))
}

/// Outcome of resolving a path to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub view: View,
    pub name: Option<&'static str>,
    /// Normalized path of the entry that bound the view.
    pub path: String,
    /// The normalized requested path, when at least one redirect was followed.
    pub redirected_from: Option<String>,
    pub redirects: usize,
    pub params: RouteParams,
}

impl Resolution {
    pub fn is_redirect(&self) -> bool {
        self.redirects > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    NoMatch(String),
    TooManyRedirects(String),
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMatch(path) => write!(f, "no route matches '{}'", path),
            Self::TooManyRedirects(path) => write!(
                f,
                "'{}' exceeded {} redirects while resolving",
                path, MAX_REDIRECTS
            ),
        }
    }
}

impl std::error::Error for ResolveError {}

/// The application's navigation authority.
#[derive(Debug, Clone)]
pub struct Navigation {
    routes: &'static [RouteEntry],
    history: HistoryMode,
}

impl Navigation {
    /// Validate `routes` and pair it with `history`.
    pub fn new(routes: &'static [RouteEntry], history: HistoryMode) -> Result<Self, RouteTableError> {
        routes::validate(routes)?;
        tracing::debug!(
            routes = routes.len(),
            base = history.base(),
            "navigation table installed"
        );
        Ok(Self { routes, history })
    }

    /// The application table under browser history rooted at `CONFIG.base_url`.
    pub fn from_config() -> Result<Self, RouteTableError> {
        Self::new(routes::routes(), HistoryMode::web(CONFIG.base_url))
    }

    pub fn routes(&self) -> &'static [RouteEntry] {
        self.routes
    }

    pub fn history(&self) -> &HistoryMode {
        &self.history
    }

    pub fn base(&self) -> &str {
        self.history.base()
    }

    /// First entry, in table order, whose pattern matches `path`.
    pub fn match_route(&self, path: &str) -> Option<(&'static RouteEntry, RouteParams)> {
        self.routes
            .iter()
            .find_map(|entry| entry.pattern.matches(path).map(|params| (entry, params)))
    }

    /// Resolve `path` to a view, following redirects.
    pub fn resolve(&self, path: &str) -> Result<Resolution, ResolveError> {
        let requested = normalize_path(path);
        let mut current = requested.clone();

        for redirects in 0..=MAX_REDIRECTS {
            let Some((entry, params)) = self.match_route(&current) else {
                return Err(ResolveError::NoMatch(current));
            };
            match entry.target {
                RouteTarget::View(view) => {
                    return Ok(Resolution {
                        view,
                        name: entry.name,
                        path: current,
                        redirected_from: (redirects > 0).then_some(requested),
                        redirects,
                        params,
                    });
                }
                RouteTarget::Redirect(to) => {
                    tracing::trace!(from = %current, to, "following redirect");
                    current = normalize_path(to);
                }
            }
        }

        Err(ResolveError::TooManyRedirects(requested))
    }

    /// Path of the entry named `name`. The catch-all has no fixed path.
    pub fn path_for(&self, name: &str) -> Option<&'static str> {
        self.routes
            .iter()
            .find(|entry| entry.name == Some(name))
            .and_then(|entry| match entry.pattern {
                RoutePattern::Root => Some("/"),
                RoutePattern::Static(path) => Some(path),
                RoutePattern::CatchAll => None,
            })
    }

    /// Where unmatched navigation lands.
    pub fn landing_path(&self) -> &'static str {
        self.path_for(DEFAULT_ROUTE_NAME).unwrap_or(DEFAULT_PATH)
    }

    /// Remove the base prefix from a browser pathname. Paths outside the base
    /// are returned unchanged.
    pub fn strip_base<'a>(&self, pathname: &'a str) -> &'a str {
        let base = self.base();
        if base.is_empty() {
            return pathname;
        }
        match pathname.strip_prefix(base) {
            Some("") => "/",
            Some(rest) if rest.starts_with(['/', '?', '#']) => rest,
            _ => pathname,
        }
    }

    /// Browser URL for a table path.
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.base(), normalize_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigation(base: &'static str) -> Navigation {
        Navigation::new(routes::routes(), HistoryMode::web(base)).unwrap()
    }

    #[test]
    fn base_normalization() {
        assert_eq!(HistoryMode::web("/").base(), "");
        assert_eq!(HistoryMode::web("").base(), "");
        assert_eq!(HistoryMode::web("/app").base(), "/app");
        assert_eq!(HistoryMode::web("/app/").base(), "/app");
        assert_eq!(HistoryMode::web("app").base(), "/app");
        assert_eq!(HistoryMode::web(String::from("/shop/admin/")).base(), "/shop/admin");
    }

    #[test]
    fn strip_base_prefix() {
        let nav = navigation("/app");
        assert_eq!(nav.strip_base("/app"), "/");
        assert_eq!(nav.strip_base("/app/orders"), "/orders");
        assert_eq!(nav.strip_base("/app?x=1"), "?x=1");
        assert_eq!(nav.strip_base("/apple"), "/apple");
        assert_eq!(nav.strip_base("/orders"), "/orders");

        let rooted = navigation("/");
        assert_eq!(rooted.strip_base("/orders"), "/orders");
    }

    #[test]
    fn href_joins_base() {
        assert_eq!(navigation("/").href("/orders"), "/orders");
        assert_eq!(navigation("/app/").href("/orders/"), "/app/orders");
        assert_eq!(navigation("/app").href("/"), "/app/");
    }

    #[test]
    fn named_lookup() {
        let nav = navigation("/");
        assert_eq!(nav.path_for("Orders"), Some("/orders"));
        assert_eq!(nav.path_for("Missing"), None);
        assert_eq!(nav.landing_path(), "/orders");
    }

    #[test]
    fn match_route_reports_first_entry() {
        let nav = navigation("/");
        let (entry, _) = nav.match_route("/").unwrap();
        assert_eq!(entry.pattern, RoutePattern::Root);

        let (entry, params) = nav.match_route("/a/b").unwrap();
        assert!(entry.pattern.is_catch_all());
        assert_eq!(params.path_match, vec!["a", "b"]);
    }

    #[test]
    fn redirect_resolution_records_origin() {
        let resolution = navigation("/").resolve("/unknown?x=1").unwrap();
        assert_eq!(resolution.view, View::Orders);
        assert_eq!(resolution.path, "/orders");
        assert_eq!(resolution.redirected_from.as_deref(), Some("/unknown"));
        assert_eq!(resolution.redirects, 1);
        assert!(resolution.params.path_match.is_empty());
    }

    #[test]
    fn rejects_invalid_table() {
        static BROKEN: [RouteEntry; 1] = [RouteEntry {
            pattern: RoutePattern::Static("/orders"),
            name: Some("Orders"),
            target: RouteTarget::View(View::Orders),
        }];
        let err = Navigation::new(&BROKEN, HistoryMode::web("/")).unwrap_err();
        assert_eq!(err, RouteTableError::MissingCatchAll);
    }

    #[test]
    fn resolve_error_display() {
        assert_eq!(
            ResolveError::NoMatch("/x".into()).to_string(),
            "no route matches '/x'"
        );
        assert!(ResolveError::TooManyRedirects("/x".into())
            .to_string()
            .contains("8 redirects"));
    }
}
