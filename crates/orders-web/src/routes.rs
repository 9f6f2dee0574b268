//! The navigation table: path patterns mapped to views or redirects.
//!
//! The table is plain data. It is matched first-to-last by
//! [`crate::navigation::Navigation`], so a pattern placed earlier shadows every
//! later pattern that would match the same path.

/// Path of the landing view. Both redirects in the table point here.
pub const DEFAULT_PATH: &str = "/orders";

/// Symbolic name of the landing view's entry.
pub const DEFAULT_ROUTE_NAME: &str = "Orders";

static ROUTES: [RouteEntry; 3] = [
    RouteEntry {
        pattern: RoutePattern::Root,
        name: None,
        target: RouteTarget::Redirect(DEFAULT_PATH),
    },
    RouteEntry {
        pattern: RoutePattern::Static(DEFAULT_PATH),
        name: Some(DEFAULT_ROUTE_NAME),
        target: RouteTarget::View(View::Orders),
    },
    RouteEntry {
        pattern: RoutePattern::CatchAll,
        name: None,
        target: RouteTarget::Redirect(DEFAULT_PATH),
    },
];

/// The application's route table, in match order.
pub fn routes() -> &'static [RouteEntry] {
    &ROUTES
}

/// Renderable units a route can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Orders,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Orders => write!(f, "Orders"),
        }
    }
}

/// Path template an entry matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePattern {
    /// `/`
    Root,
    /// A literal path such as `/orders`.
    Static(&'static str),
    /// Any path, zero or more segments. Captures the segments as `path_match`.
    CatchAll,
}

impl RoutePattern {
    /// Match a request path against this pattern.
    ///
    /// Matching is non-strict (trailing slashes are ignored) and literal
    /// segments compare case-insensitively. Query strings and fragments are
    /// not part of the match.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let requested = segments(path);
        match self {
            Self::Root => requested.is_empty().then(RouteParams::default),
            Self::Static(pattern) => {
                let expected = segments(pattern);
                let same = expected.len() == requested.len()
                    && expected
                        .iter()
                        .zip(&requested)
                        .all(|(want, got)| want.eq_ignore_ascii_case(got));
                same.then(RouteParams::default)
            }
            Self::CatchAll => Some(RouteParams {
                path_match: requested.into_iter().map(str::to_string).collect(),
            }),
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::CatchAll)
    }
}

impl std::fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Root => write!(f, "/"),
            Self::Static(path) => write!(f, "{}", path),
            Self::CatchAll => write!(f, "/:pathMatch(.*)*"),
        }
    }
}

/// What happens when an entry matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Mount this view.
    View(View),
    /// Substitute this path and resolve again.
    Redirect(&'static str),
}

/// A single pattern-to-target mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: RoutePattern,
    /// Only view-bound entries carry a name.
    pub name: Option<&'static str>,
    pub target: RouteTarget,
}

/// Parameters captured by a match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    /// Segments swallowed by the catch-all; empty for every other pattern.
    pub path_match: Vec<String>,
}

/// Canonical form of a request path: no query or fragment, a leading `/`,
/// no empty segments and no trailing slash.
pub fn normalize_path(path: &str) -> String {
    format!("/{}", segments(path).join("/"))
}

fn segments(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

/// Defects that make a route table unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    Empty,
    MissingCatchAll,
    MultipleCatchAll(usize),
    CatchAllNotLast,
    DuplicateName(&'static str),
    NamedRedirect(&'static str),
    DanglingRedirect {
        from: RoutePattern,
        to: &'static str,
    },
}

impl std::fmt::Display for RouteTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "route table is empty"),
            Self::MissingCatchAll => write!(f, "route table has no catch-all entry"),
            Self::MultipleCatchAll(count) => {
                write!(f, "route table has {} catch-all entries, expected one", count)
            }
            Self::CatchAllNotLast => write!(f, "catch-all entry must be the last entry"),
            Self::DuplicateName(name) => write!(f, "route name '{}' is used more than once", name),
            Self::NamedRedirect(name) => {
                write!(f, "redirect entry '{}' must not carry a name", name)
            }
            Self::DanglingRedirect { from, to } => write!(
                f,
                "redirect from '{}' to '{}' does not reach a view",
                from, to
            ),
        }
    }
}

impl std::error::Error for RouteTableError {}

/// Check the structural invariants of a route table.
///
/// A valid table has exactly one catch-all, placed last; names are unique and
/// only appear on view-bound entries; and every redirect target resolves,
/// through any chain of redirects, to a view-bound entry without falling
/// through to the catch-all.
pub fn validate(table: &[RouteEntry]) -> Result<(), RouteTableError> {
    let Some(last) = table.last() else {
        return Err(RouteTableError::Empty);
    };

    match table.iter().filter(|e| e.pattern.is_catch_all()).count() {
        0 => return Err(RouteTableError::MissingCatchAll),
        1 => {}
        n => return Err(RouteTableError::MultipleCatchAll(n)),
    }
    if !last.pattern.is_catch_all() {
        return Err(RouteTableError::CatchAllNotLast);
    }

    for (i, entry) in table.iter().enumerate() {
        match (entry.name, entry.target) {
            (Some(name), RouteTarget::Redirect(_)) => {
                return Err(RouteTableError::NamedRedirect(name));
            }
            (Some(name), RouteTarget::View(_))
                if table[..i].iter().any(|earlier| earlier.name == Some(name)) =>
            {
                return Err(RouteTableError::DuplicateName(name));
            }
            (_, RouteTarget::Redirect(to)) if !reaches_view(table, to) => {
                return Err(RouteTableError::DanglingRedirect {
                    from: entry.pattern,
                    to,
                });
            }
            _ => {}
        }
    }

    Ok(())
}

fn reaches_view(table: &[RouteEntry], to: &'static str) -> bool {
    let mut path = to;
    // A chain longer than the table must revisit an entry.
    for _ in 0..table.len() {
        match table.iter().find(|e| e.pattern.matches(path).is_some()) {
            Some(entry) if entry.pattern.is_catch_all() => return false,
            Some(RouteEntry {
                target: RouteTarget::View(_),
                ..
            }) => return true,
            Some(RouteEntry {
                target: RouteTarget::Redirect(next),
                ..
            }) => path = *next,
            None => return false,
        }
    }
    false
}
