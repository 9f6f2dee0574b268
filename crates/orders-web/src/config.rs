//! Site-wide configuration, fixed at build time so the server and the WASM
//! bundle agree.

pub struct SiteConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    /// Path the site is served under. Read from `BASE_URL` when building.
    pub base_url: &'static str,
}

pub const CONFIG: SiteConfig = SiteConfig {
    name: "Orders",
    tagline: "Order tracking",
    base_url: match option_env!("BASE_URL") {
        Some(base) => base,
        None => "/",
    },
};
