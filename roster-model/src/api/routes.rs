macro_rules! v1_path {
    ($path:literal) => {
        concat!("/api/v1", $path)
    };
}

/// Versioned API route definitions shared across Roster services
pub mod v1 {
    pub const ROOT: &str = "/api/v1";
    pub const VERSION: &str = "v1";

    pub mod catalog {
        /// Full catalog listing, store order, no parameters.
        pub const ITEMS: &str = v1_path!("/catalog-items");
    }
}

/// Unversioned routes kept for deployments that predate `/api/v1`.
pub mod legacy {
    pub const LEGENDS: &str = "/api/legends";
}

pub const PING: &str = "/ping";
pub const HEALTH: &str = "/health";

/// Relative path of the listing under the v1 root, as nested by the router.
pub fn relative_to_v1(route: &'static str) -> &'static str {
    route.strip_prefix(v1::ROOT).unwrap_or(route)
}
