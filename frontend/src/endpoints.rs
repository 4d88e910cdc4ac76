//! API and WebSocket endpoint resolution.
//!
//! The base URL is picked from a [`RuntimeEnvironment`] snapshot, then the
//! API and WebSocket URLs are derived from it by plain string rewrites:
//!
//! ```text
//! RuntimeEnvironment ──resolve_base_url──► base ──derive_api_url──► api_url
//!                                                              │
//!                                                              └─derive_ws_url──► ws_url
//! ```
//!
//! The result is bundled into an [`EndpointConfig`] which callers pass around
//! explicitly. A process-wide copy is also kept for code that cannot take
//! the config as an argument, see [`init_endpoints`] and [`endpoints`].

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::config::{
    API_PATH, DEV_ORIGIN, HTTPS_SCHEME, HTTP_SCHEME, SITE_URL_ENV, WSS_SCHEME, WS_SCHEME,
};
use crate::types::{AppError, AppResult};

// =============================================================================
// Runtime Environment
// =============================================================================

/// Immutable snapshot of everything the resolver looks at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeEnvironment {
    /// Development build flag.
    pub development: bool,
    /// Current origin of the browser context, `None` outside a browser.
    pub browser_origin: Option<String>,
    /// Value of `EXPO_PUBLIC_SITE_URL`, if set.
    pub site_url: Option<String>,
}

impl RuntimeEnvironment {
    /// Snapshot from explicit values, bypassing the ambient environment.
    pub fn new(
        development: bool,
        browser_origin: Option<String>,
        site_url: Option<String>,
    ) -> Self {
        Self {
            development,
            browser_origin,
            site_url,
        }
    }

    /// Development snapshot with no browser context and no site URL.
    pub fn development() -> Self {
        Self::new(true, None, None)
    }

    /// Production snapshot with no browser context and no site URL.
    pub fn production() -> Self {
        Self::new(false, None, None)
    }

    /// Same snapshot, running in a browser at `origin`.
    pub fn with_browser_origin(mut self, origin: impl Into<String>) -> Self {
        self.browser_origin = Some(origin.into());
        self
    }

    /// Same snapshot, with `EXPO_PUBLIC_SITE_URL` set to `url`.
    pub fn with_site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = Some(url.into());
        self
    }

    /// Whether a browser-like global context is available.
    ///
    /// An empty origin does not count.
    pub fn has_browser_context(&self) -> bool {
        self.origin().is_some()
    }

    fn origin(&self) -> Option<&str> {
        self.browser_origin.as_deref().filter(|origin| !origin.is_empty())
    }

    fn site(&self) -> Option<&str> {
        self.site_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Read the snapshot from the ambient environment.
    ///
    /// Debug builds count as development. The site URL is read from the
    /// process environment first, then from the value baked in at build
    /// time (wasm builds have no process environment). Empty values are
    /// skipped.
    pub fn detect() -> Self {
        let site_url = std::env::var(SITE_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty())
            .or_else(|| {
                option_env!("EXPO_PUBLIC_SITE_URL")
                    .filter(|url| !url.is_empty())
                    .map(str::to_owned)
            });

        Self::new(cfg!(debug_assertions), detect_browser_origin(), site_url)
    }
}

#[cfg(target_arch = "wasm32")]
fn detect_browser_origin() -> Option<String> {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .filter(|origin| !origin.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn detect_browser_origin() -> Option<String> {
    None
}

// =============================================================================
// Resolver
// =============================================================================

/// Pick the base URL (scheme + host + port, no trailing slash).
///
/// First match wins:
/// 1. development build in a browser: [`DEV_ORIGIN`]
/// 2. any browser: the page origin
/// 3. otherwise: the site URL, or [`DEV_ORIGIN`] when unset or empty
///
/// An empty origin counts as no browser context.
pub fn resolve_base_url(env: &RuntimeEnvironment) -> String {
    match (env.origin(), env.development) {
        (Some(_), true) => {
            log::debug!("Development build in browser, using {}", DEV_ORIGIN);
            DEV_ORIGIN.to_string()
        }
        (Some(origin), false) => {
            log::debug!("Using browser origin {}", origin);
            origin.to_string()
        }
        (None, _) => match env.site() {
            Some(url) => {
                log::debug!("No browser context, using {} = {}", SITE_URL_ENV, url);
                url.to_string()
            }
            None => {
                log::debug!(
                    "No browser context and {} unset, using {}",
                    SITE_URL_ENV,
                    DEV_ORIGIN
                );
                DEV_ORIGIN.to_string()
            }
        },
    }
}

/// Append the API path segment. No slash normalization is done.
pub fn derive_api_url(base: &str) -> String {
    format!("{}{}", base, API_PATH)
}

/// Rewrite an `http(s)://` prefix into `ws(s)://`.
///
/// Anything else is returned unchanged.
pub fn derive_ws_url(base: &str) -> String {
    if let Some(rest) = base.strip_prefix(HTTPS_SCHEME) {
        format!("{}{}", WSS_SCHEME, rest)
    } else if let Some(rest) = base.strip_prefix(HTTP_SCHEME) {
        format!("{}{}", WS_SCHEME, rest)
    } else {
        base.to_string()
    }
}

// =============================================================================
// Endpoint Config
// =============================================================================

/// Resolved endpoints for the running front end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfig {
    /// Base URL the other two are derived from
    pub base_url: String,
    /// HTTP API root (`{base_url}/api`)
    pub api_url: String,
    /// WebSocket root, same path as `api_url`
    pub ws_url: String,
}

impl EndpointConfig {
    /// Run the full resolution chain against a snapshot.
    pub fn resolve(env: &RuntimeEnvironment) -> Self {
        Self::from_base_url(resolve_base_url(env))
    }

    /// Derive the API and WebSocket URLs from a known base URL.
    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let api_url = derive_api_url(&base_url);
        let ws_url = derive_ws_url(&api_url);

        Self {
            base_url,
            api_url,
            ws_url,
        }
    }

    /// Full HTTP URL of an API route, e.g. `api_endpoint("upload")`.
    pub fn api_endpoint(&self, path: &str) -> String {
        join_path(&self.api_url, path)
    }

    /// Full WebSocket URL of an API route.
    pub fn ws_endpoint(&self, path: &str) -> String {
        join_path(&self.ws_url, path)
    }
}

fn join_path(root: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        root.to_string()
    } else {
        format!("{}/{}", root, path)
    }
}

// =============================================================================
// Process-wide endpoints
// =============================================================================

static ENDPOINTS: OnceCell<EndpointConfig> = OnceCell::new();

/// Resolve the endpoints once for the whole process.
///
/// Later calls return the first result; `env` is ignored once set.
pub fn init_endpoints(env: &RuntimeEnvironment) -> &'static EndpointConfig {
    ENDPOINTS.get_or_init(|| {
        let config = EndpointConfig::resolve(env);
        log::info!("Endpoints resolved: api={} ws={}", config.api_url, config.ws_url);
        config
    })
}

/// Install an already built config as the process-wide endpoints.
pub fn install(config: EndpointConfig) -> AppResult<&'static EndpointConfig> {
    ENDPOINTS.try_insert(config).map_err(|(current, _)| {
        AppError::Config(format!(
            "endpoints already initialized with base URL {}",
            current.base_url
        ))
    })
}

/// Process-wide endpoints, detected from the ambient environment on first use.
pub fn endpoints() -> &'static EndpointConfig {
    init_endpoints(&RuntimeEnvironment::detect())
}

/// Process-wide HTTP API root.
pub fn api_url() -> &'static str {
    &endpoints().api_url
}

/// Process-wide WebSocket root.
pub fn ws_url() -> &'static str {
    &endpoints().ws_url
}
