//! Application configuration.
//!
//! Centralized constants for endpoint resolution. The only runtime input
//! besides the browser origin is the `EXPO_PUBLIC_SITE_URL` variable.

/// Local development origin.
///
/// Used in development builds running in a browser, and as the last-resort
/// fallback when nothing else is known.
pub const DEV_ORIGIN: &str = "http://localhost:8081";

/// Environment variable holding the public site URL.
///
/// Consulted only when no browser context is available (native, SSR).
pub const SITE_URL_ENV: &str = "EXPO_PUBLIC_SITE_URL";

/// Path segment appended to the base URL for the HTTP API.
pub const API_PATH: &str = "/api";

/// Plain HTTP scheme prefix, rewritten to [`WS_SCHEME`].
pub const HTTP_SCHEME: &str = "http://";

/// Secure HTTP scheme prefix, rewritten to [`WSS_SCHEME`].
pub const HTTPS_SCHEME: &str = "https://";

/// Plain WebSocket scheme prefix.
pub const WS_SCHEME: &str = "ws://";

/// Secure WebSocket scheme prefix.
pub const WSS_SCHEME: &str = "wss://";
