//! Site Endpoints - API/WebSocket base URL resolution
//!
//! Works out where the front end talks to its backend, in a browser
//! (wasm) or natively.
//!
//! # Resolution
//!
//! ```text
//! ┌──────────────────────────┬──────────────────────────────────┐
//! │ Environment              │ Base URL                         │
//! ├──────────────────────────┼──────────────────────────────────┤
//! │ development + browser    │ http://localhost:8081            │
//! │ production  + browser    │ window.location.origin           │
//! │ no browser               │ $EXPO_PUBLIC_SITE_URL or default │
//! └──────────────────────────┴──────────────────────────────────┘
//! ```
//!
//! The API URL is `{base}/api`; the WebSocket URL is the API URL with its
//! `http`/`https` scheme swapped for `ws`/`wss`.
//!
//! # Modules
//!
//! - [`config`] - Constants (default origin, env var name, schemes)
//! - [`types`] - Error types
//! - [`endpoints`] - Runtime snapshot, resolver and [`EndpointConfig`]
//! - [`context`] - Leptos context helpers

use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod context;
pub mod endpoints;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult};

// Endpoints
pub use endpoints::{
    api_url, derive_api_url, derive_ws_url, endpoints, init_endpoints, install,
    resolve_base_url, ws_url, EndpointConfig, RuntimeEnvironment,
};

// Context
pub use context::{provide_endpoints, use_endpoints};

// =============================================================================
// WASM entry points
// =============================================================================

/// WASM entry point - resolves the endpoints once at module load.
#[wasm_bindgen(start)]
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    let config = endpoints();
    log::info!("🔌 Site endpoints ready: {}", config.base_url);
}

/// Base URL, exported to JavaScript as `baseUrl()`.
#[wasm_bindgen(js_name = baseUrl)]
pub fn js_base_url() -> String {
    endpoints().base_url.clone()
}

/// HTTP API root, exported to JavaScript as `apiUrl()`.
#[wasm_bindgen(js_name = apiUrl)]
pub fn js_api_url() -> String {
    api_url().to_string()
}

/// WebSocket root, exported to JavaScript as `wsUrl()`.
#[wasm_bindgen(js_name = wsUrl)]
pub fn js_ws_url() -> String {
    ws_url().to_string()
}

/// All endpoints as `{ baseUrl, apiUrl, wsUrl }`.
#[wasm_bindgen(js_name = endpointConfig)]
pub fn js_endpoint_config() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(endpoints()).map_err(JsValue::from)
}
