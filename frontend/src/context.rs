//! Leptos context helpers.
//!
//! Components read the endpoints through [`use_endpoints`] instead of a
//! global constant, so a test harness or an embedding app can provide its
//! own [`EndpointConfig`].

use leptos::*;

use crate::endpoints::{endpoints, EndpointConfig};

/// Make `config` available to every component below the current owner.
pub fn provide_endpoints(config: EndpointConfig) {
    log::debug!("Providing endpoints context: {}", config.base_url);
    provide_context(config);
}

/// Endpoints from context, or the process-wide ones if none were provided.
pub fn use_endpoints() -> EndpointConfig {
    use_context::<EndpointConfig>().unwrap_or_else(|| endpoints().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::init_endpoints;
    use crate::endpoints::tests::shared_env;

    #[test]
    fn test_provided_endpoints_are_used() {
        let runtime = create_runtime();

        let config = EndpointConfig::from_base_url("https://staging.example.com");
        provide_endpoints(config.clone());
        assert_eq!(use_endpoints(), config);
        assert_eq!(use_endpoints().ws_url, "wss://staging.example.com/api");

        runtime.dispose();
    }

    #[test]
    fn test_missing_context_falls_back_to_process_endpoints() {
        let runtime = create_runtime();

        let process = init_endpoints(&shared_env());
        assert_eq!(use_endpoints(), *process);
        assert_eq!(use_endpoints().api_url, "https://app.example.com/api");

        runtime.dispose();
    }
}
