//! Client configuration: API base URL from the build environment with an
//! optional runtime override.
//!
//! The runtime value is read from `window.PILOTPREP_CONFIG` (published by the
//! SSR host at `/app-config.js`), so one build can be pointed at different
//! backends. Values here are public; never put secrets in them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the global object the host script assigns.
pub const RUNTIME_CONFIG_GLOBAL: &str = "PILOTPREP_CONFIG";

/// Frontend configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the quiz API. Empty means same-origin paths.
    pub api_base_url: String,
}

impl ClientConfig {
    /// Build-time defaults with runtime overrides applied.
    pub fn load() -> Self {
        let api_base_url = option_env!("PILOTPREP_API_BASE_URL").unwrap_or("");
        let mut config = Self { api_base_url: api_base_url.trim().to_owned() };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Debug, Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut ClientConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
}

#[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_GLOBAL)).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let value = js_sys::Reflect::get(&config, &JsValue::from_str("api_base_url"))
        .ok()?
        .as_string()?;

    Some(RuntimeConfig { api_base_url: normalize_runtime_value(&value) })
}

#[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(any(test, all(feature = "hydrate", target_arch = "wasm32")))]
fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
