//! Backend endpoint configuration, resolved once at startup.

/// Base URL used when no override is supplied (local development backend).
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Name of the `window` global (and compile-time env var) that overrides the
/// backend base URL, e.g. `window.RICEGENIE_API_BASE = "https://api.example.com"`.
const API_BASE_OVERRIDE: &str = "RICEGENIE_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
}

impl Config {
    /// Resolve the configuration for this page load.
    ///
    /// Precedence: `window.RICEGENIE_API_BASE` (set by the hosting page at
    /// deploy time), then the `RICEGENIE_API_BASE` env var baked in at compile
    /// time, then [`DEFAULT_API_BASE`].
    pub fn load() -> Self {
        let deployed = web_sys::window()
            .and_then(|window| {
                js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(API_BASE_OVERRIDE))
                    .ok()
            })
            .and_then(|value| value.as_string());
        let compiled = option_env!("RICEGENIE_API_BASE").map(str::to_string);

        Self::resolve(deployed.or(compiled))
    }

    /// Normalize an optional override into a usable base URL.
    ///
    /// Blank overrides fall back to the default; trailing slashes are trimmed
    /// so endpoint paths can always be appended with a leading `/`.
    pub fn resolve(override_base: Option<String>) -> Self {
        let base = override_base
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            api_base: base.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_without_override() {
        let config = Config::resolve(None);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_resolve_uses_override() {
        let config = Config::resolve(Some("https://api.ricegenie.example".into()));
        assert_eq!(config.api_base, "https://api.ricegenie.example");
    }

    #[test]
    fn test_resolve_trims_trailing_slash() {
        let config = Config::resolve(Some("https://api.ricegenie.example/".into()));
        assert_eq!(config.api_base, "https://api.ricegenie.example");
    }

    #[test]
    fn test_resolve_rejects_blank_override() {
        let config = Config::resolve(Some("   ".into()));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }
}
