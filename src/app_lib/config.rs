//! Build-time configuration for the Supabase project with an optional
//! runtime override. The runtime config is read from
//! `window.DONORLINK_CONFIG` (if present) so static deployments can point at
//! another project without rebuilding. Both values are public client-side
//! configuration; do not store secrets here.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let supabase_url = option_env!("DONORLINK_SUPABASE_URL").unwrap_or("");
        let supabase_anon_key = option_env!("DONORLINK_SUPABASE_ANON_KEY").unwrap_or("");

        let mut config = Self {
            supabase_url: supabase_url.to_string(),
            supabase_anon_key: supabase_anon_key.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    supabase_url: Option<String>,
    supabase_anon_key: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.supabase_url {
        config.supabase_url = value;
    }
    if let Some(value) = runtime.supabase_anon_key {
        config.supabase_anon_key = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("DONORLINK_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        supabase_url: read_runtime_value(&object, "supabase_url"),
        supabase_anon_key: read_runtime_value(&object, "supabase_anon_key"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_runtime_overrides, normalize_runtime_value, AppConfig, RuntimeConfig};

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://demo.supabase.co "),
            Some("https://demo.supabase.co".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig {
            supabase_url: "https://default.supabase.co".to_string(),
            supabase_anon_key: "default-key".to_string(),
        };
        let runtime = RuntimeConfig {
            supabase_url: normalize_runtime_value(""),
            supabase_anon_key: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.supabase_url, "https://default.supabase.co");
        assert_eq!(config.supabase_anon_key, "default-key");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig {
            supabase_url: "https://default.supabase.co".to_string(),
            supabase_anon_key: "default-key".to_string(),
        };
        let runtime = RuntimeConfig {
            supabase_url: normalize_runtime_value("https://override.supabase.co"),
            supabase_anon_key: normalize_runtime_value("override-key"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.supabase_url, "https://override.supabase.co");
        assert_eq!(config.supabase_anon_key, "override-key");
    }
}
