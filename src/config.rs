use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn get_from_env_js() -> Option<String> {
    // Expect optional global object: window.__HIREWISE_ENV = { API_BASE_URL: "..." }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &"__HIREWISE_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
    val.and_then(|v| v.as_string())
}

fn get_from_window_config() -> Option<String> {
    // Expect optional global object: window.__HIREWISE_CONFIG = { api_base_url: "..." }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &"__HIREWISE_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"api_base_url".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null());
    val.and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    get_from_env_js().or_else(get_from_window_config)
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Resolves the API base URL once per page load: an injected `env.js`
/// global wins, then `window.__HIREWISE_CONFIG`, then a deploy-time
/// `config.json` next to the bundle, then the local development default.
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
