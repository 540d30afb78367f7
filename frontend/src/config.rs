use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn browser_window() -> Option<web_sys::Window> {
    if cfg!(target_arch = "wasm32") {
        web_sys::window()
    } else {
        None
    }
}

fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let w = browser_window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn get_from_env_js() -> Option<String> {
    // window.__STAFFBOARD_ENV = { API_BASE_URL: "..." }
    read_global_key("__STAFFBOARD_ENV", &["API_BASE_URL", "api_base_url"])
}

fn get_from_window_config() -> Option<String> {
    // window.__STAFFBOARD_CONFIG = { api_base_url: "..." }
    read_global_key("__STAFFBOARD_CONFIG", &["api_base_url", "API_BASE_URL"])
}

fn snapshot_from_globals() -> Option<String> {
    get_from_env_js()
        .or_else(get_from_window_config)
        .and_then(|url| normalize_base_url(&url))
}

/// Trims whitespace and trailing slashes; blank values count as unset.
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn cache_base_url(value: &str) -> String {
    let _ = API_BASE_URL.set(value.to_string());
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| value.to_string())
}

fn write_window_config(cfg: &RuntimeConfig) {
    let Some(url) = &cfg.api_base_url else {
        return;
    };
    let Some(w) = browser_window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__STAFFBOARD_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    if browser_window().is_none() {
        return None;
    }
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url.as_deref().and_then(normalize_base_url) {
            return cache_base_url(&url);
        }
    }
    log::warn!(
        "No API base URL configured; falling back to {}",
        DEFAULT_API_BASE_URL
    );
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("Using API base URL {}", url);
}
