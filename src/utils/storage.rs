use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Storage, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()
}

/// Reads one cookie by name from `document.cookie`. Empty values read as
/// absent, matching a deleted-but-not-yet-expired cookie.
pub fn cookie_value(name: &str) -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    let prefix = format!("{}=", name);
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .map(str::to_string)
        .filter(|value| !value.is_empty())
}

pub fn set_cookie(cookie: &str) {
    if let Some(document) = html_document() {
        let _ = document.set_cookie(cookie);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

/// Navigation is a browser concern; host builds (SSR tests) stay put.
#[cfg(not(target_arch = "wasm32"))]
pub fn redirect(_path: &str) {}
