//! Thin wrappers over the browser APIs the app touches: timers, the console,
//! `localStorage` and the root `<html>` element.
use js_sys::Promise;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Storage, Window};

/// # Errors
/// Returns an error outside of a browser context.
pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no browser window"))
}

/// Readable text for a rejected promise or thrown value.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    value
        .dyn_ref::<js_sys::Error>()
        .map_or_else(|| format!("{value:?}"), |err| err.message().into())
}

pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Resolve after `delay` via `setTimeout`. Delays beyond `i32::MAX` ms are clamped.
///
/// # Errors
/// Returns an error if the timer cannot be registered or the promise rejects.
#[allow(clippy::future_not_send)] // JsFuture is not Send
pub async fn sleep(delay: Duration) -> Result<(), JsValue> {
    let timeout_ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
    let win = window()?;
    let mut registered: Result<i32, JsValue> = Ok(0);
    let promise = Promise::new(&mut |resolve, _reject| {
        let on_timeout = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::UNDEFINED);
        });
        registered = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            on_timeout.unchecked_ref(),
            timeout_ms,
        );
    });
    registered?;
    JsFuture::from(promise).await?;
    Ok(())
}

fn storage() -> Result<Storage, JsValue> {
    window()?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage disabled"))
}

/// Stored preference for `key`; `None` when unset or storage is unavailable.
#[must_use]
pub fn read_pref(key: &str) -> Option<String> {
    storage().ok()?.get_item(key).ok().flatten()
}

/// # Errors
/// Returns an error when storage is unavailable or the write is refused.
pub fn write_pref(key: &str, value: &str) -> Result<(), JsValue> {
    storage()?.set_item(key, value)
}

/// Mirror the UI language on `<html lang>`.
pub fn set_document_lang(lang: &str) {
    let root = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("lang", lang);
    }
}
