use crate::models::PROVISIONAL_ID_PREFIX;
use std::sync::atomic::{AtomicU64, Ordering};
use wasm_bindgen::JsCast;

/// Client-side creation timestamp, same shape as the server's `createdAt`.
pub(crate) fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

static PROVISIONAL_COUNTER: AtomicU64 = AtomicU64::new(1);

pub(crate) fn provisional_id_from(bytes: &[u8]) -> String {
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!("{PROVISIONAL_ID_PREFIX}{hex}")
}

/// Id for a note that exists locally but whose server id is unknown.
pub(crate) fn provisional_id() -> String {
    let mut buf = [0u8; 8];
    if getrandom::getrandom(&mut buf).is_err() {
        buf = PROVISIONAL_COUNTER
            .fetch_add(1, Ordering::SeqCst)
            .to_be_bytes();
    }
    provisional_id_from(&buf)
}

/// One-shot `window.setTimeout`; returns the handle for [`clear_timeout`].
pub(crate) fn set_timeout(ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let win = web_sys::window()?;
    let cb = wasm_bindgen::closure::Closure::once_into_js(f);
    win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)
        .ok()
}

pub(crate) fn clear_timeout(handle: i32) {
    if let Some(win) = web_sys::window() {
        win.clear_timeout_with_handle(handle);
    }
}
