mod animation;
mod api;
mod app;
mod components;
mod events;
mod models;
mod pages;
mod state;
mod util;

use crate::app::App;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    mount_to_body(App);
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::api::{ApiClient, EnvConfig, DEFAULT_API_URL};
    use crate::models::is_provisional_id;
    use crate::state::ack::{Ack, AckCenter};
    use crate::util::{now_iso, provisional_id, set_timeout};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_env(value: &JsValue) {
        let window = web_sys::window().expect("window");
        js_sys::Reflect::set(&window, &"ENV".into(), value).expect("set window.ENV");
    }

    #[wasm_bindgen_test]
    fn test_env_config_defaults_without_window_env() {
        set_env(&JsValue::UNDEFINED);
        assert_eq!(EnvConfig::new().api_url, DEFAULT_API_URL);
    }

    #[wasm_bindgen_test]
    fn test_env_config_reads_api_url_and_trims_slash() {
        let env = js_sys::Object::new();
        js_sys::Reflect::set(&env, &"API_URL".into(), &"http://localhost:9000/".into())
            .expect("set API_URL");
        set_env(&env);

        assert_eq!(EnvConfig::new().api_url, "http://localhost:9000");
        assert_eq!(ApiClient::from_env().notes_url(), "http://localhost:9000/notes");
        set_env(&JsValue::UNDEFINED);
    }

    #[wasm_bindgen_test]
    fn test_env_config_accepts_lowercase_key() {
        let env = js_sys::Object::new();
        js_sys::Reflect::set(&env, &"api_url".into(), &"http://notes.local".into())
            .expect("set api_url");
        set_env(&env);

        assert_eq!(EnvConfig::new().api_url, "http://notes.local");
        set_env(&JsValue::UNDEFINED);
    }

    #[wasm_bindgen_test]
    async fn test_stale_toast_timer_keeps_newer_ack_open() {
        let acks = AckCenter::new();
        acks.show(Ack::toast("Note added successfully!", 10));
        acks.show(Ack::failure("Failed to delete note"));

        gloo_timers::future::TimeoutFuture::new(50).await;

        assert_eq!(acks.current(), Some(Ack::failure("Failed to delete note")));
    }

    #[wasm_bindgen_test]
    async fn test_toast_closes_after_its_timer() {
        let acks = AckCenter::new();
        acks.show(Ack::toast("Note added successfully!", 10));
        assert!(acks.is_open());

        gloo_timers::future::TimeoutFuture::new(50).await;

        assert!(!acks.is_open());
    }

    #[wasm_bindgen_test]
    fn test_now_iso_is_utc_timestamp() {
        let ts = now_iso();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), "2024-01-01T00:00:00.000Z".len());
    }

    #[wasm_bindgen_test]
    fn test_provisional_id_in_browser() {
        assert!(is_provisional_id(&provisional_id()));
    }

    #[wasm_bindgen_test]
    fn test_set_timeout_returns_handle() {
        assert!(set_timeout(0, || {}).is_some());
    }
}
