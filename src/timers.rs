//! Event-loop timer helpers for the fade task.

use wasm_bindgen::prelude::*;
use web_sys as web;

fn window() -> anyhow::Result<web::Window> {
    web::window().ok_or_else(|| anyhow::anyhow!("no window"))
}

/// Await a `setTimeout` on the browser event loop. Setup failures are logged
/// and degrade to an immediate wake; the caller's cancellation check still
/// runs either way.
pub async fn sleep(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let armed = window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
                .map_err(|e| anyhow::anyhow!("{:?}", e))
        });
        if let Err(e) = armed {
            log::error!("timer setup failed: {:?}", e);
            _ = resolve.call0(&JsValue::NULL);
        }
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
