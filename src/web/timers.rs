use crate::domain::ports::{Scheduler, Sleeper};
use async_trait::async_trait;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

fn millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

/// `setTimeout` on the page's window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let Some(window) = web_sys::window() else {
            tracing::warn!("no window to schedule on, running task now");
            task();
            return;
        };
        let callback = Closure::once(move || task());
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis(delay),
            )
            .is_err()
        {
            tracing::warn!("setTimeout rejected a task");
        }
        callback.forget();
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSleeper;

#[async_trait(?Send)]
impl Sleeper for BrowserSleeper {
    async fn sleep(&self, duration: Duration) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis(duration))
                .ok();
        });
        JsFuture::from(promise).await.ok();
    }
}
