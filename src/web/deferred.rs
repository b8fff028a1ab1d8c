use gloo_timers::future::TimeoutFuture;

use crate::{page::WebPage, view::PendingClear};

pub(super) fn schedule_clear(pending: PendingClear) {
    wasm_bindgen_futures::spawn_local(clear_after_delay(pending));
}

async fn clear_after_delay(pending: PendingClear) {
    let millis = u32::try_from(pending.delay.as_millis()).unwrap_or(u32::MAX);
    TimeoutFuture::new(millis).await;

    if let Some(page) = WebPage::current() {
        pending.apply(&page);
    }
}
