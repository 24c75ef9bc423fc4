use std::future::Future;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, AddEventListenerOptions, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::nav::spy::AnchorBounds;

/// Window event subscription that lives exactly as long as this value.
pub struct WindowListener {
    events: &'static [&'static str],
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    /// Registers `handler` as a passive listener for each of `events`.
    pub fn attach(events: &'static [&'static str], handler: impl FnMut() + 'static) -> Option<Self> {
        let window = window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        for event in events {
            let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.as_ref().unchecked_ref(),
                &options,
            );
        }
        Some(Self { events, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = window() {
            for event in self.events {
                let _ = window
                    .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
            }
        }
    }
}

/// Stops the page behind the mobile drawer from scrolling. The body's
/// previous `overflow` is put back on drop.
pub struct ScrollLock {
    body: HtmlElement,
    previous: String,
}

impl ScrollLock {
    pub fn acquire() -> Option<Self> {
        let body = window()?.document()?.body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        let _ = style.set_property("overflow", "hidden");
        Some(Self { body, previous })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let _ = if self.previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &self.previous)
        };
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn element_by_id(id: &str) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Layout box of the element with `id`, or `None` if it isn't rendered.
pub fn anchor_bounds(id: &str) -> Option<AnchorBounds> {
    let element = element_by_id(id)?;
    Some(AnchorBounds {
        top: f64::from(element.offset_top()),
        height: f64::from(element.offset_height()),
    })
}

/// Smooth-scrolls so the element sits `offset` pixels below the top of the
/// viewport. Returns `false` if the element doesn't exist.
pub fn scroll_to_element(id: &str, offset: f64) -> bool {
    let (Some(window), Some(element)) = (window(), element_by_id(id)) else {
        return false;
    };
    let top = element.get_bounding_client_rect().top() + scroll_y() - offset;
    let options = ScrollToOptions::new();
    options.set_top(top.max(0.0));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Records `#fragment` in history without reloading the page.
pub fn push_fragment(fragment: &str) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", fragment)));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub interval_ms: u32,
}

impl RetryPolicy {
    /// Waiting for a freshly routed page to render its sections.
    pub const ANCHOR: RetryPolicy = RetryPolicy {
        max_attempts: 20,
        interval_ms: 50,
    };
}

/// Calls `probe` up to `policy.max_attempts` times, sleeping
/// `policy.interval_ms` between attempts, and returns its first `Some`.
pub async fn poll_bounded<T, P, S, F>(policy: RetryPolicy, mut probe: P, mut sleep: S) -> Option<T>
where
    P: FnMut() -> Option<T>,
    S: FnMut(u32) -> F,
    F: Future<Output = ()>,
{
    for attempt in 0..policy.max_attempts {
        if attempt > 0 {
            sleep(policy.interval_ms).await;
        }
        if let Some(found) = probe() {
            return Some(found);
        }
    }
    None
}

/// Scrolls to `fragment` once it appears, giving up after
/// [`RetryPolicy::ANCHOR`].
pub async fn scroll_to_anchor_when_ready(fragment: String, offset: f64) -> bool {
    let found = poll_bounded(
        RetryPolicy::ANCHOR,
        || scroll_to_element(&fragment, offset).then_some(()),
        |ms| gloo_timers::future::TimeoutFuture::new(ms),
    )
    .await;
    if found.is_none() {
        gloo_console::debug!(format!("anchor #{} never rendered", fragment));
    }
    found.is_some()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;

    use super::*;

    #[test]
    fn poll_returns_first_hit() {
        let calls = Cell::new(0);
        let slept = Cell::new(0);
        let found = block_on(poll_bounded(
            RetryPolicy { max_attempts: 5, interval_ms: 10 },
            || {
                calls.set(calls.get() + 1);
                (calls.get() == 3).then_some("ready")
            },
            |ms| {
                slept.set(slept.get() + ms);
                async {}
            },
        ));
        assert_eq!(found, Some("ready"));
        assert_eq!(calls.get(), 3);
        assert_eq!(slept.get(), 20);
    }

    #[test]
    fn poll_gives_up_after_max_attempts() {
        let calls = Cell::new(0);
        let found: Option<()> = block_on(poll_bounded(
            RetryPolicy { max_attempts: 4, interval_ms: 1 },
            || {
                calls.set(calls.get() + 1);
                None
            },
            |_| async {},
        ));
        assert_eq!(found, None);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn zero_attempts_never_probes() {
        let found = block_on(poll_bounded(
            RetryPolicy { max_attempts: 0, interval_ms: 1 },
            || -> Option<()> { panic!("probed") },
            |_| async {},
        ));
        assert_eq!(found, None);
    }
}
