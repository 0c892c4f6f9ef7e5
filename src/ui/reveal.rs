//! Scroll-triggered one-shot reveal.
//!
//! On the server every element renders in its pending state. In the browser
//! an `IntersectionObserver` feeds a [`RevealLatch`] and is disconnected as
//! soon as the latch fires, so the transition never replays.

use leptos::html;
use leptos::prelude::*;

use crate::core::RevealLatch;

/// Portion of the element that must be visible before it counts as in view.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Track whether `target` has entered the viewport at least once.
pub fn use_reveal_once(target: NodeRef<html::Div>) -> ReadSignal<RevealLatch> {
    let (latch, set_latch) = signal(RevealLatch::new());

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };

            let callback = Closure::<dyn Fn(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    let intersecting = entries.iter().any(|entry| {
                        entry
                            .unchecked_into::<web_sys::IntersectionObserverEntry>()
                            .is_intersecting()
                    });
                    let fired = set_latch
                        .try_update(|latch| latch.observe(intersecting))
                        .unwrap_or(false);
                    if fired {
                        observer.disconnect();
                    }
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

            match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => {
                    observer.observe(&element);
                    // Keep the closure alive for the observer
                    callback.forget();
                }
                Err(err) => {
                    leptos::logging::warn!("IntersectionObserver unavailable: {:?}", err);
                    set_latch.update(|latch| {
                        latch.reveal();
                    });
                }
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, set_latch);
    }

    latch
}
