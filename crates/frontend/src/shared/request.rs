//! Requests bound to the component that issued them.
//!
//! [`spawn_cancellable`] gives a request an `AbortSignal` and a timeout. When the
//! owning component is torn down the request is aborted and its result dropped,
//! so a late response can never write into a page that is gone.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::shared::fetch_state::failure_text;
use gloo_net::http::Response;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::task::spawn_local;
use web_sys::{AbortController, AbortSignal};

/// Requests still pending after this long are aborted and reported as failed
pub const FETCH_TIMEOUT_MS: u32 = 15_000;

/// Error text for a non-2xx response: the server's `{ message }` when it sent one,
/// otherwise `"{fallback}: {status}"`.
pub async fn failure_message(response: &Response, fallback: &str) -> String {
    let body = response.text().await.unwrap_or_default();
    failure_text(response.status(), &body, fallback)
}

fn timeout_message() -> String {
    format!(
        "Request timed out after {} seconds",
        FETCH_TIMEOUT_MS / 1000
    )
}

/// Outcome handed to the caller: a request aborted by the timer reports the
/// timeout, whatever the aborted fetch itself returned.
fn settle<T, E: From<String>>(result: Result<T, E>, timed_out: bool) -> Result<T, E> {
    if timed_out {
        Err(E::from(timeout_message()))
    } else {
        result
    }
}

/// [`spawn_cancellable`] for requests fired from event handlers. The request is
/// bound to `owner`, the component that built the handler, so unmounting that
/// component aborts it.
pub fn spawn_cancellable_in<T, E, F, Fut, D>(owner: Option<Owner>, make: F, on_done: D)
where
    T: 'static,
    E: From<String> + 'static,
    F: FnOnce(Option<AbortSignal>) -> Fut,
    Fut: Future<Output = Result<T, E>> + 'static,
    D: FnOnce(Result<T, E>) + 'static,
{
    match owner {
        Some(owner) => owner.with(|| spawn_cancellable(make, on_done)),
        None => spawn_cancellable(make, on_done),
    }
}

/// Run the request built by `make` on the current component and hand its result to
/// `on_done`, unless the component was cleaned up first.
///
/// `make` receives the abort signal to attach to the request (absent only when the
/// browser cannot create an `AbortController`). A request outliving
/// [`FETCH_TIMEOUT_MS`] is aborted and reported as a timeout.
pub fn spawn_cancellable<T, E, F, Fut, D>(make: F, on_done: D)
where
    T: 'static,
    E: From<String> + 'static,
    F: FnOnce(Option<AbortSignal>) -> Fut,
    Fut: Future<Output = Result<T, E>> + 'static,
    D: FnOnce(Result<T, E>) + 'static,
{
    let controller = match AbortController::new() {
        Ok(controller) => Some(controller),
        Err(e) => {
            log::warn!("AbortController unavailable, request cannot be cancelled: {:?}", e);
            None
        }
    };
    let signal = controller.as_ref().map(AbortController::signal);

    let alive = Arc::new(AtomicBool::new(true));
    let timed_out = Rc::new(Cell::new(false));

    let timer = {
        let controller = controller.clone();
        let timed_out = Rc::clone(&timed_out);
        Timeout::new(FETCH_TIMEOUT_MS, move || {
            timed_out.set(true);
            if let Some(controller) = controller {
                controller.abort();
            }
        })
    };
    let pending = StoredValue::new_local(Some((controller, timer)));

    on_cleanup({
        let alive = Arc::clone(&alive);
        move || {
            alive.store(false, Ordering::SeqCst);
            pending.try_update_value(|slot| {
                if let Some((controller, timer)) = slot.take() {
                    drop(timer);
                    if let Some(controller) = controller {
                        controller.abort();
                    }
                }
            });
        }
    });

    let request = make(signal);
    spawn_local(async move {
        let result = request.await;
        if !alive.load(Ordering::SeqCst) {
            log::debug!("Dropping response for a component that is gone");
            return;
        }
        pending.try_update_value(|slot| {
            // dropping the timer cancels it
            slot.take();
        });

        on_done(settle(result, timed_out.get()));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_replaces_the_aborted_result() {
        let aborted: Result<u32, String> = Err("The user aborted a request.".into());
        assert_eq!(
            settle(aborted, true),
            Err("Request timed out after 15 seconds".to_string())
        );
        assert_eq!(settle(Ok::<u32, String>(3), true), Err(timeout_message()));
    }

    #[test]
    fn settled_in_time_passes_through() {
        assert_eq!(settle(Ok::<u32, String>(3), false), Ok(3));
        assert_eq!(
            settle(Err::<u32, String>("HTTP 500".into()), false),
            Err("HTTP 500".to_string())
        );
    }
}
