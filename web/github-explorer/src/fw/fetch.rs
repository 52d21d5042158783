use std::{cell::Cell, future::Future, rc::Rc};

use web_sys::{AbortController, AbortSignal};
use yew::prelude::*;

use crate::service::github::FetchError;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Loaded(T),
    Failed,
}

/// A settled request never goes back to `Loading`.
impl<T> From<Result<T, FetchError>> for FetchState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(data) => FetchState::Loaded(data),
            Err(e) => {
                log::error!("fetch failed: {e}");
                FetchState::Failed
            }
        }
    }
}

/// Owns one in-flight request. Dropping the guard aborts the request and
/// marks it cancelled so a late result is never written into view state.
pub struct FetchGuard {
    controller: Option<AbortController>,
    cancelled: Rc<Cell<bool>>,
}

#[derive(Clone)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

impl FetchGuard {
    pub fn new() -> Self {
        let controller = AbortController::new()
            .map_err(|e| log::warn!("abort controller unavailable: {e:?}"))
            .ok();

        Self {
            controller,
            cancelled: Rc::new(Cell::new(false)),
        }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    pub fn token(&self) -> CancelToken {
        CancelToken(self.cancelled.clone())
    }
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        self.cancelled.set(true);
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

/// Runs `fetch` whenever `deps` changes and tracks its outcome.
///
/// The request started for the previous `deps` (or on unmount) is aborted.
#[hook]
pub fn use_cancellable_fetch<T, D, F, Fut>(deps: D, fetch: F) -> UseStateHandle<FetchState<T>>
where
    T: 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D, Option<AbortSignal>) -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let state = use_state(|| FetchState::Loading);

    {
        let state = state.clone();
        use_effect_with(deps, move |deps| {
            state.set(FetchState::Loading);

            let guard = FetchGuard::new();
            let token = guard.token();
            let future = fetch(deps.clone(), guard.signal());

            wasm_bindgen_futures::spawn_local(async move {
                let result = future.await;
                if token.is_cancelled() {
                    log::debug!("drop result of cancelled fetch");
                    return;
                }

                state.set(FetchState::from(result));
            });

            move || drop(guard)
        });
    }

    state
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_not_found_settles_as_failed() {
        let state = FetchState::<Vec<u64>>::from(Err(FetchError::Status(404)));
        assert_eq!(state, FetchState::Failed);
        assert!(!matches!(state, FetchState::Loading));

        let state = FetchState::<Vec<u64>>::from(Err(FetchError::Status(500)));
        assert_eq!(state, FetchState::Failed);
    }

    #[test]
    fn test_success_settles_as_loaded() {
        let state = FetchState::from(Ok::<_, FetchError>(vec![1u64, 2]));
        assert_eq!(state, FetchState::Loaded(vec![1, 2]));
        assert!(!matches!(state, FetchState::Loading));
    }
}
