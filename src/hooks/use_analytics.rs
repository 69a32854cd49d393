use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::filters::FilterRequest;
use crate::services::api::{Endpoint, fetch_analytics};
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

/// Fetch lifecycle of one chart's data
#[derive(Clone, PartialEq, Debug)]
pub enum DataState<T> {
    /// Nothing requested yet
    Idle,
    Loading,
    Loaded(Rc<T>),
    Error(String),
}

/// Data-free view of a `DataState`, for the status banner
#[derive(Clone, PartialEq, Debug)]
pub enum FetchStatus {
    Idle,
    Loading,
    Loaded,
    Error(String),
}

impl<T> DataState<T> {
    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn status(&self) -> FetchStatus {
        match self {
            DataState::Idle => FetchStatus::Idle,
            DataState::Loading => FetchStatus::Loading,
            DataState::Loaded(_) => FetchStatus::Loaded,
            DataState::Error(msg) => FetchStatus::Error(msg.clone()),
        }
    }
}

/// Posts the submitted filters to `endpoint` whenever they or the
/// generation counter change. Stays `Idle` until a request exists.
#[hook]
pub fn use_analytics<T>(
    endpoint: Endpoint,
    request: Option<Rc<FilterRequest>>,
    generation: u32,
) -> UseStateHandle<DataState<T>>
where
    T: DeserializeOwned + 'static,
{
    let state = use_state(|| DataState::Idle);

    {
        let state = state.clone();

        use_effect_with(
            (endpoint, request, generation),
            move |(endpoint, request, _)| {
                let aborted = Rc::new(Cell::new(false));

                match request.clone() {
                    None => state.set(DataState::Idle),
                    Some(request) => {
                        state.set(DataState::Loading);

                        let endpoint = *endpoint;
                        let aborted_check = aborted.clone();
                        spawn_local(async move {
                            let result = fetch_analytics::<T>(endpoint, &request).await;

                            // Filters changed or the chart unmounted meanwhile
                            if aborted_check.get() {
                                return;
                            }

                            match result {
                                Ok(data) => state.set(DataState::Loaded(Rc::new(data))),
                                Err(e) => {
                                    gloo::console::error!(format!(
                                        "Request to {endpoint} failed: {e}"
                                    ));
                                    state.set(DataState::Error(e.to_string()));
                                }
                            }
                        });
                    }
                }

                move || aborted.set(true)
            },
        );
    }

    state
}
