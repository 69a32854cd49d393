use gloo_storage::Storage;
use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::use_analytics::DataState;
use crate::models::plant::Plant;
use crate::services::api::fetch_plants;
use wasm_bindgen_futures::spawn_local;

const PLANT_KEY: &str = "plant";

/// Fetches the plant list once per mount
#[hook]
pub fn use_plants() -> UseStateHandle<DataState<Vec<Plant>>> {
    let state = use_state(|| DataState::Loading);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_plants().await {
                    Ok(plants) => state.set(DataState::Loaded(Rc::new(plants))),
                    Err(e) => {
                        gloo::console::error!(format!("Failed to load plants: {e}"));
                        state.set(DataState::Error(e.to_string()));
                    }
                }
            });

            || ()
        });
    }

    state
}

/// Load the last selected plant from localStorage
pub fn load_plant_preference() -> Option<String> {
    gloo_storage::LocalStorage::get(PLANT_KEY).ok()
}

/// Save the selected plant to localStorage
pub fn save_plant_preference(plant_id: &str) {
    if let Err(e) = gloo_storage::LocalStorage::set(PLANT_KEY, plant_id) {
        gloo::console::warn!(format!("Failed to save plant: {e:?}"));
    }
}
