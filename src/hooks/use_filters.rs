use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::use_plants::save_plant_preference;
use crate::models::filters::{FilterRequest, FilterUpdate, Filters};

/// Handle returned by `use_filters`
#[derive(Clone, PartialEq)]
pub struct FilterHandle {
    /// What the pickers currently show
    pub draft: Filters,
    /// What the charts were last generated with
    pub submitted: Option<Rc<FilterRequest>>,
    /// Bumped on every successful Generate click
    pub generation: u32,
    /// Validation message from the last Generate click
    pub error: Option<String>,
    pub update: Callback<FilterUpdate>,
    pub submit: Callback<()>,
}

/// Draft/submitted filter state of a page
#[hook]
pub fn use_filters(initial: Filters) -> FilterHandle {
    let draft = use_state(move || initial);
    let submitted = use_state(|| None::<Rc<FilterRequest>>);
    let generation = use_state(|| 0u32);
    let error = use_state(|| None::<String>);

    let update = {
        let draft = draft.clone();
        Callback::from(move |update: FilterUpdate| {
            if let FilterUpdate::Plant(Some(plant_id)) = &update {
                save_plant_preference(plant_id);
            }
            let mut next = (*draft).clone();
            next.apply(update);
            draft.set(next);
        })
    };

    let submit = {
        let draft = draft.clone();
        let submitted = submitted.clone();
        let generation = generation.clone();
        let error = error.clone();
        Callback::from(move |()| match draft.request() {
            Ok(request) => {
                submitted.set(Some(Rc::new(request)));
                generation.set(*generation + 1);
                error.set(None);
            }
            Err(e) => {
                gloo::console::warn!(format!("Filters rejected: {e}"));
                error.set(Some(e.to_string()));
            }
        })
    };

    FilterHandle {
        draft: (*draft).clone(),
        submitted: (*submitted).clone(),
        generation: *generation,
        error: (*error).clone(),
        update,
        submit,
    }
}
