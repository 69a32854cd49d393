use gloo_storage::Storage;
use yew::prelude::*;

use crate::pages::Page;

const PAGE_KEY: &str = "page";

/// Handle returned by `use_page` hook
#[derive(Clone, PartialEq)]
pub struct PageHandle {
    pub page: Page,
    pub set_page: Callback<Page>,
}

/// Active page with localStorage persistence
#[hook]
pub fn use_page() -> PageHandle {
    let page = use_state(|| load_page_preference().unwrap_or_default());

    {
        let page_value = *page;
        use_effect_with(page_value, move |page| {
            save_page_preference(*page);
            || ()
        });
    }

    let set_page = {
        let page = page.clone();
        Callback::from(move |new_page| page.set(new_page))
    };

    PageHandle {
        page: *page,
        set_page,
    }
}

fn load_page_preference() -> Option<Page> {
    gloo_storage::LocalStorage::get(PAGE_KEY).ok()
}

fn save_page_preference(page: Page) {
    if let Err(e) = gloo_storage::LocalStorage::set(PAGE_KEY, page) {
        gloo::console::warn!(format!("Failed to save page: {e:?}"));
    }
}
