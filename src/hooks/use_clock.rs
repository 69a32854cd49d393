use chrono::{DateTime, Local};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::Config;

/// Local time, refreshed every `Config::CLOCK_TICK_MS`
#[hook]
pub fn use_clock() -> DateTime<Local> {
    let now = use_state(Local::now);

    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(Config::CLOCK_TICK_MS, move || now.set(Local::now()));
            move || drop(interval)
        });
    }

    *now
}
