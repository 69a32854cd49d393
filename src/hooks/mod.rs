pub mod use_analytics;
pub mod use_clock;
pub mod use_filters;
pub mod use_page;
pub mod use_plants;
