pub mod analytics;
pub mod error;
pub mod filters;
pub mod plant;
pub mod sankey;
pub mod table;
pub mod telemetry;
