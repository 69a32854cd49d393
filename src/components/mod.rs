pub mod chart_frame;
pub mod charts;
pub mod data_table;
pub mod filter_bar;
pub mod header;
pub mod sidebar;
pub mod status;

pub use chart_frame::ChartFrame;
pub use data_table::DataTable;
pub use filter_bar::{FilterBar, Pickers};
pub use header::Header;
pub use sidebar::Sidebar;
pub use status::Status;
