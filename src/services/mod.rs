pub mod api;
pub mod echarts;
pub mod export;
pub mod fullscreen;
