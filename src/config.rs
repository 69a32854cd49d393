/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Analytics API used when no build-time override is given
    pub const DEFAULT_BASE_URL: &'static str = "https://solarfluxapi.nexalyze.com/";

    /// Build-time override (`SOLARFLUX_BASE_URL=... trunk build`)
    pub const BASE_URL_OVERRIDE: Option<&'static str> = option_env!("SOLARFLUX_BASE_URL");

    /// Length of the date range pre-filled on every page
    pub const DEFAULT_RANGE_DAYS: u32 = 7;

    /// Longest range the pickers accept
    pub const MAX_RANGE_DAYS: i64 = 92;

    pub const DEFAULT_CLUSTER_COUNT: u8 = 4;
    pub const MIN_CLUSTER_COUNT: u8 = 2;
    pub const MAX_CLUSTER_COUNT: u8 = 12;

    /// Delay before re-rendering charts after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Header clock refresh interval in milliseconds
    pub const CLOCK_TICK_MS: u32 = 1_000;

    /// Inverters below this conversion efficiency (%) are highlighted
    pub const LOW_EFFICIENCY_PERCENT: f64 = 95.0;

    /// Device pixel ratio used for PNG exports
    pub const EXPORT_PIXEL_RATIO: u32 = 2;

    /// Consecutive samples further apart than this are not integrated into energy
    pub const MAX_SAMPLE_GAP_MINUTES: i64 = 60;

    /// Returns the API base URL, honouring the build-time override
    pub fn base_url() -> &'static str {
        match Self::BASE_URL_OVERRIDE {
            Some(url) if !url.trim().is_empty() => url,
            _ => Self::DEFAULT_BASE_URL,
        }
    }
}
