use super::error::AppError;
use crate::config::Config;
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Inclusive range of calendar days
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The `days` days ending on `today` (at least one day)
    pub fn last_days(today: NaiveDate, days: u32) -> Self {
        let back = u64::from(days.max(1) - 1);
        let start = today.checked_sub_days(Days::new(back)).unwrap_or(today);
        Self { start, end: today }
    }

    /// Number of days covered, counting both ends
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.start > self.end {
            return Err(AppError::ConfigError(format!(
                "Start date {} is after end date {}",
                self.start, self.end
            )));
        }

        if self.days() > Config::MAX_RANGE_DAYS {
            return Err(AppError::ConfigError(format!(
                "Date range of {} days exceeds the {}-day maximum",
                self.days(),
                Config::MAX_RANGE_DAYS
            )));
        }

        Ok(())
    }

    /// Human-readable form, e.g. "01 Oct 2025 - 07 Oct 2025"
    pub fn label(&self) -> String {
        if self.start == self.end {
            self.start.format("%d %b %Y").to_string()
        } else {
            format!(
                "{} - {}",
                self.start.format("%d %b %Y"),
                self.end.format("%d %b %Y")
            )
        }
    }

    /// Label plus the day count; an inverted range has no meaningful count
    pub fn label_with_days(&self) -> String {
        if self.start > self.end {
            self.label()
        } else {
            format!("{} ({} days)", self.label(), self.days())
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Filter form state for one page
#[derive(Clone, Debug, PartialEq)]
pub struct Filters {
    pub plant_id: Option<String>,
    pub range: DateRange,
    pub inverter_id: Option<String>,
    pub mppt_id: Option<String>,
    pub string_id: Option<String>,
    /// Only set on pages that ask the server for a cluster count
    pub cluster_count: Option<u8>,
}

/// A single edit coming from one of the pickers
#[derive(Clone, Debug, PartialEq)]
pub enum FilterUpdate {
    Plant(Option<String>),
    Start(NaiveDate),
    End(NaiveDate),
    Inverter(Option<String>),
    Mppt(Option<String>),
    String(Option<String>),
    ClusterCount(u8),
}

impl Filters {
    pub fn new(today: NaiveDate, plant_id: Option<String>) -> Self {
        Self {
            plant_id,
            range: DateRange::last_days(today, Config::DEFAULT_RANGE_DAYS),
            inverter_id: None,
            mppt_id: None,
            string_id: None,
            cluster_count: None,
        }
    }

    pub fn with_clusters(mut self, count: u8) -> Self {
        self.cluster_count = Some(clamp_clusters(count));
        self
    }

    /// Applies an edit, clearing any selection below the changed level
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Plant(plant_id) => {
                if plant_id != self.plant_id {
                    self.inverter_id = None;
                    self.mppt_id = None;
                    self.string_id = None;
                }
                self.plant_id = plant_id;
            }
            FilterUpdate::Start(start) => self.range.start = start,
            FilterUpdate::End(end) => self.range.end = end,
            FilterUpdate::Inverter(inverter_id) => {
                if inverter_id != self.inverter_id {
                    self.mppt_id = None;
                    self.string_id = None;
                }
                self.inverter_id = inverter_id;
            }
            FilterUpdate::Mppt(mppt_id) => {
                if mppt_id != self.mppt_id {
                    self.string_id = None;
                }
                self.mppt_id = mppt_id;
            }
            FilterUpdate::String(string_id) => self.string_id = string_id,
            FilterUpdate::ClusterCount(count) => self.cluster_count = Some(clamp_clusters(count)),
        }
    }

    /// Builds the request body, failing if the form is incomplete
    pub fn request(&self) -> Result<FilterRequest, AppError> {
        let plant_id = self
            .plant_id
            .clone()
            .ok_or_else(|| AppError::ConfigError("Select a plant first".to_string()))?;
        self.range.validate()?;

        Ok(FilterRequest {
            plant_id,
            start_date: self.range.start,
            end_date: self.range.end,
            inverter_id: self.inverter_id.clone(),
            mppt_id: self.mppt_id.clone(),
            string_id: self.string_id.clone(),
            n_clusters: self.cluster_count,
        })
    }
}

/// Reads a typed cluster count, clamping out-of-range numbers into bounds
pub fn parse_cluster_count(input: &str) -> Option<u8> {
    let count: i64 = input.trim().parse().ok()?;
    let clamped = count.clamp(
        i64::from(Config::MIN_CLUSTER_COUNT),
        i64::from(Config::MAX_CLUSTER_COUNT),
    );
    u8::try_from(clamped).ok()
}

fn clamp_clusters(count: u8) -> u8 {
    count.clamp(Config::MIN_CLUSTER_COUNT, Config::MAX_CLUSTER_COUNT)
}

/// JSON body posted to the analytics endpoints
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterRequest {
    pub plant_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverter_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mppt_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_clusters: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    #[test]
    fn test_last_days_is_inclusive() {
        let range = DateRange::last_days(day(7), 7);
        assert_eq!(range.start, day(1));
        assert_eq!(range.days(), 7);

        let single = DateRange::last_days(day(7), 0);
        assert_eq!(single.start, single.end);
    }

    #[test]
    fn test_label_formats() {
        assert_eq!(
            DateRange::new(day(1), day(7)).label(),
            "01 Oct 2025 - 07 Oct 2025"
        );
        assert_eq!(DateRange::new(day(3), day(3)).to_string(), "03 Oct 2025");
    }

    #[test]
    fn test_validate_rejects_reversed_and_long_ranges() {
        assert!(DateRange::new(day(5), day(4)).validate().is_err());

        let long = DateRange::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), day(1));
        assert!(matches!(long.validate(), Err(AppError::ConfigError(_))));
        assert!(DateRange::new(day(1), day(31)).validate().is_ok());
    }

    #[test]
    fn test_changing_inverter_clears_lower_levels() {
        let mut filters = Filters::new(day(7), Some("P01".into()));
        filters.apply(FilterUpdate::Inverter(Some("INV-01".into())));
        filters.apply(FilterUpdate::Mppt(Some("MPPT-1".into())));
        filters.apply(FilterUpdate::String(Some("S1".into())));

        filters.apply(FilterUpdate::Inverter(Some("INV-02".into())));
        assert_eq!(filters.mppt_id, None);
        assert_eq!(filters.string_id, None);
    }

    #[test]
    fn test_changing_mppt_clears_string() {
        let mut filters = Filters::new(day(7), Some("P01".into()));
        filters.apply(FilterUpdate::Inverter(Some("INV-01".into())));
        filters.apply(FilterUpdate::Mppt(Some("MPPT-1".into())));
        filters.apply(FilterUpdate::String(Some("S1".into())));

        filters.apply(FilterUpdate::Mppt(Some("MPPT-1".into())));
        assert_eq!(filters.string_id.as_deref(), Some("S1"));

        filters.apply(FilterUpdate::Mppt(Some("MPPT-2".into())));
        assert_eq!(filters.inverter_id.as_deref(), Some("INV-01"));
        assert_eq!(filters.mppt_id.as_deref(), Some("MPPT-2"));
        assert_eq!(filters.string_id, None);
    }

    #[test]
    fn test_label_with_days_hides_count_when_inverted() {
        assert_eq!(
            DateRange::new(day(1), day(3)).label_with_days(),
            "01 Oct 2025 - 03 Oct 2025 (3 days)"
        );
        assert_eq!(
            DateRange::new(day(5), day(3)).label_with_days(),
            "05 Oct 2025 - 03 Oct 2025"
        );
    }

    #[test]
    fn test_typed_cluster_count_is_clamped() {
        assert_eq!(parse_cluster_count("300"), Some(Config::MAX_CLUSTER_COUNT));
        assert_eq!(parse_cluster_count("-4"), Some(Config::MIN_CLUSTER_COUNT));
        assert_eq!(parse_cluster_count(" 5 "), Some(5));
        assert_eq!(parse_cluster_count(""), None);
        assert_eq!(parse_cluster_count("many"), None);
    }

    #[test]
    fn test_reselecting_same_plant_keeps_devices() {
        let mut filters = Filters::new(day(7), Some("P01".into()));
        filters.apply(FilterUpdate::Inverter(Some("INV-01".into())));
        filters.apply(FilterUpdate::Plant(Some("P01".into())));
        assert_eq!(filters.inverter_id.as_deref(), Some("INV-01"));

        filters.apply(FilterUpdate::Plant(Some("P02".into())));
        assert_eq!(filters.inverter_id, None);
    }

    #[test]
    fn test_cluster_count_is_clamped() {
        let mut filters = Filters::new(day(7), None).with_clusters(40);
        assert_eq!(filters.cluster_count, Some(Config::MAX_CLUSTER_COUNT));
        filters.apply(FilterUpdate::ClusterCount(0));
        assert_eq!(filters.cluster_count, Some(Config::MIN_CLUSTER_COUNT));
    }

    #[test]
    fn test_request_requires_plant() {
        let filters = Filters::new(day(7), None);
        assert!(matches!(filters.request(), Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_request_omits_unset_devices() {
        let filters = Filters::new(day(7), Some("P01".into()));
        let json = serde_json::to_value(filters.request().unwrap()).unwrap();

        assert_eq!(json["plant_id"], "P01");
        assert_eq!(json["start_date"], "2025-10-01");
        assert_eq!(json["end_date"], "2025-10-07");
        assert!(json.get("inverter_id").is_none());
        assert!(json.get("n_clusters").is_none());
    }
}
