use super::error::AppError;
use crate::config::Config;
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Active power reading of one inverter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerSample {
    #[serde(deserialize_with = "deserialize_flexible_timestamp")]
    pub timestamp: NaiveDateTime,
    pub inverter_id: String,
    /// kW
    pub active_power: f64,
}

/// Temperature reading of an inverter or MPPT
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSample {
    #[serde(deserialize_with = "deserialize_flexible_timestamp")]
    pub timestamp: NaiveDateTime,
    pub device_id: String,
    /// °C
    pub temperature: f64,
}

/// Accepts RFC 3339 as well as naive `YYYY-MM-DD HH:MM[:SS[.fff]]` timestamps
fn deserialize_flexible_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = serde::Deserialize::deserialize(deserializer)?;
    parse_timestamp(&s).ok_or_else(|| {
        serde::de::Error::custom(format!("Failed to parse timestamp '{}'", s))
    })
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    // Offsets are dropped: the API reports plant local time
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    let s = s.trim_end_matches('Z');
    [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ]
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

#[derive(Debug, Clone, PartialEq)]
pub struct PowerStats {
    pub peak: f64,
    pub peak_at: NaiveDateTime,
    pub average: f64,
    pub energy_kwh: f64,
    pub samples: usize,
}

impl PowerStats {
    pub fn from_samples(samples: &[PowerSample]) -> Result<Self, AppError> {
        let peak_sample = samples
            .iter()
            .filter(|s| s.active_power.is_finite())
            .max_by(|a, b| {
                a.active_power
                    .partial_cmp(&b.active_power)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .ok_or_else(|| AppError::DataError("No power data available".to_string()))?;

        let finite: Vec<f64> = samples
            .iter()
            .map(|s| s.active_power)
            .filter(|v| v.is_finite())
            .collect();
        let average = finite.iter().sum::<f64>() / finite.len() as f64;

        Ok(Self {
            peak: peak_sample.active_power,
            peak_at: peak_sample.timestamp,
            average,
            energy_kwh: integrate_energy(samples),
            samples: samples.len(),
        })
    }
}

/// Trapezoidal integral of each inverter's power curve, summed (kWh)
fn integrate_energy(samples: &[PowerSample]) -> f64 {
    let mut by_inverter: BTreeMap<&str, Vec<(NaiveDateTime, f64)>> = BTreeMap::new();
    for s in samples.iter().filter(|s| s.active_power.is_finite()) {
        by_inverter
            .entry(s.inverter_id.as_str())
            .or_default()
            .push((s.timestamp, s.active_power));
    }

    by_inverter
        .into_values()
        .map(|mut series| {
            series.sort_by_key(|(ts, _)| *ts);
            series
                .windows(2)
                .filter_map(|pair| {
                    let seconds = (pair[1].0 - pair[0].0).num_seconds();
                    (seconds > 0 && seconds <= Config::MAX_SAMPLE_GAP_MINUTES * 60)
                        .then(|| (pair[0].1 + pair[1].1) / 2.0 * seconds as f64 / 3600.0)
                })
                .fold(0.0, |acc, kwh| acc + kwh)
        })
        // fold from +0.0: an empty f64 sum is -0.0
        .fold(0.0, |acc, kwh| acc + kwh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn sample(inverter: &str, ts: NaiveDateTime, kw: f64) -> PowerSample {
        PowerSample {
            timestamp: ts,
            inverter_id: inverter.to_string(),
            active_power: kw,
        }
    }

    #[test]
    fn test_timestamp_formats() {
        let expected = at(10, 15);
        assert_eq!(parse_timestamp("2025-10-01 10:15:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-10-01T10:15"), Some(expected));
        assert_eq!(parse_timestamp("2025-10-01T10:15:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-10-01T10:15:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_energy_uses_trapezoids_per_inverter() {
        let samples = vec![
            sample("INV-01", at(10, 0), 10.0),
            sample("INV-01", at(11, 0), 20.0),
            sample("INV-02", at(10, 0), 4.0),
            sample("INV-02", at(10, 30), 4.0),
        ];
        let stats = PowerStats::from_samples(&samples).unwrap();
        // 15 kWh from INV-01 plus 2 kWh from INV-02
        assert!((stats.energy_kwh - 17.0).abs() < 1e-9);
        assert_eq!(stats.peak, 20.0);
        assert_eq!(stats.peak_at, at(11, 0));
        assert_eq!(stats.samples, 4);
    }

    #[test]
    fn test_long_gaps_are_not_integrated() {
        let samples = vec![
            sample("INV-01", at(6, 0), 5.0),
            sample("INV-01", at(9, 0), 5.0),
        ];
        let stats = PowerStats::from_samples(&samples).unwrap();
        assert_eq!(stats.energy_kwh, 0.0);
        assert!(stats.energy_kwh.is_sign_positive());
    }

    #[test]
    fn test_fractional_seconds_are_accepted() {
        let parsed = parse_timestamp("2025-10-01T10:15:00.123456").unwrap();
        assert_eq!(parsed.format("%H:%M:%S%.6f").to_string(), "10:15:00.123456");
        assert_eq!(
            parse_timestamp("2025-10-01 10:15:30.5").map(|t| t.format("%S").to_string()),
            Some("30".to_string())
        );
    }

    #[test]
    fn test_energy_counts_sub_minute_spacing() {
        let start = at(10, 0);
        let samples = vec![
            sample("INV-01", start, 60.0),
            sample("INV-01", start + chrono::Duration::seconds(30), 60.0),
        ];
        let stats = PowerStats::from_samples(&samples).unwrap();
        // 60 kW for 30 s
        assert!((stats.energy_kwh - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_energy_keeps_partial_minutes() {
        let start = at(10, 0);
        let samples = vec![
            sample("INV-01", start, 40.0),
            sample("INV-01", start + chrono::Duration::seconds(90), 40.0),
        ];
        let stats = PowerStats::from_samples(&samples).unwrap();
        // 40 kW for 90 s
        assert!((stats.energy_kwh - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_sample_has_positive_zero_energy() {
        let stats = PowerStats::from_samples(&[sample("INV-01", at(12, 0), 5.0)]).unwrap();
        assert!(stats.energy_kwh.is_sign_positive());
        assert_eq!(format!("{:.1} kWh", stats.energy_kwh), "0.0 kWh");
        assert_eq!(stats.peak, 5.0);
        assert_eq!(stats.average, 5.0);
    }

    #[test]
    fn test_stats_require_samples() {
        assert!(matches!(
            PowerStats::from_samples(&[]),
            Err(AppError::DataError(_))
        ));
    }
}
