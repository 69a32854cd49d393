use crate::config::Config;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hourly generation profile of a single day
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyProfile {
    pub date: NaiveDate,
    #[serde(default)]
    pub hourly_values: Vec<HourlyValue>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HourlyValue {
    pub hour: u8,
    pub value: f64,
}

/// One cell of the weekday x hour aggregate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeeklyCell {
    /// 0 = Monday
    pub weekday: u8,
    pub hour: u8,
    pub value: f64,
}

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterPoint {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub cluster: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterResult {
    #[serde(default)]
    pub points: Vec<ClusterPoint>,
    #[serde(default = "default_x_label")]
    pub x_label: String,
    #[serde(default = "default_y_label")]
    pub y_label: String,
}

fn default_x_label() -> String {
    "x".to_string()
}

fn default_y_label() -> String {
    "y".to_string()
}

/// Points of one cluster, ready for a scatter series
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterGroup {
    pub cluster: i32,
    pub points: Vec<ClusterPoint>,
}

impl ClusterGroup {
    pub fn name(&self) -> String {
        if self.cluster < 0 {
            "Outliers".to_string()
        } else {
            format!("Cluster {}", self.cluster)
        }
    }

    pub fn coordinates(&self) -> Vec<Vec<f64>> {
        self.points.iter().map(|p| vec![p.x, p.y]).collect()
    }
}

impl ClusterResult {
    /// Groups points by cluster id in ascending order
    pub fn groups(&self) -> Vec<ClusterGroup> {
        let mut grouped: BTreeMap<i32, Vec<ClusterPoint>> = BTreeMap::new();
        for point in &self.points {
            grouped.entry(point.cluster).or_default().push(point.clone());
        }

        grouped
            .into_iter()
            .map(|(cluster, points)| ClusterGroup { cluster, points })
            .collect()
    }
}

/// Curtailment of a device relative to its expected yield
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuppressionRecord {
    pub device_id: String,
    pub expected_energy: f64,
    pub actual_energy: f64,
    pub suppression_pct: f64,
}

/// Highest suppression first; NaN values sink to the end
pub fn sorted_by_suppression(records: &[SuppressionRecord]) -> Vec<SuppressionRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| match (a.suppression_pct.is_nan(), b.suppression_pct.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => b.suppression_pct.total_cmp(&a.suppression_pct),
    });
    sorted
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyRecord {
    pub inverter_id: String,
    pub dc_energy: f64,
    pub ac_energy: f64,
    /// Percent
    pub efficiency: f64,
}

impl EfficiencyRecord {
    pub fn is_low(&self) -> bool {
        self.efficiency < Config::LOW_EFFICIENCY_PERCENT
    }

    /// DC energy lost in conversion
    pub fn loss(&self) -> f64 {
        (self.dc_energy - self.ac_energy).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: &str, cluster: i32) -> ClusterPoint {
        ClusterPoint {
            id: id.to_string(),
            x: 1.0,
            y: 2.0,
            cluster,
        }
    }

    #[test]
    fn test_cluster_groups_sorted_with_outliers_first() {
        let result = ClusterResult {
            points: vec![point("a", 2), point("b", -1), point("c", 0), point("d", 2)],
            x_label: "Yield".into(),
            y_label: "Irradiance".into(),
        };
        let groups = result.groups();

        let ids: Vec<i32> = groups.iter().map(|g| g.cluster).collect();
        assert_eq!(ids, vec![-1, 0, 2]);
        assert_eq!(groups[0].name(), "Outliers");
        assert_eq!(groups[2].name(), "Cluster 2");
        assert_eq!(groups[2].points.len(), 2);
    }

    #[test]
    fn test_cluster_labels_default() {
        let result: ClusterResult = serde_json::from_str(r#"{"points": []}"#).unwrap();
        assert_eq!(result.x_label, "x");
        assert!(result.groups().is_empty());
    }

    #[test]
    fn test_suppression_sort_puts_nan_last() {
        let record = |id: &str, pct: f64| SuppressionRecord {
            device_id: id.into(),
            expected_energy: 100.0,
            actual_energy: 100.0 - pct,
            suppression_pct: pct,
        };
        let sorted = sorted_by_suppression(&[
            record("a", 3.0),
            record("b", f64::NAN),
            record("c", 12.5),
        ]);
        let ids: Vec<&str> = sorted.iter().map(|r| r.device_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_efficiency_threshold() {
        let record = EfficiencyRecord {
            inverter_id: "INV-01".into(),
            dc_energy: 100.0,
            ac_energy: 94.0,
            efficiency: 94.0,
        };
        assert!(record.is_low());
        assert_eq!(record.loss(), 6.0);
    }
}
