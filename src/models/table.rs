//! Reshaping of API records into the rectangular shapes charts and
//! spreadsheets expect.

use super::analytics::{DailyProfile, WeeklyCell};
use super::error::AppError;
use super::telemetry::{PowerSample, TemperatureSample};
use std::collections::{BTreeMap, BTreeSet};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Wide table: one row per index key, one column per series
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WideTable {
    pub index_name: String,
    pub index: Vec<String>,
    pub columns: Vec<String>,
    /// Row-major, `cells[row][column]`
    pub cells: Vec<Vec<f64>>,
}

impl WideTable {
    /// Pivots `(row, column, value)` triples. Keys come out sorted, absent
    /// cells are zero and a repeated key keeps the last value.
    pub fn pivot<I, R, C>(index_name: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (R, C, f64)>,
        R: Into<String>,
        C: Into<String>,
    {
        let mut rows: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        let mut columns: BTreeSet<String> = BTreeSet::new();

        for (row, column, value) in entries {
            let column = column.into();
            columns.insert(column.clone());
            rows.entry(row.into()).or_default().insert(column, value);
        }

        let index: Vec<String> = rows.keys().cloned().collect();
        Self::fill(index_name, index, columns.into_iter().collect(), &rows)
    }

    /// Like [`WideTable::pivot`] but with a fixed row order; entries whose
    /// row key is not part of `index` are dropped.
    pub fn pivot_with_index<I, R, C>(index_name: &str, index: Vec<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (R, C, f64)>,
        R: Into<String>,
        C: Into<String>,
    {
        let allowed: BTreeSet<&str> = index.iter().map(String::as_str).collect();
        let mut rows: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
        let mut columns: BTreeSet<String> = BTreeSet::new();

        for (row, column, value) in entries {
            let row = row.into();
            if !allowed.contains(row.as_str()) {
                continue;
            }
            let column = column.into();
            columns.insert(column.clone());
            rows.entry(row).or_default().insert(column, value);
        }

        Self::fill(index_name, index, columns.into_iter().collect(), &rows)
    }

    fn fill(
        index_name: &str,
        index: Vec<String>,
        columns: Vec<String>,
        rows: &BTreeMap<String, BTreeMap<String, f64>>,
    ) -> Self {
        let cells = index
            .iter()
            .map(|row| {
                let values = rows.get(row);
                columns
                    .iter()
                    .map(|col| values.and_then(|v| v.get(col)).copied().unwrap_or(0.0))
                    .collect()
            })
            .collect();

        Self {
            index_name: index_name.to_string(),
            index,
            columns,
            cells,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Values of one column across every row
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let position = self.columns.iter().position(|c| c == name)?;
        Some(self.cells.iter().map(|row| row[position]).collect())
    }

    /// `(column name, values)` for each column, in column order
    pub fn series(&self) -> Vec<(String, Vec<f64>)> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), self.cells.iter().map(|row| row[i]).collect()))
            .collect()
    }

    pub fn to_export(&self) -> ExportTable {
        let headers = std::iter::once(self.index_name.clone())
            .chain(self.columns.iter().cloned())
            .collect();
        let rows = self
            .index
            .iter()
            .zip(&self.cells)
            .map(|(key, values)| {
                std::iter::once(key.clone())
                    .chain(values.iter().map(ToString::to_string))
                    .collect()
            })
            .collect();

        ExportTable { headers, rows }
    }
}

/// Labels `"00:00"` through `"23:00"`
pub fn hour_labels() -> Vec<String> {
    (0..24).map(|h| format!("{h:02}:00")).collect()
}

/// Hour-of-day rows with one column per date
pub fn hourly_pivot(profiles: &[DailyProfile]) -> WideTable {
    let entries = profiles.iter().flat_map(|profile| {
        let date = profile.date.format("%Y-%m-%d").to_string();
        profile
            .hourly_values
            .iter()
            .filter(|hv| hv.hour < 24)
            .map(move |hv| (format!("{:02}:00", hv.hour), date.clone(), hv.value))
    });

    WideTable::pivot_with_index("Hour", hour_labels(), entries)
}

/// Timestamp rows with one column per inverter
pub fn power_pivot(samples: &[PowerSample]) -> WideTable {
    WideTable::pivot(
        "Timestamp",
        samples.iter().map(|s| {
            (
                s.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                s.inverter_id.as_str(),
                s.active_power,
            )
        }),
    )
}

/// Timestamp rows with one column per device
pub fn temperature_pivot(samples: &[TemperatureSample]) -> WideTable {
    WideTable::pivot(
        "Timestamp",
        samples.iter().map(|s| {
            (
                s.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                s.device_id.as_str(),
                s.temperature,
            )
        }),
    )
}

/// Dense weekday x hour matrix for the heatmap
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapGrid {
    pub values: [[f64; 24]; 7],
    pub min: f64,
    pub max: f64,
}

impl HeatmapGrid {
    pub fn from_cells(cells: &[WeeklyCell]) -> Self {
        let mut values = [[0.0; 24]; 7];
        for cell in cells {
            if cell.weekday < 7 && cell.hour < 24 && cell.value.is_finite() {
                values[usize::from(cell.weekday)][usize::from(cell.hour)] = cell.value;
            }
        }

        let (min, max) = values
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        Self { values, min, max }
    }

    /// `[hour, weekday, value]` triples as ECharts heatmap data
    pub fn points(&self) -> Vec<Vec<f64>> {
        self.values
            .iter()
            .enumerate()
            .flat_map(|(day, hours)| {
                hours
                    .iter()
                    .enumerate()
                    .map(move |(hour, &value)| vec![hour as f64, day as f64, value])
            })
            .collect()
    }

    pub fn to_export(&self) -> ExportTable {
        let headers = std::iter::once("Weekday".to_string())
            .chain(hour_labels())
            .collect();
        let rows = self
            .values
            .iter()
            .zip(super::analytics::WEEKDAY_LABELS)
            .map(|(hours, label)| {
                std::iter::once(label.to_string())
                    .chain(hours.iter().map(ToString::to_string))
                    .collect()
            })
            .collect();

        ExportTable { headers, rows }
    }
}

/// Plain string grid handed to the spreadsheet export
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_csv(&self) -> Result<String, AppError> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::CRLF)
            .from_writer(Vec::new());

        writer
            .write_record(&self.headers)
            .map_err(|e| AppError::ExportError(format!("Failed to write CSV header: {e}")))?;
        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|e| AppError::ExportError(format!("Failed to write CSV row: {e}")))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::ExportError(format!("Failed to flush CSV: {e}")))?;
        String::from_utf8(bytes).map_err(|e| AppError::ExportError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::models::analytics::HourlyValue;
    use super::*;

    #[test]
    fn test_pivot_defaults_missing_cells_to_zero() {
        let table = WideTable::pivot(
            "Timestamp",
            vec![("10:00", "INV-01", 3.0), ("10:15", "INV-02", 4.0)],
        );
        assert_eq!(table.index, vec!["10:00", "10:15"]);
        assert_eq!(table.columns, vec!["INV-01", "INV-02"]);
        assert_eq!(table.cells, vec![vec![3.0, 0.0], vec![0.0, 4.0]]);
    }

    #[test]
    fn test_pivot_last_value_wins() {
        let table = WideTable::pivot("k", vec![("a", "x", 1.0), ("a", "x", 2.0)]);
        assert_eq!(table.column("x"), Some(vec![2.0]));
        assert_eq!(table.column("missing"), None);
    }

    #[test]
    fn test_fixed_index_drops_unknown_rows() {
        let index = vec!["r1".to_string(), "r2".to_string()];
        let table = WideTable::pivot_with_index("k", index, vec![("r9", "x", 5.0), ("r2", "x", 1.0)]);
        assert_eq!(table.index.len(), 2);
        assert_eq!(table.column("x"), Some(vec![0.0, 1.0]));
    }

    #[test]
    fn test_csv_quotes_fields() {
        let mut table = ExportTable::new(&["Device", "Note"]);
        table.push_row(vec!["INV-01".into(), "fan, noisy".into()]);
        let csv = table.to_csv().unwrap();
        assert_eq!(csv, "Device,Note\r\nINV-01,\"fan, noisy\"\r\n");
    }

    #[test]
    fn test_hourly_pivot_ignores_out_of_range_hours() {
        let profiles = vec![DailyProfile {
            date: chrono::NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            hourly_values: vec![
                HourlyValue { hour: 23, value: 1.5 },
                HourlyValue { hour: 24, value: 9.0 },
                HourlyValue { hour: 99, value: 9.0 },
            ],
        }];

        let table = hourly_pivot(&profiles);

        assert_eq!(table.index.len(), 24);
        assert_eq!(table.index.last().map(String::as_str), Some("23:00"));
        let values = table.column("2025-10-01").unwrap();
        assert_eq!(values[23], 1.5);
        assert_eq!(values.iter().sum::<f64>(), 1.5);
    }

    #[test]
    fn test_heatmap_empty_grid_is_flat_zero() {
        let grid = HeatmapGrid::from_cells(&[]);
        assert_eq!(grid.min, 0.0);
        assert_eq!(grid.max, 0.0);
        assert_eq!(grid.points().len(), 7 * 24);
    }
}
