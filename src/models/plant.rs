use serde::{Deserialize, Serialize};

/// A solar installation and its device tree
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub plant_id: String,
    pub plant_name: String,
    #[serde(default)]
    pub capacity_kw: Option<f64>,
    #[serde(default)]
    pub inverters: Vec<Inverter>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Inverter {
    pub inverter_id: String,
    #[serde(default)]
    pub mppts: Vec<Mppt>,
}

/// Maximum power point tracker input of an inverter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mppt {
    pub mppt_id: String,
    #[serde(default)]
    pub strings: Vec<String>,
}

impl Plant {
    pub fn inverter(&self, inverter_id: &str) -> Option<&Inverter> {
        self.inverters
            .iter()
            .find(|inv| inv.inverter_id == inverter_id)
    }

    /// Label for pickers: name plus capacity when known
    pub fn label(&self) -> String {
        match self.capacity_kw {
            Some(kw) => format!("{} ({kw:.0} kW)", self.plant_name),
            None => self.plant_name.clone(),
        }
    }
}

impl Inverter {
    pub fn mppt(&self, mppt_id: &str) -> Option<&Mppt> {
        self.mppts.iter().find(|m| m.mppt_id == mppt_id)
    }
}

/// Finds a plant by id in a fetched list
pub fn find_plant<'a>(plants: &'a [Plant], plant_id: &str) -> Option<&'a Plant> {
    plants.iter().find(|p| p.plant_id == plant_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Plant {
        serde_json::from_str(
            r#"{
                "plant_id": "P01",
                "plant_name": "North Field",
                "capacity_kw": 850.0,
                "inverters": [
                    {"inverter_id": "INV-01", "mppts": [
                        {"mppt_id": "MPPT-1", "strings": ["S1", "S2"]},
                        {"mppt_id": "MPPT-2"}
                    ]},
                    {"inverter_id": "INV-02"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let plant = sample();
        assert!(plant.inverter("INV-02").unwrap().mppts.is_empty());
        assert!(
            plant
                .inverter("INV-01")
                .and_then(|inv| inv.mppt("MPPT-2"))
                .unwrap()
                .strings
                .is_empty()
        );
    }

    #[test]
    fn test_lookup_by_id() {
        let plant = sample();
        let mppt = plant.inverter("INV-01").and_then(|inv| inv.mppt("MPPT-1"));
        assert_eq!(mppt.unwrap().strings, vec!["S1", "S2"]);
        assert!(plant.inverter("INV-99").is_none());
    }

    #[test]
    fn test_label_includes_capacity() {
        let mut plant = sample();
        assert_eq!(plant.label(), "North Field (850 kW)");
        plant.capacity_kw = None;
        assert_eq!(plant.label(), "North Field");
    }
}
