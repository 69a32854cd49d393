use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SankeyNode {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SankeyLink {
    pub source: String,
    pub target: String,
    /// kWh
    pub value: f64,
}

/// Energy flow graph as returned by the sankey endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SankeyData {
    #[serde(default)]
    pub nodes: Vec<SankeyNode>,
    #[serde(default)]
    pub links: Vec<SankeyLink>,
}

impl SankeyData {
    /// Removes what ECharts refuses to lay out: duplicate nodes, dangling
    /// or self-referencing links, and non-positive flows.
    pub fn sanitized(&self) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if seen.insert(node.name.as_str()) {
                nodes.push(node.clone());
            }
        }

        let links = self
            .links
            .iter()
            .filter(|l| {
                seen.contains(l.source.as_str())
                    && seen.contains(l.target.as_str())
                    && l.source != l.target
                    && l.value.is_finite()
                    && l.value > 0.0
            })
            .cloned()
            .collect();

        Self { nodes, links }
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Total energy leaving nodes that have no inbound link
    pub fn source_total(&self) -> f64 {
        let targets: HashSet<&str> = self.links.iter().map(|l| l.target.as_str()).collect();
        self.links
            .iter()
            .filter(|l| !targets.contains(l.source.as_str()))
            .map(|l| l.value)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(source: &str, target: &str, value: f64) -> SankeyLink {
        SankeyLink {
            source: source.into(),
            target: target.into(),
            value,
        }
    }

    fn node(name: &str) -> SankeyNode {
        SankeyNode { name: name.into() }
    }

    #[test]
    fn test_sanitize_drops_invalid_links() {
        let data = SankeyData {
            nodes: vec![node("PV"), node("Grid"), node("PV"), node("Load")],
            links: vec![
                link("PV", "Load", 40.0),
                link("PV", "Grid", 10.0),
                link("PV", "Battery", 5.0),
                link("Load", "Load", 1.0),
                link("Grid", "Load", 0.0),
                link("Grid", "Load", f64::NAN),
            ],
        };
        let clean = data.sanitized();

        assert_eq!(clean.nodes.len(), 3);
        assert_eq!(clean.links.len(), 2);
        assert!(clean.links.iter().all(|l| l.source == "PV"));
    }

    #[test]
    fn test_source_total_counts_roots_only() {
        let data = SankeyData {
            nodes: vec![node("PV"), node("Inverter"), node("Load")],
            links: vec![link("PV", "Inverter", 50.0), link("Inverter", "Load", 48.0)],
        };
        assert_eq!(data.source_total(), 50.0);
    }

    #[test]
    fn test_missing_fields_default_empty() {
        let data: SankeyData = serde_json::from_str("{}").unwrap();
        assert!(data.sanitized().is_empty());
    }
}
