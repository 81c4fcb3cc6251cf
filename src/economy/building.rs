//! Building kinds and owned counts

use serde::{Deserialize, Serialize};

/// Purchasable building kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    DataNode,
    NeuralCore,
    MemoryBank,
    QuantumProcessor,
    TimeMatrix,
    SyncCore,
}

impl BuildingKind {
    /// Every kind, in display order
    pub const ALL: [BuildingKind; 6] = [
        BuildingKind::DataNode,
        BuildingKind::NeuralCore,
        BuildingKind::MemoryBank,
        BuildingKind::QuantumProcessor,
        BuildingKind::TimeMatrix,
        BuildingKind::SyncCore,
    ];

    /// Currency produced per accrual tick by one building
    pub fn rate(&self) -> f64 {
        match self {
            BuildingKind::DataNode => 0.5,
            BuildingKind::NeuralCore => 2.0,
            BuildingKind::MemoryBank => 5.0,
            BuildingKind::QuantumProcessor => 8.0,
            BuildingKind::TimeMatrix => 12.0,
            BuildingKind::SyncCore => 20.0,
        }
    }

    /// Flat purchase price
    pub fn cost(&self) -> f64 {
        match self {
            BuildingKind::DataNode => 10.0,
            BuildingKind::NeuralCore => 50.0,
            BuildingKind::MemoryBank => 250.0,
            BuildingKind::QuantumProcessor => 500.0,
            BuildingKind::TimeMatrix => 1000.0,
            BuildingKind::SyncCore => 2000.0,
        }
    }

    /// Stable key, used for DOM ids
    pub fn key(&self) -> &'static str {
        match self {
            BuildingKind::DataNode => "dataNode",
            BuildingKind::NeuralCore => "neuralCore",
            BuildingKind::MemoryBank => "memoryBank",
            BuildingKind::QuantumProcessor => "quantumProcessor",
            BuildingKind::TimeMatrix => "timeMatrix",
            BuildingKind::SyncCore => "syncCore",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Owned count per building kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    counts: [u32; 6],
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owned(&self, kind: BuildingKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Add one building, returning the new count
    pub fn add(&mut self, kind: BuildingKind) -> u32 {
        let count = &mut self.counts[kind.index()];
        *count = count.saturating_add(1);
        *count
    }

    /// Total production per accrual tick
    pub fn income(&self) -> f64 {
        BuildingKind::ALL
            .iter()
            .map(|k| self.owned(*k) as f64 * k.rate())
            .sum()
    }

    /// Iterate (kind, owned) in display order
    pub fn iter(&self) -> impl Iterator<Item = (BuildingKind, u32)> + '_ {
        BuildingKind::ALL.into_iter().map(|k| (k, self.owned(k)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for kind in BuildingKind::ALL {
            assert_eq!(BuildingKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(BuildingKind::from_key("goldMine"), None);
    }

    #[test]
    fn test_income_sums_rate_times_count() {
        let mut inv = Inventory::new();
        assert_eq!(inv.income(), 0.0);

        inv.add(BuildingKind::DataNode);
        inv.add(BuildingKind::DataNode);
        inv.add(BuildingKind::SyncCore);
        assert_eq!(inv.owned(BuildingKind::DataNode), 2);
        assert_eq!(inv.income(), 2.0 * 0.5 + 20.0);
    }

    #[test]
    fn test_costs_increase_with_rate() {
        for pair in BuildingKind::ALL.windows(2) {
            assert!(pair[0].cost() < pair[1].cost());
            assert!(pair[0].rate() < pair[1].rate());
        }
    }
}
