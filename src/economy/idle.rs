//! Balance and the accrual/purchase rules

use serde::{Deserialize, Serialize};

use super::building::{BuildingKind, Inventory};
use crate::consts::STARTING_BALANCE;

/// In-memory idle economy (resets on every load)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Economy {
    balance: f64,
    inventory: Inventory,
    /// Accrual ticks applied so far
    pub ticks: u64,
}

impl Default for Economy {
    fn default() -> Self {
        Self::new()
    }
}

impl Economy {
    pub fn new() -> Self {
        Self::with_balance(STARTING_BALANCE)
    }

    /// Start from an arbitrary balance (negative input is floored at zero)
    pub fn with_balance(balance: f64) -> Self {
        Self {
            balance: balance.max(0.0),
            inventory: Inventory::new(),
            ticks: 0,
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn owned(&self, kind: BuildingKind) -> u32 {
        self.inventory.owned(kind)
    }

    /// Amount one accrual tick adds
    pub fn income_per_tick(&self) -> f64 {
        self.inventory.income()
    }

    /// Apply one accrual tick
    pub fn accrue(&mut self) {
        self.balance += self.inventory.income();
        self.ticks += 1;
    }

    pub fn can_afford(&self, kind: BuildingKind) -> bool {
        self.balance >= kind.cost()
    }

    /// Buy one building if the balance covers it.
    /// Returns the new owned count, or None when unaffordable (balance untouched).
    pub fn purchase(&mut self, kind: BuildingKind) -> Option<u32> {
        if !self.can_afford(kind) {
            log::debug!(
                "Ignored purchase of {:?}: balance {:.1} < cost {}",
                kind,
                self.balance,
                kind.cost()
            );
            return None;
        }
        self.balance -= kind.cost();
        let owned = self.inventory.add(kind);
        log::info!("Purchased {:?} (now own {})", kind, owned);
        Some(owned)
    }

    /// Credit points earned in the mini-game
    pub fn credit(&mut self, points: u32) {
        self.balance += points as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kind_strategy() -> impl Strategy<Value = BuildingKind> {
        prop::sample::select(BuildingKind::ALL.to_vec())
    }

    #[test]
    fn test_starts_at_fixed_balance() {
        let economy = Economy::new();
        assert_eq!(economy.balance(), 10.0);
        assert_eq!(economy.income_per_tick(), 0.0);
    }

    #[test]
    fn test_purchase_deducts_and_counts() {
        let mut economy = Economy::new();
        assert_eq!(economy.purchase(BuildingKind::DataNode), Some(1));
        assert_eq!(economy.balance(), 0.0);
        assert_eq!(economy.owned(BuildingKind::DataNode), 1);
    }

    #[test]
    fn test_unaffordable_purchase_is_ignored() {
        let mut economy = Economy::new();
        assert_eq!(economy.purchase(BuildingKind::NeuralCore), None);
        assert_eq!(economy.balance(), 10.0);
        assert_eq!(economy.owned(BuildingKind::NeuralCore), 0);
    }

    #[test]
    fn test_accrual_and_credit() {
        let mut economy = Economy::with_balance(60.0);
        economy.purchase(BuildingKind::NeuralCore);
        economy.purchase(BuildingKind::DataNode);
        assert_eq!(economy.balance(), 0.0);

        economy.accrue();
        assert_eq!(economy.balance(), 2.5);
        economy.credit(10);
        assert_eq!(economy.balance(), 12.5);
        assert_eq!(economy.ticks, 1);
    }

    proptest! {
        #[test]
        fn prop_balance_never_negative(
            start in 0.0f64..5000.0,
            buys in prop::collection::vec(kind_strategy(), 0..50),
        ) {
            let mut economy = Economy::with_balance(start);
            for kind in buys {
                economy.purchase(kind);
                prop_assert!(economy.balance() >= 0.0);
            }
        }

        #[test]
        fn prop_accrual_is_linear_in_ticks(
            counts in prop::collection::vec(0u32..20, 6),
            n in 0u64..200,
        ) {
            let mut economy = Economy::with_balance(0.0);
            for (kind, count) in BuildingKind::ALL.into_iter().zip(counts) {
                for _ in 0..count {
                    economy.inventory.add(kind);
                }
            }
            let per_tick = economy.income_per_tick();
            for _ in 0..n {
                economy.accrue();
            }
            prop_assert_eq!(economy.balance(), n as f64 * per_tick);
        }
    }
}
