//! Idle economy
//!
//! Balance accrual from owned buildings and building purchases. Pure and
//! platform independent: the caller decides when an accrual tick happens.

pub mod building;
pub mod idle;

pub use building::{BuildingKind, Inventory};
pub use idle::Economy;
