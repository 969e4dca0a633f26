//! etherealtrades — a single runnable `EtherealTrades` component.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;

pub use domain::ethereal_trades::EtherealTrades;
pub use domain::error::EtherealTradesError;
