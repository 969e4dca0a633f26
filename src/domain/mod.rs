//! Core domain types and logic.

pub mod ethereal_trades;
pub mod config_validation;
pub mod error;
