//! Web dashboard for precomputed IPL 2025 standings predictions and the
//! feature importances of the classifier behind them.

pub mod charts;
pub mod config;
pub mod data;
pub mod server;
