//! mktdash - terminal marketing KPI dashboard

pub mod cli;
pub mod services;
pub mod tui;
pub mod types;
