//! TUI widgets

pub mod activity;
pub mod charts;
pub mod help;
pub mod insights;
pub mod overview;
pub mod tabs;
