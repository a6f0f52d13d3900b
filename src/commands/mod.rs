//! CLI commands for hackjudge

pub mod assign;
pub mod contacts;
pub mod dispatch;
pub mod emit;
pub mod fetch;
pub mod projects;
pub mod results;
