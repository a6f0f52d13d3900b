//! Hackjudge Core Library
//!
//! Score aggregation, track ranking and judge panel assignment for
//! hackathon judging, plus the table snapshots and reports around them.

pub mod assign;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod ranking;
pub mod report;
pub mod roster;
pub mod scores;
pub mod source;
pub mod table;
