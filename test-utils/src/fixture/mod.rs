//! Test fixtures providing reusable test data without database insertion.

pub mod config;
