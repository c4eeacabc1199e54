//! File output for computed plans.

pub mod export;
