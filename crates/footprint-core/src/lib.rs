//! footprint-core
//!
//! Pure domain types: input fields, readings, categories, emission formulas,
//! comparison verdicts, and the report aggregate. No UI dependency, no I/O —
//! this is the shared vocabulary of the Footprint system.

pub mod models;
