//! Staffing & attrition analytics core.
//!
//! Turns workload and personnel records into staffing requirements,
//! headcount gaps and a ranked attrition-cause breakdown. Every analyzer is
//! a pure read/derive step over an `EntityStore` snapshot.

pub mod attrition_pareto;
pub mod config;
pub mod dataset;
pub mod demo;
pub mod engine;
pub mod error;
pub mod gap_analyzer;
pub mod headcount_counter;
pub mod model;
pub mod name_generator;
pub mod reports;
pub mod rng;
pub mod staffing_calculator;
pub mod store;
pub mod table;
pub mod types;
pub mod workload_aggregator;
