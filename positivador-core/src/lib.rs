// positivador-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// The relational store contract (catalog, introspection, queries).
pub mod ports;

// 2. Domain (Business core)
// Month catalogue, column drift rules, value normalization, targets, payload.
// Depends on nothing else (neither infra nor app).
pub mod domain;

// 3. Infrastructure (Adapters)
// DuckDB store, YAML configuration, SQL templates, filesystem helpers.
pub mod infrastructure;

// 4. Application (Use Cases)
// list tables, list advisors, build payload, CSV export.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// use positivador_core::PositivadorError;
pub use error::PositivadorError;
