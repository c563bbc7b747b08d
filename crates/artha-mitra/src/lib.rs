//! Core library for the Artha Mitra financial advisory service.
//!
//! Everything under [`advisor`] is stateless: each request is evaluated
//! independently from explicit inputs against a read-only scheme catalog, so
//! the engine can be shared freely across worker tasks.

pub mod advisor;
pub mod config;
pub mod error;
pub mod telemetry;
