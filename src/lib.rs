//! StackSense - Explainable Tech Stack Recommendations
//!
//! This crate implements the client side of StackSense: a project form with
//! searchable selects, a submission flow against the `/recommend` service and
//! a results view that explains every top pick.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
