//! # Agenda Core
//!
//! Domain types and the availability predicate shared by the REST and
//! agent-tool adapters. Nothing in this crate performs I/O.

pub mod availability;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
