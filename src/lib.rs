//! Ravvedimento operoso engine for Italian late tax payments
//!
//! This crate computes the reduced penalty and legal interest owed when an
//! Italian tax is paid late under the voluntary remediation regime (art. 13
//! D.Lgs. 472/1997). It classifies the delay into a penalty bracket, accrues
//! legal interest year by year over the published rate table, and assembles
//! an auditable result.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod settings;
pub mod telemetry;
