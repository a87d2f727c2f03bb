//! ClaimWatch: heuristic fraud scoring for insurance claims, with an
//! investigator-style explanation sourced from a generative text service.

pub mod config;
pub mod error;
pub mod fraud;
pub mod telemetry;
