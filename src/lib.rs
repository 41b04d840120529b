//! MoveFlow - Guided Moving Estimate Dialog
//!
//! This crate implements a scripted lead-qualification and price-quoting
//! dialog for a moving company: a stage machine collects the job details,
//! a deterministic estimate engine prices it, and sessions hand the
//! finished quote off to booking.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
