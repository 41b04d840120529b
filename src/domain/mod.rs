//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `rates` - Static rate book and item catalogs
//! - `validation` - Reusable predicates over free-text answers
//! - `estimate` - Pure pricing calculators for every quoted service
//! - `conversation` - The guided dialog: stages, record, transcript, engine

pub mod conversation;
pub mod estimate;
pub mod foundation;
pub mod rates;
pub mod validation;
