//! Command handlers, grouped by aggregate.

pub mod document;
pub mod loan;
pub mod rates;
