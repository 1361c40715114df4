//! Loanpilot - Multi-Party Loan Origination and Credit Decisioning
//!
//! This crate implements the loan application lifecycle: applicants submit
//! requests and upload supporting documents, loan officers verify documents,
//! and managers render the final credit decision.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
