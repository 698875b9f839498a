//! Statutory Deduction Engine for Korean day-labor payroll
//!
//! This crate reproduces the reference spreadsheet used for daily-wage
//! construction payroll: income tax, resident tax, health insurance,
//! long-term care, national pension, and employment insurance withholding,
//! including exemption rules and the spreadsheet's truncation semantics.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
