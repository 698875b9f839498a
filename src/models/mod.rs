//! Core data models for the deduction engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod payroll_entry;
mod worker;

pub use attendance::AttendanceEntry;
pub use payroll_entry::{DeductionResult, MonthlyPayrollEntry};
pub use worker::{Worker, WorkerProfile};
