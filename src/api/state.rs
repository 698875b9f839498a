//! Application state for the deduction engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RateBook;

/// Shared application state.
///
/// Holds the rate book behind an `Arc`; the book is read-only, so
/// handlers share it without synchronization.
#[derive(Clone)]
pub struct AppState {
    /// The registered rate tables.
    rates: Arc<RateBook>,
}

impl AppState {
    /// Creates a new application state with the given rate book.
    pub fn new(rates: RateBook) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }

    /// Returns a reference to the rate book.
    pub fn rates(&self) -> &RateBook {
        &self.rates
    }
}
