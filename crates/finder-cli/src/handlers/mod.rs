//! Command handlers.

pub mod form;
pub mod options;
pub mod search;
