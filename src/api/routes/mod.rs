//! API route handlers

pub mod health;
pub mod map;
pub mod options;
pub mod trend;
