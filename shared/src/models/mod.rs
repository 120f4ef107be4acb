//! Domain models for the Krishi Advisory Platform

mod advisory;
mod context;
mod market;
mod weather;

pub use advisory::*;
pub use context::*;
pub use market::*;
pub use weather::*;
