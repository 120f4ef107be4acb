//! HTTP handlers for the Krishi Advisory Platform

pub mod advisory;
pub mod health;
pub mod market;
pub mod weather;

pub use advisory::*;
pub use health::*;
pub use market::*;
pub use weather::*;
