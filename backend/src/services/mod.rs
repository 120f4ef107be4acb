//! Business logic services for the Krishi Advisory Platform

pub mod advisory;
pub mod classifier;
pub mod explainer;
pub mod market;
pub mod weather;

pub use advisory::AdvisoryService;
pub use classifier::ClassifierService;
pub use explainer::ExplainerService;
pub use market::MarketService;
pub use weather::WeatherService;
