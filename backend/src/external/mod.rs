//! External API integrations

pub mod llm;
pub mod weather;

pub use llm::LlmClient;
pub use weather::WeatherClient;
