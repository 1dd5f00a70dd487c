pub mod models;
pub mod progress;
pub mod status;

pub use models::{FixtureResponse, ProviderEnvelope};
pub use progress::FetchProgress;
