pub mod competitions;
pub mod settings;

pub use competitions::{get_competitions, CompetitionConfig};
