mod client;
mod model;

pub use client::OuraClient;
pub use model::ActivityEntry;
pub use model::CardiovascularAgeEntry;
pub use model::Category;
pub use model::DailyEntry;
pub use model::ReadinessEntry;
pub use model::SleepContributors;
pub use model::SleepEntry;
pub use model::StressEntry;
