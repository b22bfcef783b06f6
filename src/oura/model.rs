use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sleep,
    Readiness,
    Activity,
    CardiovascularAge,
    Stress,
}

impl Category {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Category::Sleep => "daily_sleep",
            Category::Readiness => "daily_readiness",
            Category::Activity => "daily_activity",
            Category::CardiovascularAge => "daily_cardiovascular_age",
            Category::Stress => "daily_stress",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Category::Sleep => "Failed to fetch sleep data",
            Category::Readiness => "Failed to fetch readiness data",
            Category::Activity => "Failed to fetch activity data",
            Category::CardiovascularAge => "Failed to fetch cardiovascular age",
            Category::Stress => "Failed to fetch stress data",
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct Envelope<T> {
    pub data: Vec<T>,
}

pub trait DailyEntry {
    fn day(&self) -> &str;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SleepContributors {
    pub total_sleep: Option<i64>,
    pub deep_sleep: Option<i64>,
    pub rem_sleep: Option<i64>,
    pub efficiency: Option<i64>,
    pub latency: Option<i64>,
    pub restfulness: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SleepEntry {
    pub day: String,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub contributors: Option<SleepContributors>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadinessEntry {
    pub day: String,
    #[serde(default)]
    pub score: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityEntry {
    pub day: String,
    #[serde(default)]
    pub score: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardiovascularAgeEntry {
    pub day: String,
    #[serde(default)]
    pub vascular_age: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StressEntry {
    pub day: String,
    #[serde(default)]
    pub stress_high: Option<i64>, // seconds in high stress
}

macro_rules! impl_daily_entry {
    ($($t:ty),*) => {
        $(impl DailyEntry for $t {
            fn day(&self) -> &str {
                &self.day
            }
        })*
    };
}

impl_daily_entry!(
    SleepEntry,
    ReadinessEntry,
    ActivityEntry,
    CardiovascularAgeEntry,
    StressEntry
);
