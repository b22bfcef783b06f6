use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::oura::{
    ActivityEntry, CardiovascularAgeEntry, DailyEntry, ReadinessEntry, SleepEntry, StressEntry,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub day: String, // e.g. "2025-01-16"
    pub sleep_total: i64,
    pub sleep_deep: i64,
    pub sleep_rem: i64,
    pub sleep_efficiency: i64,
    pub sleep_latency: i64,
    pub sleep_restfulness: i64,
    pub sleep_score: i64,
    pub readiness_score: i64,
    pub activity_score: i64,
    pub cardiovascular_age: i64,
    pub stress_seconds: i64, // seconds in high stress
}

impl DailyRecord {
    pub const FIELDS: [&'static str; 12] = [
        "day",
        "sleep_total",
        "sleep_deep",
        "sleep_rem",
        "sleep_efficiency",
        "sleep_latency",
        "sleep_restfulness",
        "sleep_score",
        "readiness_score",
        "activity_score",
        "cardiovascular_age",
        "stress_seconds",
    ];

    fn from_sleep(sleep: &SleepEntry) -> Self {
        let contributors = sleep.contributors.clone().unwrap_or_default();
        DailyRecord {
            day: sleep.day.clone(),
            sleep_total: contributors.total_sleep.unwrap_or(0),
            sleep_deep: contributors.deep_sleep.unwrap_or(0),
            sleep_rem: contributors.rem_sleep.unwrap_or(0),
            sleep_efficiency: contributors.efficiency.unwrap_or(0),
            sleep_latency: contributors.latency.unwrap_or(0),
            sleep_restfulness: contributors.restfulness.unwrap_or(0),
            sleep_score: sleep.score.unwrap_or(0),
            ..Default::default()
        }
    }
}

// First entry per day wins.
fn index_by_day<T: DailyEntry>(entries: &[T]) -> HashMap<&str, &T> {
    let mut by_day = HashMap::with_capacity(entries.len());
    for entry in entries {
        by_day.entry(entry.day()).or_insert(entry);
    }
    by_day
}

// Only days reported by sleep make it out, in sleep order.
pub fn merge_days(
    sleep: &[SleepEntry],
    readiness: &[ReadinessEntry],
    activity: &[ActivityEntry],
    cardiovascular: &[CardiovascularAgeEntry],
    stress: &[StressEntry],
) -> Vec<DailyRecord> {
    let readiness = index_by_day(readiness);
    let activity = index_by_day(activity);
    let cardiovascular = index_by_day(cardiovascular);
    let stress = index_by_day(stress);

    sleep
        .iter()
        .map(|entry| {
            let day = entry.day.as_str();
            DailyRecord {
                readiness_score: readiness.get(day).and_then(|e| e.score).unwrap_or(0),
                activity_score: activity.get(day).and_then(|e| e.score).unwrap_or(0),
                cardiovascular_age: cardiovascular
                    .get(day)
                    .and_then(|e| e.vascular_age)
                    .unwrap_or(0),
                stress_seconds: stress.get(day).and_then(|e| e.stress_high).unwrap_or(0),
                ..DailyRecord::from_sleep(entry)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oura::SleepContributors;
    use pretty_assertions::assert_eq;

    fn sleep(day: &str, score: i64) -> SleepEntry {
        SleepEntry {
            day: day.to_string(),
            score: Some(score),
            contributors: None,
        }
    }

    fn readiness(day: &str, score: i64) -> ReadinessEntry {
        ReadinessEntry {
            day: day.to_string(),
            score: Some(score),
        }
    }

    #[test]
    fn test_sleep_only_day_fills_sleep_fields() {
        let entry = SleepEntry {
            day: "2025-01-16".to_string(),
            score: Some(70),
            contributors: Some(SleepContributors {
                total_sleep: Some(80),
                deep_sleep: Some(20),
                rem_sleep: Some(15),
                efficiency: Some(90),
                latency: Some(5),
                restfulness: Some(60),
            }),
        };

        let records = merge_days(&[entry], &[], &[], &[], &[]);

        assert_eq!(
            records,
            vec![DailyRecord {
                day: "2025-01-16".to_string(),
                sleep_total: 80,
                sleep_deep: 20,
                sleep_rem: 15,
                sleep_efficiency: 90,
                sleep_latency: 5,
                sleep_restfulness: 60,
                sleep_score: 70,
                readiness_score: 0,
                activity_score: 0,
                cardiovascular_age: 0,
                stress_seconds: 0,
            }]
        );
    }

    #[test]
    fn test_readiness_joins_on_day() {
        let records = merge_days(
            &[sleep("2025-01-16", 70)],
            &[readiness("2025-01-16", 87)],
            &[],
            &[],
            &[],
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].day, "2025-01-16");
        assert_eq!(records[0].readiness_score, 87);
    }

    #[test]
    fn test_disjoint_days_contribute_zero() {
        let sleep_days = vec![sleep("2025-01-16", 70), sleep("2025-01-17", 75)];
        let activity = vec![
            ActivityEntry {
                day: "2025-01-18".to_string(),
                score: Some(90),
            },
            ActivityEntry {
                day: "2025-01-19".to_string(),
                score: Some(91),
            },
        ];

        let records = merge_days(&sleep_days, &[], &activity, &[], &[]);

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.activity_score == 0));
    }

    #[test]
    fn test_days_follow_sleep_order_and_set() {
        let sleep_days = vec![sleep("2025-01-18", 1), sleep("2025-01-16", 2)];
        let stress = vec![
            StressEntry {
                day: "2025-01-16".to_string(),
                stress_high: Some(3600),
            },
            StressEntry {
                day: "2025-01-17".to_string(),
                stress_high: Some(1800),
            },
        ];
        let cardiovascular = vec![CardiovascularAgeEntry {
            day: "2025-01-18".to_string(),
            vascular_age: Some(31),
        }];

        let records = merge_days(&sleep_days, &[], &[], &cardiovascular, &stress);

        let days: Vec<&str> = records.iter().map(|r| r.day.as_str()).collect();
        assert_eq!(days, vec!["2025-01-18", "2025-01-16"]);
        assert_eq!(records[0].cardiovascular_age, 31);
        assert_eq!(records[0].stress_seconds, 0);
        assert_eq!(records[1].stress_seconds, 3600);
    }

    #[test]
    fn test_duplicate_day_keeps_first_entry() {
        let records = merge_days(
            &[sleep("2025-01-16", 70)],
            &[readiness("2025-01-16", 87), readiness("2025-01-16", 12)],
            &[],
            &[],
            &[],
        );
        assert_eq!(records[0].readiness_score, 87);
    }

    #[test]
    fn test_null_values_default_to_zero() {
        let entry = SleepEntry {
            day: "2025-01-16".to_string(),
            score: None,
            contributors: Some(SleepContributors {
                total_sleep: Some(80),
                ..Default::default()
            }),
        };
        let readiness = ReadinessEntry {
            day: "2025-01-16".to_string(),
            score: None,
        };

        let records = merge_days(&[entry], &[readiness], &[], &[], &[]);

        assert_eq!(records[0].sleep_total, 80);
        assert_eq!(records[0].sleep_deep, 0);
        assert_eq!(records[0].sleep_score, 0);
        assert_eq!(records[0].readiness_score, 0);
    }

    #[test]
    fn test_no_sleep_means_no_records() {
        let records = merge_days(&[], &[readiness("2025-01-16", 87)], &[], &[], &[]);
        assert!(records.is_empty());
    }
}
