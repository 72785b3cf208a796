use chrono::{Duration, NaiveDate};

use crate::shared::random::RandomSource;

/// Department and its baseline productivity score.
pub const DEPARTMENT_PRODUCTIVITY: [(&str, f64); 5] = [
    ("Engineering", 85.0),
    ("Marketing", 78.0),
    ("Sales", 92.0),
    ("Customer Support", 88.0),
    ("HR", 76.0),
];

pub const TREND_YEAR: i32 = 2023;

pub fn trend_bounds() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(TREND_YEAR, 1, 1).unwrap_or(NaiveDate::MIN),
        NaiveDate::from_ymd_opt(TREND_YEAR, 12, 31).unwrap_or(NaiveDate::MIN),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyScore {
    pub date: NaiveDate,
    pub score: f64,
}

/// Daily scores over the trend year: baseline plus noise in `[-5, 5)`.
pub fn daily_trend(rng: &mut dyn RandomSource, baseline: f64) -> Vec<DailyScore> {
    let (start, end) = trend_bounds();
    let days = (end - start).num_days();
    (0..=days)
        .map(|offset| DailyScore {
            date: start + Duration::days(offset),
            score: baseline + rng.uniform(-5.0, 5.0),
        })
        .collect()
}

/// One trend per department, in `DEPARTMENT_PRODUCTIVITY` order.
pub fn department_trends(rng: &mut dyn RandomSource) -> Vec<(&'static str, Vec<DailyScore>)> {
    DEPARTMENT_PRODUCTIVITY
        .iter()
        .map(|(department, baseline)| (*department, daily_trend(rng, *baseline)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendStats {
    pub average: f64,
    pub max: f64,
    pub min: f64,
}

pub fn trend_stats(scores: &[DailyScore]) -> Option<TrendStats> {
    if scores.is_empty() {
        return None;
    }
    let values: Vec<f64> = scores.iter().map(|s| s.score).collect();
    Some(TrendStats {
        average: contracts::shared::aggregate::mean(&values),
        max: values.iter().cloned().fold(f64::MIN, f64::max),
        min: values.iter().cloned().fold(f64::MAX, f64::min),
    })
}
