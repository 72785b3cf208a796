//! Group-by aggregation: one output row per category, measures reduced with
//! a per-field function (mean or sum).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::filter::Categorized;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateFunction {
    Mean,
    Sum,
}

impl AggregateFunction {
    fn apply(self, values: &[f64]) -> f64 {
        let total: f64 = values.iter().sum();
        match self {
            AggregateFunction::Sum => total,
            AggregateFunction::Mean => {
                if values.is_empty() {
                    0.0
                } else {
                    total / values.len() as f64
                }
            }
        }
    }
}

/// Record exposing named numeric fields.
pub trait Measured {
    fn measure(&self, field: &str) -> Option<f64>;
}

/// A field to reduce and how.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    pub field: String,
    pub function: AggregateFunction,
}

impl Measure {
    pub fn mean(field: &str) -> Self {
        Self {
            field: field.to_string(),
            function: AggregateFunction::Mean,
        }
    }

    pub fn sum(field: &str) -> Self {
        Self {
            field: field.to_string(),
            function: AggregateFunction::Sum,
        }
    }
}

/// One group of the aggregation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRow {
    pub category: String,
    /// Number of source rows in the group
    pub count: usize,
    pub values: BTreeMap<String, f64>,
}

impl AggregatedRow {
    pub fn value(&self, field: &str) -> f64 {
        self.values.get(field).copied().unwrap_or(0.0)
    }
}

impl Categorized for AggregatedRow {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Measured for AggregatedRow {
    fn measure(&self, field: &str) -> Option<f64> {
        self.values.get(field).copied()
    }
}

/// Groups rows by category and reduces every configured measure.
///
/// Output is sorted by category name. Categories with no input rows never appear.
pub struct GroupAggregator {
    measures: Vec<Measure>,
}

impl GroupAggregator {
    pub fn new(measures: Vec<Measure>) -> Self {
        Self { measures }
    }

    pub fn aggregate<R: Categorized + Measured>(&self, rows: &[R]) -> Vec<AggregatedRow> {
        if rows.is_empty() {
            return vec![];
        }

        let mut groups: BTreeMap<&str, Vec<&R>> = BTreeMap::new();
        for row in rows {
            groups.entry(row.category()).or_default().push(row);
        }

        groups
            .into_iter()
            .map(|(category, members)| {
                let values = self
                    .measures
                    .iter()
                    .map(|m| {
                        let samples: Vec<f64> =
                            members.iter().filter_map(|r| r.measure(&m.field)).collect();
                        (m.field.clone(), m.function.apply(&samples))
                    })
                    .collect();
                AggregatedRow {
                    category: category.to_string(),
                    count: members.len(),
                    values,
                }
            })
            .collect()
    }
}

/// Arithmetic mean of a slice, 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    AggregateFunction::Mean.apply(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Daily {
        team: &'static str,
        completion: f64,
        contributions: f64,
    }

    impl Categorized for Daily {
        fn category(&self) -> &str {
            self.team
        }
    }

    impl Measured for Daily {
        fn measure(&self, field: &str) -> Option<f64> {
            match field {
                "completion" => Some(self.completion),
                "contributions" => Some(self.contributions),
                _ => None,
            }
        }
    }

    fn daily(team: &'static str, completion: f64, contributions: f64) -> Daily {
        Daily {
            team,
            completion,
            contributions,
        }
    }

    fn aggregator() -> GroupAggregator {
        GroupAggregator::new(vec![Measure::mean("completion"), Measure::sum("contributions")])
    }

    #[test]
    fn test_mean_and_sum_per_group() {
        let rows = vec![
            daily("Team B", 0.8, 2.0),
            daily("Team A", 0.6, 1.0),
            daily("Team A", 0.8, 3.0),
        ];
        let result = aggregator().aggregate(&rows);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].category, "Team A");
        assert_eq!(result[0].count, 2);
        assert!((result[0].value("completion") - 0.7).abs() < 1e-9);
        assert_eq!(result[0].value("contributions"), 4.0);
        assert_eq!(result[1].category, "Team B");
        assert_eq!(result[1].value("contributions"), 2.0);
    }

    #[test]
    fn test_one_row_per_present_category() {
        let rows = vec![daily("Z", 1.0, 1.0), daily("Y", 1.0, 1.0), daily("Z", 1.0, 1.0)];
        let categories: Vec<_> = aggregator()
            .aggregate(&rows)
            .into_iter()
            .map(|r| r.category)
            .collect();
        assert_eq!(categories, vec!["Y", "Z"]);
    }

    #[test]
    fn test_empty_input() {
        let rows: Vec<Daily> = vec![];
        assert!(aggregator().aggregate(&rows).is_empty());
        assert_eq!(mean(&[]), 0.0);
    }
}
