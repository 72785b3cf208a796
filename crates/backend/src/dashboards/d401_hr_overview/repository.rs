#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyMetrics {
    pub month: &'static str,
    pub voluntary: f64,
    pub involuntary: f64,
    pub actual: f64,
    pub required: f64,
    pub absenteeism: f64,
}

const fn month(
    month: &'static str,
    voluntary: f64,
    involuntary: f64,
    actual: f64,
    absenteeism: f64,
) -> MonthlyMetrics {
    MonthlyMetrics {
        month,
        voluntary,
        involuntary,
        actual,
        required: 100.0,
        absenteeism,
    }
}

/// Twelve months, oldest first.
pub const FULL_YEAR: [MonthlyMetrics; 12] = [
    month("Jul", 2.1, 0.5, 95.0, 3.2),
    month("Aug", 1.9, 0.6, 96.0, 3.3),
    month("Sep", 2.0, 0.4, 97.0, 3.1),
    month("Oct", 2.2, 0.5, 98.0, 3.0),
    month("Nov", 1.8, 0.7, 99.0, 3.2),
    month("Dec", 1.7, 0.6, 100.0, 3.4),
    month("Jan", 2.1, 0.5, 95.0, 3.2),
    month("Feb", 1.8, 0.7, 97.0, 3.5),
    month("Mar", 2.3, 0.4, 98.0, 3.1),
    month("Apr", 2.0, 0.6, 99.0, 2.9),
    month("May", 1.9, 0.5, 101.0, 3.3),
    month("Jun", 2.2, 0.3, 100.0, 3.0),
];

/// Period label and the number of trailing months it covers.
pub const TIME_PERIODS: [(&str, usize); 4] = [
    ("Last Month", 1),
    ("Last 3 Months", 3),
    ("Last 6 Months", 6),
    ("Last Year", 12),
];

pub const DEFAULT_PERIOD: usize = 2;

/// The trailing `months` rows of the year.
pub fn last_months(months: usize) -> &'static [MonthlyMetrics] {
    let start = FULL_YEAR.len().saturating_sub(months);
    &FULL_YEAR[start..]
}

/// Payroll share: (category, percent, description).
pub const PAYROLL: [(&str, f64, &str); 4] = [
    ("Base Salary", 70.0, "Regular wages paid to employees"),
    ("Overtime", 10.0, "Additional pay for hours worked beyond regular schedule"),
    ("Benefits", 15.0, "Health insurance, retirement plans, and other perks"),
    ("Bonuses", 5.0, "Performance-based additional compensation"),
];

pub const TURNOVER_NOTES: [&str; 3] = [
    "Voluntary turnover represents employees who choose to leave the company.",
    "Involuntary turnover represents employees who are asked to leave the company.",
    "Higher rates may indicate issues with employee satisfaction or performance management.",
];

pub const STAFFING_NOTES: [&str; 3] = [
    "Actual staffing represents the current number of employees.",
    "Required staffing represents the target number of employees needed.",
    "Discrepancies between these two lines may indicate over- or under-staffing situations.",
];

pub const PAYROLL_NOTES: [&str; 4] = [
    "Base Salary forms the largest portion, which is typical for most organizations.",
    "Benefits are the second largest category, highlighting the company's investment in employee well-being.",
    "Overtime costs may indicate high workload or potential understaffing in some areas.",
    "Bonuses represent performance-based pay, which can be a tool for motivation and retention.",
];

pub const ABSENTEEISM_NOTE: &str = "The absenteeism rate is calculated as: (Number of absent days) / (Number of available workdays) x 100. A lower rate indicates better attendance. High absenteeism rates may signal issues with employee engagement, health and safety concerns, or work-life balance problems that need to be addressed.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_months_takes_the_tail() {
        assert_eq!(last_months(1)[0].month, "Jun");
        let quarter: Vec<&str> = last_months(3).iter().map(|m| m.month).collect();
        assert_eq!(quarter, vec!["Apr", "May", "Jun"]);
        assert_eq!(last_months(12).len(), 12);
        assert_eq!(last_months(40).len(), 12);
    }
}
