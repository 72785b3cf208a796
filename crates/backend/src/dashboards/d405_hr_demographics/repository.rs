pub const DIVERSITY_INDEX: u32 = 78;

pub const FILTER_GROUPS: [&str; 3] = ["By Department", "By Role", "By Location"];

pub type Distribution = [(&'static str, f64)];

pub const GENDER: [(&str, f64); 3] = [("Male", 55.0), ("Female", 42.0), ("Non-binary", 3.0)];

pub const AGE: [(&str, f64); 5] = [
    ("18-25", 15.0),
    ("26-35", 30.0),
    ("36-45", 25.0),
    ("46-55", 20.0),
    ("56+", 10.0),
];

pub const ETHNICITY: [(&str, f64); 5] = [
    ("White", 60.0),
    ("Asian", 15.0),
    ("Black", 12.0),
    ("Hispanic", 10.0),
    ("Other", 3.0),
];

pub const TENURE: [(&str, f64); 5] = [
    ("0-1 years", 20.0),
    ("1-3 years", 30.0),
    ("3-5 years", 25.0),
    ("5-10 years", 15.0),
    ("10+ years", 10.0),
];

/// Year, diverse hires, non-diverse hires.
pub const DIVERSITY_HIRING: [(&str, f64, f64); 5] = [
    ("2020", 25.0, 75.0),
    ("2021", 30.0, 70.0),
    ("2022", 35.0, 65.0),
    ("2023", 40.0, 60.0),
    ("2024", 45.0, 55.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distributions_sum_to_100() {
        for dist in [&GENDER[..], &AGE[..], &ETHNICITY[..], &TENURE[..]] {
            let total: f64 = dist.iter().map(|(_, v)| v).sum();
            assert_eq!(total, 100.0);
        }
        assert!(DIVERSITY_HIRING.iter().all(|(_, d, n)| d + n == 100.0));
    }
}
