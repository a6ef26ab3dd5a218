//! Salary normalization and aggregation
//!
//! Both job boards report salaries as an optional range plus a currency
//! code. The functions here collapse such a range into a single ruble
//! estimate and reduce a batch of estimates into per-language statistics.
//! Everything in this module is pure.

use crate::models::LanguageStats;

/// Scale a salary bound that was entered in thousands of rubles.
///
/// Postings occasionally carry values like `80` meaning 80 000 ₽.
/// Anything below 100 is treated as thousands and multiplied by 1000;
/// larger values pass through unchanged.
pub fn correct_magnitude(bound: Option<f64>) -> Option<f64> {
    bound.map(|amount| if amount < 100.0 { amount * 1000.0 } else { amount })
}

/// Collapse a (possibly half-open) salary range into one number.
///
/// Full range → arithmetic mean; lower bound only → +20%; upper bound
/// only → -20%; no bounds → no estimate.
fn combine_bounds(salary_from: Option<f64>, salary_to: Option<f64>) -> Option<f64> {
    match (salary_from, salary_to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * 1.2),
        (None, Some(to)) => Some(to * 0.8),
        (None, None) => None,
    }
}

/// Estimate a monthly ruble salary from raw vacancy salary fields.
///
/// `rub_marker` is the currency code the source uses for rubles
/// ("RUR" on HeadHunter, "rub" on SuperJob). Non-ruble vacancies get
/// no estimate; ruble bounds are magnitude-corrected before combining.
pub fn predict_rub_salary(
    salary_from: Option<f64>,
    salary_to: Option<f64>,
    currency: Option<&str>,
    rub_marker: &str,
) -> Option<f64> {
    if currency != Some(rub_marker) {
        return None;
    }

    combine_bounds(correct_magnitude(salary_from), correct_magnitude(salary_to))
}

/// Reduce per-vacancy estimates into `LanguageStats`.
///
/// Vacancies without an estimate still count toward `vacancies_found`
/// but are excluded from the average entirely.
pub fn aggregate(estimates: &[Option<f64>]) -> LanguageStats {
    let salaries: Vec<f64> = estimates.iter().filter_map(|e| *e).collect();
    let processed = salaries.len();

    let average = if processed > 0 {
        (salaries.iter().sum::<f64>() / processed as f64) as u64
    } else {
        0
    };

    LanguageStats {
        vacancies_found: estimates.len(),
        vacancies_processed: processed,
        average_salary: average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_magnitude_scales_thousands() {
        assert_eq!(correct_magnitude(Some(50.0)), Some(50000.0));
        assert_eq!(correct_magnitude(Some(99.0)), Some(99000.0));
    }

    #[test]
    fn test_correct_magnitude_keeps_full_amounts() {
        assert_eq!(correct_magnitude(Some(100.0)), Some(100.0));
        assert_eq!(correct_magnitude(Some(150000.0)), Some(150000.0));
    }

    #[test]
    fn test_correct_magnitude_passes_absent_through() {
        assert_eq!(correct_magnitude(None), None);
    }

    #[test]
    fn test_estimate_full_range_is_mean() {
        // 50/150 are corrected to 50000/150000 first
        let estimate = predict_rub_salary(Some(50.0), Some(150.0), Some("RUR"), "RUR");
        assert_eq!(estimate, Some(100000.0));
    }

    #[test]
    fn test_estimate_lower_bound_only() {
        let estimate = predict_rub_salary(Some(50.0), None, Some("RUR"), "RUR");
        assert_eq!(estimate, Some(60000.0));
    }

    #[test]
    fn test_estimate_upper_bound_only() {
        let estimate = predict_rub_salary(None, Some(200.0), Some("RUR"), "RUR");
        assert_eq!(estimate, Some(160000.0));
    }

    #[test]
    fn test_estimate_no_bounds() {
        assert_eq!(predict_rub_salary(None, None, Some("RUR"), "RUR"), None);
    }

    #[test]
    fn test_estimate_rejects_foreign_currency() {
        let estimate = predict_rub_salary(Some(100.0), Some(200.0), Some("USD"), "RUR");
        assert_eq!(estimate, None);
        assert_eq!(predict_rub_salary(Some(100.0), Some(200.0), None, "RUR"), None);
    }

    #[test]
    fn test_estimate_superjob_marker() {
        let estimate = predict_rub_salary(Some(80000.0), Some(120000.0), Some("rub"), "rub");
        assert_eq!(estimate, Some(100000.0));
        assert_eq!(
            predict_rub_salary(Some(80000.0), Some(120000.0), Some("RUR"), "rub"),
            None
        );
    }

    #[test]
    fn test_aggregate_empty_list() {
        let stats = aggregate(&[]);
        assert_eq!(stats.vacancies_found, 0);
        assert_eq!(stats.vacancies_processed, 0);
        assert_eq!(stats.average_salary, 0);
    }

    #[test]
    fn test_aggregate_all_absent() {
        let stats = aggregate(&[None, None, None]);
        assert_eq!(stats.vacancies_found, 3);
        assert_eq!(stats.vacancies_processed, 0);
        assert_eq!(stats.average_salary, 0);
    }

    #[test]
    fn test_aggregate_skips_absent_estimates() {
        let stats = aggregate(&[Some(100000.0), None, Some(200000.0), None]);
        assert_eq!(stats.vacancies_found, 4);
        assert_eq!(stats.vacancies_processed, 2);
        assert_eq!(stats.average_salary, 150000);
    }

    #[test]
    fn test_aggregate_truncates_average() {
        let stats = aggregate(&[Some(100000.0), Some(100001.0)]);
        assert_eq!(stats.average_salary, 100000);
    }
}
