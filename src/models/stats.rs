/// Aggregated salary statistics for one (language, source) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    /// Raw vacancy records collected for the language
    pub vacancies_found: usize,
    /// Records that yielded a usable ruble estimate
    pub vacancies_processed: usize,
    /// Truncated mean of the usable estimates, 0 when there are none
    pub average_salary: u64,
}
