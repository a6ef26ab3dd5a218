mod stats;
mod vacancy;

pub use stats::LanguageStats;
pub use vacancy::{HhPage, HhSalary, HhVacancy, SjPage, SjVacancy};
