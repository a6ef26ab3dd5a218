//! API endpoints and fixed query codes
//!
//! The area/town/catalogue codes come from the HeadHunter and SuperJob
//! public dictionaries and are stable identifiers, not magic numbers.

/// HeadHunter vacancy search endpoint
pub const HH_BASE_URL: &str = "https://api.hh.ru/vacancies";

/// SuperJob vacancy search endpoint
pub const SJ_BASE_URL: &str = "https://api.superjob.ru/2.0/vacancies/";

/// HeadHunter area code for Moscow
pub const HH_AREA_MOSCOW: u32 = 1;

/// HeadHunter publication window in days
pub const HH_PERIOD_DAYS: u32 = 30;

/// SuperJob town code for Moscow
pub const SJ_TOWN_MOSCOW: u32 = 4;

/// SuperJob catalogue code for "Programming, Development"
pub const SJ_CATALOGUE_PROGRAMMING: u32 = 48;

/// Vacancies per page for both sources
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Currency marker HeadHunter uses for ruble salaries
pub const HH_RUB_CURRENCY: &str = "RUR";

/// Currency marker SuperJob uses for ruble salaries
pub const SJ_RUB_CURRENCY: &str = "rub";

/// Languages queried when none are given on the command line
pub const DEFAULT_LANGUAGES: &str = "c#,python,c++,java,javascript,php,c,go,rust,ruby";

/// Environment variable holding the SuperJob application key
pub const SJ_SECRET_KEY_ENV: &str = "SJ_SECRET_KEY";
