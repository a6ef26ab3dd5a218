//! HeadHunter (api.hh.ru) vacancy client
//!
//! Pages through the public vacancy search endpoint. HeadHunter keeps
//! serving pages until an empty `items` list comes back, so the loop
//! advances a zero-based page counter and stops on the first empty page.

use crate::constants::{HH_BASE_URL, HH_PERIOD_DAYS, HH_RUB_CURRENCY};
use crate::error::Error;
use crate::models::{HhPage, HhVacancy, LanguageStats};
use crate::services::salary;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Immutable per-call search parameters
#[derive(Debug, Clone)]
pub struct HhQuery {
    /// Language name inserted into the "программист {}" search text
    pub language: String,
    /// HeadHunter area code (1 = Moscow)
    pub area: u32,
    /// Page size, capped by the API at 100
    pub per_page: u32,
}

impl HhQuery {
    fn search_text(&self) -> String {
        format!("программист {}", self.language)
    }
}

pub struct HhClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HhClient {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: HH_BASE_URL.to_string(),
            client,
        })
    }

    /// Fetch one page of search results
    pub fn fetch_page(&self, query: &HhQuery, page: u32) -> Result<HhPage, Error> {
        debug!(
            "Fetching hh page {} for language '{}'",
            page, query.language
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("text", query.search_text().as_str()),
                ("area", &query.area.to_string()),
                ("period", &HH_PERIOD_DAYS.to_string()),
                ("only_with_salary", "true"),
                ("per_page", &query.per_page.to_string()),
                ("page", &page.to_string()),
            ])
            .send()
            .map_err(|e| Error::Network(format!("hh request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "hh returned error status {} for language '{}'",
                response.status(),
                query.language
            )));
        }

        response
            .json::<HhPage>()
            .map_err(|e| Error::Parse(format!("Failed to parse hh response: {}", e)))
    }

    /// Collect vacancies across all pages for one language.
    ///
    /// A failing page is logged and ends the loop; pages collected so
    /// far are kept.
    pub fn collect_vacancies(&self, query: &HhQuery) -> Vec<HhVacancy> {
        let vacancies =
            collect_paginated(&query.language, |page| self.fetch_page(query, page));

        info!(
            "Collected {} hh vacancies for language '{}'",
            vacancies.len(),
            query.language
        );
        vacancies
    }

    /// Fetch and aggregate salary statistics for one language
    pub fn language_stats(&self, query: &HhQuery) -> LanguageStats {
        let estimates: Vec<Option<f64>> = self
            .collect_vacancies(query)
            .iter()
            .map(estimate_salary)
            .collect();
        salary::aggregate(&estimates)
    }
}

/// Drive the page loop for one language.
///
/// Requests pages with an incrementing zero-based counter until one
/// comes back with an empty `items` list. A failing request ends the
/// loop; vacancies collected before the failure are kept.
fn collect_paginated<F>(language: &str, mut fetch: F) -> Vec<HhVacancy>
where
    F: FnMut(u32) -> Result<HhPage, Error>,
{
    let mut vacancies = Vec::new();

    for page in 0.. {
        match fetch(page) {
            Ok(hh_page) => {
                if hh_page.items.is_empty() {
                    break;
                }
                vacancies.extend(hh_page.items);
            }
            Err(e) => {
                warn!(
                    "hh fetch for language '{}' stopped at page {}: {}",
                    language, page, e
                );
                break;
            }
        }
    }

    vacancies
}

/// Estimate the ruble salary of one HeadHunter vacancy.
///
/// The salary block is optional; its `from`/`to` bounds are nullable.
pub fn estimate_salary(vacancy: &HhVacancy) -> Option<f64> {
    let salary = vacancy.salary.as_ref()?;
    salary::predict_rub_salary(
        salary.from,
        salary.to,
        salary.currency.as_deref(),
        HH_RUB_CURRENCY,
    )
}
