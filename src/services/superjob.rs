//! SuperJob (api.superjob.ru) vacancy client
//!
//! Unlike HeadHunter, SuperJob signals the end of the result set with a
//! `more` flag in the response body rather than an empty page. Requests
//! must carry the application key in the `X-Api-App-Id` header.

use crate::constants::{SJ_BASE_URL, SJ_CATALOGUE_PROGRAMMING, SJ_RUB_CURRENCY};
use crate::error::Error;
use crate::models::{LanguageStats, SjPage, SjVacancy};
use crate::services::salary;
use std::time::Duration;
use tracing::{debug, info, warn};

const API_APP_ID_HEADER: &str = "X-Api-App-Id";

/// Immutable per-call search parameters
#[derive(Debug, Clone)]
pub struct SjQuery {
    /// Language name used as the search keyword
    pub language: String,
    /// SuperJob town code (4 = Moscow)
    pub town: u32,
    /// Page size
    pub count: u32,
}

pub struct SjClient {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl SjClient {
    pub fn new(api_key: String) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: SJ_BASE_URL.to_string(),
            api_key,
            client,
        })
    }

    /// Fetch one page of search results
    pub fn fetch_page(&self, query: &SjQuery, page: u32) -> Result<SjPage, Error> {
        debug!(
            "Fetching superjob page {} for language '{}'",
            page, query.language
        );

        let response = self
            .client
            .get(&self.base_url)
            .header(API_APP_ID_HEADER, &self.api_key)
            .query(&[
                ("keyword", query.language.as_str()),
                ("town", &query.town.to_string()),
                ("catalogues", &SJ_CATALOGUE_PROGRAMMING.to_string()),
                ("period", "0"),
                ("count", &query.count.to_string()),
                ("no_agreement", "1"),
                ("page", &page.to_string()),
            ])
            .send()
            .map_err(|e| Error::Network(format!("superjob request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "superjob returned error status {} for language '{}'",
                response.status(),
                query.language
            )));
        }

        response
            .json::<SjPage>()
            .map_err(|e| Error::Parse(format!("Failed to parse superjob response: {}", e)))
    }

    /// Collect vacancies across all pages for one language.
    ///
    /// A failing page is logged and ends the loop; pages collected so
    /// far are kept.
    pub fn collect_vacancies(&self, query: &SjQuery) -> Vec<SjVacancy> {
        let vacancies =
            collect_paginated(&query.language, |page| self.fetch_page(query, page));

        info!(
            "Collected {} superjob vacancies for language '{}'",
            vacancies.len(),
            query.language
        );
        vacancies
    }

    /// Fetch and aggregate salary statistics for one language
    pub fn language_stats(&self, query: &SjQuery) -> LanguageStats {
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
/// Requests pages with an incrementing zero-based counter until a page
/// reports `more: false`. The final page's vacancies are still taken.
/// A failing request ends the loop; vacancies collected before the
/// failure are kept.
fn collect_paginated<F>(language: &str, mut fetch: F) -> Vec<SjVacancy>
where
    F: FnMut(u32) -> Result<SjPage, Error>,
{
    let mut vacancies = Vec::new();

    for page in 0.. {
        match fetch(page) {
            Ok(sj_page) => {
                let more = sj_page.more;
                vacancies.extend(sj_page.objects);
                if !more {
                    break;
                }
            }
            Err(e) => {
                warn!(
                    "superjob fetch for language '{}' stopped at page {}: {}",
                    language, page, e
                );
                break;
            }
        }
    }

    vacancies
}

/// Estimate the ruble salary of one SuperJob vacancy.
///
/// Zero payment bounds mean "not specified" and are treated as absent.
pub fn estimate_salary(vacancy: &SjVacancy) -> Option<f64> {
    salary::predict_rub_salary(
        vacancy.lower_bound(),
        vacancy.upper_bound(),
        vacancy.currency.as_deref(),
        SJ_RUB_CURRENCY,
    )
}
