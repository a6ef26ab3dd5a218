use crate::error::Error;
use crate::models::LanguageStats;
use crate::services::{HhClient, HhQuery, SjClient, SjQuery};
use crate::table;
use crate::utils::get_sj_secret_key;
use tracing::info;

pub fn run(languages: Vec<String>, area: u32, town: u32, per_page: u32) {
    match build_report(&languages, area, town, per_page) {
        Ok(report) => {
            println!("📊 HeadHunter statistics");
            println!("{}", table::render(&report.hh));
            println!();
            println!("📊 SuperJob statistics");
            println!("{}", table::render(&report.sj));
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

pub struct SalaryReport {
    pub hh: Vec<(String, LanguageStats)>,
    pub sj: Vec<(String, LanguageStats)>,
}

/// Fetch and aggregate statistics for every language on both sources.
///
/// Languages are processed one at a time; each source's fetch loop
/// runs to completion before the next starts.
fn build_report(
    languages: &[String],
    area: u32,
    town: u32,
    per_page: u32,
) -> Result<SalaryReport, Error> {
    let sj_secret_key = get_sj_secret_key()?;

    let hh_client = HhClient::new()?;
    let sj_client = SjClient::new(sj_secret_key)?;

    let mut hh_rows = Vec::with_capacity(languages.len());
    let mut sj_rows = Vec::with_capacity(languages.len());

    for language in languages {
        info!("Processing language '{}'", language);

        let hh_stats = hh_client.language_stats(&HhQuery {
            language: language.clone(),
            area,
            per_page,
        });
        hh_rows.push((language.clone(), hh_stats));

        let sj_stats = sj_client.language_stats(&SjQuery {
            language: language.clone(),
            town,
            count: per_page,
        });
        sj_rows.push((language.clone(), sj_stats));
    }

    Ok(SalaryReport {
        hh: hh_rows,
        sj: sj_rows,
    })
}
