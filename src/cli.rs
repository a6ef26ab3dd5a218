use clap::Parser;

use crate::commands;
use crate::constants::{DEFAULT_LANGUAGES, DEFAULT_PER_PAGE, HH_AREA_MOSCOW, SJ_TOWN_MOSCOW};

#[derive(Parser)]
#[command(name = "devsalary")]
#[command(about = "Programmer salary statistics from HeadHunter and SuperJob", long_about = None)]
pub struct Cli {
    /// Comma-separated list of programming languages to query
    #[arg(short, long, default_value = DEFAULT_LANGUAGES)]
    pub languages: String,

    /// HeadHunter area code (1 = Moscow)
    #[arg(long, default_value_t = HH_AREA_MOSCOW)]
    pub area: u32,

    /// SuperJob town code (4 = Moscow)
    #[arg(long, default_value_t = SJ_TOWN_MOSCOW)]
    pub town: u32,

    /// Vacancies requested per page from both APIs
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,
}

pub fn run() {
    let cli = Cli::parse();

    let languages = parse_languages(&cli.languages);
    if languages.is_empty() {
        eprintln!("❌ Error: no languages given");
        std::process::exit(1);
    }

    commands::report::run(languages, cli.area, cli.town, cli.per_page);
}

fn parse_languages(arg: &str) -> Vec<String> {
    arg.split(',')
        .map(|language| language.trim().to_string())
        .filter(|language| !language.is_empty())
        .collect()
}
