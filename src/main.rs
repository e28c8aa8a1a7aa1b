use std::io;
use std::process;

use log::error;

use holiday_tracker::{HolidayRepository, NagerDate, Session, TrackerConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    pretty_env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match TrackerConfig::from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                error!("invalid configuration {}: {:?}", path, err);
                eprintln!("Failed to load configuration from {}: {}", path, err);
                process::exit(1);
            }
        },
        None => TrackerConfig::default(),
    };

    println!("Loading public holiday data...");
    let provider = NagerDate::from_config(&config);
    let mut repository = HolidayRepository::new();
    let report = repository.load_years(&provider, &config.years).await;
    for (year, err) in report.failures() {
        println!("[ERROR] {}: {}", year, err);
    }
    println!(
        "\n{} public holiday records loaded ({}).",
        repository.len(),
        config.year_span()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&repository, &config, stdin.lock(), stdout.lock());
    if let Err(err) = session.run() {
        error!("console session failed: {}", err);
        process::exit(1);
    }
}
