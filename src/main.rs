use std::time::SystemTime;

use log::LevelFilter;
use rocket::{Build, Rocket};

use study_catalog::config::CATALOG_CONFIG;

#[rocket::launch]
fn launch() -> Rocket<Build> {
    if let Err(e) = setup_logger() {
        eprintln!("Failed to set up logging, continuing without it: {e}");
    }
    study_catalog::rocket()
}

/// sends our logs to stdout and the configured log file. Rocket's own chatter is capped at warnings
fn setup_logger() -> Result<(), fern::InitError> {
    let logging = &CATALOG_CONFIG.logging;
    let level = logging
        .level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("rocket", LevelFilter::Warn)
        .level_for("_", LevelFilter::Warn)
        .chain(std::io::stdout());
    if let Some(file) = &logging.file {
        dispatch = dispatch.chain(fern::log_file(file)?);
    }
    dispatch.apply()?;
    Ok(())
}
