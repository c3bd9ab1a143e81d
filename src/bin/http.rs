#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use week_scheduler::{SchedulerConfig, SharedWeekSchedule, http_api, logging};

    let config = SchedulerConfig::from_env()?;
    logging::init(&config.log_filter);

    println!("week-scheduler HTTP API listening on http://{}", config.http_addr);
    http_api::serve(config.http_addr, SharedWeekSchedule::initialize()).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
