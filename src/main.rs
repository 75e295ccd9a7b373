use courselist::ScrapingContext;
use dotenv::dotenv;
use log::{LevelFilter, error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let result = match ScrapingContext::new() {
        Ok(context) => context.run().await,
        Err(e) => Err(e),
    };
    match result {
        Ok(written) => info!("Done, wrote {} files", written.len()),
        Err(e) => {
            error!("Scrape aborted: {e:#}");
            std::process::exit(1);
        }
    }
}
