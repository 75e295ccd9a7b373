use std::path::PathBuf;

use log::info;

use crate::{
    config::ScrapingConfig, course_search::fetch_course_search, output::write_scrape_result,
    search_form::SubjectFilter,
};

/// Search every subject at once and keep the page as the catalog's shared
/// header/boilerplate.
pub async fn scrape_course_headers(config: &ScrapingConfig) -> anyhow::Result<PathBuf> {
    info!("Scraping course headers from {}", config.courselist_url);
    let html = fetch_course_search(config, &SubjectFilter::all_subjects()).await?;
    let path = config.headers_output_path.clone();
    write_scrape_result(&path, &html).await?;
    info!("Wrote {}", path.display());
    Ok(path)
}
