use std::path::PathBuf;

use log::info;

use crate::{
    config::{ScrapeJob, ScrapingConfig},
    header_scraper::scrape_course_headers,
    subject_scraper::scrape_subjects_from_file,
};

pub struct ScrapingContext {
    pub scraping_config: ScrapingConfig,
}

impl ScrapingContext {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_config = ScrapingConfig::new()?;
        Ok(ScrapingContext { scraping_config })
    }

    pub fn with_config(scraping_config: ScrapingConfig) -> Self {
        ScrapingContext { scraping_config }
    }

    /// Run the configured job. Headers go first when both are requested.
    pub async fn run(&self) -> anyhow::Result<Vec<PathBuf>> {
        let config = &self.scraping_config;
        info!("Running {:?} job for term {}", config.job, config.term);
        let mut written = vec![];
        if matches!(config.job, ScrapeJob::Headers | ScrapeJob::All) {
            written.push(scrape_course_headers(config).await?);
        }
        if matches!(config.job, ScrapeJob::Subjects | ScrapeJob::All) {
            written.extend(scrape_subjects_from_file(config).await?);
        }
        Ok(written)
    }
}
