use std::path::PathBuf;

use anyhow::Context;
use futures::stream::{self, StreamExt, TryStreamExt};
use log::info;

use crate::{
    config::ScrapingConfig, course_search::fetch_course_search, output::write_scrape_result,
    search_form::SubjectFilter, subject_list::load_subject_list,
};

/// Load the subject list named in the config and scrape every entry.
pub async fn scrape_subjects_from_file(config: &ScrapingConfig) -> anyhow::Result<Vec<PathBuf>> {
    let subjects = load_subject_list(&config.subject_codes_path).await?;
    info!(
        "Loaded {} subjects from {}",
        subjects.len(),
        config.subject_codes_path.display()
    );
    scrape_subjects(config, &subjects).await
}

/// Search each subject on its own session and write the result to
/// `<index>.html`, index being the subject's position in `subjects`.
///
/// At most `max_concurrent_subjects` searches are in flight. The first
/// failure stops the batch; files written before it are left in place.
/// Returned paths are in subject order.
///
/// With more than one search in flight, subjects after the failing one may
/// already have been fetched and written by the time the failure surfaces.
/// Only the sequential default guarantees nothing past the failure runs.
pub async fn scrape_subjects(
    config: &ScrapingConfig,
    subjects: &[SubjectFilter],
) -> anyhow::Result<Vec<PathBuf>> {
    let written: Vec<PathBuf> = stream::iter(subjects.iter().enumerate())
        .map(|(index, subject)| scrape_subject(config, index, subject))
        .buffered(config.subject_concurrency())
        .try_collect()
        .await?;
    info!("Scraped {} of {} subjects", written.len(), subjects.len());
    Ok(written)
}

async fn scrape_subject(
    config: &ScrapingConfig,
    index: usize,
    subject: &SubjectFilter,
) -> anyhow::Result<PathBuf> {
    info!("Scraping subject #{index}: {subject}");
    let html = fetch_course_search(config, subject)
        .await
        .with_context(|| format!("scraping subject #{index} ({subject}) failed"))?;
    let path = config.subject_output_path(index);
    write_scrape_result(&path, &html).await?;
    info!("Wrote {}", path.display());
    Ok(path)
}
