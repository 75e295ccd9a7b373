use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

/// Every variable is read as `COURSELIST_<FIELD>`; a bare `TERM` would clash
/// with the shell's terminal variable.
pub const ENV_PREFIX: &str = "COURSELIST_";

/// Which half of the scrape the binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeJob {
    Headers,
    Subjects,
    All,
}

/// The env config env vars needed for scraping.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapingConfig {
    #[serde(rename = "url", default = "default_courselist_url")]
    pub courselist_url: String,
    #[serde(default = "default_term")]
    pub term: String,
    #[serde(default = "default_campus_filters")]
    pub campus_filters: Vec<String>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_subject_codes_path")]
    pub subject_codes_path: PathBuf,
    #[serde(default = "default_headers_output_path")]
    pub headers_output_path: PathBuf,
    #[serde(default = "default_subject_output_dir")]
    pub subject_output_dir: PathBuf,
    // No timeout unless asked for: a hung catalog stalls the run.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default = "default_max_concurrent_subjects")]
    pub max_concurrent_subjects: usize,
    #[serde(default = "default_job")]
    pub job: ScrapeJob,
}

fn default_courselist_url() -> String {
    "https://www.apps.miamioh.edu/courselist/".to_string()
}

fn default_term() -> String {
    "202610".to_string()
}

fn default_campus_filters() -> Vec<String> {
    ["All", "Regional", "H", "L", "M", "O", "V"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_subject_codes_path() -> PathBuf {
    PathBuf::from("intermediary/class_codes.json")
}

fn default_headers_output_path() -> PathBuf {
    PathBuf::from("intermediary/course_headers.html")
}

fn default_subject_output_dir() -> PathBuf {
    PathBuf::from("intermediary/individual_blocks")
}

fn default_max_concurrent_subjects() -> usize {
    1
}

fn default_job() -> ScrapeJob {
    ScrapeJob::All
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            courselist_url: default_courselist_url(),
            term: default_term(),
            campus_filters: default_campus_filters(),
            user_agent: default_user_agent(),
            subject_codes_path: default_subject_codes_path(),
            headers_output_path: default_headers_output_path(),
            subject_output_dir: default_subject_output_dir(),
            request_timeout_secs: None,
            max_concurrent_subjects: default_max_concurrent_subjects(),
            job: default_job(),
        }
    }
}

impl ScrapingConfig {
    pub fn new() -> anyhow::Result<Self> {
        Self::load_from_env()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Where the result for the subject at `index` in the subject list goes.
    pub fn subject_output_path(&self, index: usize) -> PathBuf {
        self.subject_output_dir.join(format!("{index}.html"))
    }

    // Zero would stall the batch stream forever.
    pub fn subject_concurrency(&self) -> usize {
        self.max_concurrent_subjects.max(1)
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        Self::load_from_iter(std::env::vars())
    }

    fn load_from_iter<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::prefixed(ENV_PREFIX)
            .from_iter::<_, Self>(vars)
            .context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}
