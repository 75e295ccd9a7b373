mod token_not_found_error;

pub mod config;
pub mod course_search;
pub mod header_scraper;
pub mod output;
pub mod requests;
pub mod scraping_context;
pub mod search_form;
pub mod subject_list;
pub mod subject_scraper;
pub mod token_extractor;

pub use config::{ScrapeJob, ScrapingConfig};
pub use course_search::fetch_course_search;
pub use header_scraper::scrape_course_headers;
pub use scraping_context::ScrapingContext;
pub use search_form::SubjectFilter;
pub use subject_scraper::{scrape_subjects, scrape_subjects_from_file};
pub use token_not_found_error::TokenNotFoundError;
