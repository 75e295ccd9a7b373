use anyhow::Context;
use log::{debug, info};

use crate::{
    config::ScrapingConfig,
    requests::CourseListSession,
    search_form::{SearchForm, SubjectFilter},
    token_extractor::extract_form_token,
};

/// Run one token-authenticated course search and return the raw HTML.
///
/// A new session is opened for every call, so the token and its cookies
/// never outlive this search. Fails with [`crate::TokenNotFoundError`]
/// before anything is posted when the landing page has no `_token` input.
pub async fn fetch_course_search(
    config: &ScrapingConfig,
    subject: &SubjectFilter,
) -> anyhow::Result<String> {
    let session = CourseListSession::new(config)?;
    let url = config.courselist_url.as_str();

    let landing_page = session.get_body(url).await?;
    let token = extract_form_token(&landing_page, url)?;
    debug!("Got session token for {subject}");

    let form = SearchForm {
        token: &token,
        term: &config.term,
        campus_filters: &config.campus_filters,
        subject,
    };
    let results = session
        .post_form_body(url, &form.to_fields())
        .await
        .with_context(|| format!("course search for {subject} failed"))?;
    info!(
        "Course search for {subject} in term {} returned {} bytes",
        config.term,
        results.len()
    );
    Ok(results)
}
