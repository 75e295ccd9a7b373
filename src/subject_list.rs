use std::path::Path;

use anyhow::Context;

use crate::search_form::SubjectFilter;

/// Read the subject code list produced by the subject-area scrape.
pub async fn load_subject_list(path: &Path) -> anyhow::Result<Vec<SubjectFilter>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Could not read subject list {}", path.display()))?;
    parse_subject_list(&contents)
        .with_context(|| format!("Could not parse subject list {}", path.display()))
}

pub fn parse_subject_list(contents: &str) -> anyhow::Result<Vec<SubjectFilter>> {
    let subjects: Vec<SubjectFilter> = serde_json::from_str(contents)?;
    Ok(subjects)
}
