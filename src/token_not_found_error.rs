#[derive(Debug)]
pub struct TokenNotFoundError {
    pub url: String,
}

impl TokenNotFoundError {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl std::fmt::Display for TokenNotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The landing page at {} has no `_token` form input!",
            self.url
        )
    }
}

impl std::error::Error for TokenNotFoundError {}
