use scraper::{Html, Selector};

use crate::TokenNotFoundError;

const TOKEN_INPUT_SELECTOR: &str = r#"input[name="_token"]"#;

/// Pull the anti-forgery token out of the landing page's search form.
///
/// `page_url` only feeds the error message.
pub fn extract_form_token(html: &str, page_url: &str) -> Result<String, TokenNotFoundError> {
    let document = Html::parse_document(html);
    let token_selector = Selector::parse(TOKEN_INPUT_SELECTOR).unwrap();
    document
        .select(&token_selector)
        .next()
        .and_then(|input| input.value().attr("value"))
        .map(str::to_string)
        .ok_or_else(|| TokenNotFoundError::new(page_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.edu/courselist/";

    #[test]
    fn finds_hidden_token_input() {
        let html = r#"
            <html><body>
              <form method="POST" action="/courselist/">
                <input type="hidden" name="_token" value="s3cr3tT0ken">
                <input type="text" name="courseNumber">
              </form>
            </body></html>"#;
        assert_eq!(extract_form_token(html, URL).unwrap(), "s3cr3tT0ken");
    }

    #[test]
    fn first_token_wins() {
        let html = r#"
            <form><input name="_token" value="first"></form>
            <form><input name="_token" value="second"></form>"#;
        assert_eq!(extract_form_token(html, URL).unwrap(), "first");
    }

    #[test]
    fn missing_input_is_an_error() {
        let html = r#"<form><input name="term" value="202610"></form>"#;
        let err = extract_form_token(html, URL).unwrap_err();
        assert_eq!(err.url, URL);
    }

    #[test]
    fn input_without_value_is_an_error() {
        let html = r#"<form><input type="hidden" name="_token"></form>"#;
        assert!(extract_form_token(html, URL).is_err());
    }

    #[test]
    fn empty_value_is_returned_as_is() {
        let html = r#"<form><input type="hidden" name="_token" value=""></form>"#;
        assert_eq!(extract_form_token(html, URL).unwrap(), "");
    }
}
