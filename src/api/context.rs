use crate::traits::Headers;

/// Explicit per-call request context: where to send the request and which
/// bearer token to present. Every [`super::AdminApi`] call takes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    base_url: String,
    token: Option<String>,
}

impl RequestContext {
    /// A trailing `/` on `base_url` is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            token: None,
        }
    }

    /// Attach a bearer token. Blank tokens are ignored.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = if token.trim().is_empty() {
            None
        } else {
            Some(token)
        };
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Absolute URL for an API path such as `/api/v1/users`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if let Some(token) = &self.token {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let ctx = RequestContext::new("http://localhost:8080/");
        assert_eq!(ctx.url("/api/v1/users"), "http://localhost:8080/api/v1/users");
    }

    #[test]
    fn test_headers_with_token() {
        let headers = RequestContext::new("http://h").with_token("abc").headers();
        assert_eq!(headers.get("Authorization"), Some(&"Bearer abc".to_string()));
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_blank_token_is_dropped() {
        let ctx = RequestContext::new("http://h").with_token("  ");
        assert!(!ctx.has_token());
        assert!(!ctx.headers().contains_key("Authorization"));
    }
}
