use serde::{Deserialize, Serialize};

/// Endpoint + access token the operator logged in with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub endpoint_url: String,
    pub token: String,
}

impl Credentials {
    pub fn new(endpoint_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            token: token.into(),
        }
    }

    /// Both fields present. Shape is not checked: a bad URL or token
    /// surfaces on the first request.
    pub fn is_complete(&self) -> bool {
        !self.endpoint_url.trim().is_empty() && !self.token.trim().is_empty()
    }

    /// Token safe to print: last four characters only.
    pub fn masked_token(&self) -> String {
        let chars: Vec<char> = self.token.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), tail)
    }
}
