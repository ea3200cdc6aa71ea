/// Panel colour for successful replies
pub const SUCCESS_COLOUR: u32 = 1022555;
/// Panel colour for failed replies
pub const FAILURE_COLOUR: u32 = 16711684;

/// Outcome of a single authentication attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationResult {
    Success { display_name: String, description: String },
    Failure { reason: String },
}

impl AuthenticationResult {
    pub fn failure(reason: impl Into<String>) -> Self {
        AuthenticationResult::Failure { reason: reason.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AuthenticationResult::Success { .. })
    }

    /// Render the result as the titled, coloured panel sent back to the channel
    pub fn to_embed(&self) -> Embed {
        match self {
            AuthenticationResult::Success { description, .. } => Embed::success(description.clone()),
            AuthenticationResult::Failure { reason } => Embed::failure(reason.clone()),
        }
    }
}

/// Structured reply content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub colour: u32,
}

impl Embed {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success!".to_string(),
            description: description.into(),
            colour: SUCCESS_COLOUR,
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            title: "Failure!".to_string(),
            description: description.into(),
            colour: FAILURE_COLOUR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_failure_render_differently() {
        let ok = AuthenticationResult::Success {
            display_name: "Jane Smith".to_string(),
            description: "<@1> authenticated as **Jane Smith**".to_string(),
        }
        .to_embed();
        let err = AuthenticationResult::failure("nope").to_embed();

        assert_eq!(ok.title, "Success!");
        assert_eq!(ok.colour, SUCCESS_COLOUR);
        assert_eq!(err.title, "Failure!");
        assert_eq!(err.description, "nope");
        assert_ne!(ok.colour, err.colour);
    }
}
