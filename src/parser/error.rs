use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 'define', found {}", found_or_eof(.found))]
    MissingDefine { found: Option<String> },
    #[error("expected an article name after 'define', found {}", found_or_eof(.found))]
    MissingArticleName { found: Option<String> },
    #[error("expected 'end' after the body of article '{name}', found {}", found_or_eof(.found))]
    MissingEndOfArticle { name: String, found: Option<String> },
    #[error("expected '{expected}' to close the block, found {}", found_or_eof(.found))]
    MissingClosingToken {
        expected: &'static str,
        found: Option<String>,
    },
    #[error("number token carries a non-integer value '{found}'")]
    InvalidNumericValue { found: String },
    #[error("unexpected token '{found}'")]
    UnexpectedToken { found: String },
}

impl ParseError {
    /// True when the parse failed only because the tokens ran out, i.e. more
    /// input could still complete the program.
    pub fn is_end_of_input(&self) -> bool {
        matches!(
            self,
            Self::MissingDefine { found: None }
                | Self::MissingArticleName { found: None }
                | Self::MissingEndOfArticle { found: None, .. }
                | Self::MissingClosingToken { found: None, .. }
        )
    }
}

fn found_or_eof(found: &Option<String>) -> String {
    match found {
        Some(word) => format!("'{word}'"),
        None => "end of input".to_string(),
    }
}
