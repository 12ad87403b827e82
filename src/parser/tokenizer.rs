use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;

pub const DEFINE: &str = "define";
pub const END: &str = "end";
pub const IF: &str = "if";
pub const ENDIF: &str = "endif";
pub const WHILE: &str = "while";
pub const DO: &str = "do";
pub const WEND: &str = "wend";

pub const KEYWORDS: [&str; 7] = [DEFINE, END, IF, ENDIF, WHILE, DO, WEND];

const S_WHITESPACE: &str = r"\s+";

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(S_WHITESPACE).expect("Error compiling regex."));

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum TokenKind {
    Keyword,
    Number,
    Identifier,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Word(String),
    Integer(i64),
}

impl TokenValue {
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(w) => Some(w.as_str()),
            Self::Integer(_) => None,
        }
    }
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Word(w) => write!(f, "{w}"),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) value: TokenValue,
}

impl Token {
    /// Builds a token without classification. Normally tokens come from
    /// [`classify`], which keeps `kind` and `value` consistent.
    pub fn new(kind: TokenKind, value: TokenValue) -> Self {
        Self { kind, value }
    }
    pub fn kind(&self) -> TokenKind {
        self.kind
    }
    pub fn value(&self) -> &TokenValue {
        &self.value
    }
    pub(crate) fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.value.as_word() == Some(keyword)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}('{}')", self.kind, self.value)
    }
}

/// Keyword first, then base-10 integer, otherwise identifier. Never fails.
pub fn classify(word: &str) -> Token {
    let token = if KEYWORDS.contains(&word) {
        Token::new(TokenKind::Keyword, TokenValue::Word(word.to_string()))
    } else if let Ok(n) = word.parse::<i64>() {
        Token::new(TokenKind::Number, TokenValue::Integer(n))
    } else {
        Token::new(TokenKind::Identifier, TokenValue::Word(word.to_string()))
    };
    log::trace!("classified '{word}' as {token}");
    token
}

pub fn split_words(text: &str) -> Vec<String> {
    WHITESPACE
        .split(text)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    words: VecDeque<String>,
}

impl Tokenizer {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
    pub fn from_text(text: &str) -> Self {
        Self::new(split_words(text))
    }
    /// The next unconsumed word, left in place.
    pub fn peek(&self) -> Option<&str> {
        self.words.front().map(String::as_str)
    }
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
    pub fn finalize(self) -> Vec<Token> {
        self.collect()
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let word = self.words.pop_front()?;
        Some(classify(&word))
    }
}

pub fn tokenize_string(input: &str) -> Vec<Token> {
    Tokenizer::from_text(input).finalize()
}

pub fn tokenize_file<P>(path: P) -> io::Result<Vec<Token>>
where
    P: AsRef<Path>,
{
    let text = fs::read_to_string(path)?;
    Ok(tokenize_string(&text))
}
