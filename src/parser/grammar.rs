// Program    ::= Articles Body(None)
// Articles   ::= Article*                  gated on the keyword "define"
// Article    ::= "define" Identifier Body(End) "end"
// Body(stop) ::= Statement*                until `stop` is current or input ends
// Statement  ::= "if" Body(Endif) "endif"
//              | "while" Body(Do) "do" Body(Wend) "wend"
//              | Number
//              | Identifier

use std::collections::BTreeMap;

use super::ast::*;
use super::error::ParseError;
use super::tokenizer::{
    Token, TokenKind, TokenValue, Tokenizer, DEFINE, DO, END, ENDIF, IF, WEND, WHILE,
};

/// Keyword at which a body stops. The body leaves it current for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    None,
    End,
    Endif,
    Do,
    Wend,
}

impl Terminator {
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::End => Some(END),
            Self::Endif => Some(ENDIF),
            Self::Do => Some(DO),
            Self::Wend => Some(WEND),
        }
    }
    fn stops_at(self, token: &Token) -> bool {
        self.keyword().is_some_and(|kw| token.is_keyword(kw))
    }
}

#[derive(Debug)]
pub enum ParserState {
    Complete(Program),
    ContinuationNeeded,
    Error(ParseError),
}

#[derive(Debug, Clone)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Drains `tokenizer` completely before any parsing happens.
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self::from_tokens(tokenizer.finalize())
    }
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let articles = self.parse_articles()?;
        let main_body = self.parse_body(Terminator::None)?;
        log::debug!(
            "parsed {} article(s) and {} top-level node(s)",
            articles.len(),
            main_body.len()
        );
        Ok(Program {
            articles,
            main_body,
        })
    }

    pub fn parse_articles(&mut self) -> Result<BTreeMap<String, Body>, ParseError> {
        let mut articles = BTreeMap::new();
        while self.current_token().is_some_and(|t| t.is_keyword(DEFINE)) {
            let (name, body) = self.parse_article()?;
            if articles.insert(name.clone(), body).is_some() {
                log::debug!("article '{name}' redefined, keeping the later definition");
            }
        }
        Ok(articles)
    }

    pub fn parse_article(&mut self) -> Result<(String, Body), ParseError> {
        match self.current_token() {
            Some(t) if t.is_keyword(DEFINE) => self.advance(),
            other => {
                return Err(ParseError::MissingDefine {
                    found: describe(other),
                })
            }
        }

        let name = match self.current_token() {
            Some(Token {
                kind: TokenKind::Identifier,
                value,
            }) => value.to_string(),
            other => {
                return Err(ParseError::MissingArticleName {
                    found: describe(other),
                })
            }
        };
        self.advance();

        let body = self.parse_body(Terminator::End)?;
        match self.current_token() {
            Some(t) if t.is_keyword(END) => self.advance(),
            other => {
                return Err(ParseError::MissingEndOfArticle {
                    found: describe(other),
                    name,
                })
            }
        }
        log::debug!("parsed article '{name}' with {} node(s)", body.len());
        Ok((name, body))
    }

    pub fn parse_body(&mut self, stop: Terminator) -> Result<Body, ParseError> {
        let mut body = vec![];
        while let Some(token) = self.current_token().cloned() {
            if stop.stops_at(&token) {
                break;
            }
            log::trace!("statement at {}: {token}", self.pos);
            let node = match (token.kind, token.value) {
                (TokenKind::Keyword, TokenValue::Word(w)) if w == IF => self.parse_if()?,
                (TokenKind::Keyword, TokenValue::Word(w)) if w == WHILE => self.parse_while()?,
                (TokenKind::Keyword, value) => {
                    return Err(ParseError::UnexpectedToken {
                        found: value.to_string(),
                    })
                }
                (TokenKind::Number, TokenValue::Integer(n)) => {
                    self.advance();
                    Node::IntegerLiteral(n)
                }
                (TokenKind::Number, TokenValue::Word(found)) => {
                    return Err(ParseError::InvalidNumericValue { found })
                }
                (TokenKind::Identifier, value) => {
                    self.advance();
                    Node::Identifier(value.to_string())
                }
            };
            body.push(node);
        }
        Ok(body)
    }

    fn parse_if(&mut self) -> Result<Node, ParseError> {
        self.advance();
        let body = self.parse_body(Terminator::Endif)?;
        self.expect_closing(Terminator::Endif)?;
        log::debug!("parsed if block with {} node(s)", body.len());
        Ok(Node::If(IfNode { body }))
    }

    fn parse_while(&mut self) -> Result<Node, ParseError> {
        self.advance();
        let condition = self.parse_body(Terminator::Do)?;
        self.expect_closing(Terminator::Do)?;
        let body = self.parse_body(Terminator::Wend)?;
        self.expect_closing(Terminator::Wend)?;
        log::debug!(
            "parsed while loop with {} condition node(s) and {} body node(s)",
            condition.len(),
            body.len()
        );
        Ok(Node::While(WhileNode { condition, body }))
    }

    fn expect_closing(&mut self, terminator: Terminator) -> Result<(), ParseError> {
        let Some(expected) = terminator.keyword() else {
            return Ok(());
        };
        match self.current_token() {
            Some(t) if t.is_keyword(expected) => {
                self.advance();
                Ok(())
            }
            other => Err(ParseError::MissingClosingToken {
                expected,
                found: describe(other),
            }),
        }
    }
}

fn describe(token: Option<&Token>) -> Option<String> {
    token.map(|t| t.value.to_string())
}

pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::from_tokens(tokens.to_vec()).parse()
}

/// Like [`parse`], but reports input that ends in the middle of a construct
/// as [`ParserState::ContinuationNeeded`] instead of an error.
pub fn parse_interactive(tokens: &[Token]) -> ParserState {
    match parse(tokens) {
        Ok(program) => ParserState::Complete(program),
        Err(err) if err.is_end_of_input() => ParserState::ContinuationNeeded,
        Err(err) => ParserState::Error(err),
    }
}
