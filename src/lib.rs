mod parser;
pub use parser::tokenizer::{
    classify, split_words, tokenize_file, tokenize_string, Token, TokenKind, TokenValue,
    Tokenizer, KEYWORDS,
};
pub use parser::{
    body_depth, parse, parse_interactive, render_body, Body, IfNode, Node, ParseError, Parser,
    ParserState, Program, Terminator, WhileNode,
};
