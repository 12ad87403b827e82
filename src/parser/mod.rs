mod ast;
mod error;
mod grammar;
mod pretty;
pub mod tokenizer;

pub use ast::*;
pub use error::ParseError;
pub use grammar::{parse, parse_interactive, Parser, ParserState, Terminator};
pub use pretty::render_body;
