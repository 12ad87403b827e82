//! Property-based tests for the parser
//!
//! Generates well-formed programs and checks structural properties of the
//! resulting syntax tree.

use proptest::prelude::*;
use wordlang::{parse, Node, Tokenizer, KEYWORDS};

/// Source-level shape of a statement, rendered to words for the tokenizer.
#[derive(Debug, Clone)]
enum Shape {
    Atom(String),
    If(Vec<Shape>),
    While(Vec<Shape>, Vec<Shape>),
}

impl Shape {
    fn depth(&self) -> usize {
        match self {
            Self::Atom(_) => 0,
            Self::If(body) => 1 + depth_of(body),
            Self::While(condition, body) => 1 + depth_of(condition).max(depth_of(body)),
        }
    }

    fn push_words(&self, words: &mut Vec<String>) {
        match self {
            Self::Atom(word) => words.push(word.clone()),
            Self::If(body) => {
                words.push("if".to_string());
                body.iter().for_each(|s| s.push_words(words));
                words.push("endif".to_string());
            }
            Self::While(condition, body) => {
                words.push("while".to_string());
                condition.iter().for_each(|s| s.push_words(words));
                words.push("do".to_string());
                body.iter().for_each(|s| s.push_words(words));
                words.push("wend".to_string());
            }
        }
    }
}

fn depth_of(shapes: &[Shape]) -> usize {
    shapes.iter().map(Shape::depth).max().unwrap_or(0)
}

fn words_of(shapes: &[Shape]) -> Vec<String> {
    let mut words = vec![];
    shapes.iter().for_each(|s| s.push_words(&mut words));
    words
}

fn atom() -> impl Strategy<Value = Shape> {
    prop_oneof![
        (-1000i64..1000).prop_map(|n| Shape::Atom(n.to_string())),
        "[a-z][a-z0-9_]{0,6}"
            .prop_filter("keywords are not atoms", |w| !KEYWORDS.contains(&w.as_str()))
            .prop_map(Shape::Atom),
    ]
}

fn shape() -> impl Strategy<Value = Shape> {
    atom().prop_recursive(5, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Shape::If),
            (
                prop::collection::vec(inner.clone(), 0..3),
                prop::collection::vec(inner, 0..3)
            )
                .prop_map(|(condition, body)| Shape::While(condition, body)),
        ]
    })
}

fn node_count(body: &[Node]) -> usize {
    body.iter()
        .map(|node| match node {
            Node::IntegerLiteral(_) | Node::Identifier(_) => 1,
            Node::If(n) => 1 + node_count(&n.body),
            Node::While(n) => 1 + node_count(&n.condition) + node_count(&n.body),
        })
        .sum()
}

fn shape_count(shapes: &[Shape]) -> usize {
    shapes
        .iter()
        .map(|s| match s {
            Shape::Atom(_) => 1,
            Shape::If(body) => 1 + shape_count(body),
            Shape::While(condition, body) => 1 + shape_count(condition) + shape_count(body),
        })
        .sum()
}

proptest! {
    /// Balanced input parses and keeps its nesting depth
    #[test]
    fn balanced_nesting_is_preserved(shapes in prop::collection::vec(shape(), 0..6)) {
        let tokens = Tokenizer::new(words_of(&shapes)).finalize();
        let program = parse(&tokens).unwrap();
        prop_assert!(program.articles.is_empty());
        prop_assert_eq!(depth_of(&shapes), program.depth());
        prop_assert_eq!(shape_count(&shapes), node_count(&program.main_body));
    }

    /// Parsing the same tokens twice gives the same tree
    #[test]
    fn reparse_is_idempotent(shapes in prop::collection::vec(shape(), 0..6)) {
        let tokens = Tokenizer::new(words_of(&shapes)).finalize();
        prop_assert_eq!(parse(&tokens), parse(&tokens));
    }

    /// Articles hold their own body; the main body follows them
    #[test]
    fn articles_precede_main_body(
        article in prop::collection::vec(shape(), 0..4),
        main in prop::collection::vec(shape(), 0..4),
    ) {
        let mut words = vec!["define".to_string(), "ART".to_string()];
        words.extend(words_of(&article));
        words.push("end".to_string());
        words.extend(words_of(&main));

        let program = parse(&Tokenizer::new(words).finalize()).unwrap();
        prop_assert_eq!(shape_count(&article), node_count(program.article("ART").unwrap()));
        prop_assert_eq!(shape_count(&main), node_count(&program.main_body));
    }

    /// A redefined article keeps only its last body
    #[test]
    fn last_definition_wins(first in -1000i64..1000, second in -1000i64..1000) {
        let source = format!("define A {first} end define A {second} end");
        let program = parse(&wordlang::tokenize_string(&source)).unwrap();
        prop_assert_eq!(Some(&vec![Node::IntegerLiteral(second)]), program.article("A"));
    }

    /// Dropping the final closing keyword of a block always fails the parse
    #[test]
    fn unclosed_block_fails(body in prop::collection::vec(shape(), 0..4)) {
        let mut words = vec!["if".to_string()];
        words.extend(words_of(&body));
        let result = parse(&Tokenizer::new(words).finalize());
        let is_missing_closing =
            matches!(result, Err(wordlang::ParseError::MissingClosingToken { .. }));
        prop_assert!(is_missing_closing);
    }
}
