use serde::Serialize;
use std::collections::BTreeMap;

pub type Body = Vec<Node>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    IntegerLiteral(i64),
    Identifier(String),
    If(IfNode),
    While(WhileNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct IfNode {
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct WhileNode {
    pub condition: Body,
    pub body: Body,
}

impl Node {
    /// Number of control constructs enclosing the deepest leaf, counting
    /// this node. Literals and identifiers have depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Self::IntegerLiteral(_) | Self::Identifier(_) => 0,
            Self::If(node) => 1 + body_depth(&node.body),
            Self::While(node) => 1 + body_depth(&node.condition).max(body_depth(&node.body)),
        }
    }
}

pub fn body_depth(body: &[Node]) -> usize {
    body.iter().map(Node::depth).max().unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Program {
    pub articles: BTreeMap<String, Body>,
    pub main_body: Body,
}

impl Program {
    pub fn article(&self, name: &str) -> Option<&Body> {
        self.articles.get(name)
    }
    pub fn depth(&self) -> usize {
        self.articles
            .values()
            .map(|body| body_depth(body))
            .chain(std::iter::once(body_depth(&self.main_body)))
            .max()
            .unwrap_or(0)
    }
}
