use std::fmt::{self, Write};

use super::ast::{Node, Program};

const INDENT: usize = 2;

fn write_body(f: &mut impl Write, body: &[Node], level: usize) -> fmt::Result {
    for node in body {
        write_node(f, node, level)?;
    }
    Ok(())
}

fn write_node(f: &mut impl Write, node: &Node, level: usize) -> fmt::Result {
    let pad = " ".repeat(level * INDENT);
    match node {
        Node::IntegerLiteral(n) => writeln!(f, "{pad}{n}"),
        Node::Identifier(name) => writeln!(f, "{pad}{name}"),
        Node::If(node) => {
            writeln!(f, "{pad}if")?;
            write_body(f, &node.body, level + 1)
        }
        Node::While(node) => {
            writeln!(f, "{pad}while")?;
            write_body(f, &node.condition, level + 1)?;
            writeln!(f, "{pad}do")?;
            write_body(f, &node.body, level + 1)
        }
    }
}

/// Renders a body one node per line, children indented below their parent.
pub fn render_body(body: &[Node], level: usize) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_body(&mut out, body, level);
    out
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Articles:")?;
        for (name, body) in &self.articles {
            writeln!(f, "{}{name}:", " ".repeat(INDENT))?;
            write_body(f, body, 2)?;
        }
        writeln!(f, "Body:")?;
        write_body(f, &self.main_body, 1)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}
