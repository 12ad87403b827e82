use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use wordlang::{
    parse, parse_interactive, tokenize_file, tokenize_string, ParserState, Program, Token,
};

const PROMPT: &str = ">> ";
const CONTINUATION_PROMPT: &str = ".. ";

/// Parse wordlang programs and print their syntax tree
#[derive(ClapParser, Debug)]
#[command(name = "wordlang", version)]
struct Cli {
    /// Program to parse; `-` reads standard input. Starts a REPL when omitted.
    file: Option<PathBuf>,

    /// Print the token list before the syntax tree
    #[arg(short, long)]
    tokens: bool,

    /// Print the syntax tree as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.file {
        Some(ref path) => run_script(path, &cli),
        None => run_repl(&cli),
    }
}

fn run_script(path: &Path, cli: &Cli) -> Result<()> {
    let tokens = if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read standard input")?;
        tokenize_string(&text)
    } else {
        tokenize_file(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    log::debug!("read {} token(s)", tokens.len());

    if cli.tokens {
        print_tokens(&tokens);
    }
    let program = parse(&tokens).context("parse error")?;
    print_program(&program, cli)
}

fn run_repl(cli: &Cli) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut buffer = String::new();
    loop {
        let prompt = if buffer.is_empty() {
            PROMPT
        } else {
            CONTINUATION_PROMPT
        };
        match rl.readline(prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                buffer.push_str(&line);
                buffer.push('\n');

                let tokens = tokenize_string(&buffer);
                match parse_interactive(&tokens) {
                    ParserState::Complete(program) => {
                        if cli.tokens {
                            print_tokens(&tokens);
                        }
                        print_program(&program, cli)?;
                        buffer.clear();
                    }
                    ParserState::ContinuationNeeded => continue,
                    ParserState::Error(err) => {
                        println!("Parse error: {err}");
                        buffer.clear();
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                buffer.clear();
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens.iter() {
        println!("{}", token);
    }
}

fn print_program(program: &Program, cli: &Cli) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(program)?);
    } else {
        print!("{program}");
    }
    Ok(())
}
