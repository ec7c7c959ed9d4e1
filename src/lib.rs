//! Compiler from a chat-message markdown dialect to message markup.
//!
//! The pipeline is preprocess -> tokenize -> parse -> generate -> restore
//! escapes. Every stage is total: constructs that cannot be closed degrade to
//! their literal text instead of failing.

mod config;
mod error;
pub mod escape;
mod html;
mod languages;
pub mod node;
mod parser;
pub mod token;
mod tokenizer;

pub use config::{Config, LanguagesConfig, RenderConfig};
pub use error::{CliError, ConfigError};
pub use html::{entity, node_to_html};
pub use languages::{Languages, pretty_language_name};
pub use node::{Node, NodeKind};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Render dialect text to markup.
///
/// `allow_links` is accepted for API compatibility; no link syntax is parsed.
pub fn render(input: &str, allow_links: bool) -> String {
    render_with(input, allow_links, &Languages::builtin())
}

/// Render dialect text to markup with custom config.
pub fn render_with_config(input: &str, config: &Config) -> String {
    let languages = config.languages.registry();
    render_with(input, config.render.allow_links, &languages)
}

fn render_with(input: &str, allow_links: bool, languages: &Languages) -> String {
    let preprocessed = escape::preprocess(input);
    let tokens = Tokenizer::new(&preprocessed, allow_links).tokenize();
    let ast = parser::parse(&tokens, languages);
    let html = node_to_html(&ast);
    escape::restore_escapes(&html)
}

/// Preprocess and tokenize input.
pub fn tokenize(input: &str) -> Vec<Token> {
    let preprocessed = escape::preprocess(input);
    Tokenizer::new(&preprocessed, false).tokenize()
}

/// Preprocess, tokenize and parse input into a `Node::Root`.
pub fn parse(input: &str) -> Node {
    parse_with(input, &Languages::builtin())
}

/// Like [`parse`], with a custom language registry.
pub fn parse_with(input: &str, languages: &Languages) -> Node {
    parser::parse(&tokenize(input), languages)
}
