//! A streaming CSS3 lexer and parser.
//!
//! The lexer turns a byte source into CSS Syntax Level 3 tokens; the parser
//! sits on top of it and produces grammar events: at-rules, rulesets,
//! declarations, block boundaries and passthrough tokens. Both work off a
//! shared shift buffer with bounded look-ahead, so a multi-megabyte
//! stylesheet can be parsed from a socket or file without ever holding it in
//! memory, and an in-memory parse never copies token bytes.
//!
//! Tokens and events reference their raw source bytes as [`Span`]s, resolved
//! through [`Lexer::bytes`] or [`Parser::text`]. In streaming mode the
//! resolved bytes stay valid until the next `next_event` call; enable
//! [`Config::retain`] to have the library copy token bytes as they are
//! lexed instead.
//!
//! ```
//! use styleparse::{GrammarKind, Parser};
//!
//! let mut parser = Parser::new(b"a { color: red; }");
//!
//! let event = parser.next_event();
//! assert_eq!(event.kind, GrammarKind::BeginRuleset);
//!
//! let event = parser.next_event();
//! assert_eq!(event.kind, GrammarKind::Declaration);
//! assert_eq!(parser.property(), b"color");
//! assert_eq!(parser.text(parser.values()[0].span), b"red");
//!
//! assert_eq!(parser.next_event().kind, GrammarKind::EndRuleset);
//! ```
//!
//! Inline `style="…"` content has no rulesets at the top level; parse it
//! with [`Parser::new_inline`] instead.

pub mod buffer;
pub mod common;
pub mod config;
pub mod error;
pub mod keyword;
pub mod lexer;
pub mod parser;
pub mod token;

pub use buffer::ShiftBuffer;
pub use common::Location;
pub use config::Config;
pub use error::{Error, RenderedError, Snippet};
pub use lexer::Lexer;
pub use parser::{Event, GrammarKind, Parser};
pub use token::{Span, Token, TokenKind};

use tracing::debug;

/// Tokenize an in-memory source.
pub fn tokenize(source: &[u8]) -> Lexer<'_> {
	debug!(len = source.len(), "tokenizing");
	Lexer::new(source)
}

/// Parse an in-memory stylesheet.
pub fn parse(source: &[u8]) -> Parser<'_> {
	debug!(len = source.len(), "parsing stylesheet");
	Parser::new(source)
}

/// Parse an in-memory inline declaration list.
pub fn parse_inline(source: &[u8]) -> Parser<'_> {
	debug!(len = source.len(), "parsing inline declarations");
	Parser::new_inline(source)
}
