//! Module implementing the CSS grammar parser.
//!
//! The parser sits on a token buffer over the lexer and produces grammar
//! events: at-rules, rulesets, declarations, block boundaries, and
//! passthrough tokens, one per call to [`Parser::next_event`]. It is driven
//! by a small state stack whose top decides how a `}` is interpreted; the
//! bottom is always the stylesheet (or the implicit declaration list in
//! inline mode).
//!
//! Whether an identifier starts a declaration or a ruleset head is decided by
//! scanning the token buffer: a `;`, `}` or the end of input before any `{`
//! means declaration. The look-ahead this needs is bounded by the buffer
//! configuration, see [`Config::max_buf`].
//!
//! Event payloads are exposed through [`Parser::values`] and stay valid until
//! the next [`Parser::next_event`] call, in streaming mode included: the
//! bytes of consumed tokens are only released back to the shift buffer on
//! entry to the following call.

mod token_buffer;


use std::fmt;
use std::io::{self, Read};

use tracing::trace;

use crate::buffer::ShiftBuffer;
use crate::config::Config;
use crate::error::Error;
use crate::keyword::AtRuleKeyword;
use crate::lexer::Lexer;
use crate::token::{Span, Token, TokenKind};

use self::token_buffer::TokenBuffer;

/// The type of grammar event.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrammarKind {
	/// No further events can be produced, or a localized parse error was
	/// recovered from; [`Parser::err`] and [`Parser::is_eof`] disambiguate.
	Error,
	/// A block-less at-rule, e.g. `@import "a.css";`. The prelude is in
	/// [`Parser::values`].
	AtRule,
	/// An at-rule with a `{` block. Ends with a matching [`EndAtRule`].
	///
	/// [`EndAtRule`]: GrammarKind::EndAtRule
	BeginAtRule,
	EndAtRule,
	/// A qualified rule. Its selectors are in [`Parser::values`]; ends with a
	/// matching [`EndRuleset`].
	///
	/// [`EndRuleset`]: GrammarKind::EndRuleset
	BeginRuleset,
	EndRuleset,
	/// A property declaration; the value tokens are in [`Parser::values`].
	Declaration,
	/// A token passed through outside any recognized construct.
	Token,
}

impl GrammarKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			GrammarKind::Error => "Error",
			GrammarKind::AtRule => "AtRule",
			GrammarKind::BeginAtRule => "BeginAtRule",
			GrammarKind::EndAtRule => "EndAtRule",
			GrammarKind::BeginRuleset => "BeginRuleset",
			GrammarKind::EndRuleset => "EndRuleset",
			GrammarKind::Declaration => "Declaration",
			GrammarKind::Token => "Token",
		}
	}
}

impl fmt::Display for GrammarKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A grammar event.
#[derive(Clone, Copy, Debug)]
pub struct Event {
	pub kind: GrammarKind,
	/// The representative token: the `@` keyword for at-rule events, the
	/// property for declarations, the passed-through token itself, the brace
	/// for block boundaries.
	pub token: Token,
	/// Set on declarations terminated by `!important`.
	pub important: bool,
}

/// The recognition state the parser is in, one stack entry per open block.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
enum State {
	Stylesheet,
	AtRule,
	Ruleset,
}

/// The CSS grammar parser.
pub struct Parser<'a, R = io::Empty> {
	lexer: Lexer<'a, R>,
	tokens: TokenBuffer,
	stack: Vec<State>,
	stylesheet: bool,
	/// Payload tokens of the last emitted event.
	values: Vec<Token>,
	/// Lowercased property name of the last declaration.
	prop: Vec<u8>,
	/// Keyword id of the last at-rule event's name.
	at_keyword: Option<AtRuleKeyword>,
	/// First recoverable parse error.
	err: Option<Error>,
	done: bool,
}

impl<'a> Parser<'a> {
	/// Create a stylesheet parser over an in-memory source.
	pub fn new(source: &'a [u8]) -> Self {
		Self::with_config(source, Config::DEFAULT)
	}

	/// Create a parser for an inline declaration list, e.g. the contents of
	/// a `style` attribute.
	pub fn new_inline(source: &'a [u8]) -> Self {
		Self::with_config(source, Config::new().with_stylesheet(false))
	}

	/// Create a parser over an in-memory source with the given configuration.
	pub fn with_config(source: &'a [u8], config: Config) -> Self {
		Self::build(Lexer::new(source), config)
	}
}

impl<R: Read> Parser<'static, R> {
	/// Create a stylesheet parser over a streaming source.
	pub fn from_reader(source: R) -> Self {
		Self::from_reader_with_config(source, Config::DEFAULT)
	}

	/// Create a parser over a streaming source with the given configuration.
	pub fn from_reader_with_config(source: R, config: Config) -> Self {
		let buf = ShiftBuffer::with_capacity(source, config.min_buf, config.max_buf);
		Self::build(Lexer::from_buffer(buf), config)
	}
}

impl<'a, R: Read> Parser<'a, R> {
	fn build(lexer: Lexer<'a, R>, config: Config) -> Self {
		Parser {
			lexer,
			tokens: TokenBuffer::new(config.retain),
			stack: vec![State::Stylesheet],
			stylesheet: config.stylesheet,
			values: Vec::new(),
			prop: Vec::new(),
			at_keyword: None,
			err: None,
			done: false,
		}
	}

	/// Advances to and returns the next grammar event.
	///
	/// Returns an [`GrammarKind::Error`] event once no further tokens are
	/// available; by then [`Parser::is_eof`] and [`Parser::err`] tell a clean
	/// end of input apart from a failure. Localized violations (a malformed
	/// declaration, a ruleset head cut short) also surface as error events,
	/// after which parsing continues at the next recovery point.
	pub fn next_event(&mut self) -> Event {
		self.tokens.commit(&mut self.lexer);
		self.values.clear();
		self.at_keyword = None;
		loop {
			let tok = self.peek(0);
			match tok.kind {
				TokenKind::Error => {
					self.done = true;
					return self.event(GrammarKind::Error, tok);
				}
				TokenKind::Whitespace | TokenKind::Comment | TokenKind::Semicolon => {
					self.shift();
				}
				TokenKind::RightBrace if self.stack.len() > 1 => {
					self.shift();
					let kind = match self.stack.pop() {
						Some(State::AtRule) => GrammarKind::EndAtRule,
						_ => GrammarKind::EndRuleset,
					};
					return self.event(kind, tok);
				}
				TokenKind::Cdo | TokenKind::Cdc => {
					self.shift();
					return self.event(GrammarKind::Token, tok);
				}
				TokenKind::AtKeyword => return self.parse_at_rule(tok),
				TokenKind::Ident => {
					let inline_top = !self.stylesheet && self.stack.len() == 1;
					if inline_top || self.declaration_ahead() {
						return self.parse_declaration(tok);
					}
					// a `{` comes first, this is a ruleset head
					return self.parse_ruleset_head();
				}
				_ => {
					let rulesets = self.stylesheet || self.stack.len() > 1;
					if rulesets && !self.declaration_ahead() {
						return self.parse_ruleset_head();
					}
					self.shift();
					return self.event(GrammarKind::Token, tok);
				}
			}
		}
	}

	/// The payload tokens of the last event: the prelude of an at-rule, the
	/// selectors of a ruleset head, the ordered value tokens of a
	/// declaration. Whitespace significant for descendant combinators is
	/// kept; comments are dropped.
	pub fn values(&self) -> &[Token] {
		&self.values
	}

	/// The lowercased (ASCII only) property name of the last declaration.
	pub fn property(&self) -> &[u8] {
		&self.prop
	}

	/// The keyword id of the last at-rule event's name, when recognized.
	pub fn at_keyword(&self) -> Option<AtRuleKeyword> {
		self.at_keyword
	}

	/// Resolve a token's bytes. Valid until the next
	/// [`Parser::next_event`] call.
	pub fn text(&self, span: Span) -> &[u8] {
		self.tokens.text(span, &self.lexer)
	}

	/// The first error encountered, if any. End of input is not an error.
	pub fn err(&self) -> Option<&Error> {
		self.err.as_ref().or_else(|| self.lexer.err())
	}

	/// Returns if the source is exhausted.
	pub fn is_eof(&self) -> bool {
		self.lexer.is_eof()
	}

	/// Current 1-based source line.
	pub fn line(&self) -> usize {
		self.lexer.line()
	}

	fn event(&self, kind: GrammarKind, token: Token) -> Event {
		Event {
			kind,
			token,
			important: false,
		}
	}

	fn peek(&mut self, i: usize) -> Token {
		self.tokens.peek(i, &mut self.lexer)
	}

	fn shift(&mut self) -> Token {
		self.tokens.peek(0, &mut self.lexer);
		self.tokens.shift()
	}

	/// Peek the next token that is not whitespace or a comment, consuming
	/// the skipped ones.
	fn peek_significant(&mut self) -> Token {
		loop {
			let tok = self.peek(0);
			match tok.kind {
				TokenKind::Whitespace | TokenKind::Comment => {
					self.shift();
				}
				_ => return tok,
			}
		}
	}

	/// Scan ahead for the token that decides declaration vs ruleset: true
	/// when a `;`, `}` or the end of input comes before any `{`.
	fn declaration_ahead(&mut self) -> bool {
		let mut i = 0;
		loop {
			match self.peek(i).kind {
				TokenKind::Semicolon | TokenKind::RightBrace | TokenKind::Error => return true,
				TokenKind::LeftBrace => return false,
				_ => i += 1,
			}
		}
	}

	/// Parse an at-rule from its `@` keyword: collect the prelude, then
	/// decide block-less vs block at the terminator.
	///
	/// The `{` that opens the block and the `;` that ends a block-less rule
	/// are only recognized outside nested parentheses and brackets.
	fn parse_at_rule(&mut self, name: Token) -> Event {
		self.at_keyword = self.tokens.keyword_at(0, &mut self.lexer);
		self.shift();
		let mut depth = 0usize;
		loop {
			let tok = self.peek(0);
			match tok.kind {
				// the end of the input or of the enclosing block ends a
				// block-less at-rule
				TokenKind::Error => {
					return self.event(GrammarKind::AtRule, name);
				}
				TokenKind::RightBrace if depth == 0 => {
					return self.event(GrammarKind::AtRule, name);
				}
				TokenKind::Semicolon if depth == 0 => {
					self.shift();
					return self.event(GrammarKind::AtRule, name);
				}
				TokenKind::LeftBrace if depth == 0 => {
					self.shift();
					self.stack.push(State::AtRule);
					return self.event(GrammarKind::BeginAtRule, name);
				}
				TokenKind::Whitespace | TokenKind::Comment => {
					self.shift();
				}
				kind => {
					if kind.opens_block() {
						depth += 1;
					} else if kind.closes_block() {
						depth = depth.saturating_sub(1);
					}
					self.values.push(tok);
					self.shift();
				}
			}
		}
	}

	/// Parse a declaration from its property identifier.
	fn parse_declaration(&mut self, property: Token) -> Event {
		self.shift();
		if self.peek_significant().kind != TokenKind::Colon {
			return self.bad_declaration(property);
		}
		self.shift();

		let Parser {
			prop,
			tokens,
			lexer,
			..
		} = self;
		prop.clear();
		prop.extend_from_slice(tokens.text(property.span, lexer));
		prop.make_ascii_lowercase();

		let mut important = false;
		let mut depth = 0usize;
		loop {
			let tok = self.peek(0);
			match tok.kind {
				TokenKind::Error => break,
				TokenKind::Semicolon if depth == 0 => {
					self.shift();
					break;
				}
				// left for the enclosing block's end event
				TokenKind::RightBrace if depth == 0 => break,
				TokenKind::Whitespace | TokenKind::Comment => {
					self.shift();
				}
				TokenKind::Delim if depth == 0 && self.text(tok.span) == b"!" => {
					self.shift();
					let ident = self.peek_significant();
					if ident.kind == TokenKind::Ident
						&& self.text(ident.span).eq_ignore_ascii_case(b"important")
					{
						self.shift();
						let after = self.peek_significant();
						if matches!(
							after.kind,
							TokenKind::Semicolon | TokenKind::RightBrace | TokenKind::Error
						) {
							important = true;
							continue;
						}
						// not at the end of the declaration after all, both
						// tokens are ordinary values
						self.values.push(tok);
						self.values.push(ident);
						continue;
					}
					self.values.push(tok);
				}
				kind => {
					if kind.opens_block() {
						depth += 1;
					} else if kind.closes_block() {
						depth = depth.saturating_sub(1);
					}
					self.values.push(tok);
					self.shift();
				}
			}
		}
		Event {
			kind: GrammarKind::Declaration,
			token: property,
			important,
		}
	}

	/// Skip a malformed declaration through the next `;`, or up to a closing
	/// `}`, and surface it as a localized error event.
	fn bad_declaration(&mut self, property: Token) -> Event {
		trace!("discarding malformed declaration");
		if self.err.is_none() {
			self.err = Some(Error::BadDeclaration);
		}
		loop {
			match self.peek(0).kind {
				TokenKind::Error | TokenKind::RightBrace => break,
				TokenKind::Semicolon => {
					self.shift();
					break;
				}
				_ => {
					self.shift();
				}
			}
		}
		self.event(GrammarKind::Error, property)
	}

	/// Collect the selector group of a qualified rule up to its `{`.
	///
	/// Whitespace between selector elements is kept as a single token (it is
	/// the descendant combinator); whitespace around `>`, `+`, `~` and `,`
	/// is dropped, as are comments. An attribute block `[…]` is consumed
	/// through its matching `]`.
	fn parse_ruleset_head(&mut self) -> Event {
		let mut pending_ws: Option<Token> = None;
		// suppress whitespace at the start and after combinators
		let mut after_combinator = true;
		loop {
			let tok = self.peek(0);
			match tok.kind {
				TokenKind::Error => return self.bad_qualified_rule(tok),
				TokenKind::LeftBrace => {
					self.shift();
					self.stack.push(State::Ruleset);
					return self.event(GrammarKind::BeginRuleset, tok);
				}
				TokenKind::Comma => {
					self.shift();
					self.values.push(tok);
					pending_ws = None;
					after_combinator = true;
				}
				TokenKind::Whitespace => {
					self.shift();
					if !after_combinator {
						pending_ws = Some(tok);
					}
				}
				TokenKind::Comment => {
					self.shift();
				}
				TokenKind::LeftBracket => {
					if let Some(ws) = pending_ws.take() {
						self.values.push(ws);
					}
					self.values.push(tok);
					self.shift();
					let mut depth = 1usize;
					while depth > 0 {
						let inner = self.peek(0);
						match inner.kind {
							TokenKind::Error => return self.bad_qualified_rule(inner),
							TokenKind::LeftBracket => depth += 1,
							TokenKind::RightBracket => depth -= 1,
							_ => {}
						}
						self.values.push(inner);
						self.shift();
					}
					after_combinator = false;
				}
				TokenKind::Delim if self.is_combinator(tok) => {
					pending_ws = None;
					self.values.push(tok);
					self.shift();
					after_combinator = true;
				}
				_ => {
					if let Some(ws) = pending_ws.take() {
						self.values.push(ws);
					}
					self.values.push(tok);
					self.shift();
					after_combinator = false;
				}
			}
		}
	}

	fn bad_qualified_rule(&mut self, token: Token) -> Event {
		trace!("qualified rule ended before its block");
		if self.err.is_none() {
			self.err = Some(Error::BadQualifiedRule);
		}
		self.event(GrammarKind::Error, token)
	}

	fn is_combinator(&self, tok: Token) -> bool {
		let text = self.text(tok.span);
		text == b">" || text == b"+" || text == b"~"
	}
}

/// Iterates the grammar events up to, and not including, the final error
/// event that ends the stream. Error events for recovered local violations
/// are yielded.
impl<'a, R: Read> Iterator for Parser<'a, R> {
	type Item = Event;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}
		let event = self.next_event();
		if self.done {
			return None;
		}
		Some(event)
	}
}
