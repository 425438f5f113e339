//! Module implementing the CSS tokenizer.
//!
//! The lexer takes a byte source and turns it into tokens, one per call to
//! [`Lexer::next_token`]. Tokens carry their raw source bytes as a [`Span`];
//! escapes are left unresolved. The lexer always returns a token: once the
//! source has no more bytes, or has failed, every call returns a token of
//! kind [`TokenKind::Error`] and [`Lexer::err`] tells the two apart.
//!
//! Compound productions are transactional. Each `consume_*` method either
//! claims the bytes of its production or leaves the cursor exactly where it
//! was, which is what makes the dispatch fallbacks in `byte.rs` possible
//! without per-attempt allocation.

mod byte;
mod ident;
mod number;
mod string;
pub(crate) mod unicode;
mod url;


use std::io::{self, Read};

use crate::buffer::ShiftBuffer;
use crate::config::Config;
use crate::error::Error;
use crate::token::{Span, Token, TokenKind};

use self::unicode::byte as b;

/// The CSS tokenizer.
pub struct Lexer<'a, R = io::Empty> {
	/// The shift buffer over the source bytes.
	pub(crate) buf: ShiftBuffer<'a, R>,
	/// Current 1-based line, advanced by the newlines inside emitted tokens.
	line: usize,
	/// Sticky escape error; buffer errors take precedence when reporting.
	err: Option<Error>,
}

impl<'a> Lexer<'a> {
	/// Create a lexer over an in-memory source.
	pub fn new(source: &'a [u8]) -> Self {
		Self::from_buffer(ShiftBuffer::from_slice(source))
	}
}

impl<R: Read> Lexer<'static, R> {
	/// Create a lexer over a streaming source with default buffer capacities.
	pub fn from_reader(source: R) -> Self {
		Self::from_buffer(ShiftBuffer::from_reader(source))
	}

	/// Create a lexer over a streaming source with configured capacities.
	pub fn from_reader_with_config(source: R, config: Config) -> Self {
		Self::from_buffer(ShiftBuffer::with_capacity(source, config.min_buf, config.max_buf))
	}
}

impl<'a, R: Read> Lexer<'a, R> {
	pub(crate) fn from_buffer(buf: ShiftBuffer<'a, R>) -> Self {
		Lexer {
			buf,
			line: 1,
			err: None,
		}
	}

	/// Returns the next token, driving the lexer forward.
	///
	/// Once the buffer has no more bytes and no token could be started this
	/// always returns a zero-length token of kind [`TokenKind::Error`];
	/// [`Lexer::err`] and [`Lexer::is_eof`] disambiguate why.
	pub fn next_token(&mut self) -> Token {
		debug_assert_eq!(self.buf.pos(), 0, "a previous token was left open");
		let byte = self.buf.peek(0);
		if byte == 0 && self.at_end(0) {
			return Token {
				kind: TokenKind::Error,
				span: Span {
					offset: self.buf.offset(),
					len: 0,
				},
			};
		}
		let kind = self.lex_byte(byte);
		self.finish_token(kind)
	}

	/// Builds a token of the given kind from the claimed bytes.
	///
	/// Counts the newlines inside the token and closes the buffer window.
	fn finish_token(&mut self, kind: TokenKind) -> Token {
		self.line += count_newlines(self.buf.bytes());
		Token {
			kind,
			span: self.buf.shift_span(),
		}
	}

	/// Current 1-based line, advanced on `\n`, `\f`, `\r` and `\r\n` (once).
	pub fn line(&self) -> usize {
		self.line
	}

	/// Returns if the source is exhausted.
	pub fn is_eof(&self) -> bool {
		self.buf.is_eof()
	}

	/// The first error encountered, if any. End of input is not an error.
	pub fn err(&self) -> Option<&Error> {
		self.buf.err().or(self.err.as_ref())
	}

	/// Resolve a token span against the live buffer window.
	pub fn bytes(&self, span: Span) -> &[u8] {
		self.buf.span_bytes(span)
	}

	/// Release the first `n` unreleased bytes of already emitted tokens.
	pub fn free(&mut self, n: usize) {
		self.buf.free(n);
	}

	/// Returns if offset `i` from the cursor is past the usable input, either
	/// end of stream or a failed source.
	pub(crate) fn at_end(&mut self, i: usize) -> bool {
		self.buf.peek(i) == 0 && (self.buf.is_eof_at(i) || self.buf.err().is_some())
	}

	/// Consume the next byte if it is the given byte. Returns whether it was.
	pub(crate) fn eat(&mut self, byte: u8) -> bool {
		if self.buf.peek(0) == byte {
			self.buf.advance(1);
			true
		} else {
			false
		}
	}

	/// Consume a single newline, counting `\r\n` as one.
	pub(crate) fn consume_newline(&mut self) {
		match self.buf.peek(0) {
			b::CR => {
				self.buf.advance(1);
				self.eat(b::LF);
			}
			b::LF | b::FF => self.buf.advance(1),
			_ => {}
		}
	}

	/// Record a bad escape. Only the first one is kept.
	pub(crate) fn set_bad_escape(&mut self) {
		if self.err.is_none() {
			self.err = Some(Error::BadEscape);
		}
	}
}

impl<'a, R: Read> Iterator for Lexer<'a, R> {
	type Item = Token;

	fn next(&mut self) -> Option<Self::Item> {
		let token = self.next_token();
		if token.is_error() {
			return None;
		}
		Some(token)
	}
}

/// Count line breaks, treating `\r\n` as a single break.
fn count_newlines(bytes: &[u8]) -> usize {
	let mut count = 0;
	let mut i = 0;
	while i < bytes.len() {
		match bytes[i] {
			b::LF | b::FF => count += 1,
			b::CR => {
				count += 1;
				if bytes.get(i + 1) == Some(&b::LF) {
					i += 1;
				}
			}
			_ => {}
		}
		i += 1;
	}
	count
}
