//! The first-byte dispatch of the tokenizer.

use std::io::Read;

use crate::token::{t, TokenKind};

use super::unicode::byte;
use super::Lexer;

impl<'a, R: Read> Lexer<'a, R> {
	/// Lex the next token, starting from the given byte.
	///
	/// Tries the productions that can start with the byte in order and falls
	/// back to a single-byte delim token.
	pub(crate) fn lex_byte(&mut self, first: u8) -> TokenKind {
		match first {
			byte::SP | byte::TAB | byte::LF | byte::CR | byte::FF => self.lex_whitespace(),
			b':' => {
				self.buf.advance(1);
				t!(":")
			}
			b';' => {
				self.buf.advance(1);
				t!(";")
			}
			b',' => {
				self.buf.advance(1);
				t!(",")
			}
			b'(' => {
				self.buf.advance(1);
				t!("(")
			}
			b')' => {
				self.buf.advance(1);
				t!(")")
			}
			b'[' => {
				self.buf.advance(1);
				t!("[")
			}
			b']' => {
				self.buf.advance(1);
				t!("]")
			}
			b'{' => {
				self.buf.advance(1);
				t!("{")
			}
			b'}' => {
				self.buf.advance(1);
				t!("}")
			}
			b'#' => self.lex_hash(),
			b'"' | b'\'' => self.lex_string(first),
			b'.' | b'+' => match self.consume_numeric() {
				Some(kind) => kind,
				None => self.lex_delim(),
			},
			b'-' => {
				if let Some(kind) = self.consume_numeric() {
					kind
				} else if let Some(kind) = self.consume_ident_like() {
					kind
				} else if self.buf.peek(1) == b'-' && self.buf.peek(2) == b'>' {
					self.buf.advance(3);
					t!("-->")
				} else {
					self.lex_delim()
				}
			}
			b'@' => self.lex_at_keyword(),
			b'$' | b'*' | b'^' | b'~' => {
				if self.buf.peek(1) == b'=' {
					self.buf.advance(2);
					match first {
						b'$' => t!("$="),
						b'*' => t!("*="),
						b'^' => t!("^="),
						_ => t!("~="),
					}
				} else {
					self.lex_delim()
				}
			}
			b'/' => {
				if self.buf.peek(1) == b'*' {
					self.lex_comment()
				} else {
					self.lex_delim()
				}
			}
			b'<' => {
				if self.buf.peek(1) == b'!' && self.buf.peek(2) == b'-' && self.buf.peek(3) == b'-'
				{
					self.buf.advance(4);
					t!("<!--")
				} else {
					self.lex_delim()
				}
			}
			b'\\' => {
				if let Some(kind) = self.consume_ident_like() {
					kind
				} else {
					// a `\` directly before a newline cannot start anything
					if byte::is_newline(self.buf.peek(1)) {
						self.set_bad_escape();
					}
					self.lex_delim()
				}
			}
			b'u' | b'U' => {
				if self.consume_unicode_range() {
					TokenKind::UnicodeRange
				} else if let Some(kind) = self.consume_ident_like() {
					kind
				} else {
					self.lex_delim()
				}
			}
			b'|' => match self.buf.peek(1) {
				b'=' => {
					self.buf.advance(2);
					t!("|=")
				}
				b'|' => {
					self.buf.advance(2);
					t!("||")
				}
				_ => self.lex_delim(),
			},
			_ => {
				if let Some(kind) = self.consume_numeric() {
					kind
				} else if let Some(kind) = self.consume_ident_like() {
					kind
				} else {
					self.lex_delim()
				}
			}
		}
	}

	/// The universal fallback: a single byte delim token.
	fn lex_delim(&mut self) -> TokenKind {
		self.buf.advance(1);
		TokenKind::Delim
	}

	fn lex_whitespace(&mut self) -> TokenKind {
		while byte::is_whitespace(self.buf.peek(0)) {
			self.buf.advance(1);
		}
		TokenKind::Whitespace
	}

	/// Eats `/* … */`. A comment left open at the end of input is still a
	/// comment token.
	fn lex_comment(&mut self) -> TokenKind {
		self.buf.advance(2);
		loop {
			let b = self.buf.peek(0);
			if b == 0 && self.at_end(0) {
				break;
			}
			if b == b'*' && self.buf.peek(1) == b'/' {
				self.buf.advance(2);
				break;
			}
			self.buf.advance(1);
		}
		TokenKind::Comment
	}
}
