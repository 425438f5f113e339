//! Lexing of quoted strings.

use std::io::Read;

use crate::token::TokenKind;

use super::unicode::byte;
use super::Lexer;

impl<'a, R: Read> Lexer<'a, R> {
	/// Lex a string with the opening quote at the cursor.
	///
	/// Ends at the matching quote, or before an unescaped newline as a bad
	/// string. A string left open at the end of input is still a string. A
	/// `\` directly before a newline is a line continuation.
	pub(crate) fn lex_string(&mut self, quote: u8) -> TokenKind {
		self.buf.advance(1);
		loop {
			let b = self.buf.peek(0);
			if b == quote {
				self.buf.advance(1);
				return TokenKind::String;
			}
			if byte::is_newline(b) {
				return TokenKind::BadString;
			}
			if b == 0 && self.at_end(0) {
				return TokenKind::String;
			}
			if b == b'\\' {
				if byte::is_newline(self.buf.peek(1)) {
					// line continuation
					self.buf.advance(1);
					self.consume_newline();
					continue;
				}
				if self.consume_escape() {
					continue;
				}
				// a lone `\` at the end of input
				self.buf.advance(1);
				continue;
			}
			self.buf.advance(1);
		}
	}
}
