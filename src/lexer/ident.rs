//! Lexing of identifier-like productions: escapes, idents, at-keywords,
//! hashes, function heads and the hand-off to url tokens.

use std::io::Read;

use crate::token::TokenKind;

use super::unicode::byte;
use super::Lexer;

/// A byte that can start a name. Bytes at or above 0x80 are identifier
/// material without being decoded.
#[inline]
fn is_name_start(b: u8) -> bool {
	b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

/// A byte that can continue a name.
#[inline]
fn is_name_continue(b: u8) -> bool {
	b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b >= 0x80
}

impl<'a, R: Read> Lexer<'a, R> {
	/// Consume an escape sequence with the `\` still at the cursor.
	///
	/// An escape is a `\` followed by 1-6 hex digits and one optional
	/// whitespace, or by any single code point. A `\` before a newline or at
	/// the end of input is not an escape; the cursor is left untouched then.
	pub(crate) fn consume_escape(&mut self) -> bool {
		if self.buf.peek(0) != b'\\' {
			return false;
		}
		let next = self.buf.peek(1);
		if byte::is_newline(next) {
			return false;
		}
		if next == 0 && self.at_end(1) {
			return false;
		}
		self.buf.advance(1);
		if next.is_ascii_hexdigit() {
			let mut n = 0;
			while n < 6 && self.buf.peek(0).is_ascii_hexdigit() {
				self.buf.advance(1);
				n += 1;
			}
			// a single whitespace after the digits belongs to the escape
			match self.buf.peek(0) {
				byte::SP | byte::TAB => self.buf.advance(1),
				b if byte::is_newline(b) => self.consume_newline(),
				_ => {}
			}
		} else {
			let (_, width) = self.buf.peek_char(0);
			self.buf.advance(width);
		}
		true
	}

	/// Consume an identifier: an optional `-`, a name start or escape, then
	/// name continuation bytes and escapes.
	pub(crate) fn consume_ident(&mut self) -> bool {
		let save = self.buf.pos();
		self.eat(b'-');
		let b = self.buf.peek(0);
		if is_name_start(b) {
			self.buf.advance(1);
		} else if !(b == b'\\' && self.consume_escape()) {
			self.buf.move_to(save);
			return false;
		}
		self.consume_name_continue();
		true
	}

	fn consume_name_continue(&mut self) {
		loop {
			let b = self.buf.peek(0);
			if is_name_continue(b) {
				self.buf.advance(1);
				continue;
			}
			if b == b'\\' && self.consume_escape() {
				continue;
			}
			break;
		}
	}

	/// Consume at least one name byte or escape. Hash tokens use this, their
	/// name part has no start-byte restriction.
	fn consume_name(&mut self) -> bool {
		let b = self.buf.peek(0);
		if is_name_continue(b) {
			self.buf.advance(1);
		} else if !(b == b'\\' && self.consume_escape()) {
			return false;
		}
		self.consume_name_continue();
		true
	}

	/// Consume an ident and classify it by what follows: a function head on
	/// `(`, a url token when the ident spells `url`, a plain ident otherwise.
	pub(crate) fn consume_ident_like(&mut self) -> Option<TokenKind> {
		if !self.consume_ident() {
			return None;
		}
		if self.buf.peek(0) == b'(' {
			if self.buf.bytes().eq_ignore_ascii_case(b"url") {
				self.buf.advance(1);
				return Some(self.consume_url());
			}
			self.buf.advance(1);
			return Some(TokenKind::Function);
		}
		Some(TokenKind::Ident)
	}

	/// `#` then a name, or a lone delim.
	pub(crate) fn lex_hash(&mut self) -> TokenKind {
		let save = self.buf.pos();
		self.buf.advance(1);
		if self.consume_name() {
			TokenKind::Hash
		} else {
			self.buf.move_to(save);
			self.buf.advance(1);
			TokenKind::Delim
		}
	}

	/// `@` then an ident, or a lone delim.
	pub(crate) fn lex_at_keyword(&mut self) -> TokenKind {
		let save = self.buf.pos();
		self.buf.advance(1);
		if self.consume_ident() {
			TokenKind::AtKeyword
		} else {
			self.buf.move_to(save);
			self.buf.advance(1);
			TokenKind::Delim
		}
	}
}
