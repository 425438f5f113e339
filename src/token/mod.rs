//! Module specifying the token representation of the lexer.

use std::fmt;

mod mac;
pub(crate) use mac::t;

/// A location in the source passed to the lexer.
///
/// Offsets are positions in the byte stream, counted from the very first byte
/// the source produced. For in-memory sources they are plain indexes into the
/// input slice.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
	/// Offset in bytes from the start of the stream.
	pub offset: u64,
	/// The amount of bytes this location encompasses.
	pub len: u32,
}

impl Span {
	/// Create a new empty span.
	pub const fn empty() -> Self {
		Span {
			offset: 0,
			len: 0,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Create a span that covers the range of both spans as well as possible space inbetween.
	pub fn covers(self, other: Span) -> Span {
		let start = self.offset.min(other.offset);
		let end = (self.offset + self.len as u64).max(other.offset + other.len as u64);
		Span {
			offset: start,
			len: (end - start) as u32,
		}
	}

	/// Returns a zero-length span that starts after the current span.
	pub fn after(self) -> Span {
		Span {
			offset: self.offset + self.len as u64,
			len: 0,
		}
	}
}

/// The type of token.
///
/// This is the closed set of CSS Syntax Level 3 token categories. The `Error`
/// kind is returned once the lexer cannot start another token; whether that
/// means end of input, a transport failure or an invalid escape is
/// disambiguated through [`Lexer::err`](crate::Lexer::err).
#[repr(u8)]
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
	Error,
	Ident,
	/// An identifier directly followed by `(`, e.g. `rgb(`.
	Function,
	/// `@` followed by an identifier, e.g. `@media`.
	AtKeyword,
	/// `#` followed by name characters, e.g. `#fff`.
	Hash,
	String,
	/// A string terminated by an unescaped newline instead of its quote.
	BadString,
	/// A complete `url(…)` token, quotes resolved or unquoted.
	Url,
	BadUrl,
	/// A single character which did not start any longer token.
	Delim,
	Number,
	Percentage,
	/// A number directly followed by an identifier unit, e.g. `5px`.
	Dimension,
	/// `U+` followed by hex digits and optional `?` wildcards.
	UnicodeRange,
	/// `~=`
	IncludeMatch,
	/// `|=`
	DashMatch,
	/// `^=`
	PrefixMatch,
	/// `$=`
	SuffixMatch,
	/// `*=`
	SubstringMatch,
	/// `||`
	Column,
	Whitespace,
	/// `<!--`
	Cdo,
	/// `-->`
	Cdc,
	Colon,
	Semicolon,
	Comma,
	LeftBracket,
	RightBracket,
	LeftParenthesis,
	RightParenthesis,
	LeftBrace,
	RightBrace,
	/// `/* … */`, also produced for a comment left open at end of input.
	Comment,
}

/// An assertion statically checking that the size of TokenKind remains one byte.
const _TOKEN_KIND_SIZE_ASSERT: [(); 1] = [(); std::mem::size_of::<TokenKind>()];

impl TokenKind {
	/// Returns if tokens of this kind get a keyword id resolved for them in
	/// the token buffer.
	///
	/// For CSS that is at-keywords only; idents are matched downstream
	/// through [`keyword::property`](crate::keyword::property) by callers
	/// that opt in.
	pub fn is_keyword_bearing(&self) -> bool {
		matches!(self, TokenKind::AtKeyword)
	}

	/// Returns if this kind opens a block or function scope.
	pub(crate) fn opens_block(&self) -> bool {
		matches!(
			self,
			TokenKind::Function
				| TokenKind::LeftParenthesis
				| TokenKind::LeftBracket
				| TokenKind::LeftBrace
		)
	}

	/// Returns if this kind closes a block or function scope.
	pub(crate) fn closes_block(&self) -> bool {
		matches!(
			self,
			TokenKind::RightParenthesis | TokenKind::RightBracket | TokenKind::RightBrace
		)
	}

	pub fn as_str(&self) -> &'static str {
		match *self {
			TokenKind::Error => "Error",
			TokenKind::Ident => "Ident",
			TokenKind::Function => "Function",
			TokenKind::AtKeyword => "AtKeyword",
			TokenKind::Hash => "Hash",
			TokenKind::String => "String",
			TokenKind::BadString => "BadString",
			TokenKind::Url => "URL",
			TokenKind::BadUrl => "BadURL",
			TokenKind::Delim => "Delim",
			TokenKind::Number => "Number",
			TokenKind::Percentage => "Percentage",
			TokenKind::Dimension => "Dimension",
			TokenKind::UnicodeRange => "UnicodeRange",
			TokenKind::IncludeMatch => "IncludeMatch",
			TokenKind::DashMatch => "DashMatch",
			TokenKind::PrefixMatch => "PrefixMatch",
			TokenKind::SuffixMatch => "SuffixMatch",
			TokenKind::SubstringMatch => "SubstringMatch",
			TokenKind::Column => "Column",
			TokenKind::Whitespace => "Whitespace",
			TokenKind::Cdo => "CDO",
			TokenKind::Cdc => "CDC",
			TokenKind::Colon => "Colon",
			TokenKind::Semicolon => "Semicolon",
			TokenKind::Comma => "Comma",
			TokenKind::LeftBracket => "LeftBracket",
			TokenKind::RightBracket => "RightBracket",
			TokenKind::LeftParenthesis => "LeftParenthesis",
			TokenKind::RightParenthesis => "RightParenthesis",
			TokenKind::LeftBrace => "LeftBrace",
			TokenKind::RightBrace => "RightBrace",
			TokenKind::Comment => "Comment",
		}
	}
}

impl fmt::Display for TokenKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single lexed token: its kind and where its raw bytes live in the source.
///
/// The bytes themselves are resolved through the lexer or parser that
/// produced the token, see [`Lexer::bytes`](crate::Lexer::bytes) and
/// [`Parser::text`](crate::Parser::text).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
	pub kind: TokenKind,
	pub span: Span,
}

impl Token {
	/// Returns if the token signals that no further tokens can be produced.
	pub fn is_error(&self) -> bool {
		matches!(self.kind, TokenKind::Error)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn span_covers() {
		let a = Span {
			offset: 2,
			len: 3,
		};
		let b = Span {
			offset: 8,
			len: 1,
		};
		let c = a.covers(b);
		assert_eq!(c.offset, 2);
		assert_eq!(c.len, 7);
		assert_eq!(c, b.covers(a));
	}

	#[test]
	fn span_after() {
		let a = Span {
			offset: 2,
			len: 3,
		};
		assert_eq!(a.after().offset, 5);
		assert!(a.after().is_empty());
	}

	#[test]
	fn kind_names() {
		assert_eq!(t!("<!--").as_str(), "CDO");
		assert_eq!(t!("||").as_str(), "Column");
		assert_eq!(TokenKind::Url.as_str(), "URL");
	}
}
