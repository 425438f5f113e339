/// A shorthand for punctuation-like token kinds.
macro_rules! t {
	(":") => {
		$crate::token::TokenKind::Colon
	};
	(";") => {
		$crate::token::TokenKind::Semicolon
	};
	(",") => {
		$crate::token::TokenKind::Comma
	};
	("[") => {
		$crate::token::TokenKind::LeftBracket
	};
	("]") => {
		$crate::token::TokenKind::RightBracket
	};
	("(") => {
		$crate::token::TokenKind::LeftParenthesis
	};
	(")") => {
		$crate::token::TokenKind::RightParenthesis
	};
	("{") => {
		$crate::token::TokenKind::LeftBrace
	};
	("}") => {
		$crate::token::TokenKind::RightBrace
	};
	("<!--") => {
		$crate::token::TokenKind::Cdo
	};
	("-->") => {
		$crate::token::TokenKind::Cdc
	};
	("||") => {
		$crate::token::TokenKind::Column
	};
	("~=") => {
		$crate::token::TokenKind::IncludeMatch
	};
	("|=") => {
		$crate::token::TokenKind::DashMatch
	};
	("^=") => {
		$crate::token::TokenKind::PrefixMatch
	};
	("$=") => {
		$crate::token::TokenKind::SuffixMatch
	};
	("*=") => {
		$crate::token::TokenKind::SubstringMatch
	};
}

pub(crate) use t;
