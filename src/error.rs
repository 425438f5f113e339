//! Error types and human readable error rendering.

use std::fmt;

use thiserror::Error;

use crate::common::{line_of, Location};

/// The errors the lexer and parser can run into.
///
/// End of input is deliberately not part of this set. A clean end of the
/// source is signaled by `is_eof()` returning true while `err()` returns
/// `None`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// The look-ahead window would have to grow past the configured maximum.
	#[error("buffer required more than the configured maximum capacity")]
	BufferExceeded,
	/// A `\` directly before a newline outside of a string.
	#[error("invalid escape, `\\` directly before a newline")]
	BadEscape,
	/// A declaration without a leading identifier or without a `:`.
	#[error("declaration is missing a property name or `:`")]
	BadDeclaration,
	/// A qualified rule which ended before its `{` block.
	#[error("qualified rule is missing its selector or `{{` block")]
	BadQualifiedRule,
	/// The byte source failed with an I/O error.
	#[error("transport: {0}")]
	Transport(#[from] std::io::Error),
}

impl Error {
	/// Render this error on its source with a location and an excerpt.
	///
	/// This walks the source to compute line and column, so it is meant for
	/// producing a final diagnostic, not for the parse hot path.
	pub fn render_on(&self, source: &[u8], offset: usize) -> RenderedError {
		let location = Location::of_offset(source, offset);
		let snippet = Snippet::from_source_location(source, location, None);
		RenderedError {
			text: self.to_string(),
			snippets: vec![snippet],
		}
	}
}

/// An error with source snippets attached, ready for display.
#[derive(Clone, Debug)]
pub struct RenderedError {
	pub text: String,
	pub snippets: Vec<Snippet>,
}

impl fmt::Display for RenderedError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{}", self.text)?;
		for s in self.snippets.iter() {
			writeln!(f, "{}", s)?;
		}
		Ok(())
	}
}

/// Whether the excerpt was cut down from its source line.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Truncation {
	/// The whole line fit.
	None,
	/// The start of the line was cut.
	Start,
	/// The end of the line was cut.
	End,
	/// Both ends of the line were cut.
	Both,
}

/// A one-line excerpt of the source with a caret marking a column.
#[derive(Clone, Debug)]
pub struct Snippet {
	/// The excerpted text, without its line's indentation.
	source: String,
	/// Which ends of the line were cut to fit the excerpt budget.
	truncation: Truncation,
	/// Where the excerpt came from.
	location: Location,
	/// Column of the caret within the excerpt, in chars.
	caret: usize,
	/// How many columns the caret marks.
	width: usize,
	/// A short explanation printed after the caret.
	note: Option<String>,
}

impl Snippet {
	/// Widest the rendered excerpt may be, ellipses included.
	const EXCERPT_LEN: usize = 60;
	/// Caret columns beyond this cut the start of the line.
	const MAX_CARET_COLUMN: usize = 40;

	pub fn from_source_location(
		source: &[u8],
		location: Location,
		note: Option<&'static str>,
	) -> Self {
		let mut start = 0;
		for _ in 1..location.line {
			start += line_of(source, start).len() + 1;
		}
		let line = String::from_utf8_lossy(line_of(source, start));
		let (excerpt, truncation, caret) = Self::excerpt(&line, location.column - 1);

		Snippet {
			source: excerpt,
			truncation,
			location,
			caret,
			width: 1,
			note: note.map(|x| x.into()),
		}
	}

	/// Cut the line down to a window of at most [`Snippet::EXCERPT_LEN`]
	/// chars around the caret column.
	///
	/// Returns the window, how the line was cut, and the caret column within
	/// the window.
	fn excerpt(line: &str, column: usize) -> (String, Truncation, usize) {
		// how much context survives to the left of a far-right caret
		const LEAD_IN: usize = 10;

		let mut chars: Vec<char> = line.trim_end().chars().collect();
		// the indentation carries no information, unless the caret sits in it
		let indent = chars
			.iter()
			.take_while(|c| c.is_whitespace())
			.count()
			.min(column);
		chars.drain(..indent);
		let mut caret = column - indent;

		let mut cut_start = false;
		if caret > Self::MAX_CARET_COLUMN {
			let cut = (caret - LEAD_IN).min(chars.len());
			chars.drain(..cut);
			caret -= cut;
			cut_start = true;
		}

		let budget = Self::EXCERPT_LEN - if cut_start { 3 } else { 0 };
		let mut cut_end = false;
		if chars.len() > budget {
			chars.truncate(budget - 3);
			cut_end = true;
		}

		let truncation = match (cut_start, cut_end) {
			(false, false) => Truncation::None,
			(true, false) => Truncation::Start,
			(false, true) => Truncation::End,
			(true, true) => Truncation::Both,
		};
		(chars.into_iter().collect(), truncation, caret)
	}
}

impl fmt::Display for Snippet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let gutter = self.location.line.to_string();
		let (lead, tail) = match self.truncation {
			Truncation::None => ("", ""),
			Truncation::Start => ("...", ""),
			Truncation::End => ("", "..."),
			Truncation::Both => ("...", "..."),
		};
		writeln!(f, "{:width$} |", "", width = gutter.len())?;
		writeln!(f, "{gutter} | {lead}{}{tail}", self.source)?;
		write!(f, "{:width$} | ", "", width = gutter.len())?;
		write!(f, "{:pad$}", "", pad = lead.len() + self.caret)?;
		for _ in 0..self.width {
			f.write_str("^")?;
		}
		if let Some(note) = &self.note {
			write!(f, " {note}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn snippet_at(source: &[u8], byte: u8) -> Snippet {
		let offset = source.iter().position(|x| *x == byte).unwrap();
		let location = Location::of_offset(source, offset);
		Snippet::from_source_location(source, location, None)
	}

	#[test]
	fn indentation_is_dropped() {
		let snippet = snippet_at(b"a {\n\tcolor: red;\n}", b'c');
		assert_eq!(snippet.truncation, Truncation::None);
		assert_eq!(snippet.caret, 0);
		assert_eq!(snippet.source.as_str(), "color: red;");
	}

	#[test]
	fn a_far_right_caret_cuts_the_start() {
		let mut line = b".item-".to_vec();
		line.extend(std::iter::repeat(b'a').take(60));
		line.extend(b" !");

		let snippet = snippet_at(&line, b'!');
		assert_eq!(snippet.truncation, Truncation::Start);
		assert_eq!(snippet.caret, 10);
		assert_eq!(snippet.source.as_str(), "aaaaaaaaa !");
	}

	#[test]
	fn a_long_tail_cuts_the_end() {
		let mut line = b"\tfont-family: ".to_vec();
		for i in 0..12 {
			if i > 0 {
				line.extend(b", ");
			}
			line.extend(format!("'Font{i}'").as_bytes());
		}
		line.push(b';');

		let snippet = snippet_at(&line, b'\'');
		assert_eq!(snippet.truncation, Truncation::End);
		assert_eq!(snippet.caret, 13);
		assert_eq!(
			snippet.source.as_str(),
			"font-family: 'Font0', 'Font1', 'Font2', 'Font3', 'Font4',"
		);
	}

	#[test]
	fn a_long_line_cuts_both_ends() {
		let mut line = Vec::new();
		line.extend(std::iter::repeat(b'a').take(50));
		line.extend(b" url(");
		line.extend(std::iter::repeat(b'b').take(80));
		line.push(b')');

		let snippet = snippet_at(&line, b'(');
		assert_eq!(snippet.truncation, Truncation::Both);
		assert_eq!(snippet.caret, 10);
		assert_eq!(snippet.source.len(), Snippet::EXCERPT_LEN - 6);
		assert!(snippet.source.starts_with("aaaaaa url("));
	}

	#[test]
	fn render_a_bad_escape() {
		let source = b"a {\n\tcontent: \"x\" \\\n;\n}";
		let offset = source.iter().position(|x| *x == b'\\').unwrap();

		let rendered = Error::BadEscape.render_on(source, offset);
		let expected = "invalid escape, `\\` directly before a newline
  |
2 | content: \"x\" \\
  |              ^
";
		assert_eq!(rendered.to_string(), expected);
	}

	#[test]
	fn render_with_a_note() {
		let source = b"em { }";
		let location = Location::of_offset(source, 3);
		let snippet = Snippet::from_source_location(source, location, Some("the block starts here"));
		assert_eq!(
			snippet.to_string(),
			"  |\n1 | em { }\n  |    ^ the block starts here"
		);
	}
}
