//! Whole-pipeline tests: streaming and in-memory parity, retention parity,
//! round-trip idempotence and resource bounds.

use std::io::{self, Read};

use styleparse::{Config, Error, GrammarKind, Lexer, Location, Parser, Token, TokenKind};

/// A reader handing out one byte per call, the worst case for refills.
struct OneByte<'a> {
	data: &'a [u8],
}

impl Read for OneByte<'_> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		if self.data.is_empty() || buf.is_empty() {
			return Ok(0);
		}
		buf[0] = self.data[0];
		self.data = &self.data[1..];
		Ok(1)
	}
}

const SHEETS: &[&[u8]] = &[
	b"a { color: red; border: 0; }",
	b"@media print { .c { width: 5px; } }",
	b"@import \"a.css\";\nh1, h2 > em { margin: 0 auto !important; }\n",
	b"/* note */ ul li[data-x='1'] { background: url(img.png) no-repeat; }",
	b"@supports (display: grid) { div { gap: calc(1px + 2%); } }",
	b"<!-- a { content: \"}\" } -->",
];

fn lex_all<R: Read>(mut lexer: Lexer<'_, R>) -> Vec<(TokenKind, u64, u32, Vec<u8>)> {
	let mut out = Vec::new();
	loop {
		let tok = lexer.next_token();
		if tok.is_error() {
			break;
		}
		out.push((
			tok.kind,
			tok.span.offset,
			tok.span.len,
			lexer.bytes(tok.span).to_vec(),
		));
	}
	out
}

type Recorded = (GrammarKind, Vec<u8>, Vec<(TokenKind, Vec<u8>)>, bool);

fn record<R: Read>(parser: &mut Parser<'_, R>) -> Vec<Recorded> {
	let mut out = Vec::new();
	while let Some(event) = parser.next() {
		let token = parser.text(event.token.span).to_vec();
		let values = parser
			.values()
			.iter()
			.map(|t| (t.kind, parser.text(t.span).to_vec()))
			.collect();
		out.push((event.kind, token, values, event.important));
	}
	out
}

#[test]
fn streaming_and_in_memory_tokens_agree() {
	for &sheet in SHEETS {
		let in_memory = lex_all(Lexer::new(sheet));
		let streamed = lex_all(Lexer::from_reader(OneByte {
			data: sheet,
		}));
		assert_eq!(in_memory, streamed, "for {:?}", String::from_utf8_lossy(sheet));
	}
}

#[test]
fn streaming_and_in_memory_events_agree() {
	for &sheet in SHEETS {
		let in_memory = record(&mut Parser::new(sheet));
		let streamed = record(&mut Parser::from_reader(OneByte {
			data: sheet,
		}));
		assert_eq!(in_memory, streamed, "for {:?}", String::from_utf8_lossy(sheet));
	}
}

#[test]
fn retention_and_zero_copy_agree() {
	for &sheet in SHEETS {
		let zero_copy = record(&mut Parser::new(sheet));
		let retained = record(&mut Parser::with_config(
			sheet,
			Config::new().with_retention(true),
		));
		let streamed_retained = record(&mut Parser::from_reader_with_config(
			OneByte {
				data: sheet,
			},
			Config::new().with_retention(true),
		));
		assert_eq!(zero_copy, retained);
		assert_eq!(zero_copy, streamed_retained);
	}
}

#[test]
fn a_tight_window_still_parses_with_retention() {
	// with retention on, the shift buffer is released as tokens are lexed,
	// so a tiny window is enough as long as every single token fits
	let sheet = SHEETS[2];
	let config = Config::new().with_min_buf(4).with_max_buf(32).with_retention(true);
	let mut parser = Parser::from_reader_with_config(
		OneByte {
			data: sheet,
		},
		config,
	);
	let events = record(&mut parser);
	assert!(parser.err().is_none(), "err: {:?}", parser.err());
	assert_eq!(events, record(&mut Parser::new(sheet)));
}

#[test]
fn zero_copy_streaming_with_a_tight_window() {
	// much longer than the 32 byte window; consumed bytes are released per
	// event, so the window slides instead of growing
	let sheet: &[u8] =
		b"a { margin: 0; padding: 1px; border: 2px; color: red; width: 5px; height: 6px; }";
	let config = Config::new().with_min_buf(4).with_max_buf(32);
	let mut parser = Parser::from_reader_with_config(
		OneByte {
			data: sheet,
		},
		config,
	);
	let events = record(&mut parser);
	assert!(parser.err().is_none(), "err: {:?}", parser.err());
	assert_eq!(events, record(&mut Parser::new(sheet)));
}

#[test]
fn an_oversized_token_exceeds_the_window() {
	let mut sheet = b"p: ".to_vec();
	sheet.extend(std::iter::repeat(b'x').take(100));
	sheet.push(b';');
	let config = Config::new().with_min_buf(4).with_max_buf(32).with_stylesheet(false);
	let mut parser = Parser::from_reader_with_config(
		OneByte {
			data: &sheet,
		},
		config,
	);
	while parser.next().is_some() {}
	assert!(matches!(parser.err(), Some(Error::BufferExceeded)));
}

#[test]
fn tokenizing_concatenates_back_to_the_source() {
	for &sheet in SHEETS {
		let mut all = Vec::new();
		let mut lexer = Lexer::new(sheet);
		loop {
			let tok = lexer.next_token();
			if tok.is_error() {
				break;
			}
			all.extend_from_slice(lexer.bytes(tok.span));
		}
		assert_eq!(&all, sheet);
	}
}

/// Canonical single-space serialization of value tokens.
fn join<R: Read>(parser: &Parser<'_, R>, toks: &[Token]) -> String {
	let mut out = String::new();
	for (i, t) in toks.iter().enumerate() {
		if i > 0 {
			let glue_after = matches!(
				toks[i - 1].kind,
				TokenKind::Function | TokenKind::LeftParenthesis | TokenKind::LeftBracket
			);
			let glue_before = matches!(
				t.kind,
				TokenKind::RightParenthesis
					| TokenKind::RightBracket
					| TokenKind::Comma
					| TokenKind::Colon | TokenKind::Semicolon
			);
			if !glue_after && !glue_before {
				out.push(' ');
			}
		}
		out.push_str(&String::from_utf8_lossy(parser.text(t.span)));
	}
	out
}

/// Selector serialization: tokens verbatim, whitespace collapsed to one
/// space.
fn join_selectors<R: Read>(parser: &Parser<'_, R>, toks: &[Token]) -> String {
	let mut out = String::new();
	for t in toks {
		if t.kind == TokenKind::Whitespace {
			out.push(' ');
		} else {
			out.push_str(&String::from_utf8_lossy(parser.text(t.span)));
		}
	}
	out
}

fn serialize(source: &[u8]) -> String {
	let mut parser = Parser::new(source);
	let mut out = String::new();
	while let Some(event) = parser.next() {
		match event.kind {
			GrammarKind::AtRule | GrammarKind::BeginAtRule => {
				out.push_str(&String::from_utf8_lossy(parser.text(event.token.span)));
				let prelude = join(&parser, parser.values());
				if !prelude.is_empty() {
					out.push(' ');
					out.push_str(&prelude);
				}
				if event.kind == GrammarKind::BeginAtRule {
					out.push('{');
				} else {
					out.push(';');
				}
			}
			GrammarKind::BeginRuleset => {
				out.push_str(&join_selectors(&parser, parser.values()));
				out.push('{');
			}
			GrammarKind::EndAtRule | GrammarKind::EndRuleset => out.push('}'),
			GrammarKind::Declaration => {
				out.push_str(&String::from_utf8_lossy(parser.property()));
				out.push(':');
				out.push_str(&join(&parser, parser.values()));
				if event.important {
					out.push_str(" !important");
				}
				out.push(';');
			}
			GrammarKind::Token => {
				out.push_str(&String::from_utf8_lossy(parser.text(event.token.span)));
			}
			GrammarKind::Error => {}
		}
	}
	out
}

#[test]
fn serialization_is_idempotent() {
	for &sheet in SHEETS {
		let once = serialize(sheet);
		let twice = serialize(once.as_bytes());
		assert_eq!(once, twice, "for {:?}", String::from_utf8_lossy(sheet));
		// and the event streams agree from then on
		assert_eq!(
			record(&mut Parser::new(once.as_bytes())),
			record(&mut Parser::new(twice.as_bytes())),
		);
	}
}

#[test]
fn token_offsets_agree_with_the_position_reporter() {
	let sheet = b"a {\n\tcolor: red;\n\tborder: 0;\n}\n.c { margin: 0; }\n";
	let mut lexer = Lexer::new(sheet);
	loop {
		let line = lexer.line();
		let tok = lexer.next_token();
		if tok.is_error() {
			break;
		}
		let loc = Location::of_offset(sheet, tok.span.offset as usize);
		assert_eq!(loc.line, line, "token {:?}", String::from_utf8_lossy(lexer.bytes(tok.span)));
	}
}

#[test]
fn convenience_entry_points() {
	let sheet = b"a { color: red; }";
	assert_eq!(
		record(&mut styleparse::parse(sheet)),
		record(&mut Parser::new(sheet)),
	);
	assert_eq!(
		record(&mut styleparse::parse_inline(b"color: red;")),
		record(&mut Parser::new_inline(b"color: red;")),
	);
	assert_eq!(styleparse::tokenize(sheet).count(), Lexer::new(sheet).count());
}

#[test]
fn errors_render_with_a_caret() {
	let sheet = b"a {\n\tcolor red;\n}\n";
	let mut parser = Parser::new(sheet);
	let mut offset = None;
	while let Some(event) = parser.next() {
		if event.kind == GrammarKind::Error {
			offset = Some(event.token.span.offset as usize);
		}
	}
	let offset = offset.expect("the malformed declaration was reported");
	let err = parser.err().expect("the error is on record");
	assert!(matches!(err, Error::BadDeclaration));
	let rendered = err.render_on(sheet, offset).to_string();
	assert!(rendered.contains("2 | "), "{rendered}");
	assert!(rendered.contains('^'), "{rendered}");
}
