//! Bounded lookahead over the lexer's tokens.
//!
//! The buffer is a growable vector of token slots with a read cursor. Peeks
//! pull further tokens from the lexer; shifts advance the cursor. Consumed
//! bytes are released back to the shift buffer in one batch per grammar
//! event, which is what keeps the current event's payload resolvable in
//! streaming mode.

use std::io::Read;

use crate::keyword::{self, AtRuleKeyword};
use crate::lexer::Lexer;
use crate::token::{Span, Token};

/// A token slot: the token plus the keyword resolved at fill time for the
/// keyword-bearing kinds.
#[derive(Clone, Copy, Debug)]
struct Slot {
	token: Token,
	keyword: Option<AtRuleKeyword>,
}

/// Rolling copy of the lexed source, kept in retention mode so peeked bytes
/// stay stable across source refills.
struct Retained {
	/// Stream offset of `data[0]`.
	base: u64,
	data: Vec<u8>,
}

pub(crate) struct TokenBuffer {
	slots: Vec<Slot>,
	/// Read cursor into `slots`.
	cur: usize,
	retain: Option<Retained>,
	/// Bytes of consumed tokens not yet released to the shift buffer.
	pending: usize,
}

impl TokenBuffer {
	pub fn new(retain: bool) -> Self {
		TokenBuffer {
			slots: Vec::new(),
			cur: 0,
			retain: retain.then(|| Retained {
				base: 0,
				data: Vec::new(),
			}),
			pending: 0,
		}
	}

	/// The i-th upcoming token, pulling from the lexer as needed.
	///
	/// Never reads past an error token; peeks beyond it return the error
	/// token itself.
	pub fn peek<R: Read>(&mut self, i: usize, lexer: &mut Lexer<'_, R>) -> Token {
		while self.cur + i >= self.slots.len() {
			if self.slots.last().is_some_and(|s| s.token.is_error()) {
				break;
			}
			let token = lexer.next_token();
			let keyword = if token.kind.is_keyword_bearing() {
				// drop the leading `@` of the at-keyword
				keyword::at_rule(&lexer.bytes(token.span)[1..])
			} else {
				None
			};
			if let Some(retain) = &mut self.retain {
				retain.data.extend_from_slice(lexer.bytes(token.span));
				// the shift buffer copy is no longer needed
				lexer.free(token.span.len as usize);
			}
			self.slots.push(Slot {
				token,
				keyword,
			});
		}
		let idx = (self.cur + i).min(self.slots.len() - 1);
		self.slots[idx].token
	}

	/// The keyword resolved for the i-th upcoming token, if any.
	pub fn keyword_at<R: Read>(&mut self, i: usize, lexer: &mut Lexer<'_, R>) -> Option<AtRuleKeyword> {
		self.peek(i, lexer);
		let idx = (self.cur + i).min(self.slots.len() - 1);
		self.slots[idx].keyword
	}

	/// Consume the current token. Must only be called after peeking it, and
	/// never for the error token.
	pub fn shift(&mut self) -> Token {
		let slot = self.slots[self.cur];
		debug_assert!(!slot.token.is_error(), "shifted past the error token");
		self.cur += 1;
		if self.retain.is_none() {
			self.pending += slot.token.span.len as usize;
		}
		slot.token
	}

	/// Release everything consumed before this point.
	///
	/// Frees the shift buffer bytes of consumed tokens (zero-copy mode) or
	/// trims the retained window (retention mode), and compacts the slot
	/// vector down to the unconsumed suffix.
	pub fn commit<R: Read>(&mut self, lexer: &mut Lexer<'_, R>) {
		if let Some(retain) = &mut self.retain {
			let keep_from = self
				.slots
				.get(self.cur)
				.map(|s| s.token.span.offset)
				.unwrap_or(retain.base + retain.data.len() as u64);
			let gone = (keep_from - retain.base) as usize;
			retain.data.drain(..gone);
			retain.base = keep_from;
		} else if self.pending > 0 {
			lexer.free(self.pending);
			self.pending = 0;
		}
		self.slots.drain(..self.cur);
		self.cur = 0;
	}

	/// Resolve a span, from the retained window when retention is on.
	pub fn text<'l, R: Read>(&'l self, span: Span, lexer: &'l Lexer<'_, R>) -> &'l [u8] {
		match &self.retain {
			Some(retain) => {
				let idx = span
					.offset
					.checked_sub(retain.base)
					.expect("span resolved after its bytes were trimmed") as usize;
				&retain.data[idx..idx + span.len as usize]
			}
			None => lexer.bytes(span),
		}
	}
}
