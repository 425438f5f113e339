//! The shift buffer: a random access peek window over a streaming byte source.
//!
//! The buffer exposes the bytes of the source through [`ShiftBuffer::peek`]
//! relative to a movable cursor. The bytes between the shift position and the
//! cursor form the currently open token; [`ShiftBuffer::shift`] claims them
//! and restarts the window. For streaming sources the window refills and
//! grows on demand, bounded by a configurable maximum, and bytes are only
//! reclaimed once the consumer releases them with [`ShiftBuffer::free`].
//!
//! An in-memory source is used as-is: the window is the input slice, refills
//! are inhibited and `free` is a no-op.

use std::fmt;
use std::io::{self, Read};

use crate::error::Error;
use crate::token::Span;

/// Default initial capacity of the streaming window in bytes.
pub const MIN_BUF: usize = 1024;
/// Default maximum capacity of the streaming window in bytes.
pub const MAX_BUF: usize = 1024 * 1024;

enum Input<'a, R> {
	/// The whole source is available up front.
	Slice(&'a [u8]),
	/// A pull source filling an owned, reallocating window.
	Stream {
		src: R,
		data: Vec<u8>,
		/// Loaded bytes; `data[len..]` is free space.
		len: usize,
	},
}

/// A peekable byte window over a source, with explicit release of consumed
/// bytes.
///
/// Invariant: `reclaim <= start <= end <= loaded`, where `start..end` is the
/// open token and `end..loaded` is peeked but unclaimed.
pub struct ShiftBuffer<'a, R = io::Empty> {
	input: Input<'a, R>,
	/// Window index of the first byte of the open token.
	start: usize,
	/// Window index one past the last claimed byte. Moves backwards for
	/// backtracking.
	end: usize,
	/// Window index below which bytes may be discarded on compaction.
	reclaim: usize,
	/// Stream offset of window index 0.
	origin: u64,
	eof: bool,
	err: Option<Error>,
	max: usize,
}

impl<'a, R> fmt::Debug for ShiftBuffer<'a, R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ShiftBuffer")
			.field("offset", &self.offset())
			.field("pos", &self.pos())
			.field("loaded", &self.loaded())
			.field("eof", &self.eof)
			.finish()
	}
}

impl<'a> ShiftBuffer<'a> {
	/// Create a buffer over an in-memory source.
	///
	/// The slice is used directly as the window; no copies are made and the
	/// buffer is at end-of-file as soon as the slice is exhausted.
	pub fn from_slice(source: &'a [u8]) -> Self {
		ShiftBuffer {
			input: Input::Slice(source),
			start: 0,
			end: 0,
			reclaim: 0,
			origin: 0,
			eof: true,
			err: None,
			max: usize::MAX,
		}
	}
}

impl<R: Read> ShiftBuffer<'static, R> {
	/// Create a buffer over a streaming source with the default capacities.
	pub fn from_reader(source: R) -> Self {
		Self::with_capacity(source, MIN_BUF, MAX_BUF)
	}

	/// Create a buffer over a streaming source.
	///
	/// `min` is the initial window capacity, `max` the bound past which
	/// peeking fails with [`Error::BufferExceeded`].
	pub fn with_capacity(source: R, min: usize, max: usize) -> Self {
		let min = min.clamp(1, max.max(1));
		ShiftBuffer {
			input: Input::Stream {
				src: source,
				data: vec![0; min],
				len: 0,
			},
			start: 0,
			end: 0,
			reclaim: 0,
			origin: 0,
			eof: false,
			err: None,
			max: max.max(1),
		}
	}
}

impl<'a, R> ShiftBuffer<'a, R> {
	#[inline]
	fn loaded(&self) -> usize {
		match &self.input {
			Input::Slice(s) => s.len(),
			Input::Stream {
				len,
				..
			} => *len,
		}
	}

	#[inline]
	fn window(&self) -> &[u8] {
		match &self.input {
			Input::Slice(s) => s,
			Input::Stream {
				data,
				len,
				..
			} => &data[..*len],
		}
	}

	/// Advance the cursor by `n` already peeked bytes.
	#[inline]
	pub fn advance(&mut self, n: usize) {
		debug_assert!(self.end + n <= self.loaded());
		self.end = (self.end + n).min(self.loaded());
	}

	/// Move the cursor back to `pos` bytes past the start of the open token.
	///
	/// Used to restore the cursor after a failed transactional consume.
	#[inline]
	pub fn move_to(&mut self, pos: usize) {
		debug_assert!(self.start + pos <= self.loaded());
		self.end = self.start + pos;
	}

	/// Length of the open token so far.
	#[inline]
	pub fn pos(&self) -> usize {
		self.end - self.start
	}

	/// Stream offset of the start of the open token.
	#[inline]
	pub fn offset(&self) -> u64 {
		self.origin + self.start as u64
	}

	/// The bytes of the open token.
	#[inline]
	pub fn bytes(&self) -> &[u8] {
		&self.window()[self.start..self.end]
	}

	/// The bytes of the open token, which is then closed.
	///
	/// Equivalent to [`ShiftBuffer::bytes`] followed by
	/// [`ShiftBuffer::skip`].
	pub fn shift(&mut self) -> &[u8] {
		let start = self.start;
		self.start = self.end;
		&self.window()[start..self.end]
	}

	/// Close the open token and return its span in the stream.
	pub fn shift_span(&mut self) -> Span {
		let span = Span {
			offset: self.origin + self.start as u64,
			len: (self.end - self.start) as u32,
		};
		self.start = self.end;
		span
	}

	/// Discard the open token.
	#[inline]
	pub fn skip(&mut self) {
		self.start = self.end;
	}

	/// Release the first `n` unreleased bytes of the shifted region.
	///
	/// Spans below the release horizon may be reclaimed by the next refill
	/// and must not be resolved afterwards. No-op for in-memory sources.
	pub fn free(&mut self, n: usize) {
		if matches!(self.input, Input::Slice(_)) {
			return;
		}
		self.reclaim = (self.reclaim + n).min(self.start);
	}

	/// Returns if the source is exhausted and every loaded byte was claimed.
	#[inline]
	pub fn is_eof(&self) -> bool {
		self.is_eof_at(0)
	}

	/// Returns if offset `i` from the cursor is past the end of the source.
	///
	/// Only meaningful once a `peek(i)` has attempted to load that offset.
	#[inline]
	pub fn is_eof_at(&self, i: usize) -> bool {
		self.eof && self.end + i >= self.loaded()
	}

	/// The transport or capacity error, if one occurred. End of file is not
	/// an error.
	#[inline]
	pub fn err(&self) -> Option<&Error> {
		self.err.as_ref()
	}

	/// Resolve a span produced by [`ShiftBuffer::shift_span`] against the
	/// live window.
	///
	/// # Panics
	/// Panics if the span's bytes were released with
	/// [`ShiftBuffer::free`] and reclaimed since.
	pub fn span_bytes(&self, span: Span) -> &[u8] {
		let idx = span
			.offset
			.checked_sub(self.origin)
			.expect("span resolved after its bytes were reclaimed") as usize;
		&self.window()[idx..idx + span.len as usize]
	}
}

impl<'a, R: Read> ShiftBuffer<'a, R> {
	/// The byte at offset `i` from the cursor.
	///
	/// Returns the zero sentinel once the source is exhausted or has failed;
	/// [`ShiftBuffer::is_eof`] and [`ShiftBuffer::err`] disambiguate. A zero
	/// byte in the middle of the loaded region is returned as-is.
	pub fn peek(&mut self, i: usize) -> u8 {
		loop {
			if self.err.is_some() {
				return 0;
			}
			let idx = self.end + i;
			if idx < self.loaded() {
				return self.window()[idx];
			}
			if self.eof {
				return 0;
			}
			self.refill(i);
		}
	}

	/// Decode the 1-4 byte UTF-8 sequence at offset `i` from the cursor.
	///
	/// Returns the code point and the number of bytes it occupies. Bytes that
	/// do not form valid UTF-8 decode as a one byte replacement character.
	pub fn peek_char(&mut self, i: usize) -> (char, usize) {
		let b = self.peek(i);
		if b < 0x80 {
			return (b as char, 1);
		}
		let width = match b {
			0xC0..=0xDF => 2,
			0xE0..=0xEF => 3,
			0xF0..=0xF7 => 4,
			_ => return (char::REPLACEMENT_CHARACTER, 1),
		};
		let mut bytes = [0u8; 4];
		bytes[0] = b;
		for (j, b) in bytes[1..width].iter_mut().enumerate() {
			*b = self.peek(i + j + 1);
		}
		match std::str::from_utf8(&bytes[..width]) {
			Ok(s) => (s.chars().next().unwrap(), width),
			Err(_) => (char::REPLACEMENT_CHARACTER, 1),
		}
	}

	/// Grow and refill the streaming window so that the byte at cursor
	/// offset `i` is loaded, or record why it cannot be.
	fn refill(&mut self, i: usize) {
		let needed = self.end + i + 1;
		let Input::Stream {
			src,
			data,
			len,
		} = &mut self.input
		else {
			unreachable!("refill on an in-memory source")
		};
		if needed > data.len() {
			let keep_from = self.reclaim;
			let keep = *len - keep_from;
			let required = needed - keep_from;
			if required > self.max {
				self.err = Some(Error::BufferExceeded);
				return;
			}
			if required > data.len() || 2 * keep > data.len() {
				// live bytes dominate the region, double it
				let mut cap = (data.len() * 2).max(1);
				while cap < required {
					cap *= 2;
				}
				let cap = cap.min(self.max).max(required);
				let mut grown = vec![0; cap];
				grown[..keep].copy_from_slice(&data[keep_from..*len]);
				*data = grown;
			} else if keep_from > 0 {
				data.copy_within(keep_from..*len, 0);
			}
			if keep_from > 0 {
				*len = keep;
				self.origin += keep_from as u64;
				self.start -= keep_from;
				self.end -= keep_from;
				self.reclaim = 0;
			}
		}
		let target = self.end + i;
		while target >= *len {
			match src.read(&mut data[*len..]) {
				Ok(0) => {
					self.eof = true;
					return;
				}
				Ok(n) => *len += n,
				Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
				Err(e) => {
					self.err = Some(Error::Transport(e));
					return;
				}
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	/// A reader handing out at most `chunk` bytes per call.
	struct Trickle<'a> {
		data: &'a [u8],
		chunk: usize,
	}

	impl Read for Trickle<'_> {
		fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
			let n = self.chunk.min(self.data.len()).min(buf.len());
			buf[..n].copy_from_slice(&self.data[..n]);
			self.data = &self.data[n..];
			Ok(n)
		}
	}

	#[test]
	fn slice_basics() {
		let mut buf = ShiftBuffer::from_slice(b"abcdef");
		assert_eq!(buf.peek(0), b'a');
		assert_eq!(buf.peek(5), b'f');
		assert_eq!(buf.peek(6), 0);
		assert!(!buf.is_eof());
		buf.advance(3);
		assert_eq!(buf.pos(), 3);
		assert_eq!(buf.bytes(), b"abc");
		assert_eq!(buf.shift(), b"abc");
		assert_eq!(buf.pos(), 0);
		assert_eq!(buf.peek(0), b'd');
		buf.advance(3);
		buf.skip();
		assert_eq!(buf.peek(0), 0);
		assert!(buf.is_eof());
		assert!(buf.err().is_none());
	}

	#[test]
	fn shift_is_bytes_then_skip() {
		let mut a = ShiftBuffer::from_slice(b"hello world");
		let mut b = ShiftBuffer::from_slice(b"hello world");
		a.advance(5);
		b.advance(5);
		let shifted = a.shift().to_vec();
		let bytes = b.bytes().to_vec();
		b.skip();
		assert_eq!(shifted, bytes);
		assert_eq!(a.pos(), b.pos());
		assert_eq!(a.peek(0), b.peek(0));
	}

	#[test]
	fn move_roundtrip_is_noop() {
		let mut buf = ShiftBuffer::from_slice(b"some input");
		buf.advance(4);
		let pos = buf.pos();
		let byte = buf.peek(0);
		buf.advance(3);
		buf.move_to(pos);
		assert_eq!(buf.pos(), pos);
		assert_eq!(buf.peek(0), byte);
	}

	#[test]
	fn peek_does_not_claim() {
		let mut buf = ShiftBuffer::from_slice(b"xyz");
		buf.advance(1);
		let before = buf.bytes().to_vec();
		buf.peek(1);
		assert_eq!(buf.bytes(), &before[..]);
	}

	#[test]
	fn stream_refill_and_growth() {
		let data: Vec<u8> = (0..200u8).collect();
		let src = Trickle {
			data: &data,
			chunk: 7,
		};
		let mut buf = ShiftBuffer::with_capacity(src, 4, 1024);
		// peeking far ahead forces several refills and reallocations
		assert_eq!(buf.peek(150), 150);
		assert_eq!(buf.peek(0), 0u8);
		buf.advance(151);
		let span = buf.shift_span();
		assert_eq!(span.offset, 0);
		assert_eq!(span.len, 151);
		assert_eq!(buf.span_bytes(span), &data[..151]);
		assert_eq!(buf.peek(0), 151);
		assert_eq!(buf.peek(49), 0);
		assert!(!buf.is_eof());
		assert_eq!(buf.peek(50), 0);
		assert!(buf.err().is_none());
	}

	#[test]
	fn spans_survive_growth_until_freed() {
		let data: Vec<u8> = (0..100u8).collect();
		let src = Trickle {
			data: &data,
			chunk: 3,
		};
		let mut buf = ShiftBuffer::with_capacity(src, 4, 1024);
		buf.peek(9);
		buf.advance(10);
		let first = buf.shift_span();
		// grow well past the initial capacity
		assert_eq!(buf.peek(60), 70);
		assert_eq!(buf.span_bytes(first), &data[..10]);
		// release the first token, compaction may now reclaim it
		buf.free(first.len as usize);
		assert_eq!(buf.peek(89), 99);
		assert_eq!(buf.peek(90), 0);
		assert!(buf.err().is_none());
	}

	#[test]
	fn max_capacity_is_enforced() {
		let data = [1u8; 64];
		let src = Trickle {
			data: &data,
			chunk: 64,
		};
		let mut buf = ShiftBuffer::with_capacity(src, 4, 16);
		// a window of exactly the maximum is fine
		assert_eq!(buf.peek(15), 1);
		assert!(buf.err().is_none());
		// one byte more is not
		assert_eq!(buf.peek(16), 0);
		assert!(matches!(buf.err(), Some(Error::BufferExceeded)));
		// the error is sticky
		assert_eq!(buf.peek(0), 0);
	}

	#[test]
	fn freed_bytes_let_the_window_slide() {
		let data = [7u8; 640];
		let src = Trickle {
			data: &data,
			chunk: 64,
		};
		let mut buf = ShiftBuffer::with_capacity(src, 4, 16);
		// consume the whole stream in small tokens, freeing as we go; the
		// window never exceeds the 16 byte maximum
		let mut total = 0;
		loop {
			if buf.peek(0) == 0 && buf.is_eof() {
				break;
			}
			buf.peek(7);
			buf.advance(8);
			let span = buf.shift_span();
			buf.free(span.len as usize);
			total += span.len as usize;
		}
		assert_eq!(total, 640);
		assert!(buf.err().is_none());
	}

	#[test]
	fn transport_error_is_sticky() {
		struct Failing;
		impl Read for Failing {
			fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
				Err(io::Error::other("broken pipe"))
			}
		}
		let mut buf = ShiftBuffer::from_reader(Failing);
		assert_eq!(buf.peek(0), 0);
		assert!(matches!(buf.err(), Some(Error::Transport(_))));
		assert!(!buf.is_eof());
		assert_eq!(buf.peek(0), 0);
	}

	#[test]
	fn peek_char_decodes_multibyte() {
		let mut buf = ShiftBuffer::from_slice("aé€".as_bytes());
		assert_eq!(buf.peek_char(0), ('a', 1));
		assert_eq!(buf.peek_char(1), ('é', 2));
		assert_eq!(buf.peek_char(3), ('€', 3));
	}
}
