//! Parser and buffer configuration.

use crate::buffer::{MAX_BUF, MIN_BUF};

/// Configuration for the streaming buffer and the parser's input mode.
///
/// The defaults parse a full stylesheet from a zero-copy window of at most
/// 1 MiB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
	/// Initial capacity of the streaming window in bytes.
	pub min_buf: usize,
	/// Hard cap on the streaming window; look-ahead past it fails with
	/// [`Error::BufferExceeded`](crate::Error::BufferExceeded).
	pub max_buf: usize,
	/// Parse a full stylesheet. When false the parser starts in inline
	/// declaration-list mode and does not recognize rulesets at the top
	/// level.
	pub stylesheet: bool,
	/// Deep-copy token bytes as they are lexed. Peeked tokens then stay
	/// readable across source refills without any release discipline.
	pub retain: bool,
}

impl Default for Config {
	#[inline]
	fn default() -> Self {
		Self::DEFAULT
	}
}

impl Config {
	/// Default configuration, usable in const contexts.
	pub const DEFAULT: Self = Self {
		min_buf: MIN_BUF,
		max_buf: MAX_BUF,
		stylesheet: true,
		retain: false,
	};

	/// Creates a new configuration with default values.
	#[inline]
	pub const fn new() -> Self {
		Self::DEFAULT
	}

	/// Sets the initial streaming window capacity.
	#[inline]
	pub const fn with_min_buf(mut self, bytes: usize) -> Self {
		self.min_buf = bytes;
		self
	}

	/// Sets the maximum streaming window capacity.
	#[inline]
	pub const fn with_max_buf(mut self, bytes: usize) -> Self {
		self.max_buf = bytes;
		self
	}

	/// Sets whether the input is a full stylesheet or an inline declaration
	/// list.
	#[inline]
	pub const fn with_stylesheet(mut self, stylesheet: bool) -> Self {
		self.stylesheet = stylesheet;
		self
	}

	/// Sets whether token bytes are deep-copied on emission.
	#[inline]
	pub const fn with_retention(mut self, retain: bool) -> Self {
		self.retain = retain;
		self
	}
}
