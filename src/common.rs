/// A human readable location inside the source.
///
/// Locations are 1 indexed, the first character on the first line being on
/// line 1 column 1. Columns count characters, not bytes.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Location {
	pub line: usize,
	/// In chars.
	pub column: usize,
}

impl Location {
	/// Returns the location of the given byte offset in the source.
	///
	/// Offsets pointing past the end of the source resolve to one past the
	/// last character of the last line.
	pub fn of_offset(source: &[u8], offset: usize) -> Self {
		let offset = offset.min(source.len());
		// Bytes of input prior to the line being iterated.
		let mut bytes_prior = 0;
		let mut line_idx = 0;
		for (i, line) in source.split(|x| *x == b'\n').enumerate() {
			// +1 for the '\n'
			let bytes_so_far = bytes_prior + line.len() + 1;
			line_idx = i;
			if bytes_so_far > offset {
				break;
			}
			bytes_prior = bytes_so_far;
		}
		let line_offset = offset - bytes_prior;
		let line = line_of(source, bytes_prior);
		let column = String::from_utf8_lossy(&line[..line_offset.min(line.len())])
			.chars()
			.count();
		// +1 because line and column are 1 indexed.
		Location {
			line: line_idx + 1,
			column: column + 1,
		}
	}
}

/// Returns the full line starting at the given byte offset, without its
/// terminating newline.
pub(crate) fn line_of(source: &[u8], line_start: usize) -> &[u8] {
	let rest = &source[line_start.min(source.len())..];
	match rest.iter().position(|x| *x == b'\n') {
		Some(x) => &rest[..x],
		None => rest,
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn of_offset_first_line() {
		let loc = Location::of_offset(b"color: red;", 7);
		assert_eq!(loc.line, 1);
		assert_eq!(loc.column, 8);
	}

	#[test]
	fn of_offset_later_line() {
		let source = b"a {\n\tcolor: red;\n}\n";
		let offset = source.iter().position(|x| *x == b'c').unwrap();
		let loc = Location::of_offset(source, offset);
		assert_eq!(loc.line, 2);
		assert_eq!(loc.column, 2);
	}

	#[test]
	fn of_offset_past_end() {
		let loc = Location::of_offset(b"a\nb", 100);
		assert_eq!(loc.line, 2);
		assert_eq!(loc.column, 2);
	}
}
