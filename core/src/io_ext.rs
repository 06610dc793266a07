use std::io::{
	ErrorKind,
	Read
};

pub trait ReadBinExt: Read {
	/// Fills `buf` from the source, stopping early once no more bytes can be
	/// obtained. Interrupted reads are retried; any other read error ends the
	/// fill. Returns the number of bytes placed in `buf`; the rest of the
	/// buffer is left untouched.
	#[inline]
	fn read_fill(&mut self, buf: &mut [u8]) -> usize {
		let mut filled = 0;

		while filled < buf.len() {
			match self.read(&mut buf[filled..]) {
				Ok(0) => break,
				Ok(n) => filled += n,
				Err(e) if e.kind() == ErrorKind::Interrupted => continue,
				Err(_) => break,
			}
		}

		filled
	}
}

impl<R> ReadBinExt for R
where
	R: Read + ?Sized,
{
}
