pub mod md2;

use std::fs::File;

use rmk_core::io_ext::ReadBinExt;

use md2::{
	HEADER_SIZE,
	Header
};

#[cfg(feature = "import")]
use md2::MD2ImportError;

/// Reads the header record from the start of the file at `filepath`.
///
/// Only the open can fail. A file shorter than [`HEADER_SIZE`] bytes is not
/// an error: the missing tail of the record reads as zero.
#[cfg(feature = "import")]
pub fn read_md2(filepath: &str) -> Result<Header, MD2ImportError> {
	let mut file = File::open(filepath)?;

	// A short file leaves the unread tail of the record zeroed
	let mut raw = [0; HEADER_SIZE];
	let count = file.read_fill(&mut raw);
	log::debug!("read {} header bytes from {}", count, filepath);
	if count < HEADER_SIZE {
		log::warn!("{}: header cut short at {} of {} bytes", filepath, count, HEADER_SIZE);
	}

	Header::read(&mut raw.as_slice())
}

/// Appends the default `.md2` extension to a filename carrying no extension.
/// A name containing any `.` is used verbatim.
pub fn resolve_filename(name: &str) -> String {
	if name.contains('.') {
		name.to_string()
	} else {
		format!("{}.md2", name)
	}
}
