use byteorder::{
	LE,
	ReadBytesExt
};

use std::fmt::{
	Display,
	Formatter,
	self
};

use rmk_core::rtag4;

#[cfg(feature = "import")]
pub use import::MD2ImportError;

/// Format magic, `b"IDP2"` read as a little endian integer.
pub const MAGIC: i32 = rtag4!(b"IDP2") as i32;
pub const VERSION: i32 = 8;

/// Byte size of the header record: [`FIELD_COUNT`] fields of 4 bytes each.
pub const HEADER_SIZE: usize = 68;
pub const FIELD_COUNT: usize = 17;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Header {
	pub magic: i32,
	pub version: i32,
	pub skin_width: i32,
	pub skin_height: i32,
	pub frame_size: i32,
	pub num_skin: i32,
	pub num_vertex: i32,
	pub num_tex_coords: i32,
	pub num_triangle: i32,
	pub num_gl_command: i32,
	pub num_frame: i32,
	pub offset_skins: i32,
	pub offset_tex_coords: i32,
	pub offset_triangles: i32,
	pub offset_frames: i32,
	pub offset_gl_commands: i32,
	pub offset_end: i32,
}

impl Header {
	/// Decodes the record field by field in file order. Nothing is validated,
	/// not even the magic.
	#[cfg(feature = "import")]
	pub fn read<R>(buf: &mut R) -> Result<Header, MD2ImportError>
	where
		R: ReadBytesExt,
	{
		Ok(Header {
			magic: buf.read_i32::<LE>()?,
			version: buf.read_i32::<LE>()?,
			skin_width: buf.read_i32::<LE>()?,
			skin_height: buf.read_i32::<LE>()?,
			frame_size: buf.read_i32::<LE>()?,
			num_skin: buf.read_i32::<LE>()?,
			num_vertex: buf.read_i32::<LE>()?,
			num_tex_coords: buf.read_i32::<LE>()?,
			num_triangle: buf.read_i32::<LE>()?,
			num_gl_command: buf.read_i32::<LE>()?,
			num_frame: buf.read_i32::<LE>()?,
			offset_skins: buf.read_i32::<LE>()?,
			offset_tex_coords: buf.read_i32::<LE>()?,
			offset_triangles: buf.read_i32::<LE>()?,
			offset_frames: buf.read_i32::<LE>()?,
			offset_gl_commands: buf.read_i32::<LE>()?,
			offset_end: buf.read_i32::<LE>()?,
		})
	}

	/// Returns the fields as (label, value) pairs in file order.
	pub fn fields(&self) -> [(&'static str, i32); FIELD_COUNT] {
		[
			("Magic", self.magic),
			("Version", self.version),
			("SkinWidth", self.skin_width),
			("SkinHeight", self.skin_height),
			("FrameSize", self.frame_size),
			("NumSkin", self.num_skin),
			("NumVertex", self.num_vertex),
			("NumTexCoords", self.num_tex_coords),
			("NumTriangle", self.num_triangle),
			("NumGlCommand", self.num_gl_command),
			("NumFrame", self.num_frame),
			("OffsetSkins", self.offset_skins),
			("OffsetTexCoords", self.offset_tex_coords),
			("OffsetTriangles", self.offset_triangles),
			("OffsetFrames", self.offset_frames),
			("OffsetGlCommands", self.offset_gl_commands),
			("OffsetEnd", self.offset_end),
		]
	}
}

impl Display for Header {
	/// One line per field: label, value and byte offset within the record
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		for (i, (label, value)) in self.fields().iter().enumerate() {
			writeln!(f, "{}:\t{} at {}", label, value, i * 4)?;
		}

		Ok(())
	}
}

#[cfg(feature = "import")]
pub mod import {
	use std::io;
	use thiserror::Error;

	#[derive(Debug, Error)]
	pub enum MD2ImportError {
		#[error("I/O error")]
		IO {
			#[from]
			source: io::Error,
		},
	}

	#[cfg(test)]
	mod tests {
		use crate::md2::{
			FIELD_COUNT,
			HEADER_SIZE,
			Header,
			MAGIC,
			VERSION
		};

		fn cube_header() -> Vec<u8> {
			let mut data = vec![];
			for v in [MAGIC, VERSION, 64, 64, 72, 1, 8, 24, 12, 39, 1, 68, 132, 228, 372, 444, 600] {
				data.extend_from_slice(&v.to_le_bytes());
			}

			data
		}

		#[test]
		fn test_constants() {
			assert_eq!(b"IDP2", &MAGIC.to_le_bytes());
			assert_eq!(8, VERSION);
			assert_eq!(HEADER_SIZE, FIELD_COUNT * 4);
		}

		#[test]
		fn test_read_header() {
			let data = cube_header();
			let header = Header::read(&mut data.as_slice()).unwrap();

			assert_eq!(MAGIC, header.magic);
			assert_eq!(VERSION, header.version);
			assert_eq!(64, header.skin_width);
			assert_eq!(64, header.skin_height);
			assert_eq!(72, header.frame_size);
			assert_eq!(1, header.num_skin);
			assert_eq!(8, header.num_vertex);
			assert_eq!(24, header.num_tex_coords);
			assert_eq!(12, header.num_triangle);
			assert_eq!(39, header.num_gl_command);
			assert_eq!(1, header.num_frame);
			assert_eq!(68, header.offset_skins);
			assert_eq!(132, header.offset_tex_coords);
			assert_eq!(228, header.offset_triangles);
			assert_eq!(372, header.offset_frames);
			assert_eq!(444, header.offset_gl_commands);
			assert_eq!(600, header.offset_end);
		}

		#[test]
		fn test_report_lines() {
			let data = cube_header();
			let header = Header::read(&mut data.as_slice()).unwrap();
			let report = header.to_string();
			let lines: Vec<&str> = report.lines().collect();

			assert_eq!(FIELD_COUNT, lines.len());
			assert_eq!("Magic:\t844121161 at 0", lines[0]);
			assert_eq!("NumSkin:\t1 at 20", lines[5]);
			assert_eq!("OffsetEnd:\t600 at 64", lines[16]);
		}
	}
}
