//! Prints the header fields of an MD2 model file, each with its value and
//! byte offset within the record.

use std::{
	env,
	process
};

use rmk_models_idtech::{
	md2::MD2ImportError,
	read_md2,
	resolve_filename
};

fn main() {
	stderrlog::new()
		.verbosity(log::Level::Warn)
		.init()
		.unwrap();

	let Some(arg) = env::args().nth(1) else {
		eprintln!("Usage: md2_report <filename[.md2]>");
		process::exit(1);
	};

	let filename = resolve_filename(&arg);
	println!("MD2 Header Report for {}\n", filename);

	match read_md2(&filename) {
		Ok(header) => print!("{}", header),
		Err(MD2ImportError::IO { source }) => {
			eprintln!("Can't open file {}: {}", filename, source);
			process::exit(1);
		}
	}
}
