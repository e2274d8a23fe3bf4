use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

/// Reads a whole text file into a `String`.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	fs::read_to_string(filename)
}

/// Builds an output path inside `folder` from a file stem and an extension.
///
/// Example:
/// `out` + `"Facebook"` + `"png"` → `out/facebook.png`
///
/// The stem is lowercased and every character that is not alphanumeric,
/// `-` or `_` is replaced by `_`.
pub fn build_output_path<P: AsRef<Path>>(folder: P, stem: &str, extension: &str) -> io::Result<PathBuf> {
	let stem: String = stem
		.to_lowercase()
		.chars()
		.map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
		.collect();
	if stem.is_empty() {
		return Err(io::Error::new(io::ErrorKind::InvalidInput, "Output file has no name"));
	}

	let mut output = folder.as_ref().to_path_buf();
	output.push(stem);
	output.set_extension(extension);

	Ok(output)
}

/// Encodes an RGBA raster as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
	let mut bytes = Vec::new();
	image.write_to(&mut io::Cursor::new(&mut bytes), ImageFormat::Png)?;
	Ok(bytes)
}

/// Writes an RGBA raster as a PNG file, creating the parent folder if needed.
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<(), Box<dyn std::error::Error>> {
	let path = path.as_ref();
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent)?;
		}
	}
	fs::write(path, encode_png(image)?)?;
	Ok(())
}
