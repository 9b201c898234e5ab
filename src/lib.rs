pub mod icon;
pub mod iconset;

use std::fs::File;
use std::io;

/// Name of the file written into the current working directory.
pub const OUTPUT_FILE: &str = "favicon.ico";

/// Render the artwork, build the size variants and write `favicon.ico`
/// into the current working directory, overwriting any existing file.
pub fn create_favicon() -> io::Result<()> {
    let art = icon::render_favicon();
    let variants = iconset::scaled_variants(&art);
    // every container entry is re-derived from the 32x32 variant
    let mut file = File::create(OUTPUT_FILE)?;
    iconset::write_ico(&variants[1], &mut file)?;
    println!("Favicon created successfully!");
    Ok(())
}
