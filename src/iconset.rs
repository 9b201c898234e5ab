use std::io::{self, Write};

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::{RgbaImage, imageops};

/// Entry sizes declared in the container, smallest first.
pub const ICO_SIZES: [u32; 3] = [16, 32, 48];

/// Resample the artwork to every container size, smallest first.
pub fn scaled_variants(art: &RgbaImage) -> Vec<RgbaImage> {
    ICO_SIZES.iter().map(|&sz| scale_to(art, sz)).collect()
}

/// Square resample with Lanczos3; an already-matching size is cloned
/// instead of refiltered.
pub fn scale_to(art: &RgbaImage, sz: u32) -> RgbaImage {
    if art.width() == sz && art.height() == sz {
        art.clone()
    } else {
        imageops::resize(art, sz, sz, imageops::FilterType::Lanczos3)
    }
}

/// Encode `master` under every declared size and write the container.
/// Each entry is rescaled from the one master raster.
pub fn write_ico<W: Write>(master: &RgbaImage, writer: W) -> io::Result<()> {
    let mut dir = IconDir::new(ResourceType::Icon);
    for &sz in &ICO_SIZES {
        let scaled = scale_to(master, sz);
        let entry = IconImage::from_rgba_data(sz, sz, scaled.into_raw());
        dir.add_entry(IconDirEntry::encode(&entry)?);
    }
    dir.write(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon;
    use std::io::Cursor;

    fn encoded() -> Vec<u8> {
        let art = icon::render_favicon();
        let variants = scaled_variants(&art);
        let mut buf = Vec::new();
        write_ico(&variants[1], &mut buf).unwrap();
        buf
    }

    #[test]
    fn container_declares_three_sizes() {
        let buf = encoded();
        assert!(!buf.is_empty());

        let dir = IconDir::read(Cursor::new(&buf)).unwrap();
        let sizes: Vec<(u32, u32)> = dir
            .entries()
            .iter()
            .map(|e| (e.width(), e.height()))
            .collect();
        assert_eq!(sizes, vec![(16, 16), (32, 32), (48, 48)]);
    }

    #[test]
    fn master_entry_survives_round_trip() {
        let art = icon::render_favicon();
        let mut buf = Vec::new();
        write_ico(&art, &mut buf).unwrap();

        let dir = IconDir::read(Cursor::new(&buf)).unwrap();
        let entry = dir.entries()[1].decode().unwrap();
        assert_eq!((entry.width(), entry.height()), (32, 32));
        assert_eq!(entry.rgba_data(), art.as_raw().as_slice());
    }

    #[test]
    fn decoded_entry_keeps_key_pixels() {
        let buf = encoded();
        let dir = IconDir::read(Cursor::new(&buf)).unwrap();
        let img = dir.entries()[1].decode().unwrap();
        let px = |x: u32, y: u32| {
            let i = ((y * img.width() + x) * 4) as usize;
            let d = img.rgba_data();
            [d[i], d[i + 1], d[i + 2], d[i + 3]]
        };

        // white play triangle at the center, transparent corner outside the disc
        assert_eq!(px(16, 16), [255, 255, 255, 255]);
        assert_eq!(px(0, 0)[3], 0);

        let blocks = [
            (4u32, 6u32),
            (4, 10),
            (4, 20),
            (4, 24),
            (26, 6),
            (26, 10),
            (26, 20),
            (26, 24),
        ];
        for (x0, y0) in blocks {
            for y in y0..y0 + 2 {
                for x in x0..x0 + 2 {
                    assert_eq!(px(x, y), [136, 136, 136, 255], "block at ({x0},{y0})");
                }
            }
        }
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(encoded(), encoded());
    }
}
