//! # PNG Writer
//!
//! Minimal encoder for 8-bit RGB truecolor: signature, IHDR, one IDAT
//! holding a zlib stream of filter-0 scanlines, IEND. The zlib stream uses
//! stored (uncompressed) deflate blocks with an Adler-32 trailer, which
//! keeps the writer a direct transcription of the container format.

use std::path::Path;

use anyhow::{Context, Result};

use crate::design::canvas::Raster;

const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Encode a raster as PNG bytes.
pub fn encode(raster: &Raster) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&SIGNATURE);

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&raster.width().to_be_bytes());
    ihdr.extend_from_slice(&raster.height().to_be_bytes());
    // bit depth 8, color type 2 (truecolor), default compression/filter/interlace
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);
    write_chunk(&mut out, b"IHDR", &ihdr);

    let raw = scanlines(raster);
    write_chunk(&mut out, b"IDAT", &zlib_stored(&raw));
    write_chunk(&mut out, b"IEND", &[]);
    out
}

/// Encode and write a raster to disk.
pub fn save(raster: &Raster, path: &Path) -> Result<()> {
    std::fs::write(path, encode(raster))
        .with_context(|| format!("failed to write PNG to {}", path.display()))
}

/// Filter byte 0 prefixed to every row.
fn scanlines(raster: &Raster) -> Vec<u8> {
    let stride = (raster.width() * 3) as usize;
    let mut raw = Vec::with_capacity(raster.height() as usize * (stride + 1));
    for row in raster.data().chunks(stride) {
        raw.push(0);
        raw.extend_from_slice(row);
    }
    raw
}

fn write_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    let mut crc = Crc32::new();
    crc.update(kind);
    crc.update(data);
    out.extend_from_slice(&crc.finish().to_be_bytes());
}

/// zlib container around stored deflate blocks (max 65535 bytes each).
fn zlib_stored(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + data.len() / 65535 * 5 + 16);
    // CMF/FLG: deflate, 32K window, no preset dictionary
    out.extend_from_slice(&[0x78, 0x01]);
    let mut chunks = data.chunks(65535).peekable();
    if data.is_empty() {
        out.extend_from_slice(&[0x01, 0x00, 0x00, 0xff, 0xff]);
    }
    while let Some(block) = chunks.next() {
        let last = chunks.peek().is_none();
        out.push(u8::from(last));
        let len = block.len() as u16;
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&(!len).to_le_bytes());
        out.extend_from_slice(block);
    }
    out.extend_from_slice(&adler32(data).to_be_bytes());
    out
}

/// Adler-32 checksum over the uncompressed stream.
fn adler32(data: &[u8]) -> u32 {
    const MOD: u32 = 65521;
    let (mut a, mut b) = (1u32, 0u32);
    for chunk in data.chunks(5552) {
        for &byte in chunk {
            a += byte as u32;
            b += a;
        }
        a %= MOD;
        b %= MOD;
    }
    (b << 16) | a
}

/// Bitwise CRC-32 (polynomial 0xEDB88320), as the chunk trailer requires.
struct Crc32 {
    state: u32,
}

impl Crc32 {
    fn new() -> Self {
        Self { state: 0xffff_ffff }
    }

    fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.state ^= byte as u32;
            for _ in 0..8 {
                let low = self.state & 1;
                self.state >>= 1;
                if low != 0 {
                    self.state ^= 0xedb8_8320;
                }
            }
        }
    }

    fn finish(self) -> u32 {
        !self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::canvas::{Rgb, BLACK};

    #[test]
    fn test_signature_and_ihdr() {
        let raster = Raster::new(200, 150, BLACK);
        let png = encode(&raster);
        assert_eq!(&png[..8], &SIGNATURE);
        // IHDR immediately follows: length 13, type, then width/height
        assert_eq!(&png[8..12], &13u32.to_be_bytes());
        assert_eq!(&png[12..16], b"IHDR");
        assert_eq!(&png[16..20], &200u32.to_be_bytes());
        assert_eq!(&png[20..24], &150u32.to_be_bytes());
        // bit depth 8, truecolor
        assert_eq!(png[24], 8);
        assert_eq!(png[25], 2);
    }

    #[test]
    fn test_ends_with_iend() {
        let raster = Raster::new(4, 4, BLACK);
        let png = encode(&raster);
        let tail = &png[png.len() - 12..];
        assert_eq!(&tail[4..8], b"IEND");
    }

    #[test]
    fn test_crc32_known_vector() {
        // CRC-32 of "123456789" is 0xCBF43926
        let mut crc = Crc32::new();
        crc.update(b"123456789");
        assert_eq!(crc.finish(), 0xcbf4_3926);
    }

    #[test]
    fn test_adler32_known_vector() {
        // Adler-32 of "Wikipedia" is 0x11E60398
        assert_eq!(adler32(b"Wikipedia"), 0x11e6_0398);
    }

    #[test]
    fn test_zlib_stored_roundtrip_structure() {
        let data = vec![7u8; 70000];
        let z = zlib_stored(&data);
        assert_eq!(&z[..2], &[0x78, 0x01]);
        // first block: not last, 65535 bytes
        assert_eq!(z[2], 0);
        assert_eq!(u16::from_le_bytes([z[3], z[4]]), 65535);
        // trailer is the Adler-32 of the payload
        let trailer = u32::from_be_bytes(z[z.len() - 4..].try_into().unwrap());
        assert_eq!(trailer, adler32(&data));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let mut raster = Raster::new(8, 8, BLACK);
        raster.put(3, 3, Rgb::new(10, 20, 30));
        assert_eq!(encode(&raster), encode(&raster));
    }

    #[test]
    fn test_save_writes_file() {
        let dir = std::env::temp_dir().join("cathedral_png_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.png");
        let raster = Raster::new(16, 16, BLACK);
        save(&raster, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &SIGNATURE);
        std::fs::remove_file(&path).ok();
    }
}
