//! Command implementations and shared PNG frame helpers.

pub mod apply;
pub mod grade;
pub mod info;

use anyhow::{bail, Context, Result};
use lutcam_core::Frame;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Loads a PNG into an RGBA f32 frame, values normalized to [0, 1].
///
/// Accepts 8-bit and 16-bit RGB/RGBA; grayscale is expanded to RGB the way
/// a capture pipeline would hand it over.
pub fn load_frame(path: &Path) -> Result<Frame> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder.read_info().context("reading PNG header")?;

    let buf_size = reader
        .output_buffer_size()
        .context("cannot determine output buffer size")?;
    let mut buf = vec![0u8; buf_size];
    let info = reader.next_frame(&mut buf).context("decoding PNG")?;

    let width = info.width;
    let height = info.height;
    let pixels = &buf[..info.buffer_size()];

    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => {
            for px in pixels.chunks_exact(3) {
                data.extend_from_slice(&[u8_norm(px[0]), u8_norm(px[1]), u8_norm(px[2]), 1.0]);
            }
        }
        (png::ColorType::Rgba, png::BitDepth::Eight) => {
            for px in pixels.chunks_exact(4) {
                data.extend_from_slice(&[
                    u8_norm(px[0]),
                    u8_norm(px[1]),
                    u8_norm(px[2]),
                    u8_norm(px[3]),
                ]);
            }
        }
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => {
            for px in pixels.chunks_exact(6) {
                data.extend_from_slice(&[
                    u16_norm(px[0], px[1]),
                    u16_norm(px[2], px[3]),
                    u16_norm(px[4], px[5]),
                    1.0,
                ]);
            }
        }
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => {
            for px in pixels.chunks_exact(8) {
                data.extend_from_slice(&[
                    u16_norm(px[0], px[1]),
                    u16_norm(px[2], px[3]),
                    u16_norm(px[4], px[5]),
                    u16_norm(px[6], px[7]),
                ]);
            }
        }
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            for &g in pixels {
                let v = u8_norm(g);
                data.extend_from_slice(&[v, v, v, 1.0]);
            }
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            for px in pixels.chunks_exact(2) {
                let v = u8_norm(px[0]);
                data.extend_from_slice(&[v, v, v, u8_norm(px[1])]);
            }
        }
        (color_type, bit_depth) => {
            bail!("unsupported PNG layout: {:?} {:?}", color_type, bit_depth);
        }
    }

    Frame::from_data(width, height, data).context("building frame from PNG data")
}

/// Saves a frame as an 8-bit RGBA PNG with an sRGB chunk.
pub fn save_frame(path: &Path, frame: &Frame) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, frame.width(), frame.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder.write_header().context("writing PNG header")?;

    let u8_data: Vec<u8> = frame
        .data()
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8)
        .collect();

    png_writer
        .write_image_data(&u8_data)
        .context("writing PNG data")?;
    Ok(())
}

#[inline]
fn u8_norm(v: u8) -> f32 {
    v as f32 / 255.0
}

#[inline]
fn u16_norm(hi: u8, lo: u8) -> f32 {
    u16::from_be_bytes([hi, lo]) as f32 / 65535.0
}
