use jpeg_encoder::{ColorType, Encoder};

use crate::error::{Error, Result};

fn checked_dims(cols: u32, rows: u32) -> Result<(u16, u16)> {
    match (u16::try_from(cols), u16::try_from(rows)) {
        (Ok(c), Ok(r)) => Ok((c, r)),
        _ => Err(Error::pdf(format!(
            "{cols}x{rows} exceeds the JPEG size limit of {0}x{0}",
            u16::MAX
        ))),
    }
}

fn encode(data: &[u8], cols: u32, rows: u32, quality: u8, color: ColorType) -> Result<Vec<u8>> {
    let (cols, rows) = checked_dims(cols, rows)?;
    let mut buf = Vec::new();
    let encoder = Encoder::new(&mut buf, quality);
    encoder
        .encode(data, cols, rows, color)
        .map_err(Error::pdf)?;
    Ok(buf)
}

pub fn encode_gray_jpeg(cols: u32, rows: u32, data: &[u8], quality: u8) -> Result<Vec<u8>> {
    encode(data, cols, rows, quality, ColorType::Luma)
}

pub fn encode_rgb_jpeg(cols: u32, rows: u32, rgb_data: &[u8], quality: u8) -> Result<Vec<u8>> {
    encode(rgb_data, cols, rows, quality, ColorType::Rgb)
}
