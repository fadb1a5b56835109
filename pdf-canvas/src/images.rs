use crate::error::ImageError;
use crate::graphics::Rect;

/// Handle to an image registered with a [`Canvas`](crate::Canvas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub(crate) usize);

impl ImageId {
    /// XObject resource name (`/Im1`, `/Im2`, ...).
    pub fn resource_name(&self) -> String {
        format!("Im{}", self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    DeviceRGB,
    DeviceGray,
}

impl ColorSpace {
    pub fn pdf_name(&self) -> &'static str {
        match self {
            ColorSpace::DeviceRGB => "DeviceRGB",
            ColorSpace::DeviceGray => "DeviceGray",
        }
    }
}

/// Image data ready to become an XObject.
#[derive(Debug)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub color_space: ColorSpace,
    /// 8-bit samples for PNG, the untouched file for JPEG.
    pub data: Vec<u8>,
    /// Alpha channel split out of RGBA / gray+alpha PNGs.
    pub smask_data: Option<Vec<u8>>,
}

/// Sniff the format from magic bytes.
pub fn detect_format(data: &[u8]) -> Result<ImageFormat, ImageError> {
    if data.len() < 4 {
        return Err(ImageError::TooShort(data.len()));
    }
    if data.starts_with(&[0xFF, 0xD8]) {
        Ok(ImageFormat::Jpeg)
    } else if data.starts_with(&[0x89, b'P', b'N', b'G']) {
        Ok(ImageFormat::Png)
    } else {
        Err(ImageError::UnknownFormat)
    }
}

pub fn load_image(data: Vec<u8>) -> Result<ImageData, ImageError> {
    match detect_format(&data)? {
        ImageFormat::Jpeg => parse_jpeg(data),
        ImageFormat::Png => parse_png(data),
    }
}

/// JPEG is passed through as DCTDecode, so only the frame header
/// is read.
fn parse_jpeg(data: Vec<u8>) -> Result<ImageData, ImageError> {
    let (width, height, components) = jpeg_dimensions(&data)?;
    let color_space = match components {
        1 => ColorSpace::DeviceGray,
        3 => ColorSpace::DeviceRGB,
        n => return Err(ImageError::JpegComponents(n)),
    };
    Ok(ImageData {
        width,
        height,
        format: ImageFormat::Jpeg,
        color_space,
        data,
        smask_data: None,
    })
}

/// Walk the marker segments up to the first SOF0..SOF3 and return
/// (width, height, components).
fn jpeg_dimensions(data: &[u8]) -> Result<(u32, u32, u8), ImageError> {
    let mut i = 0;
    while i + 1 < data.len() {
        if data[i] != 0xFF {
            i += 1;
            continue;
        }
        let marker = data[i + 1];
        match marker {
            0xC0..=0xC3 => {
                if i + 9 >= data.len() {
                    return Err(ImageError::Jpeg("frame header truncated"));
                }
                let height = u16::from_be_bytes([data[i + 5], data[i + 6]]) as u32;
                let width = u16::from_be_bytes([data[i + 7], data[i + 8]]) as u32;
                return Ok((width, height, data[i + 9]));
            }
            // Fill bytes and stuffed zeros.
            0xFF | 0x00 => i += 1,
            // SOI, EOI and RSTn carry no length.
            0xD8 | 0xD9 | 0xD0..=0xD7 => i += 2,
            _ => {
                if i + 3 >= data.len() {
                    break;
                }
                let seg_len = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
                i += 2 + seg_len;
            }
        }
    }
    Err(ImageError::Jpeg("no frame header found"))
}

fn parse_png(data: Vec<u8>) -> Result<ImageData, ImageError> {
    let mut decoder = png::Decoder::new(data.as_slice());
    // Palette and sub-byte images expand to 8-bit, 16-bit strips down.
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());
    let (color_type, _) = reader.output_color_type();

    let (color_space, samples, alpha) = match color_type {
        png::ColorType::Rgb => (ColorSpace::DeviceRGB, buf, None),
        png::ColorType::Grayscale => (ColorSpace::DeviceGray, buf, None),
        png::ColorType::Rgba => {
            let (rgb, alpha) = split_alpha(&buf, 4);
            (ColorSpace::DeviceRGB, rgb, Some(alpha))
        }
        png::ColorType::GrayscaleAlpha => {
            let (gray, alpha) = split_alpha(&buf, 2);
            (ColorSpace::DeviceGray, gray, Some(alpha))
        }
        other => return Err(ImageError::UnsupportedColor(other)),
    };

    Ok(ImageData {
        width: info.width,
        height: info.height,
        format: ImageFormat::Png,
        color_space,
        data: samples,
        smask_data: alpha,
    })
}

/// Split interleaved pixels whose last channel is alpha.
fn split_alpha(pixels: &[u8], channels: usize) -> (Vec<u8>, Vec<u8>) {
    let count = pixels.len() / channels;
    let mut color = Vec::with_capacity(count * (channels - 1));
    let mut alpha = Vec::with_capacity(count);
    for px in pixels.chunks_exact(channels) {
        color.extend_from_slice(&px[..channels - 1]);
        alpha.push(px[channels - 1]);
    }
    (color, alpha)
}

/// Largest rectangle with the image's aspect ratio that fits inside
/// `bounds`, centred on both axes.
pub fn fit_within(img_w: u32, img_h: u32, bounds: &Rect) -> Rect {
    let (iw, ih) = (img_w as f64, img_h as f64);
    if iw <= 0.0 || ih <= 0.0 {
        return Rect::new(bounds.x, bounds.y, 0.0, 0.0);
    }
    let scale = (bounds.width / iw).min(bounds.height / ih);
    let (w, h) = (iw * scale, ih * scale);
    Rect::new(
        bounds.x + (bounds.width - w) / 2.0,
        bounds.y + (bounds.height - h) / 2.0,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// SOI, an APP0 segment, then a baseline SOF0 for a 100x50 RGB frame.
    fn tiny_jpeg(components: u8) -> Vec<u8> {
        let mut v = vec![0xFF, 0xD8];
        v.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x04, 0x00, 0x00]);
        v.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08, 0x00, 0x32, 0x00, 0x64, components]);
        v.extend_from_slice(&[0u8; 12]);
        v.extend_from_slice(&[0xFF, 0xD9]);
        v
    }

    #[test]
    fn detects_formats() {
        assert_eq!(detect_format(&tiny_jpeg(3)).unwrap(), ImageFormat::Jpeg);
        assert_eq!(
            detect_format(&[0x89, b'P', b'N', b'G', 0x0D]).unwrap(),
            ImageFormat::Png
        );
        assert!(matches!(detect_format(b"GIF89a"), Err(ImageError::UnknownFormat)));
        assert!(matches!(detect_format(&[0xFF]), Err(ImageError::TooShort(1))));
    }

    #[test]
    fn jpeg_header_is_read_past_app_segment() {
        let img = load_image(tiny_jpeg(3)).unwrap();
        assert_eq!((img.width, img.height), (100, 50));
        assert_eq!(img.color_space, ColorSpace::DeviceRGB);
        assert_eq!(img.format, ImageFormat::Jpeg);
        assert!(img.smask_data.is_none());
    }

    #[test]
    fn grayscale_jpeg() {
        let img = load_image(tiny_jpeg(1)).unwrap();
        assert_eq!(img.color_space, ColorSpace::DeviceGray);
    }

    #[test]
    fn cmyk_jpeg_is_rejected() {
        assert!(matches!(
            load_image(tiny_jpeg(4)),
            Err(ImageError::JpegComponents(4))
        ));
    }

    #[test]
    fn jpeg_without_frame_header() {
        let data = vec![0xFF, 0xD8, 0xFF, 0xD9, 0x00, 0x00];
        assert!(matches!(load_image(data), Err(ImageError::Jpeg(_))));
    }

    #[test]
    fn truncated_png_is_an_error() {
        let data = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        assert!(matches!(load_image(data), Err(ImageError::Png(_))));
    }

    #[test]
    fn split_rgba() {
        let (rgb, alpha) = split_alpha(&[1, 2, 3, 4, 5, 6, 7, 8], 4);
        assert_eq!(rgb, vec![1, 2, 3, 5, 6, 7]);
        assert_eq!(alpha, vec![4, 8]);
    }

    #[test]
    fn fit_wide_image_into_logo_box() {
        // 400x100 into 200x80: width-bound, scale 0.5 -> 200x50
        let bounds = Rect::new(350.0, 662.0, 200.0, 80.0);
        let placed = fit_within(400, 100, &bounds);
        assert_eq!(placed, Rect::new(350.0, 677.0, 200.0, 50.0));
        assert!(bounds.contains(&placed));
    }

    #[test]
    fn fit_tall_image_is_centred_horizontally() {
        // 100x200 into 200x80: height-bound, scale 0.4 -> 40x80
        let bounds = Rect::new(350.0, 662.0, 200.0, 80.0);
        let placed = fit_within(100, 200, &bounds);
        assert_eq!(placed, Rect::new(430.0, 662.0, 40.0, 80.0));
    }

    #[test]
    fn fit_preserves_aspect_ratio() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 150.0);
        let placed = fit_within(100, 80, &bounds);
        assert!((placed.width / placed.height - 100.0 / 80.0).abs() < 1e-9);
        assert_eq!(placed.width, 187.5);
        assert_eq!(placed.height, 150.0);
    }

    #[test]
    fn resource_names_are_one_based() {
        assert_eq!(ImageId(0).resource_name(), "Im1");
        assert_eq!(ImageId(4).resource_name(), "Im5");
    }
}
