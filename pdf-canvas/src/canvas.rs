use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::{CanvasError, Result};
use crate::fonts::{BuiltinFont, FontMetrics, TextStyle};
use crate::graphics::{Color, PageSize, Rect};
use crate::images::{self, ImageData, ImageFormat, ImageId};
use crate::objects::{ObjId, PdfObject};
use crate::writer::{escape_pdf_string, format_number, PdfWriter};

const CATALOG_OBJ: ObjId = ObjId(1, 0);
const PAGES_OBJ: ObjId = ObjId(2, 0);
const PAGE_OBJ: ObjId = ObjId(3, 0);
const FIRST_FONT_OBJ_NUM: u32 = 4;

/// A single page under construction.
///
/// Drawing calls append operators to the page's content stream in
/// call order, so later marks paint over earlier ones. Coordinates
/// use the PDF default space: origin bottom-left, units in points.
///
/// The header and the shared font objects go to the writer as soon as
/// the canvas is created; everything else is written by [`finish`].
///
/// [`finish`]: Canvas::finish
pub struct Canvas<W: Write> {
    writer: PdfWriter<W>,
    page: PageSize,
    info: Vec<(String, String)>,
    compress: bool,
    content: Vec<u8>,
    images: Vec<ImageData>,
    placed: BTreeSet<ImageId>,
    next_obj_num: u32,
}

impl Canvas<BufWriter<File>> {
    /// Create a canvas that writes to a new file at `path`.
    pub fn create<P: AsRef<Path>>(path: P, page: PageSize) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file), page)
    }
}

impl<W: Write> Canvas<W> {
    pub fn new(writer: W, page: PageSize) -> Result<Self> {
        let mut pdf = PdfWriter::new(writer);
        pdf.write_header()?;

        let mut next_obj_num = FIRST_FONT_OBJ_NUM;
        for font in BuiltinFont::ALL {
            let dict = PdfObject::dict(vec![
                ("Type", PdfObject::name("Font")),
                ("Subtype", PdfObject::name("Type1")),
                ("BaseFont", PdfObject::name(font.pdf_base_name())),
                ("Encoding", PdfObject::name("WinAnsiEncoding")),
            ]);
            pdf.write_object(ObjId::new(next_obj_num), &dict)?;
            next_obj_num += 1;
        }

        Ok(Canvas {
            writer: pdf,
            page,
            info: Vec::new(),
            compress: false,
            content: Vec::new(),
            images: Vec::new(),
            placed: BTreeSet::new(),
            next_obj_num,
        })
    }

    /// Add a document info entry ("Title", "Creator", ...).
    pub fn set_info(&mut self, key: &str, value: &str) -> &mut Self {
        self.info.push((key.to_string(), value.to_string()));
        self
    }

    /// Flate-compress the content stream and raw image samples.
    /// JPEG data keeps its own DCT encoding either way.
    pub fn set_compression(&mut self, enabled: bool) -> &mut Self {
        self.compress = enabled;
        self
    }

    fn push_op(&mut self, op: String) -> &mut Self {
        self.content.extend_from_slice(op.as_bytes());
        self
    }

    // ── graphics state ──────────────────────────────────────────────

    pub fn save_state(&mut self) -> &mut Self {
        self.push_op("q\n".to_string())
    }

    pub fn restore_state(&mut self) -> &mut Self {
        self.push_op("Q\n".to_string())
    }

    /// Fill color for shapes and text.
    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.push_op(format!("{} rg\n", color_operands(color)))
    }

    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        self.push_op(format!("{} RG\n", color_operands(color)))
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.push_op(format!("{} w\n", format_number(width)))
    }

    // ── paths ───────────────────────────────────────────────────────

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.push_op(format!(
            "{} {} {} {} re\n",
            format_number(x),
            format_number(y),
            format_number(width),
            format_number(height),
        ))
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push_op(format!("{} {} m\n", format_number(x), format_number(y)))
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.push_op(format!("{} {} l\n", format_number(x), format_number(y)))
    }

    pub fn fill(&mut self) -> &mut Self {
        self.push_op("f\n".to_string())
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.push_op("S\n".to_string())
    }

    pub fn fill_stroke(&mut self) -> &mut Self {
        self.push_op("B\n".to_string())
    }

    // ── text ────────────────────────────────────────────────────────

    /// Draw `text` with its baseline starting at (x, y).
    /// No wrapping or clipping: long strings run past whatever is
    /// to their right.
    pub fn place_text_styled(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> &mut Self {
        self.push_op(format!(
            "BT\n/{} {} Tf\n{} {} Td\n({}) Tj\nET\n",
            style.font.pdf_name(),
            format_number(style.font_size),
            format_number(x),
            format_number(y),
            escape_pdf_string(text),
        ))
    }

    /// Draw `text` horizontally centred on `center_x`.
    pub fn place_text_centered(
        &mut self,
        text: &str,
        center_x: f64,
        y: f64,
        style: &TextStyle,
    ) -> &mut Self {
        let width = FontMetrics::measure_text(text, style.font, style.font_size);
        self.place_text_styled(text, center_x - width / 2.0, y, style)
    }

    /// Draw `text` so that it ends at `right_x`.
    pub fn place_text_right(&mut self, text: &str, right_x: f64, y: f64, style: &TextStyle) -> &mut Self {
        let width = FontMetrics::measure_text(text, style.font, style.font_size);
        self.place_text_styled(text, right_x - width, y, style)
    }

    // ── images ──────────────────────────────────────────────────────

    /// Register an image from raw PNG or JPEG bytes. Nothing is written
    /// until the image is placed and the canvas finished.
    pub fn load_image_bytes(&mut self, data: Vec<u8>) -> Result<ImageId> {
        let image = images::load_image(data)?;
        log::debug!(
            "loaded {:?} image {}x{} ({})",
            image.format,
            image.width,
            image.height,
            if image.smask_data.is_some() { "with alpha" } else { "opaque" },
        );
        let id = ImageId(self.images.len());
        self.images.push(image);
        Ok(id)
    }

    pub fn load_image_file<P: AsRef<Path>>(&mut self, path: P) -> Result<ImageId> {
        let data = std::fs::read(path)?;
        self.load_image_bytes(data)
    }

    /// Natural size of a loaded image in pixels, or `None` if `image`
    /// was not loaded on this canvas.
    pub fn image_dimensions(&self, image: ImageId) -> Option<(u32, u32)> {
        self.images.get(image.0).map(|data| (data.width, data.height))
    }

    /// Draw an image scaled to fit inside `bounds`, aspect ratio kept
    /// and centred. Returns the rectangle actually covered.
    pub fn place_image(&mut self, image: ImageId, bounds: &Rect) -> Result<Rect> {
        let (w, h) = self
            .image_dimensions(image)
            .ok_or(CanvasError::UnknownImage(image.resource_name()))?;
        let placed = images::fit_within(w, h, bounds);
        self.placed.insert(image);
        self.push_op(format!(
            "q\n{} 0 0 {} {} {} cm\n/{} Do\nQ\n",
            format_number(placed.width),
            format_number(placed.height),
            format_number(placed.x),
            format_number(placed.y),
            image.resource_name(),
        ));
        Ok(placed)
    }

    // ── output ──────────────────────────────────────────────────────

    fn alloc_obj(&mut self) -> ObjId {
        let id = ObjId::new(self.next_obj_num);
        self.next_obj_num += 1;
        id
    }

    /// Write the page, its images, the document structure and the
    /// trailer, then flush and hand back the writer.
    pub fn finish(mut self) -> Result<W> {
        let content = std::mem::take(&mut self.content);
        let content_len = content.len();
        let content_id = self.alloc_obj();
        let stream = if self.compress {
            PdfObject::stream(vec![("Filter", PdfObject::name("FlateDecode"))], deflate(&content)?)
        } else {
            PdfObject::stream(vec![], content)
        };
        self.writer.write_object(content_id, &stream)?;

        let mut xobjects = Vec::new();
        for id in std::mem::take(&mut self.placed) {
            let obj = self.write_image(id)?;
            xobjects.push((id.resource_name(), PdfObject::Reference(obj)));
        }

        let fonts: Vec<(&str, PdfObject)> = BuiltinFont::ALL
            .iter()
            .enumerate()
            .map(|(i, font)| {
                (
                    font.pdf_name(),
                    PdfObject::Reference(ObjId::new(FIRST_FONT_OBJ_NUM + i as u32)),
                )
            })
            .collect();
        let mut resources = vec![("Font", PdfObject::dict(fonts))];
        let image_count = xobjects.len();
        if !xobjects.is_empty() {
            resources.push(("XObject", PdfObject::Dictionary(xobjects)));
        }

        let page_dict = PdfObject::dict(vec![
            ("Type", PdfObject::name("Page")),
            ("Parent", PAGES_OBJ.into()),
            ("MediaBox", PdfObject::rect(0.0, 0.0, self.page.width, self.page.height)),
            ("Contents", content_id.into()),
            ("Resources", PdfObject::dict(resources)),
        ]);
        self.writer.write_object(PAGE_OBJ, &page_dict)?;

        let info_id = if self.info.is_empty() {
            None
        } else {
            let id = self.alloc_obj();
            let entries: Vec<(&str, PdfObject)> = self
                .info
                .iter()
                .map(|(k, v)| (k.as_str(), PdfObject::literal_string(v)))
                .collect();
            self.writer.write_object(id, &PdfObject::dict(entries))?;
            Some(id)
        };

        let pages = PdfObject::dict(vec![
            ("Type", PdfObject::name("Pages")),
            ("Kids", PdfObject::array(vec![PAGE_OBJ.into()])),
            ("Count", PdfObject::Integer(1)),
        ]);
        self.writer.write_object(PAGES_OBJ, &pages)?;

        let catalog = PdfObject::dict(vec![
            ("Type", PdfObject::name("Catalog")),
            ("Pages", PAGES_OBJ.into()),
        ]);
        self.writer.write_object(CATALOG_OBJ, &catalog)?;

        self.writer.write_xref_and_trailer(CATALOG_OBJ, info_id)?;
        log::debug!(
            "finished {}x{} page: {} content bytes, {} image(s), {} bytes total",
            format_number(self.page.width),
            format_number(self.page.height),
            content_len,
            image_count,
            self.writer.current_offset(),
        );

        let mut out = self.writer.into_inner();
        out.flush()?;
        Ok(out)
    }

    /// Write one image XObject (and its soft mask) and return its id.
    fn write_image(&mut self, id: ImageId) -> Result<ObjId> {
        let smask_id = match self.images[id.0].smask_data.take() {
            Some(alpha) => {
                let obj_id = self.alloc_obj();
                let image = &self.images[id.0];
                let mut dict = image_dict(image.width, image.height, "DeviceGray");
                let data = if self.compress {
                    dict.push(("Filter", PdfObject::name("FlateDecode")));
                    deflate(&alpha)?
                } else {
                    alpha
                };
                self.writer.write_object(obj_id, &PdfObject::stream(dict, data))?;
                Some(obj_id)
            }
            None => None,
        };

        let obj_id = self.alloc_obj();
        let image = &mut self.images[id.0];
        let mut dict = image_dict(image.width, image.height, image.color_space.pdf_name());
        let raw = std::mem::take(&mut image.data);
        let data = match image.format {
            ImageFormat::Jpeg => {
                dict.push(("Filter", PdfObject::name("DCTDecode")));
                raw
            }
            ImageFormat::Png if self.compress => {
                dict.push(("Filter", PdfObject::name("FlateDecode")));
                deflate(&raw)?
            }
            ImageFormat::Png => raw,
        };
        if let Some(mask) = smask_id {
            dict.push(("SMask", mask.into()));
        }
        self.writer.write_object(obj_id, &PdfObject::stream(dict, data))?;
        Ok(obj_id)
    }
}

fn image_dict(width: u32, height: u32, color_space: &str) -> Vec<(&'static str, PdfObject)> {
    vec![
        ("Type", PdfObject::name("XObject")),
        ("Subtype", PdfObject::name("Image")),
        ("Width", PdfObject::Integer(width as i64)),
        ("Height", PdfObject::Integer(height as i64)),
        ("ColorSpace", PdfObject::name(color_space)),
        ("BitsPerComponent", PdfObject::Integer(8)),
    ]
}

fn color_operands(c: Color) -> String {
    format!("{} {} {}", format_number(c.r), format_number(c.g), format_number(c.b))
}

fn deflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
