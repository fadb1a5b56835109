use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use pdf_canvas::{Canvas, CanvasError, Color, ImageId, Rect, TextStyle};

use crate::error::RenderError;
use crate::layout::{self, from_top, Badge};
use crate::options::RenderOptions;
use crate::palette;
use crate::record::{Company, EstimateRecord, LineItem, BREAKPOINT, LINE_ITEM};

/// What a successful file render produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub path: PathBuf,
    pub bytes: u64,
    /// Area covered by the logo, if one was drawn.
    pub logo: Option<Rect>,
}

/// A render into a caller-supplied writer.
#[derive(Debug)]
pub struct Rendered<W> {
    pub writer: W,
    pub logo: Option<Rect>,
}

/// Draws one estimate onto a US Letter page.
///
/// The page is painted top to bottom in a fixed order: letterhead,
/// logo, badges, addresses, table header, the line item, totals,
/// footer. Every position is absolute; nothing is measured against
/// the content except centred and right-aligned text.
pub struct DocumentRenderer<'a> {
    record: &'a EstimateRecord,
    compress: bool,
    creator: Option<String>,
}

impl<'a> DocumentRenderer<'a> {
    pub fn new(record: &'a EstimateRecord) -> Self {
        DocumentRenderer {
            record,
            compress: true,
            creator: None,
        }
    }

    pub fn with_options(record: &'a EstimateRecord, options: &RenderOptions) -> Self {
        DocumentRenderer::new(record)
            .compression(options.compress)
            .creator(&options.creator)
    }

    pub fn compression(mut self, enabled: bool) -> Self {
        self.compress = enabled;
        self
    }

    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self
    }

    /// Render to a new file at `output`. A missing `logo` is skipped;
    /// an unwritable `output` is an error.
    pub fn render_to_file(&self, output: &Path, logo: &Path) -> Result<RenderSummary, RenderError> {
        let output_error = |source: CanvasError| RenderError::Output {
            path: output.to_path_buf(),
            source,
        };

        let mut canvas = Canvas::create(output, layout::PAGE).map_err(output_error)?;
        let placed = self.paint(&mut canvas, logo)?;
        canvas.finish().map_err(output_error)?;

        let bytes = fs::metadata(output)
            .map_err(|e| output_error(e.into()))?
            .len();
        log::info!(
            "wrote estimate {} to {} ({} bytes, {})",
            self.record.estimate_number,
            output.display(),
            bytes,
            if placed.is_some() { "with logo" } else { "no logo" },
        );
        Ok(RenderSummary {
            path: output.to_path_buf(),
            bytes,
            logo: placed,
        })
    }

    /// Render into `writer` and hand it back once the document is
    /// complete.
    pub fn render_to_writer<W: Write>(&self, writer: W, logo: &Path) -> Result<Rendered<W>, RenderError> {
        let mut canvas = Canvas::new(writer, layout::PAGE)?;
        let placed = self.paint(&mut canvas, logo)?;
        let writer = canvas.finish()?;
        Ok(Rendered {
            writer,
            logo: placed,
        })
    }

    fn paint<W: Write>(&self, canvas: &mut Canvas<W>, logo: &Path) -> Result<Option<Rect>, RenderError> {
        let record = self.record;
        canvas.set_compression(self.compress);
        canvas.set_info("Title", &format!("Estimate {}", record.estimate_number));
        if let Some(creator) = &self.creator {
            canvas.set_info("Creator", creator);
        }

        draw_letterhead(canvas, &BREAKPOINT);
        let placed = match load_logo(canvas, logo)? {
            Some(image) => Some(canvas.place_image(image, &layout::logo_box())?),
            None => None,
        };
        draw_badge(
            canvas,
            &layout::ESTIMATE_BADGE,
            &format!("ESTIMATE {}", record.estimate_number),
        );
        draw_badge(canvas, &layout::DATE_BADGE, &format!("DATE {}", record.date));
        draw_addresses(canvas, record);
        draw_table_header(canvas);
        draw_line_item(canvas, &LINE_ITEM);
        draw_totals(canvas, record);
        draw_footer(canvas, &BREAKPOINT);
        Ok(placed)
    }
}

/// Render `record` to `output_path` with default settings.
pub fn render(
    output_path: impl AsRef<Path>,
    record: &EstimateRecord,
    logo_path: impl AsRef<Path>,
) -> Result<RenderSummary, RenderError> {
    DocumentRenderer::new(record).render_to_file(output_path.as_ref(), logo_path.as_ref())
}

pub fn render_with_options(record: &EstimateRecord, options: &RenderOptions) -> Result<RenderSummary, RenderError> {
    DocumentRenderer::with_options(record, options).render_to_file(&options.output, &options.logo)
}

/// Read the logo if there is a file at `path`. A missing or unreadable
/// file means "no logo"; a file that is not an image is an error.
fn load_logo<W: Write>(canvas: &mut Canvas<W>, path: &Path) -> Result<Option<ImageId>, RenderError> {
    if !path.is_file() {
        log::debug!("no logo at {}, skipping", path.display());
        return Ok(None);
    }
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("cannot read logo {}: {}; skipping", path.display(), e);
            return Ok(None);
        }
    };
    canvas
        .load_image_bytes(data)
        .map(Some)
        .map_err(|source| RenderError::Logo {
            path: path.to_path_buf(),
            source,
        })
}

fn draw_letterhead<W: Write>(canvas: &mut Canvas<W>, company: &Company) {
    let name = layout::company_name_style();
    for (line, offset) in company.name_lines.iter().zip(layout::COMPANY_NAME_OFFSETS) {
        canvas.place_text_styled(line, layout::LEFT_X, from_top(offset), &name);
    }
    let body = layout::body_style();
    for (line, offset) in company.contact_lines.iter().zip(layout::COMPANY_CONTACT_OFFSETS) {
        canvas.place_text_styled(line, layout::LEFT_X, from_top(offset), &body);
    }
}

/// Medium-blue box with white bold text, left-aligned inside it.
fn draw_badge<W: Write>(canvas: &mut Canvas<W>, badge: &Badge, text: &str) {
    canvas.save_state();
    canvas
        .set_fill_color(palette::medium_blue())
        .rect(
            layout::BADGE_X,
            from_top(badge.rect_offset),
            layout::BADGE_WIDTH,
            layout::BADGE_HEIGHT,
        )
        .fill_stroke();
    canvas.set_fill_color(Color::white()).place_text_styled(
        text,
        layout::BADGE_TEXT_X,
        from_top(badge.text_offset),
        &TextStyle::bold(badge.font_size),
    );
    canvas.restore_state();
}

fn draw_addresses<W: Write>(canvas: &mut Canvas<W>, record: &EstimateRecord) {
    let header = layout::section_header_style();
    let header_y = from_top(layout::ADDRESS_HEADER_OFFSET);
    canvas.place_text_styled("ADDRESS", layout::LEFT_X, header_y, &header);
    canvas.place_text_styled("SHIP TO", layout::SHIP_TO_X, header_y, &header);

    let body = layout::body_style();
    let bill_to = [
        &record.bill_to.name,
        &record.bill_to.company,
        &record.bill_to.address,
        &record.bill_to.city_state_zip,
    ];
    for (line, offset) in bill_to.into_iter().zip(layout::BILL_TO_OFFSETS) {
        canvas.place_text_styled(line, layout::LEFT_X, from_top(offset), &body);
    }
    let ship_to = [
        &record.ship_to.name,
        &record.ship_to.address,
        &record.ship_to.city_state_zip,
    ];
    for (line, offset) in ship_to.into_iter().zip(layout::SHIP_TO_OFFSETS) {
        canvas.place_text_styled(line, layout::SHIP_TO_X, from_top(offset), &body);
    }
}

fn draw_table_header<W: Write>(canvas: &mut Canvas<W>) {
    canvas.save_state();
    canvas
        .set_fill_color(palette::medium_blue())
        .rect(
            layout::TABLE_X,
            from_top(layout::TABLE_HEADER_RECT_OFFSET),
            layout::TABLE_WIDTH,
            layout::TABLE_HEADER_HEIGHT,
        )
        .fill_stroke();
    canvas.set_fill_color(Color::white());
    let label = layout::section_header_style();
    let y = from_top(layout::TABLE_HEADER_TEXT_OFFSET);
    for column in &layout::COLUMNS {
        canvas.place_text_styled(column.label, column.header_x, y, &label);
    }
    canvas.restore_state();
}

fn draw_line_item<W: Write>(canvas: &mut Canvas<W>, item: &LineItem) {
    let style = layout::line_item_style();
    let y = from_top(layout::LINE_ITEM_OFFSET);
    for (cell, column) in item.cells().iter().zip(&layout::COLUMNS) {
        canvas.place_text_styled(cell, column.cell_x, y, &style);
    }
}

fn draw_totals<W: Write>(canvas: &mut Canvas<W>, record: &EstimateRecord) {
    let body = layout::body_style();
    let rows = [
        ("SUBTOTAL", &record.subtotal, layout::SUBTOTAL_OFFSET, body),
        ("TAX", &record.tax, layout::TAX_OFFSET, body),
        ("TOTAL", &record.total, layout::TOTAL_OFFSET, TextStyle::bold(9.0)),
    ];
    for (label, value, offset, style) in rows {
        let y = from_top(offset);
        canvas.place_text_right(label, layout::TOTALS_LABEL_RIGHT, y, &style);
        canvas.place_text_right(value, layout::TOTALS_VALUE_RIGHT, y, &style);
    }
}

fn draw_footer<W: Write>(canvas: &mut Canvas<W>, company: &Company) {
    let style = layout::body_style();
    let center = layout::PAGE.width / 2.0;
    for (line, y) in company.footer_lines.iter().zip(layout::FOOTER_BASELINES) {
        canvas.place_text_centered(line, center, y, &style);
    }
}
