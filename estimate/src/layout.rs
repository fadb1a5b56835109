//! Fixed positions on the estimate page, in points.
//!
//! Vertical positions are given as distances down from the top edge
//! and turned into PDF coordinates with [`from_top`].

use pdf_canvas::{PageSize, Rect, TextStyle};

pub const PAGE: PageSize = PageSize::LETTER;

/// Baseline `offset` points below the top of the page.
pub fn from_top(offset: f64) -> f64 {
    PAGE.height - offset
}

pub const LEFT_X: f64 = 50.0;

// Letterhead
pub const COMPANY_NAME_OFFSETS: [f64; 2] = [50.0, 60.0];
pub const COMPANY_CONTACT_OFFSETS: [f64; 5] = [72.0, 84.0, 96.0, 108.0, 120.0];

/// Box the logo is fitted into.
pub fn logo_box() -> Rect {
    Rect::new(350.0, from_top(130.0), 200.0, 80.0)
}

/// A filled label with its text baseline.
#[derive(Debug, Clone, Copy)]
pub struct Badge {
    pub rect_offset: f64,
    pub text_offset: f64,
    pub font_size: f64,
}

pub const BADGE_X: f64 = 480.0;
pub const BADGE_TEXT_X: f64 = 483.0;
pub const BADGE_WIDTH: f64 = 90.0;
pub const BADGE_HEIGHT: f64 = 20.0;
pub const ESTIMATE_BADGE: Badge = Badge {
    rect_offset: 160.0,
    text_offset: 154.0,
    font_size: 10.0,
};
pub const DATE_BADGE: Badge = Badge {
    rect_offset: 185.0,
    text_offset: 179.0,
    font_size: 9.0,
};

// Address blocks
pub const SHIP_TO_X: f64 = 220.0;
pub const ADDRESS_HEADER_OFFSET: f64 = 175.0;
/// Name line first, then the rest of the block one gap lower.
pub const BILL_TO_OFFSETS: [f64; 4] = [190.0, 215.0, 227.0, 239.0];
pub const SHIP_TO_OFFSETS: [f64; 3] = [190.0, 215.0, 227.0];

// Line-item table
pub const TABLE_X: f64 = 50.0;
pub const TABLE_WIDTH: f64 = 510.0;
pub const TABLE_HEADER_HEIGHT: f64 = 18.0;
pub const TABLE_HEADER_RECT_OFFSET: f64 = 280.0;
pub const TABLE_HEADER_TEXT_OFFSET: f64 = 275.0;
pub const LINE_ITEM_OFFSET: f64 = 300.0;

/// A table column: where its header label and its cells start.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub label: &'static str,
    pub header_x: f64,
    pub cell_x: f64,
}

pub const COLUMNS: [Column; 4] = [
    Column { label: "DESCRIPTION", header_x: 55.0, cell_x: 55.0 },
    Column { label: "QTY", header_x: 420.0, cell_x: 428.0 },
    Column { label: "RATE", header_x: 465.0, cell_x: 463.0 },
    Column { label: "AMOUNT", header_x: 515.0, cell_x: 515.0 },
];

// Totals, right-aligned against the table edge
pub const TOTALS_LABEL_RIGHT: f64 = 490.0;
pub const TOTALS_VALUE_RIGHT: f64 = TABLE_X + TABLE_WIDTH;
pub const SUBTOTAL_OFFSET: f64 = 325.0;
pub const TAX_OFFSET: f64 = 339.0;
pub const TOTAL_OFFSET: f64 = 355.0;

// Footer baselines, measured from the bottom edge
pub const FOOTER_BASELINES: [f64; 2] = [50.0, 38.0];

pub fn company_name_style() -> TextStyle {
    TextStyle::bold(9.0)
}

pub fn body_style() -> TextStyle {
    TextStyle::regular(8.0)
}

pub fn section_header_style() -> TextStyle {
    TextStyle::bold(9.0)
}

pub fn line_item_style() -> TextStyle {
    TextStyle::regular(7.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_convert_from_top() {
        assert_eq!(from_top(50.0), 742.0);
        assert_eq!(from_top(0.0), PAGE.height);
    }

    #[test]
    fn logo_box_sits_in_top_right() {
        let b = logo_box();
        assert_eq!((b.x, b.y, b.width, b.height), (350.0, 662.0, 200.0, 80.0));
        assert!(b.right() <= PAGE.width);
    }

    #[test]
    fn columns_run_left_to_right() {
        for pair in COLUMNS.windows(2) {
            assert!(pair[0].header_x < pair[1].header_x);
            assert!(pair[0].cell_x < pair[1].cell_x);
        }
    }

    #[test]
    fn table_fits_page() {
        assert_eq!(TOTALS_VALUE_RIGHT, 560.0);
        assert!(TOTALS_VALUE_RIGHT < PAGE.width);
    }
}
