//! The estimate being rendered and the fixed text around it.

/// Party the estimate is billed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillTo {
    pub name: String,
    pub company: String,
    pub address: String,
    pub city_state_zip: String,
}

/// Site the work ships to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipTo {
    pub name: String,
    pub address: String,
    pub city_state_zip: String,
}

/// One estimate. Monetary fields are display strings and are drawn
/// as given; nothing is summed or reformatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateRecord {
    pub estimate_number: String,
    pub date: String,
    pub bill_to: BillTo,
    pub ship_to: ShipTo,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

impl EstimateRecord {
    /// The Chardonnay Hills estimate this tool exists to print.
    pub fn sample() -> Self {
        EstimateRecord {
            estimate_number: "8571".to_string(),
            date: "12/09/2025".to_string(),
            bill_to: BillTo {
                name: "CHARDONNAY HILLS HOA-REC 2".to_string(),
                company: "Chardonnay Hills HOA".to_string(),
                address: "PO BOX 4579 DEPT. 104".to_string(),
                city_state_zip: "Houston, TX 77210-4579 US".to_string(),
            },
            ship_to: ShipTo {
                name: "CHARDONNAY HILLS HOA-REC 2".to_string(),
                address: "41067 Promenade Chardonnay Hills".to_string(),
                city_state_zip: "Temecula, CA 92591 US".to_string(),
            },
            subtotal: "1,561.11".to_string(),
            tax: "0.00".to_string(),
            total: "$1,561.11".to_string(),
        }
    }

    /// `Estimate_<number>.pdf`
    pub fn file_name(&self) -> String {
        format!("Estimate_{}.pdf", self.estimate_number)
    }

    /// Every string field, in drawing order.
    pub fn fields(&self) -> [&str; 12] {
        [
            &self.estimate_number,
            &self.date,
            &self.bill_to.name,
            &self.bill_to.company,
            &self.bill_to.address,
            &self.bill_to.city_state_zip,
            &self.ship_to.name,
            &self.ship_to.address,
            &self.ship_to.city_state_zip,
            &self.subtotal,
            &self.tax,
            &self.total,
        ]
    }
}

/// Appended to an amount that is subject to sales tax.
pub const TAX_MARKER: char = 'T';

/// A row of the line-item table. Kept apart from [`EstimateRecord`]:
/// the row is not derived from the record's totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem {
    pub description: &'static str,
    pub quantity: &'static str,
    pub rate: &'static str,
    pub amount: &'static str,
    pub taxable: bool,
}

impl LineItem {
    /// Amount as printed, with the tax marker for taxable rows.
    pub fn amount_text(&self) -> String {
        if self.taxable {
            format!("{}{}", self.amount, TAX_MARKER)
        } else {
            self.amount.to_string()
        }
    }

    /// The four cells in column order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.description.to_string(),
            self.quantity.to_string(),
            self.rate.to_string(),
            self.amount_text(),
        ]
    }
}

pub const LINE_ITEM: LineItem = LineItem {
    description: "Motor 2 hp 1 ph VS Century",
    quantity: "1",
    rate: "873.59",
    amount: "873.59",
    taxable: true,
};

/// Letterhead and footer text for the issuing company.
#[derive(Debug, Clone, Copy)]
pub struct Company {
    /// Bold name lines.
    pub name_lines: [&'static str; 2],
    /// Address and contact lines under the name.
    pub contact_lines: [&'static str; 5],
    pub footer_lines: [&'static str; 2],
}

pub const BREAKPOINT: Company = Company {
    name_lines: ["Breakpoint Commercial Pool", "Systems, Inc."],
    contact_lines: [
        "6236 River Crest Drive, Suite C",
        "Riverside, CA 92507",
        "9516533333",
        "info@breakpointpools.com",
        "www.BreakpointPools.com",
    ],
    footer_lines: [
        "Phone: (951) 653-3333 | Questions regarding estimates: Info@BreakpointPools.com",
        "www.BreakpointPools.com",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_estimate_number() {
        assert_eq!(EstimateRecord::sample().file_name(), "Estimate_8571.pdf");
    }

    #[test]
    fn sample_is_fully_populated() {
        let record = EstimateRecord::sample();
        assert!(record.fields().iter().all(|f| !f.is_empty()));
        assert_eq!(record.total, "$1,561.11");
    }

    #[test]
    fn taxable_amount_carries_marker() {
        assert_eq!(LINE_ITEM.amount_text(), "873.59T");
        let untaxed = LineItem { taxable: false, ..LINE_ITEM };
        assert_eq!(untaxed.amount_text(), "873.59");
    }

    #[test]
    fn cells_follow_column_order() {
        assert_eq!(
            LINE_ITEM.cells(),
            [
                "Motor 2 hp 1 ph VS Century".to_string(),
                "1".to_string(),
                "873.59".to_string(),
                "873.59T".to_string(),
            ]
        );
    }
}
