//! Renders the Breakpoint Commercial Pool Systems estimate as a
//! single-page US Letter PDF.
//!
//! ```no_run
//! use estimate::{render, EstimateRecord};
//!
//! let record = EstimateRecord::sample();
//! let summary = render(record.file_name(), &record, "breakpoint_logo.png")?;
//! println!("{} bytes", summary.bytes);
//! # Ok::<(), estimate::RenderError>(())
//! ```

pub mod error;
pub mod layout;
pub mod options;
pub mod palette;
pub mod record;
pub mod renderer;

pub use error::RenderError;
pub use options::{RenderOptions, DEFAULT_LOGO};
pub use record::{BillTo, EstimateRecord, LineItem, ShipTo};
pub use renderer::{render, render_with_options, DocumentRenderer, RenderSummary, Rendered};
