use std::path::PathBuf;

use crate::record::EstimateRecord;

/// Logo looked up next to the working directory when none is given.
pub const DEFAULT_LOGO: &str = "breakpoint_logo.png";

/// Where and how an estimate is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub output: PathBuf,
    pub logo: PathBuf,
    pub compress: bool,
    pub creator: String,
}

impl RenderOptions {
    /// Defaults for `record`: `Estimate_<number>.pdf` in the current
    /// directory, the default logo, compressed streams.
    pub fn for_record(record: &EstimateRecord) -> Self {
        RenderOptions {
            output: PathBuf::from(record.file_name()),
            logo: PathBuf::from(DEFAULT_LOGO),
            compress: true,
            creator: concat!("generate-estimate ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_logo(mut self, logo: impl Into<PathBuf>) -> Self {
        self.logo = logo.into();
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}
