//! # Bulk Label Runs
//!
//! Expands one base code into N sequentially coded label cells and lays
//! them out in a single column, 15 per page.
//!
//! ```text
//! base "SKU1", quantity 16
//!
//!   page 1: SKU1-001 #001 … SKU1-015 #015
//!   page 2: SKU1-016 #016
//! ```
//!
//! ```
//! use billcanvas::print::LabelRun;
//!
//! let program = LabelRun::new("SKU1", 16).compile().unwrap();
//! assert_eq!(program.page_count(), 2);
//! assert_eq!(program.label_codes()[15], "SKU1-016");
//! ```

use tracing::{info, warn};

use super::barcode;
use crate::BillcanvasError;
use crate::ir::{Op, Program, Sheet};
use crate::printer::LabelSheetConfig;

/// A transient bulk-print request.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRun {
    base_code: String,
    quantity: i64,
    codes: Vec<String>,
    sheet: LabelSheetConfig,
}

impl LabelRun {
    /// A run of `quantity` labels derived from `base_code`.
    ///
    /// Quantities below 1 are clamped to 1 when the run is compiled.
    pub fn new(base_code: impl Into<String>, quantity: i64) -> Self {
        Self {
            base_code: base_code.into(),
            quantity,
            codes: Vec::new(),
            sheet: LabelSheetConfig::default(),
        }
    }

    /// Use precomputed codes (e.g. existing product barcodes) for the first
    /// cells. Cells past the end of the list fall back to derived codes.
    pub fn with_codes(mut self, codes: Vec<String>) -> Self {
        self.codes = codes;
        self
    }

    pub fn with_sheet(mut self, sheet: LabelSheetConfig) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn base_code(&self) -> &str {
        &self.base_code
    }

    /// Effective number of labels (at least 1).
    pub fn quantity(&self) -> usize {
        usize::try_from(self.quantity.max(1)).unwrap_or(usize::MAX)
    }

    pub fn sheet(&self) -> &LabelSheetConfig {
        &self.sheet
    }

    /// The value each cell encodes, in print order.
    ///
    /// Fails with [`BillcanvasError::MissingBaseCode`] when the base code is
    /// empty or blank, and with [`BillcanvasError::InvalidInput`] when the
    /// quantity exceeds the sheet's `max_labels`. Nothing is generated in
    /// either case.
    pub fn generate_codes(&self) -> Result<Vec<String>, BillcanvasError> {
        let base = self.base_code.trim();
        if base.is_empty() {
            return Err(BillcanvasError::MissingBaseCode);
        }
        if self.quantity() > self.sheet.max_labels {
            return Err(BillcanvasError::InvalidInput(format!(
                "{} labels requested, at most {} per run",
                self.quantity,
                self.sheet.max_labels
            )));
        }

        let codes = (0..self.quantity())
            .map(|i| match self.codes.get(i).map(|c| c.trim()) {
                Some(code) if !code.is_empty() => code.to_string(),
                _ => derive_code(base, i + 1),
            })
            .collect();
        Ok(codes)
    }

    /// Compile the run to a paginated label program.
    pub fn compile(&self) -> Result<Program, BillcanvasError> {
        let codes = self.generate_codes()?;

        info!(
            base = %self.base_code.trim(),
            count = codes.len(),
            pages = self.sheet.pages_for(codes.len()),
            "compiling label run"
        );

        let mut program = Program::new(Sheet::Labels(self.sheet));
        for (i, code) in codes.into_iter().enumerate() {
            let index = i + 1;
            if self.sheet.breaks_before(index) {
                program.push(Op::PageBreak);
            }

            let bars = barcode::encode_code128(&code);
            if bars.is_empty() {
                warn!(code = %code, "value cannot be encoded as Code 128; printing text only");
            }

            program.push(Op::Label {
                code,
                sequence: sequence_suffix(index),
                bars,
            });
        }

        Ok(program)
    }
}

/// `base-NNN` for the 1-based `index`.
pub fn derive_code(base: &str, index: usize) -> String {
    format!("{}-{:03}", base, index)
}

/// Human-readable `#NNN` for the 1-based `index`.
pub fn sequence_suffix(index: usize) -> String {
    format!("#{:03}", index)
}

/// Compile `quantity` labels for `base_code` on the default sheet.
pub fn compile_labels(base_code: &str, quantity: i64) -> Result<Program, BillcanvasError> {
    LabelRun::new(base_code, quantity).compile()
}
