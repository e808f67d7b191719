//! # Print Opcodes
//!
//! The intermediate representation the print compiler produces. A
//! [`Program`] is a sheet layout plus a flat list of ops; `PageBreak` ops
//! split it into physical pages.
//!
//! ```text
//! Document / LabelRun → Program (inspectable) → Codegen → HTML
//! ```
//!
//! Each placed op carries its own frame, so codegen never needs to look
//! back at the document.

use crate::document::TextAlign;
use crate::printer::{LabelSheetConfig, PageConfig};

/// Absolute placement in document-space units (CSS px).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Resolved text styling, defaults already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub bold: bool,
    pub align: TextAlign,
    pub color: String,
    pub background: String,
    pub padding: f32,
}

/// Fixed table header for invoice line items.
pub const TABLE_HEADERS: [&str; 4] = ["Item", "Qty", "Rate", "Amount"];

/// One rendered invoice line, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub item: String,
    pub quantity: String,
    pub rate: String,
    pub amount: String,
}

impl TableRow {
    pub fn cells(&self) -> [&str; 4] {
        [
            self.item.as_str(),
            self.quantity.as_str(),
            self.rate.as_str(),
            self.amount.as_str(),
        ]
    }
}

/// A single print operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Start a new physical page.
    PageBreak,

    /// Resolved text.
    Text {
        frame: Frame,
        style: TextStyle,
        content: String,
    },

    /// Image from a data-URI or URL. `None` renders a placeholder box.
    Image { frame: Frame, src: Option<String> },

    /// Item/Qty/Rate/Amount grid.
    Table {
        frame: Frame,
        style: TextStyle,
        rows: Vec<TableRow>,
    },

    /// Horizontal rule.
    Rule { frame: Frame, color: String },

    /// Reserved empty space.
    Space { frame: Frame },

    /// One barcode label cell.
    Label {
        /// The value the barcode encodes.
        code: String,
        /// Human-readable sequence suffix (`#001`).
        sequence: String,
        /// Code 128 modules, `true` = bar. Empty when the value can't be encoded.
        bars: Vec<bool>,
    },
}

/// Physical sheet a program prints on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sheet {
    /// A full page with absolutely positioned content.
    Page(PageConfig),
    /// A single column of fixed-size label cells.
    Labels(LabelSheetConfig),
}

/// A compiled print job.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub sheet: Sheet,
    pub ops: Vec<Op>,
}

impl Program {
    pub fn new(sheet: Sheet) -> Self {
        Self {
            sheet,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    pub fn extend(&mut self, ops: impl IntoIterator<Item = Op>) {
        self.ops.extend(ops);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }

    /// Ops grouped by physical page. Always at least one page.
    pub fn pages(&self) -> Vec<&[Op]> {
        self.ops.split(|op| matches!(op, Op::PageBreak)).collect()
    }

    pub fn page_count(&self) -> usize {
        1 + self
            .ops
            .iter()
            .filter(|op| matches!(op, Op::PageBreak))
            .count()
    }

    /// Encoded values of every label cell, in print order.
    pub fn label_codes(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Label { code, .. } => Some(code.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(code: &str) -> Op {
        Op::Label {
            code: code.into(),
            sequence: "#001".into(),
            bars: Vec::new(),
        }
    }

    #[test]
    fn test_empty_program_is_one_page() {
        let program = Program::new(Sheet::Page(PageConfig::A4));
        assert_eq!(program.page_count(), 1);
        assert_eq!(program.pages().len(), 1);
    }

    #[test]
    fn test_pages_split_on_break() {
        let mut program = Program::new(Sheet::Labels(LabelSheetConfig::LABEL_80X30));
        program.extend([label("a"), label("b"), Op::PageBreak, label("c")]);
        assert_eq!(program.page_count(), 2);
        let pages = program.pages();
        assert_eq!(pages[0].len(), 2);
        assert_eq!(pages[1].len(), 1);
        assert_eq!(program.label_codes(), vec!["a", "b", "c"]);
    }
}
