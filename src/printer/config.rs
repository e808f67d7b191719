//! # Sheet Configuration
//!
//! Physical geometry of the sheets the compiler prints on.
//!
//! ## Supported Sheets
//!
//! | Sheet | Size | Content |
//! |-------|------|---------|
//! | A4 | 210mm × 297mm | one invoice template page |
//! | Label 80×30 | 80mm × 30mm cells | one barcode per cell, 15 cells per page |
//!
//! ## Units
//!
//! Template elements are positioned in CSS pixels (the units of the
//! editor canvas). CSS fixes 96 px per inch:
//!
//! ```text
//! px_per_mm = 96 / 25.4 ≈ 3.78
//! A4 width  = 210mm ≈ 793.7px
//! ```
//!
//! ## Usage
//!
//! ```
//! use billcanvas::printer::PageConfig;
//!
//! let page = PageConfig::A4;
//! assert!((page.width_px() - 793.7).abs() < 0.1);
//! ```

/// CSS pixels per inch.
pub const CSS_DPI: f32 = 96.0;

/// A printable page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    /// Human-readable name
    pub name: &'static str,

    /// Page width in millimeters
    pub width_mm: f32,

    /// Page height in millimeters
    pub height_mm: f32,
}

impl PageConfig {
    /// # ISO A4 Portrait
    ///
    /// The page every invoice template compiles to.
    pub const A4: Self = Self {
        name: "A4",
        width_mm: 210.0,
        height_mm: 297.0,
    };

    /// CSS pixels per millimeter.
    #[inline]
    pub fn px_per_mm(&self) -> f32 {
        CSS_DPI / 25.4
    }

    /// Page width in CSS pixels.
    #[inline]
    pub fn width_px(&self) -> f32 {
        self.width_mm * self.px_per_mm()
    }

    /// Page height in CSS pixels.
    #[inline]
    pub fn height_px(&self) -> f32 {
        self.height_mm * self.px_per_mm()
    }

    /// Convert CSS pixels to millimeters
    #[inline]
    pub fn px_to_mm(&self, px: f32) -> f32 {
        px / self.px_per_mm()
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::A4
    }
}

/// A sheet of identical label cells printed in a single column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelSheetConfig {
    /// Human-readable name
    pub name: &'static str,

    /// Cell width in millimeters
    pub label_width_mm: f32,

    /// Cell height in millimeters
    pub label_height_mm: f32,

    /// Cells per printed page; a page break precedes every further cell
    pub labels_per_page: usize,

    /// Largest number of cells one run may print
    pub max_labels: usize,
}

impl LabelSheetConfig {
    /// # 80mm × 30mm Barcode Labels
    ///
    /// ```text
    /// ┌──────────── 80mm ────────────┐
    /// │ ▌▌▌ ▌ ▌▌ ▌▌▌ ▌ ▌▌▌ ▌▌ ▌ ▌▌▌  │ 30mm
    /// │          SKU1-001            │
    /// │            #001              │
    /// └──────────────────────────────┘
    /// ```
    pub const LABEL_80X30: Self = Self {
        name: "Label 80x30",
        label_width_mm: 80.0,
        label_height_mm: 30.0,
        labels_per_page: 15,
        max_labels: 10_000,
    };

    /// Whether a page break goes before the 1-based `index`-th cell.
    #[inline]
    pub fn breaks_before(&self, index: usize) -> bool {
        let per_page = self.labels_per_page.max(1);
        index > 1 && (index - 1) % per_page == 0
    }

    /// Pages needed for `count` cells.
    #[inline]
    pub fn pages_for(&self, count: usize) -> usize {
        count.max(1).div_ceil(self.labels_per_page.max(1))
    }
}

impl Default for LabelSheetConfig {
    fn default() -> Self {
        Self::LABEL_80X30
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_in_pixels() {
        let page = PageConfig::A4;
        assert!((page.width_px() - 793.7).abs() < 0.1);
        assert!((page.height_px() - 1122.5).abs() < 0.1);
        assert!((page.px_to_mm(page.width_px()) - 210.0).abs() < 0.01);
    }

    #[test]
    fn test_breaks_before() {
        let sheet = LabelSheetConfig::LABEL_80X30;
        assert!(!sheet.breaks_before(1));
        assert!(!sheet.breaks_before(15));
        assert!(sheet.breaks_before(16));
        assert!(!sheet.breaks_before(17));
        assert!(sheet.breaks_before(31));
    }

    #[test]
    fn test_pages_for() {
        let sheet = LabelSheetConfig::LABEL_80X30;
        assert_eq!(sheet.pages_for(15), 1);
        assert_eq!(sheet.pages_for(16), 2);
        assert_eq!(sheet.pages_for(30), 2);
        assert_eq!(sheet.pages_for(31), 3);
    }
}
