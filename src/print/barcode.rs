//! Barcode encoding for label cells.
//!
//! Uses the barcoders crate for Code 128 encoding.

use barcoders::sym::code128::Code128;

/// Bar modules for `data` (`true` is a dark bar), or an empty Vec when the
/// value has characters Code 128 cannot carry.
pub fn encode_code128(data: &str) -> Vec<bool> {
    // barcoders wants the start code as the first char. Label codes mix
    // letters, digits and dashes, which code set B covers.
    const START_B: char = '\u{0181}';

    let Ok(barcode) = Code128::new(&format!("{START_B}{data}")) else {
        return Vec::new();
    };

    barcode.encode().into_iter().map(|module| module == 1).collect()
}
