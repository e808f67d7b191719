//! # Print Intermediate Representation
//!
//! The layer between the document model and printable markup. The print
//! compiler lowers a template or a label run into a [`Program`]; codegen
//! turns the program into HTML.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────┐
//! │  Document / │ ──► │     IR      │ ──► │ Codegen  │
//! │  LabelRun   │     │  (Vec<Op>)  │     │  (HTML)  │
//! └─────────────┘     └─────────────┘     └──────────┘
//! ```
//!
//! Keeping the IR separate makes pagination and placement testable
//! without parsing HTML.

mod codegen;
mod ops;

pub use ops::*;
