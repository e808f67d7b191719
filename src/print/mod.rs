//! # Print Layout Compiler
//!
//! Two paths share one geometric model (absolute placement on a physical
//! sheet measured in millimeters):
//!
//! - **Templates**: a [`Document`](crate::document::Document) and a data
//!   context compile to a single A4 page with every element placed at its
//!   own position and every placeholder resolved.
//! - **Label runs**: a base code and a quantity compile to N barcode cells,
//!   80mm × 30mm each, paginated 15 per page.
//!
//! Both produce an [`ir::Program`](crate::ir::Program); call
//! [`Program::to_html`](crate::ir::Program::to_html) for the printable string.
//!
//! ```
//! use billcanvas::document::{Document, Element};
//! use billcanvas::placeholder::PlaceholderContext;
//! use billcanvas::print;
//!
//! let doc = Document::new()
//!     .with_element(Element::text("name", "").with_placeholder("customer.name"));
//! let mut ctx = PlaceholderContext::default();
//! ctx.customer.name = "Ravi".into();
//!
//! let html = print::compile_template(&doc, &ctx).to_html();
//! assert!(html.contains("Ravi"));
//! ```

pub mod barcode;
mod labels;
mod template;

pub use labels::{LabelRun, compile_labels, derive_code, sequence_suffix};
pub use template::{compile_template, compile_template_on};
