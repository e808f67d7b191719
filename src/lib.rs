//! # Billcanvas - Visual Invoice Template Engine
//!
//! Billcanvas is the template core of a billing application. It provides:
//!
//! - **Document model**: absolutely positioned text, image, table, divider
//!   and spacer elements
//! - **Canvas editor**: selection, drag, resize and keyboard commands with
//!   linear undo/redo
//! - **Placeholders**: `{{tenant.companyName}}`-style tokens resolved against
//!   tenant, invoice, customer and user records
//! - **Print compiler**: A4 invoice pages and paginated barcode label sheets
//!   as self-contained printable HTML
//!
//! ## Quick Start
//!
//! ```
//! use billcanvas::{
//!     document::ElementKind,
//!     editor::EditorSession,
//!     placeholder::PlaceholderContext,
//!     print,
//! };
//!
//! // Author a template
//! let mut session = EditorSession::new();
//! let title = session.add_element(ElementKind::Text);
//! session.update_placeholder(&title, Some("tenant.companyName"));
//! session.add_element(ElementKind::Table);
//!
//! // Persist it
//! let json = session.document().to_json()?;
//!
//! // Later: print it against real data
//! let doc = billcanvas::Document::from_json(&json)?;
//! let mut ctx = PlaceholderContext::default();
//! ctx.tenant.company_name = "Acme Traders".into();
//! let html = print::compile_template(&doc, &ctx).to_html();
//! assert!(html.contains("Acme Traders"));
//!
//! // Bulk barcode labels
//! let labels = print::compile_labels("SKU1", 50)?;
//! assert_eq!(labels.page_count(), 4);
//!
//! # Ok::<(), billcanvas::BillcanvasError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`document`] | Elements and the template document |
//! | [`history`] | Undo/redo snapshots |
//! | [`placeholder`] | Token resolution and data context |
//! | [`editor`] | Interactive editing session |
//! | [`print`] | Template and label compilation |
//! | [`ir`] | Print program and HTML codegen |
//! | [`printer`] | Page and label sheet geometry |
//! | [`error`] | Error types |

pub mod document;
pub mod editor;
pub mod error;
pub mod history;
pub mod ir;
pub mod placeholder;
pub mod print;
pub mod printer;

// Re-exports for convenience
pub use document::Document;
pub use editor::EditorSession;
pub use error::BillcanvasError;
pub use placeholder::PlaceholderContext;
