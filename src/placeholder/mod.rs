//! # Placeholder Resolution
//!
//! Maps a dot-path token (`tenant.companyName`) to display text.
//!
//! Resolution never fails. Tokens degrade instead of erroring:
//!
//! | Token | Result |
//! |-------|--------|
//! | `tenant.companyName` | the context value |
//! | `tenant.fax` | `"Company Info"` (namespace label) |
//! | `bogus.nonsense` | `"{{bogus.nonsense}}"` (literal) |
//!
//! Edit-time preview and print output share [`resolve`]; only the
//! [`PlaceholderContext`] differs.
//!
//! ```
//! use billcanvas::placeholder::{self, PlaceholderContext};
//!
//! let mut ctx = PlaceholderContext::default();
//! ctx.tenant.company_name = "Acme".into();
//!
//! assert_eq!(placeholder::resolve("tenant.companyName", &ctx), "Acme");
//! assert_eq!(placeholder::interpolate("Sold by {{tenant.companyName}}", &ctx), "Sold by Acme");
//! ```

mod context;

pub use context::*;

use crate::document::{Element, ElementKind};
use serde::Serialize;

/// Resolve a single token against `ctx`.
///
/// Surrounding `{{ }}` and whitespace are ignored, so `"{{ invoice.total }}"`
/// and `"invoice.total"` resolve identically.
pub fn resolve(token: &str, ctx: &PlaceholderContext) -> String {
    let token = normalize(token);
    let (namespace, field) = token.split_once('.').unwrap_or((token, ""));

    match Namespace::from_name(namespace) {
        None => format!("{{{{{}}}}}", token),
        Some(ns) => match ctx.field(ns, field) {
            Some(value) => value.to_string(),
            None => ns.label().to_string(),
        },
    }
}

fn normalize(token: &str) -> &str {
    let token = token.trim();
    let token = token.strip_prefix("{{").unwrap_or(token);
    let token = token.strip_suffix("}}").unwrap_or(token);
    token.trim()
}

/// Replace every `{{token}}` in free text with its resolution.
///
/// An unterminated `{{` is kept as literal text.
pub fn interpolate(text: &str, ctx: &PlaceholderContext) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                out.push_str(&resolve(&after[..end], ctx));
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

/// The text an element displays: its placeholder when set, otherwise its
/// content with inline tokens interpolated.
pub fn element_text(element: &Element, ctx: &PlaceholderContext) -> String {
    match element.placeholder_token() {
        Some(token) => resolve(token, ctx),
        None if element.kind == ElementKind::Text => interpolate(&element.content, ctx),
        None => element.content.clone(),
    }
}

/// One entry of the editor's placeholder palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceholderInfo {
    pub namespace: Namespace,
    /// Full token, e.g. `invoice.billNo`.
    pub token: String,
    pub label: &'static str,
}

/// Every known token, grouped by namespace in declaration order.
pub fn catalog() -> Vec<PlaceholderInfo> {
    Namespace::ALL
        .into_iter()
        .flat_map(|ns| {
            ns.fields().iter().map(move |&(field, label)| PlaceholderInfo {
                namespace: ns,
                token: format!("{}.{}", ns.name(), field),
                label,
            })
        })
        .collect()
}
