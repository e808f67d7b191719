//! # Template Document Model
//!
//! A single type that is both the Rust API and the persisted JSON shape.
//! `Document` is an ordered list of [`Element`]s; order is paint order.
//!
//! ```
//! use billcanvas::document::*;
//!
//! let doc = Document::new()
//!     .with_element(Element::text("title", "INVOICE").at(50.0, 40.0))
//!     .with_element(Element::new("rule", ElementKind::Divider).at(50.0, 90.0));
//!
//! // Persisted as a plain JSON array
//! let json = doc.to_json().unwrap();
//! let back = Document::from_json(&json).unwrap();
//! assert_eq!(back, doc);
//! ```
//!
//! Every structural operation returns a **new** document rather than
//! mutating in place, so history snapshots never alias each other. The
//! model accepts any geometry; floors and clamping belong to the editor.

pub mod types;

pub use types::*;

use crate::BillcanvasError;
use serde::{Deserialize, Serialize};

/// A template: the ordered collection of elements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Look up an element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    /// Append an element (painted above everything else).
    #[must_use]
    pub fn with_element(&self, element: Element) -> Document {
        let mut elements = self.elements.clone();
        elements.push(element);
        Document { elements }
    }

    /// Replace the element with the same id. Unknown ids yield an unchanged copy.
    #[must_use]
    pub fn with_replaced(&self, element: Element) -> Document {
        let elements = self
            .elements
            .iter()
            .map(|el| {
                if el.id == element.id {
                    element.clone()
                } else {
                    el.clone()
                }
            })
            .collect();
        Document { elements }
    }

    /// Remove the element with `id`. Unknown ids yield an unchanged copy.
    #[must_use]
    pub fn without(&self, id: &str) -> Document {
        let elements = self
            .elements
            .iter()
            .filter(|el| el.id != id)
            .cloned()
            .collect();
        Document { elements }
    }

    /// Reposition and resize the element with `id`.
    #[must_use]
    pub fn with_geometry(&self, id: &str, position: Position, size: Size) -> Document {
        self.with_updated(id, |el| {
            el.position = position;
            el.size = size;
        })
    }

    /// Apply `f` to a copy of the element with `id`.
    #[must_use]
    pub fn with_updated(&self, id: &str, f: impl FnOnce(&mut Element)) -> Document {
        match self.element(id) {
            Some(el) => {
                let mut updated = el.clone();
                f(&mut updated);
                self.with_replaced(updated)
            }
            None => self.clone(),
        }
    }

    /// Parse a persisted document (a JSON array of elements).
    pub fn from_json(json: &str) -> Result<Self, BillcanvasError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize for the persistence layer.
    pub fn to_json(&self) -> Result<String, BillcanvasError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<Element> for Document {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
