//! Element types for the template document model.
//!
//! All types derive `Serialize + Deserialize` so the same types work for
//! both Rust API construction and the JSON the persistence layer stores.
//! Field names are camelCase on the wire (`fontSize`, `backgroundColor`).

use serde::{Deserialize, Serialize};

/// Opaque element identifier, unique within one document.
pub type ElementId = String;

// ============================================================================
// KIND
// ============================================================================

/// The five element kinds a template can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Free text, or a resolved placeholder.
    Text,
    /// A data-URI or URL image (company logo, stamp, signature).
    Image,
    /// Invoice line items as an Item/Qty/Rate/Amount grid.
    Table,
    /// Horizontal rule.
    Divider,
    /// Empty space.
    Spacer,
}

impl ElementKind {
    /// Every kind, in palette order.
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Text,
        ElementKind::Image,
        ElementKind::Table,
        ElementKind::Divider,
        ElementKind::Spacer,
    ];

    /// Human-readable display label (e.g. "Text", "Divider").
    pub fn label(self) -> &'static str {
        match self {
            ElementKind::Text => "Text",
            ElementKind::Image => "Image",
            ElementKind::Table => "Table",
            ElementKind::Divider => "Divider",
            ElementKind::Spacer => "Spacer",
        }
    }

    /// Starter footprint for the editor.
    ///
    /// Tables and images get larger footprints than text, dividers and spacers.
    pub fn editor_default_size(self) -> Size {
        match self {
            ElementKind::Text => Size::new(200.0, 40.0),
            ElementKind::Image => Size::new(150.0, 150.0),
            ElementKind::Table => Size::new(500.0, 200.0),
            ElementKind::Divider => Size::new(500.0, 20.0),
            ElementKind::Spacer => Size::new(200.0, 20.0),
        }
    }

    /// Starter content for the editor. Only text has any.
    pub fn editor_default_content(self) -> &'static str {
        match self {
            ElementKind::Text => "New Text",
            _ => "",
        }
    }
}

// ============================================================================
// GEOMETRY
// ============================================================================

/// Top-left corner of an element in document space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Element footprint in document space (same units as [`Position`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// ============================================================================
// STYLE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_css(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

pub const DEFAULT_FONT_SIZE: f32 = 14.0;
pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_BACKGROUND: &str = "transparent";

/// Visual style of an element. Every field is optional; the accessors
/// return the effective value with defaults applied.
///
/// The same type doubles as a patch for [`ElementStyle::merge`]: only the
/// fields that are `Some` in the patch are applied.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
}

impl ElementStyle {
    pub fn font_size(&self) -> f32 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }

    pub fn font_weight(&self) -> FontWeight {
        self.font_weight.unwrap_or_default()
    }

    pub fn text_align(&self) -> TextAlign {
        self.text_align.unwrap_or_default()
    }

    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_COLOR)
    }

    pub fn background_color(&self) -> &str {
        self.background_color.as_deref().unwrap_or(DEFAULT_BACKGROUND)
    }

    pub fn padding(&self) -> f32 {
        self.padding.unwrap_or(0.0)
    }

    /// Return a copy with every `Some` field of `patch` applied.
    pub fn merge(&self, patch: &ElementStyle) -> ElementStyle {
        ElementStyle {
            font_size: patch.font_size.or(self.font_size),
            font_weight: patch.font_weight.or(self.font_weight),
            text_align: patch.text_align.or(self.text_align),
            color: patch.color.clone().or_else(|| self.color.clone()),
            background_color: patch
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            padding: patch.padding.or(self.padding),
        }
    }

    pub fn bold(mut self) -> Self {
        self.font_weight = Some(FontWeight::Bold);
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn size(mut self, font_size: f32) -> Self {
        self.font_size = Some(font_size);
        self
    }
}

// ============================================================================
// ELEMENT
// ============================================================================

/// One positioned, styled unit of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default)]
    pub content: String,
    /// Dot-path token (`tenant.companyName`). Overrides `content` when rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub style: ElementStyle,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub size: Size,
}

impl Element {
    /// Create an element with the editor defaults for `kind` at the origin.
    pub fn new(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            content: kind.editor_default_content().to_string(),
            placeholder: None,
            style: ElementStyle::default(),
            position: Position::default(),
            size: kind.editor_default_size(),
        }
    }

    /// Create a text element with the given literal content.
    pub fn text(id: impl Into<ElementId>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::new(id, ElementKind::Text)
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn sized(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_placeholder(mut self, token: impl Into<String>) -> Self {
        self.placeholder = Some(token.into());
        self
    }

    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    /// The placeholder token, if set and non-blank.
    pub fn placeholder_token(&self) -> Option<&str> {
        self.placeholder
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
