//! # Canvas Editor
//!
//! [`EditorSession`] is the interactive authoring state for one template:
//! the edit history (whose current snapshot is the document), the selected
//! element, and any drag/resize gesture in progress.
//!
//! Input bindings (pointer, keyboard) translate platform events into the
//! command methods below. Every command is total: unknown ids are ignored
//! and geometry is clamped, so nothing here returns an error.
//!
//! ```
//! use billcanvas::document::{ElementKind, Position};
//! use billcanvas::editor::EditorSession;
//!
//! let mut session = EditorSession::new();
//! let id = session.add_element(ElementKind::Text);
//! session.update_content(&id, "Hello");
//!
//! session.begin_drag(&id, Position::new(60.0, 60.0));
//! session.update_drag(Position::new(160.0, 90.0));
//! session.end_gesture();
//!
//! session.undo(); // drag undone in one step
//! assert_eq!(session.document().element(&id).unwrap().content, "Hello");
//! ```
//!
//! ## History granularity
//!
//! Each command records exactly one snapshot when it changes the document.
//! A drag or resize records one snapshot on its first effective frame and
//! amends that snapshot for every later frame, so one gesture is one undo
//! step.

mod config;
mod keys;

pub use config::EditorConfig;
pub use keys::{Key, KeyEvent, Modifiers};

use tracing::debug;
use uuid::Uuid;

use crate::document::{Document, Element, ElementId, ElementKind, ElementStyle, Position, Size};
use crate::history::History;
use crate::ir::Program;
use crate::placeholder::{self, PlaceholderContext};
use crate::print;

/// What an in-progress gesture changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Move the element by the pointer delta.
    Drag,
    /// Resize from the bottom-right handle by the pointer delta.
    Resize,
}

/// A drag or resize started by [`EditorSession::begin_drag`] or
/// [`EditorSession::begin_resize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    pub kind: GestureKind,
    pub id: ElementId,
    pub start_pointer: Position,
    pub start_position: Position,
    pub start_size: Size,
    /// Pointer position of the most recent frame.
    last_pointer: Position,
    /// Whether this gesture already owns a history entry.
    recorded: bool,
}

/// Authoring state for one document.
#[derive(Debug, Clone)]
pub struct EditorSession {
    history: History,
    selected: Option<ElementId>,
    gesture: Option<Gesture>,
    config: EditorConfig,
    preview: PlaceholderContext,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Start editing an empty document.
    pub fn new() -> Self {
        Self::with_document(Document::new())
    }

    /// Start editing a document loaded from persistence.
    pub fn with_document(document: Document) -> Self {
        Self::with_config(document, EditorConfig::default())
    }

    pub fn with_config(document: Document, config: EditorConfig) -> Self {
        Self {
            history: History::new(document),
            selected: None,
            gesture: None,
            config,
            preview: PlaceholderContext::preview(),
        }
    }

    // ========================================================================
    // STATE
    // ========================================================================

    /// The current document (the snapshot at the history cursor).
    pub fn document(&self) -> &Document {
        self.history.current()
    }

    /// Hand the current document to the persistence layer.
    pub fn into_document(self) -> Document {
        self.history.current().clone()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.as_deref().and_then(|id| self.document().element(id))
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// Replace the context used for edit-time previews.
    pub fn set_preview_context(&mut self, ctx: PlaceholderContext) {
        self.preview = ctx;
    }

    /// Record `doc` as a new history entry if it differs from the current one.
    fn commit(&mut self, doc: Document) {
        if doc == *self.history.current() {
            return;
        }
        self.history.record(doc);

        // Later gesture frames start a fresh entry from the committed
        // geometry, so they neither amend nor overwrite this command.
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.recorded = false;
            if let Some(el) = self.history.current().element(&gesture.id) {
                gesture.start_pointer = gesture.last_pointer;
                gesture.start_position = el.position;
                gesture.start_size = el.size;
            }
        }
    }

    // ========================================================================
    // ELEMENTS
    // ========================================================================

    /// Append a new element with kind defaults, select it, and return its id.
    ///
    /// Elements stack downwards by the current element count, which keeps
    /// fresh elements from landing on top of each other.
    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        let id = Uuid::new_v4().to_string();
        let index = self.document().len();
        let mut element = Element::new(id.clone(), kind);
        element.position = self.config.stacked_position(index);

        debug!(id = %id, kind = kind.label(), "add element");
        let doc = self.document().with_element(element);
        self.commit(doc);
        self.selected = Some(id.clone());
        id
    }

    /// Clone an element with a new id, offset down and right. The copy is
    /// appended but not selected. Returns `None` for unknown ids.
    pub fn duplicate(&mut self, id: &str) -> Option<ElementId> {
        let Some(source) = self.document().element(id) else {
            debug!(id, "duplicate: unknown element");
            return None;
        };

        let offset = self.config.duplicate_offset;
        let new_id = Uuid::new_v4().to_string();
        let copy = Element {
            id: new_id.clone(),
            position: source.position.offset(offset, offset),
            ..source.clone()
        };

        let doc = self.document().with_element(copy);
        self.commit(doc);
        Some(new_id)
    }

    /// Remove an element, clearing the selection if it pointed at it.
    pub fn delete(&mut self, id: &str) {
        if !self.document().contains(id) {
            debug!(id, "delete: unknown element");
            return;
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        if self.gesture.as_ref().is_some_and(|g| g.id == id) {
            self.gesture = None;
        }
        let doc = self.document().without(id);
        self.commit(doc);
    }

    /// Merge the `Some` fields of `patch` into the element's style.
    pub fn update_style(&mut self, id: &str, patch: &ElementStyle) {
        let doc = self
            .document()
            .with_updated(id, |el| el.style = el.style.merge(patch));
        self.commit(doc);
    }

    pub fn update_content(&mut self, id: &str, content: impl Into<String>) {
        let content = content.into();
        let doc = self.document().with_updated(id, |el| el.content = content);
        self.commit(doc);
    }

    /// Bind (or with `None`/blank, unbind) a placeholder token.
    pub fn update_placeholder(&mut self, id: &str, token: Option<&str>) {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        let doc = self.document().with_updated(id, |el| el.placeholder = token);
        self.commit(doc);
    }

    /// Move an element to an absolute position (clamped to the canvas).
    pub fn move_to(&mut self, id: &str, position: Position) {
        let position = self.config.clamp_position(position);
        let doc = self.document().with_updated(id, |el| el.position = position);
        self.commit(doc);
    }

    /// Resize an element (clamped to the minimum size).
    pub fn resize(&mut self, id: &str, size: Size) {
        let size = self.config.clamp_size(size);
        let doc = self.document().with_updated(id, |el| el.size = size);
        self.commit(doc);
    }

    /// Move by a delta.
    pub fn nudge(&mut self, id: &str, dx: f32, dy: f32) {
        if let Some(el) = self.document().element(id) {
            let target = el.position.offset(dx, dy);
            self.move_to(id, target);
        }
    }

    /// Resize by a delta.
    pub fn grow(&mut self, id: &str, dw: f32, dh: f32) {
        if let Some(el) = self.document().element(id) {
            let target = Size::new(el.size.width + dw, el.size.height + dh);
            self.resize(id, target);
        }
    }

    // ========================================================================
    // SELECTION
    // ========================================================================

    /// Change the selection. Not recorded in history; unknown ids are ignored.
    pub fn select(&mut self, id: Option<&str>) {
        match id {
            None => self.selected = None,
            Some(id) if self.document().contains(id) => self.selected = Some(id.to_string()),
            Some(id) => debug!(id, "select: unknown element"),
        }
    }

    /// A click that landed on the canvas itself, not on any element.
    pub fn click_background(&mut self) {
        self.selected = None;
    }

    // ========================================================================
    // GESTURES
    // ========================================================================

    fn begin_gesture(&mut self, kind: GestureKind, id: &str, pointer: Position) {
        let Some(el) = self.document().element(id) else {
            debug!(id, ?kind, "gesture on unknown element");
            return;
        };
        self.gesture = Some(Gesture {
            kind,
            id: el.id.clone(),
            start_pointer: pointer,
            start_position: el.position,
            start_size: el.size,
            last_pointer: pointer,
            recorded: false,
        });
        self.selected = Some(id.to_string());
    }

    /// Start dragging an element. Selects it.
    pub fn begin_drag(&mut self, id: &str, pointer: Position) {
        self.begin_gesture(GestureKind::Drag, id, pointer);
    }

    /// Start resizing an element from its bottom-right handle. Selects it.
    pub fn begin_resize(&mut self, id: &str, pointer: Position) {
        self.begin_gesture(GestureKind::Resize, id, pointer);
    }

    /// Pointer moved during a drag. Ignored when no drag is active.
    pub fn update_drag(&mut self, pointer: Position) {
        self.update_gesture(GestureKind::Drag, pointer);
    }

    /// Pointer moved during a resize. Ignored when no resize is active.
    pub fn update_resize(&mut self, pointer: Position) {
        self.update_gesture(GestureKind::Resize, pointer);
    }

    fn update_gesture(&mut self, kind: GestureKind, pointer: Position) {
        let Some(gesture) = self.gesture.as_mut().filter(|g| g.kind == kind) else {
            return;
        };
        gesture.last_pointer = pointer;
        let gesture = gesture.clone();

        let dx = pointer.x - gesture.start_pointer.x;
        let dy = pointer.y - gesture.start_pointer.y;

        let doc = match kind {
            GestureKind::Drag => {
                let position = self
                    .config
                    .clamp_position(gesture.start_position.offset(dx, dy));
                self.document()
                    .with_updated(&gesture.id, |el| el.position = position)
            }
            GestureKind::Resize => {
                let size = self.config.clamp_size(Size::new(
                    gesture.start_size.width + dx,
                    gesture.start_size.height + dy,
                ));
                self.document().with_updated(&gesture.id, |el| el.size = size)
            }
        };

        if doc == *self.history.current() {
            return;
        }

        let recorded = if !gesture.recorded {
            self.history.record(doc);
            true
        } else if self.history.previous() == Some(&doc) {
            // Back where the gesture's entry started: the entry is a no-op.
            self.history.discard();
            false
        } else {
            self.history.amend(doc);
            true
        };
        if let Some(g) = self.gesture.as_mut() {
            g.recorded = recorded;
        }
    }

    /// Finish the active gesture. The last frame is already committed.
    pub fn end_gesture(&mut self) {
        self.gesture = None;
    }

    /// Abandon the active gesture (e.g. the pointer left the canvas).
    ///
    /// Every frame was a valid committed state, so nothing is rolled back.
    pub fn cancel_gesture(&mut self) {
        if let Some(g) = self.gesture.take() {
            debug!(id = %g.id, kind = ?g.kind, "gesture cancelled");
        }
    }

    // ========================================================================
    // HISTORY
    // ========================================================================

    pub fn undo(&mut self) {
        self.gesture = None;
        self.history.undo();
        self.drop_stale_selection();
    }

    pub fn redo(&mut self) {
        self.gesture = None;
        self.history.redo();
        self.drop_stale_selection();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn drop_stale_selection(&mut self) {
        let stale = self
            .selected
            .as_deref()
            .is_some_and(|id| !self.history.current().contains(id));
        if stale {
            self.selected = None;
        }
    }

    // ========================================================================
    // PREVIEW
    // ========================================================================

    /// Text an element shows on the canvas, resolved in preview mode.
    pub fn preview_text(&self, id: &str) -> Option<String> {
        self.document()
            .element(id)
            .map(|el| placeholder::element_text(el, &self.preview))
    }

    /// Compile the current document against the preview context.
    pub fn compile_preview(&self) -> Program {
        print::compile_template(self.document(), &self.preview)
    }
}
