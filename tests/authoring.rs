//! # Authoring Tests
//!
//! End-to-end editing sessions: commands, gestures, keyboard bindings and
//! undo/redo, followed by persistence and printing of the result.

use billcanvas::document::{Document, ElementKind, ElementStyle, Position, Size, TextAlign};
use billcanvas::editor::{EditorSession, Key, KeyEvent};
use billcanvas::ir::Op;
use billcanvas::placeholder::{LineItem, PlaceholderContext};
use billcanvas::print;
use pretty_assertions::assert_eq;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Snapshot of the document as JSON, for whole-document comparisons.
fn snapshot(session: &EditorSession) -> String {
    session.document().to_json().unwrap()
}

fn invoice_context() -> PlaceholderContext {
    let mut ctx = PlaceholderContext::default();
    ctx.tenant.company_name = "Acme Traders".into();
    ctx.customer.name = "Ravi Kumar".into();
    ctx.invoice.bill_no = "INV-0042".into();
    ctx.invoice.total = "250.00".into();
    ctx.invoice.items = vec![
        LineItem::new("Notebook", 5.0, 40.0),
        LineItem::new("Pen", 10.0, 5.0),
    ];
    ctx
}

// ============================================================================
// UNDO / REDO
// ============================================================================

#[test]
fn test_add_edit_undo_redo_flow() {
    let mut session = EditorSession::new();

    let id = session.add_element(ElementKind::Text);
    session.update_content(&id, "Hello");

    session.undo();
    session.undo();
    assert!(session.document().is_empty());
    assert!(!session.can_undo());

    session.redo();
    session.redo();
    assert_eq!(session.document().len(), 1);
    let el = session.document().element(&id).unwrap();
    assert_eq!(el.kind, ElementKind::Text);
    assert_eq!(el.content, "Hello");
    assert!(!session.can_redo());
}

#[test]
fn test_undo_then_redo_restores_exact_document() {
    let mut session = EditorSession::new();
    let id = session.add_element(ElementKind::Table);
    session.update_style(&id, &ElementStyle::default().size(18.0).align(TextAlign::Right));
    session.move_to(&id, Position::new(30.0, 400.0));

    let before = snapshot(&session);
    session.undo();
    assert_ne!(snapshot(&session), before);
    session.redo();
    assert_eq!(snapshot(&session), before);
}

#[test]
fn test_new_command_discards_redo_branch() {
    let mut session = EditorSession::new();
    let a = session.add_element(ElementKind::Text);
    session.update_content(&a, "first");
    session.undo();
    assert!(session.can_redo());

    session.update_content(&a, "second");
    assert!(!session.can_redo());
    assert_eq!(session.document().element(&a).unwrap().content, "second");
}

#[test]
fn test_selection_not_part_of_history() {
    let mut session = EditorSession::new();
    let a = session.add_element(ElementKind::Text);
    let b = session.add_element(ElementKind::Divider);
    let len = session.history().len();

    session.select(Some(&a));
    session.click_background();
    session.select(Some(&b));
    assert_eq!(session.history().len(), len);
    assert_eq!(session.selected(), Some(b.as_str()));
}

// ============================================================================
// GESTURES
// ============================================================================

#[test]
fn test_drag_is_a_single_undo_step() {
    let mut session = EditorSession::new();
    let id = session.add_element(ElementKind::Text);
    let start = session.document().element(&id).unwrap().position;
    let len = session.history().len();

    session.begin_drag(&id, Position::new(100.0, 100.0));
    for step in 1..=10 {
        let d = step as f32 * 10.0;
        session.update_drag(Position::new(100.0 + d, 100.0 + d));
    }
    session.end_gesture();

    assert_eq!(session.history().len(), len + 1);
    assert_eq!(
        session.document().element(&id).unwrap().position,
        Position::new(start.x + 100.0, start.y + 100.0)
    );

    session.undo();
    assert_eq!(session.document().element(&id).unwrap().position, start);
}

#[test]
fn test_drag_clamped_at_canvas_origin() {
    let mut session = EditorSession::new();
    let id = session.add_element(ElementKind::Spacer);

    session.begin_drag(&id, Position::new(60.0, 60.0));
    session.update_drag(Position::new(-500.0, -500.0));
    session.end_gesture();

    assert_eq!(
        session.document().element(&id).unwrap().position,
        Position::new(0.0, 0.0)
    );
}

#[test]
fn test_resize_never_below_minimum() {
    let mut session = EditorSession::new();
    let id = session.add_element(ElementKind::Image);

    session.begin_resize(&id, Position::new(200.0, 200.0));
    session.update_resize(Position::new(-1000.0, -1000.0));
    session.end_gesture();

    assert_eq!(
        session.document().element(&id).unwrap().size,
        Size::new(50.0, 20.0)
    );

    session.resize(&id, Size::new(10.0, 5.0));
    assert_eq!(
        session.document().element(&id).unwrap().size,
        Size::new(50.0, 20.0)
    );
}

// ============================================================================
// KEYBOARD
// ============================================================================

#[test]
fn test_keyboard_editing() {
    let mut session = EditorSession::new();
    let id = session.add_element(ElementKind::Text);
    let start = session.document().element(&id).unwrap().position;

    assert!(session.handle_key(KeyEvent::new(Key::ArrowRight)));
    assert!(session.handle_key(KeyEvent::new(Key::ArrowDown).shift()));
    assert_eq!(
        session.document().element(&id).unwrap().position,
        Position::new(start.x + 1.0, start.y + 10.0)
    );

    assert!(session.handle_key(KeyEvent::new(Key::Char('z')).ctrl()));
    assert_eq!(
        session.document().element(&id).unwrap().position,
        Position::new(start.x + 1.0, start.y)
    );

    assert!(session.handle_key(KeyEvent::new(Key::Delete)));
    assert!(session.document().is_empty());
    assert_eq!(session.selected(), None);

    // Nothing selected: arrows fall through to the host.
    assert!(!session.handle_key(KeyEvent::new(Key::ArrowLeft)));
}

// ============================================================================
// PERSISTENCE AND PRINT
// ============================================================================

#[test]
fn test_authored_template_prints_with_real_data() {
    let mut session = EditorSession::new();
    let header = session.add_element(ElementKind::Text);
    session.update_placeholder(&header, Some("tenant.companyName"));
    let bill = session.add_element(ElementKind::Text);
    session.update_content(&bill, "Bill No: {{invoice.billNo}} for {{customer.name}}");
    session.add_element(ElementKind::Table);
    session.add_element(ElementKind::Divider);

    // Editor preview shows descriptive labels.
    assert_eq!(
        session.preview_text(&header).as_deref(),
        Some("Your Company Name")
    );

    // Persist and reload.
    let json = session.document().to_json().unwrap();
    let saved = Document::from_json(&json).unwrap();
    assert_eq!(&saved, session.document());

    let program = print::compile_template(&saved, &invoice_context());
    assert_eq!(program.page_count(), 1);
    assert_eq!(program.len(), 4);

    let html = program.to_html();
    assert!(html.contains("Acme Traders"));
    assert!(html.contains("Bill No: INV-0042 for Ravi Kumar"));
    assert!(html.contains("Notebook"));
    assert!(html.contains("200.00"));
}

#[test]
fn test_stored_document_with_unknown_tokens_still_prints() {
    let json = r#"[
        {
            "id": "t1",
            "type": "text",
            "content": "",
            "placeholder": "{{warehouse.code}}",
            "style": { "fontSize": 16, "fontWeight": "bold" },
            "position": { "x": 40, "y": 40 },
            "size": { "width": 240, "height": 40 }
        },
        {
            "id": "t2",
            "type": "text",
            "content": "",
            "placeholder": "tenant.fax",
            "style": {},
            "position": { "x": 40, "y": 100 },
            "size": { "width": 240, "height": 40 }
        }
    ]"#;
    let doc = Document::from_json(json).unwrap();
    let program = print::compile_template(&doc, &invoice_context());

    let texts: Vec<&str> = program
        .iter()
        .filter_map(|op| match op {
            Op::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["{{warehouse.code}}", "Company Info"]);
}
