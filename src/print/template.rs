//! Template compilation: one document + one data context → one page.

use tracing::debug;

use crate::document::{Document, Element, ElementKind, ElementStyle, FontWeight};
use crate::ir::{Frame, Op, Program, Sheet, TableRow, TextStyle};
use crate::placeholder::{self, LineItem, PlaceholderContext, format_amount, format_number};
use crate::printer::PageConfig;

/// Compile a template onto an A4 page.
pub fn compile_template(doc: &Document, ctx: &PlaceholderContext) -> Program {
    compile_template_on(doc, ctx, PageConfig::A4)
}

/// Compile a template onto a specific page.
///
/// Elements keep their document order, which is also their paint order.
pub fn compile_template_on(doc: &Document, ctx: &PlaceholderContext, page: PageConfig) -> Program {
    let mut program = Program::new(Sheet::Page(page));
    program.extend(doc.iter().map(|el| emit_element(el, ctx)));
    debug!(elements = program.len(), page = page.name, "compiled template");
    program
}

fn emit_element(el: &Element, ctx: &PlaceholderContext) -> Op {
    let frame = Frame {
        x: el.position.x,
        y: el.position.y,
        width: el.size.width,
        height: el.size.height,
    };

    match el.kind {
        ElementKind::Text => Op::Text {
            frame,
            style: text_style(&el.style),
            content: placeholder::element_text(el, ctx),
        },
        ElementKind::Image => Op::Image {
            frame,
            src: image_source(el, ctx),
        },
        ElementKind::Table => Op::Table {
            frame,
            style: text_style(&el.style),
            rows: ctx.invoice.items.iter().map(table_row).collect(),
        },
        ElementKind::Divider => Op::Rule {
            frame,
            color: el.style.color().to_string(),
        },
        ElementKind::Spacer => Op::Space { frame },
    }
}

fn text_style(style: &ElementStyle) -> TextStyle {
    TextStyle {
        font_size: style.font_size(),
        bold: style.font_weight() == FontWeight::Bold,
        align: style.text_align(),
        color: style.color().to_string(),
        background: style.background_color().to_string(),
        padding: style.padding(),
    }
}

/// Where an image element loads from, or `None` for a placeholder box.
///
/// A placeholder that did not resolve to something loadable (an unset
/// logo, a namespace label) also yields `None`.
fn image_source(el: &Element, ctx: &PlaceholderContext) -> Option<String> {
    let src = match el.placeholder_token() {
        Some(token) => placeholder::resolve(token, ctx),
        None => el.content.clone(),
    };
    let src = src.trim();
    is_image_source(src).then(|| src.to_string())
}

fn is_image_source(src: &str) -> bool {
    ["data:image/", "http://", "https://", "blob:", "/"]
        .iter()
        .any(|prefix| src.starts_with(prefix))
}

fn table_row(item: &LineItem) -> TableRow {
    TableRow {
        item: item.name.clone(),
        quantity: format_number(item.quantity),
        rate: format_amount(item.rate),
        amount: format_amount(item.amount()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Position, TextAlign};
    use pretty_assertions::assert_eq;

    fn ctx() -> PlaceholderContext {
        let mut ctx = PlaceholderContext::default();
        ctx.tenant.company_name = "Acme Traders".into();
        ctx.tenant.logo = "data:image/png;base64,AAAA".into();
        ctx.invoice.bill_no = "INV-42".into();
        ctx.invoice.items = vec![LineItem::new("Pen", 2.0, 5.0), LineItem::new("Ink", 0.5, 30.0)];
        ctx
    }

    #[test]
    fn test_one_op_per_element_in_order() {
        let doc = Document::new()
            .with_element(Element::text("a", "x"))
            .with_element(Element::new("b", ElementKind::Divider))
            .with_element(Element::new("c", ElementKind::Spacer));
        let program = compile_template(&doc, &ctx());
        assert_eq!(program.page_count(), 1);
        assert!(matches!(
            program.ops.as_slice(),
            [Op::Text { .. }, Op::Rule { .. }, Op::Space { .. }]
        ));
    }

    #[test]
    fn test_text_resolved_and_positioned() {
        let doc = Document::new().with_element(
            Element::text("a", "unused")
                .with_placeholder("tenant.companyName")
                .at(12.0, 34.0)
                .sized(300.0, 50.0)
                .with_style(ElementStyle::default().bold().align(TextAlign::Center)),
        );
        let program = compile_template(&doc, &ctx());
        match &program.ops[0] {
            Op::Text {
                frame,
                style,
                content,
            } => {
                assert_eq!(content, "Acme Traders");
                assert_eq!(
                    *frame,
                    Frame {
                        x: 12.0,
                        y: 34.0,
                        width: 300.0,
                        height: 50.0
                    }
                );
                assert!(style.bold);
                assert_eq!(style.align, TextAlign::Center);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_table_rows_from_line_items() {
        let doc = Document::new().with_element(Element::new("t", ElementKind::Table));
        let program = compile_template(&doc, &ctx());
        let Op::Table { rows, .. } = &program.ops[0] else {
            panic!("expected table");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells(), ["Pen", "2", "5.00", "10.00"]);
        assert_eq!(rows[1].cells(), ["Ink", "0.5", "30.00", "15.00"]);
    }

    #[test]
    fn test_image_sources() {
        let logo = Element::new("logo", ElementKind::Image).with_placeholder("tenant.logo");
        let url = Element {
            content: "https://cdn.example.com/stamp.png".into(),
            ..Element::new("url", ElementKind::Image)
        };
        let empty = Element::new("empty", ElementKind::Image);
        let bad = Element::new("bad", ElementKind::Image).with_placeholder("tenant.nothing");

        let doc: Document = [logo, url, empty, bad].into_iter().collect();
        let srcs: Vec<_> = compile_template(&doc, &ctx())
            .ops
            .into_iter()
            .map(|op| match op {
                Op::Image { src, .. } => src,
                other => panic!("expected image, got {:?}", other),
            })
            .collect();
        assert_eq!(
            srcs,
            vec![
                Some("data:image/png;base64,AAAA".to_string()),
                Some("https://cdn.example.com/stamp.png".to_string()),
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_html_page_contains_resolved_values() {
        let doc = Document::new()
            .with_element(Element::text("a", "Bill {{invoice.billNo}}").at(10.0, 10.0))
            .with_element(Element::text("b", "{{bogus.token}}"));
        let html = compile_template(&doc, &ctx()).to_html();
        assert!(html.contains("Bill INV-42"));
        assert!(html.contains("{{bogus.token}}"));
        assert!(html.contains("size: 210mm 297mm"));
    }

    #[test]
    fn test_negative_geometry_passes_through() {
        let mut el = Element::text("a", "x");
        el.position = Position::new(-10.0, -10.0);
        let program = compile_template(&Document::new().with_element(el), &ctx());
        let Op::Text { frame, .. } = &program.ops[0] else {
            panic!("expected text");
        };
        assert_eq!(frame.x, -10.0);
    }
}
