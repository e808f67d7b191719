//! # Code Generation
//!
//! Converts print programs to self-contained printable HTML.
//!
//! The output needs nothing but a browser print dialog: styles are inline,
//! barcodes are inline SVG, and pages are separated with CSS page breaks.

use std::fmt::Write;

use super::ops::{Frame, Op, Program, Sheet, TABLE_HEADERS, TextStyle};
use crate::printer::{LabelSheetConfig, PageConfig};

/// Height of the barcode SVG viewBox, in modules.
const BARCODE_VIEW_HEIGHT: usize = 40;

impl Program {
    /// Compile the program to a printable HTML document.
    pub fn to_html(&self) -> String {
        self.to_html_with_title("Print")
    }

    /// Compile with a custom `<title>` (shown by print dialogs as the job name).
    pub fn to_html_with_title(&self, title: &str) -> String {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{}</title>", escape(title));
        out.push_str("<style>\n");
        out.push_str(&stylesheet(&self.sheet));
        out.push_str("</style>\n</head>\n<body>\n");

        for (index, page) in self.pages().into_iter().enumerate() {
            if index == 0 {
                out.push_str("<div class=\"page\">\n");
            } else {
                out.push_str("<div class=\"page page-break\">\n");
            }
            for op in page {
                emit_op(&mut out, op);
            }
            out.push_str("</div>\n");
        }

        out.push_str("</body>\n</html>\n");
        out
    }
}

fn stylesheet(sheet: &Sheet) -> String {
    match sheet {
        Sheet::Page(page) => page_stylesheet(page),
        Sheet::Labels(labels) => label_stylesheet(labels),
    }
}

fn page_stylesheet(page: &PageConfig) -> String {
    format!(
        "@page {{ size: {w}mm {h}mm; margin: 0; }}\n\
         body {{ margin: 0; font-family: Arial, sans-serif; }}\n\
         .page {{ position: relative; width: {w}mm; height: {h}mm; overflow: hidden; }}\n\
         .page-break {{ break-before: page; page-break-before: always; }}\n\
         .element {{ position: absolute; box-sizing: border-box; overflow: hidden; }}\n\
         .element img {{ width: 100%; height: 100%; object-fit: contain; }}\n\
         .image-placeholder {{ width: 100%; height: 100%; border: 1px dashed #999; color: #999; \
         display: flex; align-items: center; justify-content: center; box-sizing: border-box; }}\n\
         .element table {{ width: 100%; border-collapse: collapse; }}\n\
         .element th, .element td {{ border: 1px solid #ccc; padding: 4px; }}\n\
         .element th {{ background: #f5f5f5; }}\n\
         .element hr {{ border: none; margin: 0; }}\n",
        w = page.width_mm,
        h = page.height_mm,
    )
}

fn label_stylesheet(labels: &LabelSheetConfig) -> String {
    format!(
        "@page {{ margin: 0; }}\n\
         body {{ margin: 0; font-family: Arial, sans-serif; }}\n\
         .page {{ width: {w}mm; }}\n\
         .page-break {{ break-before: page; page-break-before: always; }}\n\
         .label {{ width: {w}mm; height: {h}mm; box-sizing: border-box; padding: 2mm; \
         display: flex; flex-direction: column; align-items: center; justify-content: center; \
         overflow: hidden; }}\n\
         .label svg {{ width: 100%; height: 55%; }}\n\
         .label .code {{ font-size: 10pt; font-weight: bold; }}\n\
         .label .sequence {{ font-size: 8pt; }}\n",
        w = labels.label_width_mm,
        h = labels.label_height_mm,
    )
}

fn emit_op(out: &mut String, op: &Op) {
    match op {
        Op::PageBreak => {}

        Op::Text {
            frame,
            style,
            content,
        } => {
            let _ = writeln!(
                out,
                "<div class=\"element element-text\" style=\"{}{}white-space: pre-wrap;\">{}</div>",
                frame_css(frame),
                text_css(style),
                escape(content)
            );
        }

        Op::Image { frame, src } => {
            let _ = write!(
                out,
                "<div class=\"element element-image\" style=\"{}\">",
                frame_css(frame)
            );
            match src {
                Some(src) => {
                    let _ = write!(out, "<img src=\"{}\" alt=\"\">", escape(src));
                }
                None => out.push_str("<div class=\"image-placeholder\">Image</div>"),
            }
            out.push_str("</div>\n");
        }

        Op::Table { frame, style, rows } => {
            let _ = write!(
                out,
                "<div class=\"element element-table\" style=\"{}{}\"><table><thead><tr>",
                frame_css(frame),
                text_css(style)
            );
            for header in TABLE_HEADERS {
                let _ = write!(out, "<th>{}</th>", header);
            }
            out.push_str("</tr></thead><tbody>");
            for row in rows {
                out.push_str("<tr>");
                for (i, cell) in row.cells().into_iter().enumerate() {
                    let align = if i == 0 { "left" } else { "right" };
                    let _ = write!(out, "<td style=\"text-align: {};\">{}</td>", align, escape(cell));
                }
                out.push_str("</tr>");
            }
            out.push_str("</tbody></table></div>\n");
        }

        Op::Rule { frame, color } => {
            let _ = writeln!(
                out,
                "<div class=\"element element-divider\" style=\"{}display: flex; align-items: center;\">\
                 <hr style=\"width: 100%; border-top: 1px solid {};\"></div>",
                frame_css(frame),
                escape(color)
            );
        }

        Op::Space { frame } => {
            let _ = writeln!(
                out,
                "<div class=\"element element-spacer\" style=\"{}\"></div>",
                frame_css(frame)
            );
        }

        Op::Label {
            code,
            sequence,
            bars,
        } => {
            out.push_str("<div class=\"label\">");
            out.push_str(&barcode_svg(bars));
            let _ = write!(
                out,
                "<div class=\"code\">{}</div><div class=\"sequence\">{}</div>",
                escape(code),
                escape(sequence)
            );
            out.push_str("</div>\n");
        }
    }
}

fn frame_css(frame: &Frame) -> String {
    format!(
        "left: {}px; top: {}px; width: {}px; height: {}px; ",
        frame.x, frame.y, frame.width, frame.height
    )
}

fn text_css(style: &TextStyle) -> String {
    format!(
        "font-size: {}px; font-weight: {}; text-align: {}; color: {}; background-color: {}; padding: {}px; ",
        style.font_size,
        if style.bold { "bold" } else { "normal" },
        style.align.as_css(),
        escape(&style.color),
        escape(&style.background),
        style.padding
    )
}

/// Render Code 128 modules as an SVG. Adjacent bars merge into one rect.
fn barcode_svg(bars: &[bool]) -> String {
    if bars.is_empty() {
        return String::new();
    }

    let mut svg = format!(
        "<svg class=\"barcode\" viewBox=\"0 0 {} {}\" preserveAspectRatio=\"none\" \
         xmlns=\"http://www.w3.org/2000/svg\">",
        bars.len(),
        BARCODE_VIEW_HEIGHT
    );

    let mut x = 0;
    while x < bars.len() {
        if !bars[x] {
            x += 1;
            continue;
        }
        let start = x;
        while x < bars.len() && bars[x] {
            x += 1;
        }
        let _ = write!(
            svg,
            "<rect x=\"{}\" y=\"0\" width=\"{}\" height=\"{}\"/>",
            start,
            x - start,
            BARCODE_VIEW_HEIGHT
        );
    }

    svg.push_str("</svg>");
    svg
}

/// Simple HTML escaping for text and attribute values.
pub(crate) fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextAlign;
    use crate::ir::TableRow;

    fn style() -> TextStyle {
        TextStyle {
            font_size: 14.0,
            bold: true,
            align: TextAlign::Center,
            color: "#000000".into(),
            background: "transparent".into(),
            padding: 0.0,
        }
    }

    fn frame() -> Frame {
        Frame {
            x: 50.0,
            y: 60.5,
            width: 200.0,
            height: 40.0,
        }
    }

    #[test]
    fn test_page_size_in_stylesheet() {
        let html = Program::new(Sheet::Page(PageConfig::A4)).to_html();
        assert!(html.contains("size: 210mm 297mm"));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_text_positioned_and_escaped() {
        let mut program = Program::new(Sheet::Page(PageConfig::A4));
        program.push(Op::Text {
            frame: frame(),
            style: style(),
            content: "<b>Tom & Co</b>".into(),
        });
        let html = program.to_html();
        assert!(html.contains("left: 50px; top: 60.5px; width: 200px; height: 40px;"));
        assert!(html.contains("font-weight: bold"));
        assert!(html.contains("&lt;b&gt;Tom &amp; Co&lt;/b&gt;"));
    }

    #[test]
    fn test_table_headers_and_rows() {
        let mut program = Program::new(Sheet::Page(PageConfig::A4));
        program.push(Op::Table {
            frame: frame(),
            style: style(),
            rows: vec![TableRow {
                item: "Pen".into(),
                quantity: "2".into(),
                rate: "5.00".into(),
                amount: "10.00".into(),
            }],
        });
        let html = program.to_html();
        for header in TABLE_HEADERS {
            assert!(html.contains(&format!("<th>{}</th>", header)));
        }
        assert!(html.contains(">10.00</td>"));
    }

    #[test]
    fn test_image_placeholder_box() {
        let mut program = Program::new(Sheet::Page(PageConfig::A4));
        program.push(Op::Image {
            frame: frame(),
            src: None,
        });
        assert!(program.to_html().contains("image-placeholder"));
    }

    #[test]
    fn test_barcode_runs_merge() {
        let svg = barcode_svg(&[true, true, false, true, false, false, true, true, true]);
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains("x=\"0\" y=\"0\" width=\"2\""));
        assert!(svg.contains("x=\"6\" y=\"0\" width=\"3\""));
        assert!(barcode_svg(&[]).is_empty());
    }

    #[test]
    fn test_page_break_markup() {
        let mut program = Program::new(Sheet::Labels(LabelSheetConfig::LABEL_80X30));
        for code in ["A-001", "A-002"] {
            program.push(Op::Label {
                code: code.into(),
                sequence: "#".into(),
                bars: vec![true],
            });
            program.push(Op::PageBreak);
        }
        program.ops.pop();
        let html = program.to_html();
        assert_eq!(html.matches("<div class=\"page").count(), 2);
        assert_eq!(html.matches("page page-break").count(), 1);
        assert!(html.contains("width: 80mm; height: 30mm"));
    }
}
