//! Drawing primitives and SVG serialization.
//!
//! The renderer walks the computed layout in painter's order: the
//! keyboard background rectangle first, then each button's background
//! and its text labels. Only text-type foreground styles with a
//! non-empty literal produce glyphs; icon styles and opaque references
//! are skipped without complaint.

use serde_json::Value;

use crate::document::{self, SkinDocument};
use crate::layout::KeyboardLayout;
use crate::style::ConditionContext;

const FONT_FAMILY: &str = "-apple-system, system-ui, sans-serif";

/// A single vector drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        rx: f32,
        fill: String,
    },
    Text {
        x: f32,
        y: f32,
        font_size: f32,
        fill: String,
        content: String,
    },
}

impl Primitive {
    /// Serialize to one SVG element. Coordinates are formatted to two
    /// decimals; text content is escaped.
    pub fn to_markup(&self) -> String {
        match self {
            Primitive::Rect { x, y, w, h, rx, fill } => format!(
                r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" rx="{rx:.2}" fill="{fill}" />"#
            ),
            Primitive::Text {
                x,
                y,
                font_size,
                fill,
                content,
            } => format!(
                r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" dominant-baseline="middle" font-family="{FONT_FAMILY}" font-size="{font_size}" fill="{fill}">{}</text>"#,
                escape(content)
            ),
        }
    }
}

/// Emit the drawing primitives for a computed layout under the given
/// condition context.
pub fn render(
    doc: &SkinDocument,
    layout: &KeyboardLayout,
    ctx: &ConditionContext,
) -> Vec<Primitive> {
    let mut primitives = Vec::new();

    if let Some(fill) = &layout.background {
        primitives.push(Primitive::Rect {
            x: 0.0,
            y: 0.0,
            w: layout.width,
            h: layout.height,
            rx: 0.0,
            fill: fill.clone(),
        });
    }

    for button in &layout.buttons {
        if let Some(fill) = &button.fill {
            primitives.push(Primitive::Rect {
                x: button.inner.x,
                y: button.inner.y,
                w: button.inner.w,
                h: button.inner.h,
                rx: button.corner_radius,
                fill: fill.clone(),
            });
        }

        let resolved = button.foreground.resolve(ctx);
        for name in resolved.names() {
            let Some(style) = doc.style(name) else {
                continue;
            };
            if document::field_str(style, "buttonStyleType") != Some("text") {
                continue;
            }
            let Some(text) = document::field_str(style, "text").filter(|t| !t.is_empty()) else {
                continue;
            };

            let center = style.get("center").and_then(Value::as_object);
            let cx = document::non_zero_or(center.and_then(|m| document::field_f32(m, "x")), 0.5);
            let cy = document::non_zero_or(center.and_then(|m| document::field_f32(m, "y")), 0.5);
            let font_size = document::non_zero_or(document::field_f32(style, "fontSize"), 16.0);
            let fill = document::field_str(style, "normalColor")
                .filter(|color| !color.is_empty())
                .unwrap_or("#000000");

            primitives.push(Primitive::Text {
                x: button.inner.x + button.inner.w * cx,
                y: button.inner.y + button.inner.h * cy,
                font_size,
                fill: fill.to_string(),
                content: text.to_string(),
            });
        }
    }

    primitives
}

/// Serialize primitives into a self-contained SVG document.
pub fn to_svg(primitives: &[Primitive], width: f32, height: f32) -> String {
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    out.push('\n');
    for primitive in primitives {
        out.push_str(&primitive.to_markup());
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

/// Escape the five markup metacharacters.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
