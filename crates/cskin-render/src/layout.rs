//! Keyboard geometry: row heights, button placement, inner rectangles.
//!
//! Rows partition the keyboard height equally. Within a row, cells are
//! placed strictly left to right with a running x cursor; a cell's
//! width is fixed, fractional ("3/4" of the base width), or the full
//! base width when unspecified. Background insets then shrink each
//! button's frame to the inner rectangle everything is painted in.

use serde_json::Value;

use cskin_types::config::LayoutConfig;
use cskin_types::error::Result;
use cskin_types::geometry::{Insets, Rect};

use crate::document::{self, SkinDocument};
use crate::style::StyleRef;

/// One placed button, ready for painting.
#[derive(Debug, Clone)]
pub struct ButtonPlacement {
    /// Button definition name (document key).
    pub name: String,
    /// Outer frame before inset reduction.
    pub frame: Rect,
    /// Frame reduced by the background style's insets.
    pub inner: Rect,
    /// Background corner radius.
    pub corner_radius: f32,
    /// Background fill color, when the background style declares one.
    pub fill: Option<String>,
    /// Classified foreground reference, resolved at render time.
    pub foreground: StyleRef,
}

/// The fully computed keyboard geometry.
#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    /// Canvas width (the base width constant).
    pub width: f32,
    /// Computed keyboard height.
    pub height: f32,
    /// Keyboard-level background fill, when declared.
    pub background: Option<String>,
    /// Placed buttons in document order.
    pub buttons: Vec<ButtonPlacement>,
}

/// Resolve a `size.width` expression against the base width.
///
/// Numbers pass through; `"num/den"` strings scale the base width;
/// other strings parse as plain floats. Anything malformed (including
/// a zero denominator) falls back to the base width.
pub fn resolve_width(expr: Option<&Value>, base: f32) -> f32 {
    match expr {
        None | Some(Value::Null) => base,
        Some(Value::Number(n)) => n.as_f64().map_or(base, |v| v as f32),
        Some(Value::String(s)) => {
            if let Some((num, den)) = s.split_once('/') {
                match (num.trim().parse::<f32>(), den.trim().parse::<f32>()) {
                    (Ok(n), Ok(d)) if d != 0.0 => n / d * base,
                    _ => {
                        log::warn!("malformed width fraction {s:?}, using base width");
                        base
                    }
                }
            } else {
                s.trim().parse::<f32>().unwrap_or_else(|_| {
                    log::warn!("malformed width {s:?}, using base width");
                    base
                })
            }
        }
        Some(_) => base,
    }
}

/// Compute the keyboard layout for a parsed document.
///
/// The only fatal condition is a missing or empty `keyboardLayout`;
/// unknown cell references and malformed entries are skipped so one
/// bad button never aborts the preview.
pub fn compute(doc: &SkinDocument, config: &LayoutConfig) -> Result<KeyboardLayout> {
    let rows = doc.rows()?;
    let height = doc.keyboard_height(config.default_keyboard_height);
    let row_height = height / rows.len() as f32;
    log::debug!("{} rows, row height {row_height:.2}", rows.len());

    let mut buttons = Vec::new();
    let mut y = 0.0;
    for row in rows {
        if let Some(cells) = document::row_cells(row) {
            let mut x = 0.0f32;
            for cell in cells {
                let Some(name) = document::cell_name(cell) else {
                    continue;
                };
                let Some(button) = doc.style(name) else {
                    log::warn!("cell references unknown button {name:?}, skipping");
                    continue;
                };

                let width = resolve_width(
                    button.get("size").and_then(|size| size.get("width")),
                    config.base_width,
                );
                let frame = Rect::new(x, y, width, row_height);

                let bg_name = button.get("backgroundStyle").and_then(Value::as_str);
                let (insets, corner_radius, fill) = background_attrs(doc, bg_name);

                buttons.push(ButtonPlacement {
                    name: name.to_string(),
                    frame,
                    inner: insets.inner(frame),
                    corner_radius,
                    fill,
                    foreground: StyleRef::classify(button.get("foregroundStyle")),
                });
                x += width;
            }
        }
        // Rows without usable cells still consume their height.
        y += row_height;
    }

    Ok(KeyboardLayout {
        width: config.base_width,
        height,
        background: doc.background_color().map(str::to_string),
        buttons,
    })
}

/// Insets, corner radius and fill of a button's background style.
/// Missing or non-object styles contribute nothing.
fn background_attrs(doc: &SkinDocument, name: Option<&str>) -> (Insets, f32, Option<String>) {
    let Some(style) = name.and_then(|n| doc.style(n)) else {
        return (Insets::ZERO, 0.0, None);
    };
    let insets = style
        .get("insets")
        .and_then(Value::as_object)
        .map(|m| Insets {
            top: document::field_f32(m, "top").unwrap_or(0.0),
            left: document::field_f32(m, "left").unwrap_or(0.0),
            bottom: document::field_f32(m, "bottom").unwrap_or(0.0),
            right: document::field_f32(m, "right").unwrap_or(0.0),
        })
        .unwrap_or(Insets::ZERO);
    let corner_radius = document::field_f32(style, "cornerRadius").unwrap_or(0.0);
    let fill = document::field_str(style, "normalColor")
        .filter(|color| !color.is_empty())
        .map(str::to_string);
    (insets, corner_radius, fill)
}
