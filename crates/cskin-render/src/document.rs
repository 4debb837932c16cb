//! Parsed skin document and lenient field access.
//!
//! The document is one flat JSON object; every style name reference
//! anywhere in the file resolves against this single top-level
//! namespace. The files ship with a `.yaml` extension but contain
//! strictly valid JSON.

use serde_json::{Map, Value};

use cskin_types::error::{Result, SkinError};

/// An immutable, parsed skin keyboard document.
#[derive(Debug, Clone)]
pub struct SkinDocument {
    map: Map<String, Value>,
}

impl SkinDocument {
    /// Parse raw skin file text. Fails unless the text is a JSON object.
    pub fn parse(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        match value {
            Value::Object(map) => Ok(Self { map }),
            _ => Err(SkinError::Document("skin file is not a JSON object".into())),
        }
    }

    /// Raw top-level entry lookup.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    /// Look up a style or button definition by name. `None` for missing
    /// names and for entries that are not objects.
    pub fn style(&self, name: &str) -> Option<&Map<String, Value>> {
        self.map.get(name)?.as_object()
    }

    /// Declared keyboard height, falling back to `default` when absent
    /// or zero.
    pub fn keyboard_height(&self, default: f32) -> f32 {
        non_zero_or(
            self.map
                .get("keyboardHeight")
                .and_then(Value::as_f64)
                .map(|v| v as f32),
            default,
        )
    }

    /// The `keyboardLayout` row array. Missing, non-array, or empty is
    /// fatal: there is nothing to preview.
    pub fn rows(&self) -> Result<&[Value]> {
        match self.map.get("keyboardLayout").and_then(Value::as_array) {
            Some(rows) if !rows.is_empty() => Ok(rows),
            _ => Err(SkinError::Layout(
                "keyboardLayout missing or empty".into(),
            )),
        }
    }

    /// Keyboard-level background fill, when `keyboardStyle` names a
    /// geometry-type style with a non-empty `normalColor`.
    pub fn background_color(&self) -> Option<&str> {
        let name = self.style("keyboardStyle")?.get("backgroundStyle")?.as_str()?;
        let bg = self.style(name)?;
        if bg.get("buttonStyleType").and_then(Value::as_str) != Some("geometry") {
            return None;
        }
        bg.get("normalColor")
            .and_then(Value::as_str)
            .filter(|color| !color.is_empty())
    }
}

/// Cells of one layout row: `{"HStack": {"subviews": [...]}}`. Rows
/// lacking that shape still occupy vertical space but place nothing.
pub fn row_cells(row: &Value) -> Option<&Vec<Value>> {
    row.get("HStack")?.get("subviews")?.as_array()
}

/// The button name a layout cell references: `{"Cell": "name"}`.
pub fn cell_name(cell: &Value) -> Option<&str> {
    cell.get("Cell")?.as_str()
}

/// Numeric field of a style map, `None` for absent or non-numeric.
pub(crate) fn field_f32(map: &Map<String, Value>, key: &str) -> Option<f32> {
    map.get(key).and_then(Value::as_f64).map(|v| v as f32)
}

/// String field of a style map, `None` for absent or non-string.
pub(crate) fn field_str<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key)?.as_str()
}

/// Fall back to `default` when the value is absent OR zero. Skin
/// documents treat zero as "unset" for heights, font sizes and center
/// fractions; insets and corner radii keep their plain zero default.
pub(crate) fn non_zero_or(value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(v) if v != 0.0 => v,
        _ => default,
    }
}
