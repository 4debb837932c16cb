//! Foreground style references and conditional resolution.
//!
//! A button's `foregroundStyle` comes in three legal shapes: a single
//! style name, a list of names (simultaneous overlays, e.g. an icon
//! plus a label), or a list of conditional entries selecting one name
//! from runtime-like inputs. Everything else is opaque and resolves to
//! itself; the renderer then simply has nothing to draw.

use serde_json::Value;

use crate::document;

/// Inputs a conditional style entry can match against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConditionContext {
    /// Whether the preview simulates ascii (latin) input mode.
    pub ascii_mode: bool,
    /// Simulated return-key type, when any.
    pub return_key_type: Option<i64>,
}

/// One entry of a conditional foreground list.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalEntry {
    pub condition_key: String,
    /// Raw condition value; `Value::Null` encodes an absent value.
    pub condition_value: Value,
    pub style_name: String,
}

impl ConditionalEntry {
    /// Whether this entry's condition holds under `ctx`.
    ///
    /// `rime$ascii_mode` is deliberately asymmetric, mirroring the
    /// skin schema: an ABSENT value matches ascii mode on, an explicit
    /// `false` matches ascii mode off, and an explicit `true` never
    /// matches anything.
    fn matches(&self, ctx: &ConditionContext) -> bool {
        match self.condition_key.as_str() {
            "rime$ascii_mode" => {
                (self.condition_value.is_null() && ctx.ascii_mode)
                    || (self.condition_value == Value::Bool(false) && !ctx.ascii_mode)
            }
            "$returnKeyType" => match (ctx.return_key_type, self.condition_value.as_array()) {
                (Some(wanted), Some(values)) => {
                    values.iter().any(|v| v.as_i64() == Some(wanted))
                }
                _ => false,
            },
            _ => false,
        }
    }
}

/// A classified foreground style reference.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleRef {
    /// No foreground declared.
    None,
    /// A single style name.
    Single(String),
    /// Several names, all rendered independently.
    Multi(Vec<String>),
    /// Conditional entries, evaluated in document order.
    Conditional(Vec<ConditionalEntry>),
    /// Unrecognized shape, carried through unchanged and never drawn.
    Opaque(Value),
}

impl StyleRef {
    /// Classify a raw `foregroundStyle` value into one of the three
    /// recognized shapes, or `Opaque` for anything else (empty lists,
    /// mixed lists, malformed entries).
    pub fn classify(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => StyleRef::None,
            Some(Value::String(name)) => StyleRef::Single(name.clone()),
            Some(Value::Array(items)) if !items.is_empty() => {
                if items.iter().all(Value::is_string) {
                    StyleRef::Multi(
                        items
                            .iter()
                            .filter_map(|v| v.as_str().map(str::to_string))
                            .collect(),
                    )
                } else if let Some(entries) = classify_entries(items) {
                    StyleRef::Conditional(entries)
                } else {
                    StyleRef::Opaque(Value::Array(items.clone()))
                }
            }
            Some(other) => StyleRef::Opaque(other.clone()),
        }
    }

    /// Resolve under `ctx`. Only `Conditional` changes: the first
    /// matching entry wins, and with no match the FIRST entry is the
    /// default. Every other shape is returned unchanged.
    pub fn resolve(&self, ctx: &ConditionContext) -> StyleRef {
        match self {
            StyleRef::Conditional(entries) => {
                match entries.iter().find(|e| e.matches(ctx)).or_else(|| entries.first()) {
                    Some(entry) => StyleRef::Single(entry.style_name.clone()),
                    None => self.clone(),
                }
            }
            other => other.clone(),
        }
    }

    /// Plain style names of a resolved reference; empty for `None` and
    /// `Opaque`.
    pub fn names(&self) -> Vec<&str> {
        match self {
            StyleRef::Single(name) => vec![name.as_str()],
            StyleRef::Multi(names) => names.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

/// Every element must be an object carrying string `conditionKey` and
/// `styleName` fields, else the list is not a conditional shape.
fn classify_entries(items: &[Value]) -> Option<Vec<ConditionalEntry>> {
    items
        .iter()
        .map(|item| {
            let map = item.as_object()?;
            let condition_key = document::field_str(map, "conditionKey")?.to_string();
            let style_name = document::field_str(map, "styleName")?.to_string();
            let condition_value = map.get("conditionValue").cloned().unwrap_or(Value::Null);
            Some(ConditionalEntry {
                condition_key,
                condition_value,
                style_name,
            })
        })
        .collect()
}
