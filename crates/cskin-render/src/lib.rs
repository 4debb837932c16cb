//! Skin document interpretation and SVG preview rendering.
//!
//! A skin keyboard file is a single flat JSON object: style and button
//! definitions keyed by name, next to the `keyboardLayout` row array
//! and a few keyboard-level entries. This crate resolves that document
//! into concrete geometry and paint instructions:
//!
//! - [`document`] wraps the parsed object and classifies the
//!   shape-polymorphic pieces once, at read time;
//! - [`style`] picks the active foreground style under runtime-like
//!   conditions (ascii mode, return-key type);
//! - [`layout`] computes row heights, button x-offsets and
//!   inset-adjusted inner rectangles;
//! - [`svg`] walks the resolved layout and emits drawing primitives,
//!   serialized as a self-contained SVG.
//!
//! Malformed entries degrade to "skip this element": the preview is
//! best-effort and one bad button never aborts the render.

pub mod document;
pub mod layout;
pub mod style;
pub mod svg;

pub use document::SkinDocument;
pub use layout::{ButtonPlacement, KeyboardLayout, resolve_width};
pub use style::{ConditionContext, ConditionalEntry, StyleRef};
pub use svg::Primitive;
