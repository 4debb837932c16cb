//! Layout configuration constants.

/// Logical canvas width every skin is authored against. Fractional
/// button widths ("3/4") scale relative to this.
pub const BASE_WIDTH: f32 = 1125.0;

/// Keyboard height used when the document declares none (or zero).
pub const DEFAULT_KEYBOARD_HEIGHT: f32 = 240.0;

/// Explicit configuration for the geometry engine.
///
/// Passed by value into layout computation so the fallback constants
/// are never ambient process state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Logical canvas width.
    pub base_width: f32,
    /// Fallback keyboard height.
    pub default_keyboard_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_width: BASE_WIDTH,
            default_keyboard_height: DEFAULT_KEYBOARD_HEIGHT,
        }
    }
}
