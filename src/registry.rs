//! Read-only tool and style registry.
//!
//! Everything here is process-wide constant data: the tool list and its keyboard
//! shortcuts, the stroke palette, the style defaults, and the default canvas size.
//! Shortcuts are positional: the tool at index `i` of [`Tool::ALL`] gets shortcut
//! `i + 1`, so reordering the declaration changes the shortcuts.

use crate::draw::color::{Color, PALETTE, SELECT_ORANGE};
use crate::input::Tool;
use std::sync::LazyLock;

/// Stroke width used when a renderer is not given one.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Default stroke color, always the first palette entry.
pub const DEFAULT_LINE_COLOR: Color = PALETTE[0];

/// Style defaults applied by the renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleDefaults {
    pub stroke_color: Color,
    pub stroke_width: f64,
    /// Emphasis color for selections and UI, never used for shape strokes
    pub highlight_color: Color,
}

pub const STYLE_DEFAULTS: StyleDefaults = StyleDefaults {
    stroke_color: DEFAULT_LINE_COLOR,
    stroke_width: DEFAULT_LINE_WIDTH,
    highlight_color: SELECT_ORANGE,
};

impl Default for StyleDefaults {
    fn default() -> Self {
        STYLE_DEFAULTS
    }
}

/// Drawing surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

pub const DEFAULT_CANVAS_SIZE: CanvasSize = CanvasSize {
    width: 800,
    height: 600,
};

impl Default for CanvasSize {
    fn default() -> Self {
        DEFAULT_CANVAS_SIZE
    }
}

/// Bijective mapping between tools and their 1-based keyboard shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutTable {
    by_shortcut: Vec<Tool>,
}

impl ShortcutTable {
    /// Builds the table from an ordered tool list; shortcut = position + 1.
    ///
    /// Repeated tools keep their first position.
    pub fn from_order(order: &[Tool]) -> Self {
        let mut by_shortcut: Vec<Tool> = Vec::with_capacity(order.len());
        for &tool in order {
            if by_shortcut.contains(&tool) {
                log::warn!("Tool '{}' declared twice, keeping first shortcut", tool);
                continue;
            }
            by_shortcut.push(tool);
        }
        Self { by_shortcut }
    }

    /// Tool bound to `shortcut`, if any.
    pub fn tool_at(&self, shortcut: u32) -> Option<Tool> {
        let index = usize::try_from(shortcut.checked_sub(1)?).ok()?;
        self.by_shortcut.get(index).copied()
    }

    /// Shortcut bound to `tool`, if the tool is in the table.
    pub fn shortcut_of(&self, tool: Tool) -> Option<u32> {
        self.by_shortcut
            .iter()
            .position(|&t| t == tool)
            .and_then(|index| u32::try_from(index + 1).ok())
    }

    /// `(shortcut, tool)` pairs in shortcut order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, Tool)> + '_ {
        (1u32..).zip(self.by_shortcut.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.by_shortcut.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_shortcut.is_empty()
    }
}

static SHORTCUTS: LazyLock<ShortcutTable> =
    LazyLock::new(|| ShortcutTable::from_order(&Tool::ALL));

/// The shortcut table for the declared tool order.
pub fn shortcuts() -> &'static ShortcutTable {
    &SHORTCUTS
}

/// Tool selected by pressing `shortcut`.
pub fn tool_at(shortcut: u32) -> Option<Tool> {
    SHORTCUTS.tool_at(shortcut)
}

/// Shortcut for `tool`. Every tool in [`Tool::ALL`] has one.
pub fn shortcut_of(tool: Tool) -> Option<u32> {
    SHORTCUTS.shortcut_of(tool)
}

/// The stroke palette; index 0 is the default stroke color.
pub fn palette() -> &'static [Color] {
    &PALETTE
}
