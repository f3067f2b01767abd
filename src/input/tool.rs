//! Drawing tool selection.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Drawing tool selection.
///
/// The active tool determines what the pointer does on the canvas. Tools are
/// selected with number keys; see [`crate::registry::shortcut_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Straight line between two points
    Line,
    /// Freeform path following the pointer
    Path,
    /// Rectangle outline from corner to corner
    Rect,
    /// Line with an open arrowhead at the end point
    Arrow,
    /// Selection (no drawing)
    Select,
}

impl Tool {
    /// Declaration order. Keyboard shortcuts are positional within this list.
    pub const ALL: [Tool; 5] = [
        Tool::Line,
        Tool::Path,
        Tool::Rect,
        Tool::Arrow,
        Tool::Select,
    ];

    /// Identifier name of the tool.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Line => "line",
            Tool::Path => "path",
            Tool::Rect => "rect",
            Tool::Arrow => "arrow",
            Tool::Select => "select",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tool '{0}'")]
pub struct ParseToolError(pub String);

impl FromStr for Tool {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseToolError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for tool in Tool::ALL {
            assert_eq!(tool.name().parse::<Tool>().unwrap(), tool);
        }
        assert_eq!("ARROW".parse::<Tool>().unwrap(), Tool::Arrow);
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "ellipse".parse::<Tool>(),
            Err(ParseToolError("ellipse".to_string()))
        );
    }

    #[test]
    fn declared_names_are_unique() {
        for (i, a) in Tool::ALL.iter().enumerate() {
            for b in &Tool::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
