//! Generic key events and digit-key tool selection.

use super::tool::Tool;
use crate::registry;

/// Generic key representation, independent of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Unmapped or unrecognized key
    Unknown,
}

/// Tool selected by pressing `key`, if it is a digit bound in the shortcut table.
pub fn tool_for_key(key: Key) -> Option<Tool> {
    match key {
        Key::Char(c) => registry::tool_at(c.to_digit(10)?),
        Key::Escape | Key::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_select_tools_by_shortcut() {
        assert_eq!(tool_for_key(Key::Char('1')), Some(Tool::Line));
        assert_eq!(tool_for_key(Key::Char('4')), Some(Tool::Arrow));
        assert_eq!(tool_for_key(Key::Char('5')), Some(Tool::Select));
    }

    #[test]
    fn other_keys_select_nothing() {
        assert_eq!(tool_for_key(Key::Char('0')), None);
        assert_eq!(tool_for_key(Key::Char('9')), None);
        assert_eq!(tool_for_key(Key::Char('a')), None);
        assert_eq!(tool_for_key(Key::Escape), None);
        assert_eq!(tool_for_key(Key::Unknown), None);
    }

    #[test]
    fn every_tool_is_reachable_from_its_digit() {
        for tool in Tool::ALL {
            let shortcut = registry::shortcut_of(tool).unwrap();
            let digit = char::from_digit(shortcut, 10).unwrap();
            assert_eq!(tool_for_key(Key::Char(digit)), Some(tool));
        }
    }
}
