use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Key {
    Character(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Space,
    F(u8), // F1-F12
    /// Any other DOM key name ("Shift", "MediaPlayPause", ...).
    Named(String),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn from_dom(name: &str) -> Key {
        match name {
            "Enter" => Key::Enter,
            "Tab" => Key::Tab,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            " " | "Spacebar" => Key::Space,
            _ => {
                if let Some(n) = name.strip_prefix('F').and_then(|n| n.parse::<u8>().ok())
                    && (1..=12).contains(&n)
                {
                    return Key::F(n);
                }
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Character(c),
                    _ => Key::Named(name.to_string()),
                }
            }
        }
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::from_dom(&name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool, // Cmd on Mac, Win key on Windows
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    pub is_repeat: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
            is_repeat: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_dom_names() {
        assert_eq!(Key::from_dom("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_dom("Left"), Key::ArrowLeft);
        assert_eq!(Key::from_dom(" "), Key::Space);
        assert_eq!(Key::from_dom("F5"), Key::F(5));
        assert_eq!(Key::from_dom("a"), Key::Character('a'));
        assert_eq!(Key::from_dom("F13"), Key::Named("F13".into()));
        assert_eq!(Key::from_dom("Shift"), Key::Named("Shift".into()));
    }
}
