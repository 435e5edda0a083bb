//! Keyboard shortcut handling.

use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::constants::DEFAULT_QUIT_KEYS;
use crate::error::TuiError;

/// Normalized, lowercase name of a key event: `"q"`, `"esc"`, `"ctrl+c"`,
/// `"alt+enter"`, `"f5"`.
///
/// Shift is folded into the character itself, so `Q` and `q` share a name.
#[must_use]
pub fn key_name(key: &KeyEvent) -> String {
    let base = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_lowercase().collect(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "shift+tab".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::F(n) => format!("f{n}"),
        _ => return String::new(),
    };

    let mut name = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        name.push_str("ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        name.push_str("alt+");
    }
    name.push_str(&base);
    name
}

/// Configured key bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    quit: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: DEFAULT_QUIT_KEYS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl KeyBindings {
    /// Build bindings from quit key names; names are matched case-insensitively.
    pub fn new<I, S>(quit: I) -> Result<Self, TuiError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keys = Vec::new();
        for raw in quit {
            let key = raw.as_ref().trim().to_lowercase();
            if key.is_empty() || key.contains(char::is_whitespace) || key.ends_with('+') {
                return Err(TuiError::InvalidKeyBinding(raw.as_ref().to_string()));
            }
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        if keys.is_empty() {
            return Err(TuiError::NoQuitKeys);
        }
        Ok(Self { quit: keys })
    }

    #[must_use]
    pub fn quit_keys(&self) -> &[String] {
        &self.quit
    }

    /// Whether `key` is one of the quit keys.
    #[must_use]
    pub fn is_quit(&self, key: &KeyEvent) -> bool {
        let name = key_name(key);
        !name.is_empty() && self.quit.iter().any(|k| *k == name)
    }

    /// Help line listing the quit keys.
    #[must_use]
    pub fn help_text(&self) -> String {
        format!("{} to quit", self.quit.join(" / "))
    }
}

impl FromStr for KeyBindings {
    type Err = TuiError;

    /// Parse a comma-separated list such as `"ctrl+c,q,esc"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.split(',').filter(|k| !k.trim().is_empty()))
    }
}

impl fmt::Display for KeyBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.quit.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn key_names() {
        assert_eq!(key_name(&key(KeyCode::Char('q'), KeyModifiers::NONE)), "q");
        assert_eq!(key_name(&key(KeyCode::Char('Q'), KeyModifiers::SHIFT)), "q");
        assert_eq!(key_name(&key(KeyCode::Esc, KeyModifiers::NONE)), "esc");
        assert_eq!(
            key_name(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            "ctrl+c"
        );
        assert_eq!(
            key_name(&key(KeyCode::Enter, KeyModifiers::ALT)),
            "alt+enter"
        );
        assert_eq!(key_name(&key(KeyCode::F(5), KeyModifiers::NONE)), "f5");
        assert_eq!(key_name(&key(KeyCode::Char(' '), KeyModifiers::NONE)), "space");
        assert_eq!(key_name(&key(KeyCode::Null, KeyModifiers::NONE)), "");
    }

    #[test]
    fn default_quit_keys() {
        let bindings = KeyBindings::default();
        assert!(bindings.is_quit(&key(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(bindings.is_quit(&key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(bindings.is_quit(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!bindings.is_quit(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn quit_is_case_insensitive() {
        let bindings: KeyBindings = "Ctrl+C,Q".parse().unwrap();
        assert_eq!(bindings.quit_keys(), ["ctrl+c", "q"]);
        assert!(bindings.is_quit(&key(KeyCode::Char('Q'), KeyModifiers::SHIFT)));
        assert!(bindings.is_quit(&key(KeyCode::Char('C'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn rejects_bad_bindings() {
        assert!(matches!(
            "".parse::<KeyBindings>(),
            Err(TuiError::NoQuitKeys)
        ));
        assert!(matches!(
            KeyBindings::new(["ctrl+"]),
            Err(TuiError::InvalidKeyBinding(_))
        ));
        assert!(matches!(
            KeyBindings::new(["a b"]),
            Err(TuiError::InvalidKeyBinding(_))
        ));
    }

    #[test]
    fn duplicates_collapse() {
        let bindings = KeyBindings::new(["q", "Q", "esc"]).unwrap();
        assert_eq!(bindings.quit_keys(), ["q", "esc"]);
        assert_eq!(bindings.to_string(), "q,esc");
    }

    #[test]
    fn help_lists_keys() {
        assert_eq!(
            KeyBindings::default().help_text(),
            "ctrl+c / q / esc to quit"
        );
    }
}
