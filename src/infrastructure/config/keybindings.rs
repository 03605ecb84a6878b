use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// User-bindable actions, resolved from raw key events by the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum KeyAction {
    Quit,
    Suspend,
    Retry,
    GoLanding,
    GoLogin,
    GoRegister,
    GoDashboard,
    GoResumeBank,
    UploadResume,
    Back,
}

/// Key-sequence to action map, deserialized from strings like `<ctrl-c>`.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, KeyAction>);

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, KeyAction>::deserialize(deserializer)?;

        let mut keybindings = HashMap::new();
        for (key_str, action) in parsed_map {
            let sequence = parse_key_sequence(&key_str).map_err(serde::de::Error::custom)?;
            keybindings.insert(sequence, action);
        }

        Ok(KeyBindings(keybindings))
    }
}

/// Parse a sequence like `<g><d>` into its key events.
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        let raw = raw.strip_suffix('>').unwrap_or(raw);
        raw
    } else {
        raw
    };
    let sequences = if raw.contains("><") {
        raw.split("><")
            .map(|seq| {
                if let Some(s) = seq.strip_prefix('<') {
                    s
                } else if let Some(s) = seq.strip_suffix('>') {
                    s
                } else {
                    seq
                }
            })
            .collect()
    } else {
        vec![raw]
    };

    sequences.into_iter().map(parse_key_event).collect()
}

/// Parse a single key description like `ctrl-c`, `esc` or `q`.
pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "f1" => KeyCode::F(1),
        "f2" => KeyCode::F(2),
        "f3" => KeyCode::F(3),
        "f4" => KeyCode::F(4),
        "f5" => KeyCode::F(5),
        "f6" => KeyCode::F(6),
        "f7" => KeyCode::F(7),
        "f8" => KeyCode::F(8),
        "f9" => KeyCode::F(9),
        "f10" => KeyCode::F(10),
        "f11" => KeyCode::F(11),
        "f12" => KeyCode::F(12),
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        "tab" => KeyCode::Tab,
        c if c.len() == 1 => {
            let mut c = c.chars().next().ok_or_else(|| String::from("empty key"))?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_simple_key() {
        assert_eq!(
            parse_key_event("q").expect("parse"),
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())
        );
    }

    #[test]
    fn test_parse_key_with_modifier() {
        assert_eq!(
            parse_key_event("ctrl-c").expect("parse"),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        );
    }

    #[test]
    fn test_parse_key_with_multiple_modifiers() {
        assert_eq!(
            parse_key_event("ctrl-alt-d").expect("parse"),
            KeyEvent::new(
                KeyCode::Char('d'),
                KeyModifiers::CONTROL | KeyModifiers::ALT
            )
        );
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(
            parse_key_event("esc").expect("parse"),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::empty())
        );
        assert_eq!(
            parse_key_event("enter").expect("parse"),
            KeyEvent::new(KeyCode::Enter, KeyModifiers::empty())
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            parse_key_event("CTRL-C").expect("parse"),
            parse_key_event("ctrl-c").expect("parse")
        );
    }

    #[test]
    fn test_parse_invalid_key() {
        assert!(parse_key_event("no-such-key").is_err());
    }

    #[test]
    fn test_parse_key_sequence_single() {
        assert_eq!(
            parse_key_sequence("<q>").expect("parse"),
            vec![KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())]
        );
    }

    #[test]
    fn test_parse_key_sequence_multi() {
        assert_eq!(
            parse_key_sequence("<g><d>").expect("parse"),
            vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::empty()),
                KeyEvent::new(KeyCode::Char('d'), KeyModifiers::empty()),
            ]
        );
    }

    #[test]
    fn test_parse_key_sequence_unbalanced() {
        assert!(parse_key_sequence("<q").is_err());
    }

    #[test]
    fn test_keybindings_deserialize() {
        let bindings: KeyBindings =
            json5::from_str(r#"{ "<q>": "Quit", "<ctrl-z>": "Suspend", "<r>": "Retry" }"#)
                .expect("valid keybindings");

        assert_eq!(
            bindings.get(&vec![KeyEvent::new(
                KeyCode::Char('q'),
                KeyModifiers::empty()
            )]),
            Some(&KeyAction::Quit)
        );
        assert_eq!(
            bindings.get(&vec![KeyEvent::new(
                KeyCode::Char('z'),
                KeyModifiers::CONTROL
            )]),
            Some(&KeyAction::Suspend)
        );
        assert_eq!(
            bindings.get(&vec![KeyEvent::new(
                KeyCode::Char('r'),
                KeyModifiers::empty()
            )]),
            Some(&KeyAction::Retry)
        );
    }
}
