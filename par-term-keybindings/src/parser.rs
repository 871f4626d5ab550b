//! Session hotkey parser.
//!
//! Parses human-readable strings like "Ctrl+Shift+T" into a [`Hotkey`] whose
//! `Display` output is canonical: modifiers always appear in the order
//! Ctrl, Alt, Shift, Super and `CmdOrCtrl` is resolved for the current
//! platform. Two strings that trigger the same keystroke therefore format
//! identically, which is what conflict detection compares.

use std::fmt;

use thiserror::Error;
use winit::keyboard::NamedKey;

/// Error type for hotkey parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HotkeyParseError {
    #[error("Empty hotkey")]
    Empty,
    #[error("Hotkey ends with a modifier, no key specified")]
    MissingKey,
    #[error("Multiple keys specified: already have a key, found '{0}'")]
    MultipleKeys(String),
    #[error("Unknown key: '{0}'")]
    UnknownKey(String),
    /// Plain keys would swallow ordinary typing, so a hotkey needs Ctrl, Alt
    /// or Super unless it is a function key.
    #[error("Hotkey '{0}' needs Ctrl, Alt or Super (only F1-F12 may be used alone)")]
    MissingModifier(String),
}

/// Modifiers held for a hotkey.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HotkeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
}

impl HotkeyModifiers {
    fn has_chord_modifier(&self) -> bool {
        self.ctrl || self.alt || self.super_key
    }
}

/// The non-modifier key of a hotkey.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HotkeyKey {
    /// A single character key, stored upper-case
    Character(char),
    /// A named key (F1, Enter, ArrowUp, ...)
    Named(NamedKey),
}

/// A parsed session hotkey.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub modifiers: HotkeyModifiers,
    pub key: HotkeyKey,
}

impl Hotkey {
    /// Whether the key is one of F1-F12
    pub fn is_function_key(&self) -> bool {
        matches!(
            self.key,
            HotkeyKey::Named(
                NamedKey::F1
                    | NamedKey::F2
                    | NamedKey::F3
                    | NamedKey::F4
                    | NamedKey::F5
                    | NamedKey::F6
                    | NamedKey::F7
                    | NamedKey::F8
                    | NamedKey::F9
                    | NamedKey::F10
                    | NamedKey::F11
                    | NamedKey::F12
            )
        )
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.modifiers;
        for (held, label) in [
            (m.ctrl, "Ctrl"),
            (m.alt, "Alt"),
            (m.shift, "Shift"),
            (m.super_key, "Super"),
        ] {
            if held {
                write!(f, "{}+", label)?;
            }
        }
        match &self.key {
            HotkeyKey::Character(c) => write!(f, "{}", c),
            HotkeyKey::Named(n) => write!(f, "{:?}", n),
        }
    }
}

impl std::str::FromStr for Hotkey {
    type Err = HotkeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hotkey(s)
    }
}

/// Parse a hotkey string.
///
/// Format: "Modifier+Modifier+Key", case-insensitive.
///
/// Modifiers:
/// - `Ctrl`, `Control`
/// - `Alt`, `Option`
/// - `Shift`
/// - `Super`, `Cmd`, `Command`, `Meta`, `Win`
/// - `CmdOrCtrl` (Super on macOS, Ctrl elsewhere)
///
/// Keys: single characters, `F1`-`F12`, `Enter`, `Escape`, `Space`, `Tab`,
/// `Backspace`, `Delete`, `Insert`, `Home`, `End`, `PageUp`, `PageDown` and
/// the arrow keys.
pub fn parse_hotkey(s: &str) -> Result<Hotkey, HotkeyParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(HotkeyParseError::Empty);
    }

    let mut modifiers = HotkeyModifiers::default();
    let mut key_part: Option<&str> = None;

    for part in trimmed.split('+').map(str::trim) {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers.ctrl = true,
            "alt" | "option" => modifiers.alt = true,
            "shift" => modifiers.shift = true,
            "super" | "cmd" | "command" | "meta" | "win" => modifiers.super_key = true,
            "cmdorctrl" => {
                if cfg!(target_os = "macos") {
                    modifiers.super_key = true;
                } else {
                    modifiers.ctrl = true;
                }
            }
            _ => {
                if key_part.is_some() {
                    return Err(HotkeyParseError::MultipleKeys(part.to_string()));
                }
                key_part = Some(part);
            }
        }
    }

    let key = parse_key(key_part.ok_or(HotkeyParseError::MissingKey)?)?;
    let hotkey = Hotkey { modifiers, key };

    if !hotkey.modifiers.has_chord_modifier() && !hotkey.is_function_key() {
        return Err(HotkeyParseError::MissingModifier(trimmed.to_string()));
    }
    Ok(hotkey)
}

fn parse_key(s: &str) -> Result<HotkeyKey, HotkeyParseError> {
    if let Some(named) = parse_named_key(s) {
        return Ok(HotkeyKey::Named(named));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Ok(HotkeyKey::Character(c.to_ascii_uppercase())),
        _ => Err(HotkeyParseError::UnknownKey(s.to_string())),
    }
}

fn parse_named_key(s: &str) -> Option<NamedKey> {
    let lower = s.to_lowercase();
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        return match n {
            1 => Some(NamedKey::F1),
            2 => Some(NamedKey::F2),
            3 => Some(NamedKey::F3),
            4 => Some(NamedKey::F4),
            5 => Some(NamedKey::F5),
            6 => Some(NamedKey::F6),
            7 => Some(NamedKey::F7),
            8 => Some(NamedKey::F8),
            9 => Some(NamedKey::F9),
            10 => Some(NamedKey::F10),
            11 => Some(NamedKey::F11),
            12 => Some(NamedKey::F12),
            _ => None,
        };
    }

    match lower.as_str() {
        "enter" | "return" => Some(NamedKey::Enter),
        "escape" | "esc" => Some(NamedKey::Escape),
        "space" => Some(NamedKey::Space),
        "tab" => Some(NamedKey::Tab),
        "backspace" => Some(NamedKey::Backspace),
        "delete" | "del" => Some(NamedKey::Delete),
        "insert" | "ins" => Some(NamedKey::Insert),
        "home" => Some(NamedKey::Home),
        "end" => Some(NamedKey::End),
        "pageup" | "pgup" => Some(NamedKey::PageUp),
        "pagedown" | "pgdn" => Some(NamedKey::PageDown),
        "up" | "arrowup" => Some(NamedKey::ArrowUp),
        "down" | "arrowdown" => Some(NamedKey::ArrowDown),
        "left" | "arrowleft" => Some(NamedKey::ArrowLeft),
        "right" | "arrowright" => Some(NamedKey::ArrowRight),
        _ => None,
    }
}
