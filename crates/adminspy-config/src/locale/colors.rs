//! Chat color tokens and the control characters the game client renders.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `{0}` style placeholders and `{Green}` style color tokens.
pub(crate) static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([0-9]+|[A-Za-z]+)\}").unwrap());

/// Colors understood by the in-game chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatColor {
    Default,
    White,
    DarkRed,
    LightPurple,
    Green,
    Olive,
    Lime,
    Red,
    Grey,
    Yellow,
    Silver,
    Blue,
    DarkBlue,
    Purple,
    LightRed,
    Gold,
}

impl ChatColor {
    /// Control character that switches the chat line to this color.
    pub fn code(self) -> char {
        match self {
            ChatColor::Default | ChatColor::White => '\x01',
            ChatColor::DarkRed => '\x02',
            ChatColor::LightPurple => '\x03',
            ChatColor::Green => '\x04',
            ChatColor::Olive => '\x05',
            ChatColor::Lime => '\x06',
            ChatColor::Red => '\x07',
            ChatColor::Grey => '\x08',
            ChatColor::Yellow => '\x09',
            ChatColor::Silver => '\x0A',
            ChatColor::Blue => '\x0B',
            ChatColor::DarkBlue => '\x0C',
            ChatColor::Purple => '\x0E',
            ChatColor::LightRed => '\x0F',
            ChatColor::Gold => '\x10',
        }
    }

    /// Case-insensitive token lookup (`Green`, `green`, `GREEN`).
    pub fn from_token(token: &str) -> Option<Self> {
        let color = match token.to_ascii_lowercase().as_str() {
            "default" => ChatColor::Default,
            "white" => ChatColor::White,
            "darkred" => ChatColor::DarkRed,
            "lightpurple" => ChatColor::LightPurple,
            "green" => ChatColor::Green,
            "olive" => ChatColor::Olive,
            "lime" => ChatColor::Lime,
            "red" => ChatColor::Red,
            "grey" | "gray" => ChatColor::Grey,
            "yellow" => ChatColor::Yellow,
            "silver" => ChatColor::Silver,
            "blue" => ChatColor::Blue,
            "darkblue" => ChatColor::DarkBlue,
            "purple" => ChatColor::Purple,
            "lightred" => ChatColor::LightRed,
            "gold" => ChatColor::Gold,
            _ => return None,
        };
        Some(color)
    }
}
