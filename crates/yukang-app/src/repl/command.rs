//! Input line parsing.

use yukang_ai::PRESETS;

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Free-text question, submitted verbatim.
    Ask(String),
    /// Preset question by 1-based number.
    Preset(usize),
    ListPresets,
    History,
    Reset,
    Usage,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parse a line. Blank lines yield `None` and are never submitted.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(number) = preset_number(trimmed) {
            return Some(Command::Preset(number));
        }

        let Some(name) = trimmed.strip_prefix('/') else {
            return Some(Command::Ask(line.trim_end_matches(['\r', '\n']).to_string()));
        };

        let command = match name {
            "presets" | "p" => Command::ListPresets,
            "history" | "h" => Command::History,
            "reset" | "r" => Command::Reset,
            "usage" => Command::Usage,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => match preset_number(other) {
                Some(number) => Command::Preset(number),
                None => Command::Unknown(trimmed.to_string()),
            },
        };
        Some(command)
    }
}

fn preset_number(s: &str) -> Option<usize> {
    s.parse::<usize>()
        .ok()
        .filter(|n| (1..=PRESETS.len()).contains(n))
}
