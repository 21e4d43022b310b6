//! Plain-text views of the shared tables for the terminal.

use crate::error::ToolError;
use openfire_shared::board_presets::{self, PinMapping};
use openfire_shared::layout::board_layout;
use openfire_shared::{classify, Board, Region, SerialCommand};
use std::fmt::Write;

/// Parses `200`, `0xC8` or `0XC8` into a byte.
pub fn parse_command_byte(s: &str) -> Result<u8, ToolError> {
    let trimmed = s.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => trimmed.parse::<u8>(),
    };
    parsed.map_err(|_| ToolError::InvalidByte(s.to_string()))
}

pub fn describe_byte(byte: u8) -> String {
    let class = classify(byte);
    match SerialCommand::try_from(byte) {
        Ok(cmd) => format!("{byte:#04X} {cmd:?} ({class:?}, {:?})", class.direction()),
        Err(_) => format!("{byte:#04X} undefined ({class:?}, {:?})", class.direction()),
    }
}

pub fn render_boards() -> String {
    let mut out = String::new();
    for presets in board_presets::boards() {
        let board = presets.board;
        let _ = writeln!(
            out,
            "{:<20} {:<30} {} GPIOs, {} alternates",
            board.token(),
            board.display_name(),
            board.gpio_count(),
            presets.alternates.len()
        );
    }
    out
}

/// One row per GPIO: function label and diagram placement.
pub fn render_mapping(board: Board, title: &str, mapping: PinMapping) -> String {
    let layout = board_layout(board);
    let mut out = String::new();
    let _ = writeln!(out, "{} - {}", board.display_name(), title);
    for (gpio, function) in mapping.iter() {
        let placement = match layout.get(gpio) {
            Some(pos) if pos.region() == Region::Nothing => "hidden".to_string(),
            Some(pos) => format!("{:?} {}", pos.region(), pos.slot()),
            None => "no layout".to_string(),
        };
        let _ = writeln!(
            out,
            "GPIO{gpio:<3} {:<4} {:<24} {placement}",
            function.index(),
            function.label()
        );
    }
    out
}

/// Renders the default mapping, or the alternate named `alt`, for `token`.
/// Unknown board tokens render the generic board.
pub fn render_preset(token: &str, alt: Option<&str>) -> Result<String, ToolError> {
    let board = Board::from_token(token);
    match alt {
        None => Ok(render_mapping(board, "default", board_presets::presets(board).default)),
        Some(label) => {
            let preset = board_presets::alternate(board.token(), label).ok_or_else(|| {
                ToolError::UnknownAlternate {
                    board: board.token().to_string(),
                    label: label.to_string(),
                }
            })?;
            Ok(render_mapping(board, preset.label, preset.mapping))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_byte() {
        assert_eq!(parse_command_byte("200").unwrap(), 0xC8);
        assert_eq!(parse_command_byte("0xAA").unwrap(), 0xAA);
        assert_eq!(parse_command_byte("0Xfe").unwrap(), 0xFE);
        assert!(parse_command_byte("256").is_err());
        assert!(parse_command_byte("0x").is_err());
        assert!(parse_command_byte("dock").is_err());
    }

    #[test]
    fn test_describe_byte() {
        assert_eq!(describe_byte(0xAA), "0xAA CommitStart (Commit, AppToBoard)");
        assert_eq!(describe_byte(0x41), "0x41 undefined (Unassigned, Unknown)");
    }

    #[test]
    fn test_render_preset() {
        let text = render_preset("rpipico", None).unwrap();
        assert!(text.starts_with("Raspberry Pi Pico (RP2040) - default"));
        assert!(text.contains("GPIO28  30   Temp Sensor              Right 7"));
        assert!(text.contains("hidden"));
        assert!(render_preset("rpipico", Some("Nope")).is_err());
        assert!(render_preset("adafruitItsyRP2040", Some("SAMCO 1.1")).is_ok());
    }

    #[test]
    fn test_render_boards_lists_all() {
        let text = render_boards();
        assert_eq!(text.lines().count(), Board::ALL.len());
        assert!(text.contains("Unknown Board"));
    }
}
