//! Board identity: the token a board reports when the app docks to it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// GPIO count of the RP2040, the microcontroller behind every supported board.
pub const RP2040_GPIO_COUNT: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown board identifier '{0}'")]
pub struct UnknownBoard(pub String);

/// A supported board variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Board {
    #[serde(rename = "rpipico")]
    RpiPico,
    #[serde(rename = "rpipicow")]
    RpiPicoW,
    #[serde(rename = "adafruitItsyRP2040")]
    AdafruitItsyRp2040,
    #[serde(rename = "adafruitKB2040")]
    AdafruitKb2040,
    #[serde(rename = "arduinoNanoRP2040")]
    ArduinoNanoRp2040,
    #[serde(rename = "waveshareZero")]
    WaveshareZero,
    /// Firmware reports it, but it has no preset or layout of its own and
    /// uses the generic tables.
    #[serde(rename = "vccgndYD")]
    VccgndYd,
    /// Fallback for unrecognized boards: every pin exposed, nothing assigned.
    #[serde(rename = "generic")]
    Generic,
}

impl Board {
    pub const ALL: [Board; 8] = [
        Board::RpiPico,
        Board::RpiPicoW,
        Board::AdafruitItsyRp2040,
        Board::AdafruitKb2040,
        Board::ArduinoNanoRp2040,
        Board::WaveshareZero,
        Board::VccgndYd,
        Board::Generic,
    ];

    /// Wire token, as reported by the firmware.
    pub const fn token(self) -> &'static str {
        match self {
            Board::RpiPico => "rpipico",
            Board::RpiPicoW => "rpipicow",
            Board::AdafruitItsyRp2040 => "adafruitItsyRP2040",
            Board::AdafruitKb2040 => "adafruitKB2040",
            Board::ArduinoNanoRp2040 => "arduinoNanoRP2040",
            Board::WaveshareZero => "waveshareZero",
            Board::VccgndYd => "vccgndYD",
            Board::Generic => "generic",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Board::RpiPico => "Raspberry Pi Pico (RP2040)",
            Board::RpiPicoW => "Raspberry Pi Pico W (RP2040)",
            Board::AdafruitItsyRp2040 => "Adafruit ItsyBitsy RP2040",
            Board::AdafruitKb2040 => "Adafruit Keeboar KB2040",
            Board::ArduinoNanoRp2040 => "Arduino Nano Connect RP2040",
            Board::WaveshareZero => "Waveshare Zero RP2040",
            Board::VccgndYd => "VCC-GND Studio YD-RP2040",
            Board::Generic => "Unknown Board",
        }
    }

    pub const fn gpio_count(self) -> usize {
        RP2040_GPIO_COUNT
    }

    /// Lenient lookup used on the docking path: unknown tokens become
    /// [`Board::Generic`] instead of failing.
    pub fn from_token(token: &str) -> Board {
        match token.parse() {
            Ok(board) => board,
            Err(UnknownBoard(token)) => {
                tracing::warn!("Unrecognized board '{}', falling back to generic layout", token);
                Board::Generic
            }
        }
    }
}

impl FromStr for Board {
    type Err = UnknownBoard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::ALL
            .into_iter()
            .find(|b| b.token() == s)
            .ok_or_else(|| UnknownBoard(s.to_string()))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Board this firmware build targets, picked by cargo feature.
#[cfg(feature = "board-rpipico")]
pub const FIRMWARE_BOARD: Board = Board::RpiPico;
#[cfg(all(feature = "board-rpipicow", not(feature = "board-rpipico")))]
pub const FIRMWARE_BOARD: Board = Board::RpiPicoW;
#[cfg(all(
    feature = "board-itsybitsy-rp2040",
    not(any(feature = "board-rpipico", feature = "board-rpipicow"))
))]
pub const FIRMWARE_BOARD: Board = Board::AdafruitItsyRp2040;
#[cfg(all(
    feature = "board-kb2040",
    not(any(
        feature = "board-rpipico",
        feature = "board-rpipicow",
        feature = "board-itsybitsy-rp2040"
    ))
))]
pub const FIRMWARE_BOARD: Board = Board::AdafruitKb2040;
#[cfg(all(
    feature = "board-nano-rp2040",
    not(any(
        feature = "board-rpipico",
        feature = "board-rpipicow",
        feature = "board-itsybitsy-rp2040",
        feature = "board-kb2040"
    ))
))]
pub const FIRMWARE_BOARD: Board = Board::ArduinoNanoRp2040;
#[cfg(all(
    feature = "board-waveshare-zero",
    not(any(
        feature = "board-rpipico",
        feature = "board-rpipicow",
        feature = "board-itsybitsy-rp2040",
        feature = "board-kb2040",
        feature = "board-nano-rp2040"
    ))
))]
pub const FIRMWARE_BOARD: Board = Board::WaveshareZero;
#[cfg(all(
    feature = "board-vccgnd-yd",
    not(any(
        feature = "board-rpipico",
        feature = "board-rpipicow",
        feature = "board-itsybitsy-rp2040",
        feature = "board-kb2040",
        feature = "board-nano-rp2040",
        feature = "board-waveshare-zero"
    ))
))]
pub const FIRMWARE_BOARD: Board = Board::VccgndYd;
#[cfg(not(any(
    feature = "board-rpipico",
    feature = "board-rpipicow",
    feature = "board-itsybitsy-rp2040",
    feature = "board-kb2040",
    feature = "board-nano-rp2040",
    feature = "board-waveshare-zero",
    feature = "board-vccgnd-yd"
)))]
pub const FIRMWARE_BOARD: Board = Board::Generic;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for board in Board::ALL {
            assert_eq!(board.token().parse::<Board>().unwrap(), board);
        }
    }

    #[test]
    fn test_unknown_token_falls_back_to_generic() {
        assert_eq!(Board::from_token("esp32s3"), Board::Generic);
        assert_eq!(Board::from_token(""), Board::Generic);
        assert!("RPIPICO".parse::<Board>().is_err());
    }

    #[test]
    fn test_vccgnd_yd_token_is_recognized() {
        assert_eq!(Board::from_token("vccgndYD"), Board::VccgndYd);
        assert_eq!(Board::VccgndYd.to_string(), "vccgndYD");
        assert!("vccgndyd".parse::<Board>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_token() {
        let json = serde_json::to_string(&Board::AdafruitKb2040).unwrap();
        assert_eq!(json, "\"adafruitKB2040\"");
    }

    #[cfg(not(any(
        feature = "board-rpipico",
        feature = "board-rpipicow",
        feature = "board-itsybitsy-rp2040",
        feature = "board-kb2040",
        feature = "board-nano-rp2040",
        feature = "board-waveshare-zero",
        feature = "board-vccgnd-yd"
    )))]
    #[test]
    fn test_default_firmware_board_is_generic() {
        assert_eq!(FIRMWARE_BOARD, Board::Generic);
    }
}
