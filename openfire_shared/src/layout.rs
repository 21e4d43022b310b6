//! Packed UI placement of each GPIO in the app's board diagram.
//!
//! A [`LayoutPosition`] is a region constant plus a slot number, added
//! together into one integer. Regions are multiples of 512, so the slot must
//! stay below [`SLOT_LIMIT`] or it would spill into the region field. All
//! packing and unpacking goes through [`LayoutPosition::encode`] and
//! [`LayoutPosition::decode`]; nothing else should do arithmetic on raw values.

use crate::board::{Board, RP2040_GPIO_COUNT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Exclusive upper bound for slot numbers.
pub const SLOT_LIMIT: u16 = 512;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("slot {slot} does not fit below the region field (limit 512)")]
    SlotOverflow { slot: u16 },
    #[error("packed layout value {0} was not produced by the layout encoder")]
    InvalidPosition(u32),
}

/// Column group a pin is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Region {
    /// Not drawn at all; used for unexposed pins.
    Nothing = 0,
    Left = 512,
    Right = 1024,
    /// Under the board, between the two side columns.
    Middle = 2048,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Nothing, Region::Left, Region::Right, Region::Middle];

    pub const fn value(self) -> u32 {
        self as u32
    }

    // Largest region constant not exceeding `raw`.
    const fn containing(raw: u32) -> Region {
        if raw >= Region::Middle as u32 {
            Region::Middle
        } else if raw >= Region::Right as u32 {
            Region::Right
        } else if raw >= Region::Left as u32 {
            Region::Left
        } else {
            Region::Nothing
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LayoutPosition(u32);

impl LayoutPosition {
    pub const NOTHING: LayoutPosition = LayoutPosition(0);

    /// Packs `region` and `slot`. Panics if `slot >= SLOT_LIMIT`, which turns
    /// an oversize slot in a `const` table into a compile error.
    pub const fn encode(region: Region, slot: u16) -> LayoutPosition {
        assert!(slot < SLOT_LIMIT, "layout slot overlaps the region field");
        LayoutPosition(region as u32 + slot as u32)
    }

    pub fn try_encode(region: Region, slot: u16) -> Result<LayoutPosition, LayoutError> {
        if slot >= SLOT_LIMIT {
            return Err(LayoutError::SlotOverflow { slot });
        }
        Ok(LayoutPosition(region.value() + u32::from(slot)))
    }

    pub fn decode(raw: u32) -> Result<(Region, u16), LayoutError> {
        let region = Region::containing(raw);
        let slot = raw - region.value();
        if slot >= u32::from(SLOT_LIMIT) {
            return Err(LayoutError::InvalidPosition(raw));
        }
        Ok((region, slot as u16))
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn region(self) -> Region {
        Region::containing(self.0)
    }

    pub const fn slot(self) -> u16 {
        // Always below SLOT_LIMIT: values only come from the encoder.
        (self.0 - Region::containing(self.0) as u32) as u16
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self.region(), Region::Nothing)
    }
}

impl TryFrom<u32> for LayoutPosition {
    type Error = LayoutError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        let (region, slot) = LayoutPosition::decode(raw)?;
        LayoutPosition::try_encode(region, slot)
    }
}

impl From<LayoutPosition> for u32 {
    fn from(pos: LayoutPosition) -> u32 {
        pos.0
    }
}

const fn l(slot: u16) -> LayoutPosition {
    LayoutPosition::encode(Region::Left, slot)
}

const fn r(slot: u16) -> LayoutPosition {
    LayoutPosition::encode(Region::Right, slot)
}

const fn m(slot: u16) -> LayoutPosition {
    LayoutPosition::encode(Region::Middle, slot)
}

const NO: LayoutPosition = LayoutPosition::NOTHING;

type BoardLayout = [LayoutPosition; RP2040_GPIO_COUNT];

// 15 pins down the left edge, the rest up the right. GPIO 23-25 and 29 are
// not broken out; 29 is the onboard temperature monitor.
#[rustfmt::skip]
const RPI_PICO: BoardLayout = [
    l(1),  l(2),  l(4),  l(5),  l(6),
    l(7),  l(9),  l(10), l(11), l(12),
    l(14), l(15), l(16), l(17), l(19),
    l(20), r(20), r(19), r(17), r(16),
    r(15), r(14), r(12), NO,    NO,
    NO,    r(10), r(9),  r(7),  NO,
];

// GPIO 13-17 and 21-23 are not broken out.
#[rustfmt::skip]
const ITSYBITSY_RP2040: BoardLayout = [
    r(13), r(14), r(12), r(11), m(2),
    m(1),  r(9),  r(8),  r(7),  r(6),
    r(5),  r(4),  l(14), NO,    NO,
    NO,    NO,    NO,    l(11), l(12),
    l(13), NO,    NO,    NO,    l(9),
    l(10), l(5),  l(6),  l(7),  l(8),
];

// GPIO 11-17 and 21-25 are not broken out.
#[rustfmt::skip]
const KB2040: BoardLayout = [
    l(3),  l(4),  l(7),  l(8),  l(9),
    l(10), l(11), l(12), l(13), l(14),
    r(14), NO,    NO,    NO,    NO,
    NO,    NO,    NO,    r(11), r(13),
    r(12), NO,    NO,    NO,    NO,
    NO,    r(10), r(9),  r(8),  r(7),
];

// GPIO 2-3, 8-11, 14 and 22-24 are not broken out.
#[rustfmt::skip]
const NANO_RP2040: BoardLayout = [
    r(18), r(17), NO,    NO,    r(4),
    r(6),  l(4),  r(5),  NO,    NO,
    NO,    NO,    l(11), l(12), NO,
    r(13), r(12), r(11), r(10), r(9),
    r(8),  r(7),  NO,    NO,    NO,
    r(14), l(7),  l(8),  l(9),  l(10),
];

// Clockwise. GPIO 16 drives the onboard NeoPixel; 17-25 are underside pads
// that are left out of the diagram.
#[rustfmt::skip]
const WAVESHARE_ZERO: BoardLayout = [
    r(2),  r(3),  r(4),  r(5),  r(6),
    r(7),  r(8),  r(9),  r(10), r(11),
    m(3),  m(2),  l(11), l(10), l(9),
    l(8),  NO,    NO,    NO,    NO,
    NO,    NO,    NO,    NO,    NO,
    NO,    l(7),  l(6),  l(5),  l(4),
];

// Every pin exposed; the user takes responsibility for what they wire up.
#[rustfmt::skip]
const GENERIC: BoardLayout = [
    l(1),  l(2),  l(3),  l(4),  l(5),
    l(6),  l(7),  l(8),  l(9),  l(10),
    l(11), l(12), l(13), l(14), l(15),
    l(16), r(16), r(15), r(14), r(13),
    r(12), r(11), r(10), r(9),  r(8),
    r(7),  r(6),  r(5),  r(4),  r(3),
];

/// Diagram placement for every GPIO of `board`, indexed by GPIO number.
pub fn board_layout(board: Board) -> &'static [LayoutPosition] {
    match board {
        Board::RpiPico | Board::RpiPicoW => &RPI_PICO,
        Board::AdafruitItsyRp2040 => &ITSYBITSY_RP2040,
        Board::AdafruitKb2040 => &KB2040,
        Board::ArduinoNanoRp2040 => &NANO_RP2040,
        Board::WaveshareZero => &WAVESHARE_ZERO,
        Board::VccgndYd | Board::Generic => &GENERIC,
    }
}

/// Same as [`board_layout`], keyed by the board's wire token. Unknown tokens
/// get the generic layout.
pub fn layout(token: &str) -> &'static [LayoutPosition] {
    board_layout(Board::from_token(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_left_seven() {
        let pos = LayoutPosition::encode(Region::Left, 7);
        assert_eq!(pos.raw(), 519);
        assert_eq!(LayoutPosition::decode(519).unwrap(), (Region::Left, 7));
    }

    #[test]
    fn test_round_trip_every_region_and_slot() {
        for region in Region::ALL {
            for slot in 0..SLOT_LIMIT {
                let pos = LayoutPosition::try_encode(region, slot).unwrap();
                assert_eq!(LayoutPosition::decode(pos.raw()).unwrap(), (region, slot));
                assert_eq!((pos.region(), pos.slot()), (region, slot));
            }
        }
    }

    #[test]
    fn test_oversize_slot_rejected() {
        assert_eq!(
            LayoutPosition::try_encode(Region::Right, 512),
            Err(LayoutError::SlotOverflow { slot: 512 })
        );
    }

    #[test]
    #[should_panic(expected = "layout slot overlaps the region field")]
    fn test_const_encode_panics_on_oversize_slot() {
        let slot = std::hint::black_box(600);
        let _ = LayoutPosition::encode(Region::Left, slot);
    }

    #[test]
    fn test_decode_rejects_gap_values() {
        // 1536..2048 sits above Right's slot range but below Middle.
        assert_eq!(LayoutPosition::decode(1536), Err(LayoutError::InvalidPosition(1536)));
        assert_eq!(LayoutPosition::decode(2047), Err(LayoutError::InvalidPosition(2047)));
        assert_eq!(LayoutPosition::decode(2560), Err(LayoutError::InvalidPosition(2560)));
        assert_eq!(LayoutPosition::decode(2559).unwrap(), (Region::Middle, 511));
    }

    #[test]
    fn test_serde_validates_raw_value() {
        let pos: LayoutPosition = serde_json::from_str("1031").unwrap();
        assert_eq!((pos.region(), pos.slot()), (Region::Right, 7));
        assert!(serde_json::from_str::<LayoutPosition>("1600").is_err());
        assert_eq!(serde_json::to_string(&pos).unwrap(), "1031");
    }

    #[test]
    fn test_pico_w_shares_pico_layout() {
        assert_eq!(layout("rpipicow"), layout("rpipico"));
        assert_eq!(layout("rpipico")[28], LayoutPosition::encode(Region::Right, 7));
        assert!(layout("rpipico")[29].is_hidden());
    }
}
