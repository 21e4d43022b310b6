//! Default and alternate pin mappings for each supported board.
//!
//! A mapping is indexed by GPIO number and holds one [`PinFunction`] per pin.
//! Within one mapping a real function may be owned by at most one pin, and
//! the length always equals the board's GPIO count. The compiled-in tables are
//! checked against both rules by [`crate::consistency`]; custom mappings can be
//! checked with [`validate_mapping`].

use crate::board::{Board, RP2040_GPIO_COUNT};
use crate::pin_function::PinFunction::{self, *};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("mapping has {actual} entries, board has {expected} GPIOs")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("{function:?} is assigned to both GPIO {first} and GPIO {second}")]
    DuplicateFunction {
        function: PinFunction,
        first: usize,
        second: usize,
    },
    #[error("GPIO {gpio} has unknown pin function index {value}")]
    UnknownFunction { gpio: usize, value: i32 },
}

/// Read-only view of a compiled-in mapping. Serializes as the list of pin
/// function indices, the form firmware and the app exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMapping {
    pins: &'static [PinFunction],
}

impl PinMapping {
    pub const fn new(pins: &'static [PinFunction]) -> Self {
        Self { pins }
    }

    pub fn get(&self, gpio: usize) -> Option<PinFunction> {
        self.pins.get(gpio).copied()
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn pins(&self) -> &'static [PinFunction] {
        self.pins
    }

    /// GPIO that owns `function`, if any. Sentinels are never "owned".
    pub fn gpio_of(&self, function: PinFunction) -> Option<usize> {
        if function.is_sentinel() {
            return None;
        }
        self.pins.iter().position(|&f| f == function)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, PinFunction)> + '_ {
        self.pins.iter().copied().enumerate()
    }
}

impl Serialize for PinMapping {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.pins.iter().map(|function| function.index()))
    }
}

impl std::ops::Index<usize> for PinMapping {
    type Output = PinFunction;

    fn index(&self, gpio: usize) -> &PinFunction {
        &self.pins[gpio]
    }
}

/// A named template offered next to a board's default mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternatePreset {
    pub board: Board,
    pub label: &'static str,
    pub mapping: PinMapping,
}

/// Everything registered for one board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardPresets {
    pub board: Board,
    pub default: PinMapping,
    pub alternates: &'static [AlternatePreset],
}

/// Every defect in `pins` for a board with `gpio_count` GPIOs.
pub fn mapping_defects(pins: &[PinFunction], gpio_count: usize) -> Vec<MappingError> {
    let mut defects = Vec::new();
    if pins.len() != gpio_count {
        defects.push(MappingError::LengthMismatch {
            expected: gpio_count,
            actual: pins.len(),
        });
    }
    let mut owners: HashMap<PinFunction, usize> = HashMap::new();
    for (gpio, &function) in pins.iter().enumerate() {
        if function.is_sentinel() {
            continue;
        }
        if let Some(&first) = owners.get(&function) {
            defects.push(MappingError::DuplicateFunction {
                function,
                first,
                second: gpio,
            });
        } else {
            owners.insert(function, gpio);
        }
    }
    defects
}

pub fn validate_mapping(pins: &[PinFunction], gpio_count: usize) -> Result<(), MappingError> {
    match mapping_defects(pins, gpio_count).into_iter().next() {
        Some(defect) => Err(defect),
        None => Ok(()),
    }
}

/// Converts raw catalog indices (as stored in flash or a config file) into
/// pin functions.
pub fn pins_from_indices(indices: &[i32]) -> Result<Vec<PinFunction>, MappingError> {
    indices
        .iter()
        .enumerate()
        .map(|(gpio, &value)| {
            PinFunction::try_from(value).map_err(|_| MappingError::UnknownFunction { gpio, value })
        })
        .collect()
}

type PinTable = [PinFunction; RP2040_GPIO_COUNT];

// Pico and Pico W: GPIO 23-25 are not broken out, GPIO 29 is the onboard
// temperature monitor.
#[rustfmt::skip]
const RPI_PICO: PinTable = [
    GunA,        GunB,        GunC,        Start,       Select,
    Home,        GunUp,       GunDown,     GunLeft,     GunRight,
    LedR,        LedG,        LedB,        Pump,        Pedal,
    Trigger,     SolenoidPin, RumblePin,   PeriphSda,   PeriphScl,
    CamSda,      CamScl,      Unmapped,    Unavailable, Unavailable,
    Unavailable, Unmapped,    Unmapped,    TempPin,     Unavailable,
];

// GPIO 13-17 and 21-23 are not broken out.
#[rustfmt::skip]
const ITSYBITSY_RP2040: PinTable = [
    Unmapped,    Unmapped,    CamSda,      CamScl,      Pedal,
    Unmapped,    Trigger,     GunDown,     GunLeft,     GunUp,
    GunRight,    GunC,        Unmapped,    Unavailable, Unavailable,
    Unavailable, Unavailable, Unavailable, Unmapped,    Unmapped,
    Unmapped,    Unavailable, Unavailable, Unavailable, RumblePin,
    SolenoidPin, GunB,        GunA,        Start,       Select,
];

// GPIO 11-17 and 21-25 are not broken out.
#[rustfmt::skip]
const KB2040: PinTable = [
    Unmapped,    Unmapped,    CamSda,      CamScl,      GunB,
    RumblePin,   GunC,        SolenoidPin, Select,      Start,
    GunRight,    Unavailable, Unavailable, Unavailable, Unavailable,
    Unavailable, Unavailable, Unavailable, GunUp,       GunLeft,
    GunDown,     Unavailable, Unavailable, Unavailable, Unavailable,
    Unavailable, TempPin,     Home,        Trigger,     GunA,
];

// GPIO 2-3, 8-11, 14 and 22-24 are not broken out. Some analog pins belong
// to the NINA module and are not usable yet.
#[rustfmt::skip]
const NANO_RP2040: PinTable = [
    Trigger,     Pedal,       Unavailable, Unavailable, GunA,
    GunC,        Unmapped,    GunB,        Unavailable, Unavailable,
    Unavailable, Unavailable, CamSda,      CamScl,      Unavailable,
    Unmapped,    Unmapped,    Unmapped,    Unmapped,    Unmapped,
    Unmapped,    Unmapped,    Unavailable, Unavailable, Unavailable,
    Unmapped,    Unmapped,    Unmapped,    TempPin,     Unmapped,
];

// GPIO 16 is wired to the onboard NeoPixel.
#[rustfmt::skip]
const WAVESHARE_ZERO: PinTable = [
    Trigger,     GunA,        GunB,        GunC,        Start,
    Select,      Unmapped,    Unmapped,    Unmapped,    Unmapped,
    Unmapped,    Unmapped,    Unmapped,    Unmapped,    CamSda,
    CamScl,      Unavailable, Unmapped,    Unmapped,    Unmapped,
    Unmapped,    Unmapped,    Unmapped,    Unmapped,    Unmapped,
    Unmapped,    Unmapped,    Unmapped,    Unmapped,    TempPin,
];

const GENERIC: PinTable = [Unmapped; RP2040_GPIO_COUNT];

#[rustfmt::skip]
const RPI_PICO_TEST: PinTable = [
    Pump,        Pedal,       Unmapped,    Unmapped,    Unmapped,
    Unmapped,    Unmapped,    Unmapped,    Unmapped,    Unmapped,
    Unmapped,    Unmapped,    Unmapped,    Unmapped,    Unmapped,
    Unmapped,    Unmapped,    Unmapped,    Unmapped,    Unmapped,
    Unmapped,    Unmapped,    Unmapped,    Unavailable, Unavailable,
    Unavailable, Unmapped,    Unmapped,    Unmapped,    Unavailable,
];

#[rustfmt::skip]
const RPI_PICO_TEST_2: PinTable = [
    GunA,        Trigger,     Unmapped,    Unmapped,    Unmapped,
    Unmapped,    Unmapped,    Unmapped,    Unmapped,    Unmapped,
    Unmapped,    Unmapped,    Unmapped,    Unmapped,    Unmapped,
    Unmapped,    Unmapped,    Unmapped,    Unmapped,    Unmapped,
    Unmapped,    Unmapped,    Unmapped,    Unavailable, Unavailable,
    Unavailable, Unmapped,    Unmapped,    Unmapped,    Unavailable,
];

#[rustfmt::skip]
const ITSYBITSY_SAMCO_2_0: PinTable = [
    Unmapped,    Unmapped,    CamSda,      CamScl,      Pedal,
    Unmapped,    Trigger,     GunDown,     GunLeft,     GunUp,
    GunRight,    Home,        Unmapped,    Unavailable, Unavailable,
    Unavailable, Unavailable, Unavailable, Unmapped,    Unmapped,
    Unmapped,    Unavailable, Unavailable, Unavailable, RumblePin,
    SolenoidPin, GunB,        GunA,        Start,       Select,
];

#[rustfmt::skip]
const ITSYBITSY_SAMCO_1_1: PinTable = [
    Unmapped,    Unmapped,    CamSda,      CamScl,      Unmapped,
    Unmapped,    GunA,        GunB,        RumblePin,   Home,
    Trigger,     Unmapped,    Unmapped,    Unavailable, Unavailable,
    Unavailable, Unavailable, Unavailable, Unmapped,    Unmapped,
    Unmapped,    Unavailable, Unavailable, Unavailable, Unmapped,
    Unmapped,    Unmapped,    Pedal,       Unmapped,    Unmapped,
];

// Registration order is display order in the app.
const ALTERNATES: &[(Board, &str, &PinTable)] = &[
    (Board::RpiPico, "Test", &RPI_PICO_TEST),
    (Board::RpiPico, "Test 2", &RPI_PICO_TEST_2),
    (Board::AdafruitItsyRp2040, "SAMCO 2.0", &ITSYBITSY_SAMCO_2_0),
    (Board::AdafruitItsyRp2040, "SAMCO 1.1", &ITSYBITSY_SAMCO_1_1),
];

const fn default_table(board: Board) -> &'static PinTable {
    match board {
        Board::RpiPico | Board::RpiPicoW => &RPI_PICO,
        Board::AdafruitItsyRp2040 => &ITSYBITSY_RP2040,
        Board::AdafruitKb2040 => &KB2040,
        Board::ArduinoNanoRp2040 => &NANO_RP2040,
        Board::WaveshareZero => &WAVESHARE_ZERO,
        Board::VccgndYd | Board::Generic => &GENERIC,
    }
}

static ALTERNATES_BY_BOARD: LazyLock<HashMap<Board, Vec<AlternatePreset>>> = LazyLock::new(|| {
    let mut by_board: HashMap<Board, Vec<AlternatePreset>> = HashMap::new();
    for &(board, label, table) in ALTERNATES {
        by_board.entry(board).or_default().push(AlternatePreset {
            board,
            label,
            mapping: PinMapping::new(table),
        });
    }
    tracing::debug!(
        "Registered {} alternate presets across {} boards",
        ALTERNATES.len(),
        by_board.len()
    );
    by_board
});

/// Default and alternate presets registered for `board`.
pub fn presets(board: Board) -> BoardPresets {
    BoardPresets {
        board,
        default: PinMapping::new(default_table(board)),
        alternates: ALTERNATES_BY_BOARD
            .get(&board)
            .map(Vec::as_slice)
            .unwrap_or(&[]),
    }
}

/// Every registered board, in registration order.
pub fn boards() -> impl Iterator<Item = BoardPresets> {
    Board::ALL.into_iter().map(presets)
}

/// Default mapping for the board reporting `token`. Unknown tokens get the
/// generic mapping: every pin exposed, nothing assigned.
pub fn default_mapping(token: &str) -> PinMapping {
    presets(Board::from_token(token)).default
}

/// Named alternates for the board reporting `token`, in registration order.
pub fn alternates(token: &str) -> &'static [AlternatePreset] {
    presets(Board::from_token(token)).alternates
}

pub fn alternate(token: &str, label: &str) -> Option<&'static AlternatePreset> {
    alternates(token).iter().find(|preset| preset.label == label)
}
