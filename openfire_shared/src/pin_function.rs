//! Catalog of logical functions a GPIO can be assigned to.
//!
//! The integer values are shared with firmware builds and with custom pin
//! layouts persisted on the board, so they are append-only: never renumber or
//! remove a variant. New functions go after [`PinFunction::WiiClockGen`] and
//! [`PinFunction::COUNT`] is bumped to match.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(i32)]
pub enum PinFunction {
    /// Pin is not physically reachable on this board.
    Unavailable = -2,
    /// Pin is reachable but intentionally idle.
    Unmapped = -1,
    Trigger = 0,
    GunA,
    GunB,
    GunC,
    Start,
    Select,
    GunUp,
    GunDown,
    GunLeft,
    GunRight,
    Pedal,
    Pedal2,
    Pump,
    Home,
    RumblePin,
    SolenoidPin,
    RumbleSwitch,
    SolenoidSwitch,
    AutofireSwitch,
    NeoPixel,
    LedR,
    LedG,
    LedB,
    CamSda,
    CamScl,
    PeriphSda,
    PeriphScl,
    Battery,
    AnalogX,
    AnalogY,
    TempPin,
    WiiClockGen,
}

impl PinFunction {
    /// Number of real (non-sentinel) functions. Real indices are `0..COUNT`.
    pub const COUNT: usize = 32;

    /// Every real function in index order.
    pub const ASSIGNABLE: [PinFunction; Self::COUNT] = [
        PinFunction::Trigger,
        PinFunction::GunA,
        PinFunction::GunB,
        PinFunction::GunC,
        PinFunction::Start,
        PinFunction::Select,
        PinFunction::GunUp,
        PinFunction::GunDown,
        PinFunction::GunLeft,
        PinFunction::GunRight,
        PinFunction::Pedal,
        PinFunction::Pedal2,
        PinFunction::Pump,
        PinFunction::Home,
        PinFunction::RumblePin,
        PinFunction::SolenoidPin,
        PinFunction::RumbleSwitch,
        PinFunction::SolenoidSwitch,
        PinFunction::AutofireSwitch,
        PinFunction::NeoPixel,
        PinFunction::LedR,
        PinFunction::LedG,
        PinFunction::LedB,
        PinFunction::CamSda,
        PinFunction::CamScl,
        PinFunction::PeriphSda,
        PinFunction::PeriphScl,
        PinFunction::Battery,
        PinFunction::AnalogX,
        PinFunction::AnalogY,
        PinFunction::TempPin,
        PinFunction::WiiClockGen,
    ];

    pub const fn index(self) -> i32 {
        self as i32
    }

    pub const fn is_sentinel(self) -> bool {
        matches!(self, PinFunction::Unavailable | PinFunction::Unmapped)
    }

    /// Label shown in the app's pin drop-downs.
    pub const fn label(self) -> &'static str {
        match self {
            PinFunction::Unavailable => "Unavailable",
            PinFunction::Unmapped => "Unmapped",
            PinFunction::Trigger => "Trigger",
            PinFunction::GunA => "Button A",
            PinFunction::GunB => "Button B",
            PinFunction::GunC => "Button C",
            PinFunction::Start => "Start",
            PinFunction::Select => "Select",
            PinFunction::GunUp => "D-Pad Up",
            PinFunction::GunDown => "D-Pad Down",
            PinFunction::GunLeft => "D-Pad Left",
            PinFunction::GunRight => "D-Pad Right",
            PinFunction::Pedal => "Pedal",
            PinFunction::Pedal2 => "Alt Pedal",
            PinFunction::Pump => "Pump Action",
            PinFunction::Home => "Home Button",
            PinFunction::RumblePin => "Rumble Signal",
            PinFunction::SolenoidPin => "Solenoid Signal",
            PinFunction::RumbleSwitch => "Rumble Switch",
            PinFunction::SolenoidSwitch => "Solenoid Switch",
            PinFunction::AutofireSwitch => "Autofire Switch",
            PinFunction::NeoPixel => "External NeoPixel",
            PinFunction::LedR => "RGB LED Red",
            PinFunction::LedG => "RGB LED Green",
            PinFunction::LedB => "RGB LED Blue",
            PinFunction::CamSda => "Camera SDA",
            PinFunction::CamScl => "Camera SCL",
            PinFunction::PeriphSda => "Peripherals SDA",
            PinFunction::PeriphScl => "Peripherals SCL",
            PinFunction::Battery => "Battery Sensor (Unused)",
            PinFunction::AnalogX => "Analog Stick X",
            PinFunction::AnalogY => "Analog Stick Y",
            PinFunction::TempPin => "Temp Sensor",
            PinFunction::WiiClockGen => "Wii Cam Clock",
        }
    }
}

impl std::fmt::Display for PinFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_sort_before_real_functions() {
        assert!(PinFunction::Unavailable < PinFunction::Unmapped);
        assert!(PinFunction::Unmapped < PinFunction::Trigger);
        assert_eq!(PinFunction::Unavailable.index(), -2);
        assert_eq!(PinFunction::Unmapped.index(), -1);
    }

    #[test]
    fn test_assignable_is_gap_free() {
        for (i, func) in PinFunction::ASSIGNABLE.iter().enumerate() {
            assert_eq!(func.index(), i as i32);
            assert!(!func.is_sentinel());
        }
        assert_eq!(PinFunction::WiiClockGen.index() as usize, PinFunction::COUNT - 1);
    }

    #[test]
    fn test_try_from_index() {
        assert_eq!(PinFunction::try_from(30).unwrap(), PinFunction::TempPin);
        assert_eq!(PinFunction::try_from(-2).unwrap(), PinFunction::Unavailable);
        assert!(PinFunction::try_from(PinFunction::COUNT as i32).is_err());
        assert!(PinFunction::try_from(-3).is_err());
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = PinFunction::ASSIGNABLE.iter().map(|f| f.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), PinFunction::COUNT);
        assert_eq!(PinFunction::GunUp.to_string(), "D-Pad Up");
    }
}
