//! Positional field indices used in configuration payloads.
//!
//! Each enumeration numbers the fields carried under one commit/get command
//! pair. The byte layout of those payloads belongs to the serializer; only the
//! index values are shared, and like [`crate::pin_function::PinFunction`] they
//! are append-only.

use crate::serial_codes::SerialCommand;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Marker byte that introduces the enabled-peripherals block of a
/// `CommitPeriphs`/`GetPeriphs` payload.
pub const PERIPHERALS_ENABLED: u8 = 0xFA;

/// A family of payload field indices.
pub trait SyncField: Copy + Eq + std::fmt::Debug + Into<u8> + TryFrom<u8> + 'static {
    /// Fields with indices `0..ALL.len()`, in index order. Out-of-band
    /// indices such as [`ProfileField::Name`] are not listed.
    const ALL: &'static [Self];
    /// Variants that sit outside the contiguous block.
    const OUT_OF_BAND: &'static [Self] = &[];
    /// Command that pushes these fields to the board.
    const COMMIT: SerialCommand;
    /// Command that reads them back, if there is one.
    const GET: Option<SerialCommand>;

    fn index(self) -> u8 {
        self.into()
    }

    fn count() -> usize {
        Self::ALL.len()
    }
}

/// Boolean toggles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TryFromPrimitive, IntoPrimitive,
)]
#[repr(u8)]
pub enum BoolField {
    CustomPins = 0,
    Rumble,
    Solenoid,
    Autofire,
    SimplePause,
    HoldToPause,
    CommonAnode,
    LowButtonsMode,
    RumbleFf,
    InvertStaticPixels,
}

impl BoolField {
    pub const COUNT: usize = 10;
}

impl SyncField for BoolField {
    const ALL: &'static [Self] = &[
        BoolField::CustomPins,
        BoolField::Rumble,
        BoolField::Solenoid,
        BoolField::Autofire,
        BoolField::SimplePause,
        BoolField::HoldToPause,
        BoolField::CommonAnode,
        BoolField::LowButtonsMode,
        BoolField::RumbleFf,
        BoolField::InvertStaticPixels,
    ];
    const COMMIT: SerialCommand = SerialCommand::CommitToggles;
    const GET: Option<SerialCommand> = Some(SerialCommand::GetToggles);
}

/// Tunable numeric settings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TryFromPrimitive, IntoPrimitive,
)]
#[repr(u8)]
pub enum SettingsField {
    RumbleStrength = 0,
    RumbleInterval,
    SolenoidOnLength,
    SolenoidOffLength,
    SolenoidHoldLength,
    HoldToPauseLength,
    CustomLedCount,
    CustomLedStatic,
    CustomLedColor1,
    CustomLedColor2,
    CustomLedColor3,
    TempWarning,
    TempShutdown,
}

impl SettingsField {
    pub const COUNT: usize = 13;
}

impl SyncField for SettingsField {
    const ALL: &'static [Self] = &[
        SettingsField::RumbleStrength,
        SettingsField::RumbleInterval,
        SettingsField::SolenoidOnLength,
        SettingsField::SolenoidOffLength,
        SettingsField::SolenoidHoldLength,
        SettingsField::HoldToPauseLength,
        SettingsField::CustomLedCount,
        SettingsField::CustomLedStatic,
        SettingsField::CustomLedColor1,
        SettingsField::CustomLedColor2,
        SettingsField::CustomLedColor3,
        SettingsField::TempWarning,
        SettingsField::TempShutdown,
    ];
    const COMMIT: SerialCommand = SerialCommand::CommitSettings;
    const GET: Option<SerialCommand> = Some(SerialCommand::GetSettings);
}

/// Calibration profile attributes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TryFromPrimitive, IntoPrimitive,
)]
#[repr(u8)]
pub enum ProfileField {
    TopOffset = 0,
    BottomOffset,
    LeftOffset,
    RightOffset,
    TlLed,
    TrLed,
    AdjX,
    AdjY,
    IrSens,
    RunMode,
    IrLayout,
    Color,
    /// Profile name, sent separately from the numeric block.
    Name = 0xFA,
}

impl ProfileField {
    pub const COUNT: usize = 12;
}

impl SyncField for ProfileField {
    const ALL: &'static [Self] = &[
        ProfileField::TopOffset,
        ProfileField::BottomOffset,
        ProfileField::LeftOffset,
        ProfileField::RightOffset,
        ProfileField::TlLed,
        ProfileField::TrLed,
        ProfileField::AdjX,
        ProfileField::AdjY,
        ProfileField::IrSens,
        ProfileField::RunMode,
        ProfileField::IrLayout,
        ProfileField::Color,
    ];
    const OUT_OF_BAND: &'static [Self] = &[ProfileField::Name];
    const COMMIT: SerialCommand = SerialCommand::CommitProfile;
    const GET: Option<SerialCommand> = Some(SerialCommand::GetProfile);
}

/// USB identity presented by the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TryFromPrimitive, IntoPrimitive,
)]
#[repr(u8)]
pub enum UsbIdField {
    Pid = 0,
    Name,
}

impl UsbIdField {
    pub const COUNT: usize = 2;
}

impl SyncField for UsbIdField {
    const ALL: &'static [Self] = &[UsbIdField::Pid, UsbIdField::Name];
    const COMMIT: SerialCommand = SerialCommand::CommitId;
    const GET: Option<SerialCommand> = None;
}

/// I2C peripherals the firmware knows how to drive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TryFromPrimitive, IntoPrimitive,
)]
#[repr(u8)]
pub enum PeripheralKind {
    I2cOled = 0,
}

impl PeripheralKind {
    pub const COUNT: usize = 1;
}

impl SyncField for PeripheralKind {
    const ALL: &'static [Self] = &[PeripheralKind::I2cOled];
    const COMMIT: SerialCommand = SerialCommand::CommitPeriphs;
    const GET: Option<SerialCommand> = Some(SerialCommand::GetPeriphs);
}

/// Per-device settings of [`PeripheralKind::I2cOled`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TryFromPrimitive, IntoPrimitive,
)]
#[repr(u8)]
pub enum OledSetting {
    AltAddr = 0,
}

impl OledSetting {
    pub const COUNT: usize = 1;
}

impl SyncField for OledSetting {
    const ALL: &'static [Self] = &[OledSetting::AltAddr];
    const COMMIT: SerialCommand = SerialCommand::CommitPeriphs;
    const GET: Option<SerialCommand> = Some(SerialCommand::GetPeriphs);
}

/// IR emitter arrangement; the value space of [`ProfileField::IrLayout`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TryFromPrimitive, IntoPrimitive,
)]
#[repr(u8)]
pub enum IrLayout {
    Square = 0,
    Diamond,
}

impl IrLayout {
    pub const COUNT: usize = 2;
    pub const ALL: [IrLayout; Self::COUNT] = [IrLayout::Square, IrLayout::Diamond];
}

/// Indices the enum accepts that are neither in `F::ALL` nor declared in
/// `F::OUT_OF_BAND`. A variant appended without updating `ALL` shows up here.
pub fn undeclared_indices<F: SyncField>() -> Vec<u8> {
    (0..=u8::MAX)
        .filter(|&i| F::try_from(i).is_ok())
        .filter(|&i| usize::from(i) >= F::ALL.len())
        .filter(|&i| !F::OUT_OF_BAND.iter().any(|field| field.index() == i))
        .collect()
}

/// True when `F::ALL` numbers its fields `0, 1, 2, ...` with no gap or repeat
/// and the enum defines nothing else besides `F::OUT_OF_BAND`.
pub fn is_gap_free<F: SyncField>() -> bool {
    F::ALL
        .iter()
        .enumerate()
        .all(|(i, field)| usize::from(field.index()) == i)
        && undeclared_indices::<F>().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_families_are_gap_free() {
        assert!(is_gap_free::<BoolField>());
        assert!(is_gap_free::<SettingsField>());
        assert!(is_gap_free::<ProfileField>());
        assert!(is_gap_free::<UsbIdField>());
        assert!(is_gap_free::<PeripheralKind>());
        assert!(is_gap_free::<OledSetting>());
    }

    #[test]
    fn test_only_declared_indices_decode() {
        fn defined<F: SyncField>() -> Vec<u8> {
            (0..=u8::MAX).filter(|&i| F::try_from(i).is_ok()).collect()
        }
        assert_eq!(defined::<BoolField>(), (0..10).collect::<Vec<u8>>());
        assert_eq!(defined::<SettingsField>(), (0..13).collect::<Vec<u8>>());
        let mut profile: Vec<u8> = (0..12).collect();
        profile.push(0xFA);
        assert_eq!(defined::<ProfileField>(), profile);
        assert_eq!(defined::<UsbIdField>(), vec![0, 1]);
        assert_eq!(defined::<PeripheralKind>(), vec![0]);
        assert_eq!(defined::<OledSetting>(), vec![0]);
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
    #[repr(u8)]
    enum Stale {
        First = 0,
        Second,
        Appended,
    }

    impl SyncField for Stale {
        const ALL: &'static [Self] = &[Stale::First, Stale::Second];
        const COMMIT: SerialCommand = SerialCommand::CommitToggles;
        const GET: Option<SerialCommand> = None;
    }

    #[test]
    fn test_variant_missing_from_all_is_caught() {
        assert_eq!(undeclared_indices::<Stale>(), vec![2]);
        assert!(!is_gap_free::<Stale>());
        assert_eq!(Stale::try_from(2).ok(), Some(Stale::Appended));
    }

    #[test]
    fn test_count_markers_match_tables() {
        assert_eq!(BoolField::count(), BoolField::COUNT);
        assert_eq!(SettingsField::count(), SettingsField::COUNT);
        assert_eq!(ProfileField::count(), ProfileField::COUNT);
        assert_eq!(UsbIdField::count(), UsbIdField::COUNT);
        assert_eq!(PeripheralKind::count(), PeripheralKind::COUNT);
        assert_eq!(OledSetting::count(), OledSetting::COUNT);
    }

    #[test]
    fn test_profile_name_is_out_of_band() {
        assert_eq!(ProfileField::Name.index(), 0xFA);
        assert!(!ProfileField::ALL.contains(&ProfileField::Name));
        assert_eq!(ProfileField::try_from(0xFA).unwrap(), ProfileField::Name);
        assert!(ProfileField::try_from(12).is_err());
    }

    #[test]
    fn test_commit_get_pairs() {
        assert_eq!(BoolField::COMMIT.counterpart(), BoolField::GET);
        assert_eq!(SettingsField::COMMIT.counterpart(), SettingsField::GET);
        assert_eq!(ProfileField::COMMIT.counterpart(), ProfileField::GET);
        assert_eq!(UsbIdField::GET, None);
    }

    #[test]
    fn test_ir_layout_values() {
        assert_eq!(u8::from(IrLayout::Diamond), 1);
        assert_eq!(IrLayout::try_from(2).ok(), None);
        assert_eq!(IrLayout::ALL.len(), IrLayout::COUNT);
        let defined: Vec<u8> = (0..=u8::MAX).filter(|&i| IrLayout::try_from(i).is_ok()).collect();
        assert_eq!(defined, vec![0, 1]);
    }
}
