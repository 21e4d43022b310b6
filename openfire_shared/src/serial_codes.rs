//! Single-byte command and status codes of the app <-> board control channel.
//!
//! The byte space is partitioned by direction and purpose. App-originated
//! codes live in the control-character range and board-originated codes at
//! 128 and above, so a terminal attached during development can tell protocol
//! traffic from debug prints. Bytes 33..=127 (printable ASCII) must never be
//! assigned. Direction is a convention only: nothing on the wire enforces it,
//! so new codes must be added inside the partition that matches their sender.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Printable ASCII, kept free for debug text.
pub const RESERVED_ASCII: RangeInclusive<u8> = 33..=127;

pub fn is_reserved_ascii(byte: u8) -> bool {
    RESERVED_ASCII.contains(&byte)
}

/// Who is allowed to send a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    AppToBoard,
    BoardToApp,
    Either,
    Unknown,
}

/// Partition a byte belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandClass {
    Docking,
    ModeToggle,
    TestTrigger,
    Error,
    Status,
    Commit,
    Get,
    Control,
    Unassigned,
}

impl CommandClass {
    pub const fn direction(self) -> Direction {
        match self {
            CommandClass::Docking
            | CommandClass::ModeToggle
            | CommandClass::TestTrigger
            | CommandClass::Commit
            | CommandClass::Get => Direction::AppToBoard,
            CommandClass::Error | CommandClass::Status => Direction::BoardToApp,
            CommandClass::Control => Direction::Either,
            CommandClass::Unassigned => Direction::Unknown,
        }
    }

    /// Byte range reserved for this class. `Control` is a set of single
    /// bytes rather than a range; see [`CONTROL_CODES`].
    pub const fn range(self) -> Option<RangeInclusive<u8>> {
        match self {
            CommandClass::Docking => Some(1..=4),
            CommandClass::ModeToggle => Some(5..=9),
            CommandClass::TestTrigger => Some(15..=19),
            CommandClass::Error => Some(0x80..=0x8F),
            CommandClass::Status => Some(0x90..=0x9F),
            CommandClass::Commit => Some(0xAA..=0xB5),
            CommandClass::Get => Some(0xC8..=0xD2),
            CommandClass::Control | CommandClass::Unassigned => None,
        }
    }
}

pub const CONTROL_CODES: [u8; 4] = [0xFA, 0xFC, 0xFD, 0xFE];

/// Partition `byte` falls in. Reserved-but-undefined bytes inside a partition
/// still classify to that partition.
pub fn classify(byte: u8) -> CommandClass {
    match byte {
        1..=4 => CommandClass::Docking,
        5..=9 => CommandClass::ModeToggle,
        15..=19 => CommandClass::TestTrigger,
        0x80..=0x8F => CommandClass::Error,
        0x90..=0x9F => CommandClass::Status,
        0xAA..=0xB5 => CommandClass::Commit,
        0xC8..=0xD2 => CommandClass::Get,
        0xFA | 0xFC | 0xFD | 0xFE => CommandClass::Control,
        _ => CommandClass::Unassigned,
    }
}

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
#[repr(u8)]
pub enum SerialCommand {
    // Docking handshake
    Dock1 = 1,
    Dock2,

    // Mode toggles
    IrTest = 5,
    CaliProfile,
    CaliStart,
    CaliSens,
    CaliLayout,

    // Hardware tests
    TestSolenoid = 15,
    TestRumble,
    TestLedR,
    TestLedG,
    TestLedB,

    // Errors, sent after `Error`
    ErrCam = 0x80,
    ErrPeriphGeneric,

    // Status updates
    BtnPressed = 0x90,
    BtnReleased,
    AnalogPosUpd,
    TemperatureUpd,
    CaliStageUpd,
    CaliInfoUpd,
    TestCoords,
    CurrentProf,

    // Push settings to the board
    CommitStart = 0xAA,
    CommitToggles,
    CommitPins,
    CommitSettings,
    CommitProfile,
    CommitId,
    CommitPeriphs,

    // Pull settings from the board
    GetPins = 0xC8,
    GetToggles,
    GetSettings,
    GetProfile,
    GetPeriphs,

    Error = 0xFA,
    Save = 0xFC,
    ClearFlash = 0xFD,
    /// Leaves the current mode, or undocks.
    Terminator = 0xFE,
}

impl SerialCommand {
    pub const ALL: [SerialCommand; 38] = [
        SerialCommand::Dock1,
        SerialCommand::Dock2,
        SerialCommand::IrTest,
        SerialCommand::CaliProfile,
        SerialCommand::CaliStart,
        SerialCommand::CaliSens,
        SerialCommand::CaliLayout,
        SerialCommand::TestSolenoid,
        SerialCommand::TestRumble,
        SerialCommand::TestLedR,
        SerialCommand::TestLedG,
        SerialCommand::TestLedB,
        SerialCommand::ErrCam,
        SerialCommand::ErrPeriphGeneric,
        SerialCommand::BtnPressed,
        SerialCommand::BtnReleased,
        SerialCommand::AnalogPosUpd,
        SerialCommand::TemperatureUpd,
        SerialCommand::CaliStageUpd,
        SerialCommand::CaliInfoUpd,
        SerialCommand::TestCoords,
        SerialCommand::CurrentProf,
        SerialCommand::CommitStart,
        SerialCommand::CommitToggles,
        SerialCommand::CommitPins,
        SerialCommand::CommitSettings,
        SerialCommand::CommitProfile,
        SerialCommand::CommitId,
        SerialCommand::CommitPeriphs,
        SerialCommand::GetPins,
        SerialCommand::GetToggles,
        SerialCommand::GetSettings,
        SerialCommand::GetProfile,
        SerialCommand::GetPeriphs,
        SerialCommand::Error,
        SerialCommand::Save,
        SerialCommand::ClearFlash,
        SerialCommand::Terminator,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn class(self) -> CommandClass {
        classify(self.code())
    }

    pub fn direction(self) -> Direction {
        self.class().direction()
    }

    /// Class the command was designed for, independent of its byte value.
    /// Comparing this with [`SerialCommand::class`] catches a code that was
    /// added in the wrong partition.
    pub const fn intended_class(self) -> CommandClass {
        use SerialCommand::*;
        match self {
            Dock1 | Dock2 => CommandClass::Docking,
            IrTest | CaliProfile | CaliStart | CaliSens | CaliLayout => CommandClass::ModeToggle,
            TestSolenoid | TestRumble | TestLedR | TestLedG | TestLedB => CommandClass::TestTrigger,
            ErrCam | ErrPeriphGeneric => CommandClass::Error,
            BtnPressed | BtnReleased | AnalogPosUpd | TemperatureUpd | CaliStageUpd
            | CaliInfoUpd | TestCoords | CurrentProf => CommandClass::Status,
            CommitStart | CommitToggles | CommitPins | CommitSettings | CommitProfile
            | CommitId | CommitPeriphs => CommandClass::Commit,
            GetPins | GetToggles | GetSettings | GetProfile | GetPeriphs => CommandClass::Get,
            Error | Save | ClearFlash | Terminator => CommandClass::Control,
        }
    }

    /// Matching `Get` for a `Commit` that carries a payload, and vice versa.
    pub const fn counterpart(self) -> Option<SerialCommand> {
        use SerialCommand::*;
        match self {
            CommitToggles => Some(GetToggles),
            CommitPins => Some(GetPins),
            CommitSettings => Some(GetSettings),
            CommitProfile => Some(GetProfile),
            CommitPeriphs => Some(GetPeriphs),
            GetToggles => Some(CommitToggles),
            GetPins => Some(CommitPins),
            GetSettings => Some(CommitSettings),
            GetProfile => Some(CommitProfile),
            GetPeriphs => Some(CommitPeriphs),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_start_and_get_pins_partitions() {
        assert_eq!(classify(0xAA), CommandClass::Commit);
        assert_eq!(SerialCommand::try_from(0xAA).unwrap(), SerialCommand::CommitStart);
        assert_eq!(classify(0xC8), CommandClass::Get);
        assert_eq!(SerialCommand::try_from(0xC8).unwrap(), SerialCommand::GetPins);
    }

    #[test]
    fn test_every_code_in_its_intended_partition() {
        for cmd in SerialCommand::ALL {
            assert_eq!(cmd.class(), cmd.intended_class(), "{cmd:?}");
        }
    }

    #[test]
    fn test_unassigned_bytes() {
        for byte in [0u8, 10, 14, 20, 32, b'A', 0x7F, 0xA0, 0xB6, 0xD3, 0xFB, 0xFF] {
            assert_eq!(classify(byte), CommandClass::Unassigned, "byte {byte:#04x}");
        }
        assert!(SerialCommand::try_from(0xFB).is_err());
    }

    #[test]
    fn test_reserved_partition_byte_without_command() {
        assert_eq!(classify(3), CommandClass::Docking);
        assert!(SerialCommand::try_from(3).is_err());
    }

    #[test]
    fn test_directions() {
        assert_eq!(SerialCommand::Dock1.direction(), Direction::AppToBoard);
        assert_eq!(SerialCommand::BtnPressed.direction(), Direction::BoardToApp);
        assert_eq!(SerialCommand::Terminator.direction(), Direction::Either);
        assert_eq!(classify(0).direction(), Direction::Unknown);
    }

    #[test]
    fn test_counterparts_pair_up() {
        for cmd in SerialCommand::ALL {
            if let Some(other) = cmd.counterpart() {
                assert_eq!(other.counterpart(), Some(cmd));
                assert_ne!(cmd.class(), other.class());
            }
        }
        assert_eq!(SerialCommand::CommitStart.counterpart(), None);
    }
}
