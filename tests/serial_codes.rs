// Integration tests for the serial command code space

use openfire_shared::serial_codes::{is_reserved_ascii, CONTROL_CODES};
use openfire_shared::{classify, CommandClass, Direction, SerialCommand};
use std::collections::HashSet;

#[test]
fn test_codes_pairwise_distinct() {
    let codes: HashSet<u8> = SerialCommand::ALL.iter().map(|c| c.code()).collect();
    assert_eq!(codes.len(), SerialCommand::ALL.len());
}

#[test]
fn test_no_code_in_printable_ascii() {
    for cmd in SerialCommand::ALL {
        assert!(!is_reserved_ascii(cmd.code()), "{cmd:?}");
        assert!(!(33..=127).contains(&cmd.code()), "{cmd:?}");
    }
}

#[test]
fn test_commit_start_and_get_pins() {
    assert_eq!(SerialCommand::CommitStart.code(), 0xAA);
    assert_eq!(classify(0xAA), CommandClass::Commit);
    assert_eq!(SerialCommand::GetPins.code(), 0xC8);
    assert_eq!(classify(0xC8), CommandClass::Get);
}

#[test]
fn test_try_from_matches_all_table() {
    let defined: HashSet<u8> = SerialCommand::ALL.iter().map(|c| c.code()).collect();
    for byte in 0..=u8::MAX {
        assert_eq!(SerialCommand::try_from(byte).is_ok(), defined.contains(&byte), "{byte:#04x}");
    }
}

#[test]
fn test_partition_ranges_agree_with_classify() {
    for class in [
        CommandClass::Docking,
        CommandClass::ModeToggle,
        CommandClass::TestTrigger,
        CommandClass::Error,
        CommandClass::Status,
        CommandClass::Commit,
        CommandClass::Get,
    ] {
        let range = class.range().unwrap();
        for byte in range {
            assert_eq!(classify(byte), class);
        }
    }
    for byte in CONTROL_CODES {
        assert_eq!(classify(byte), CommandClass::Control);
    }
    assert_eq!(classify(0xFB), CommandClass::Unassigned);
}

#[test]
fn test_no_partition_touches_printable_ascii() {
    for byte in 33..=127u8 {
        assert_eq!(classify(byte), CommandClass::Unassigned);
    }
}

#[test]
fn test_board_origin_codes_are_high() {
    for cmd in SerialCommand::ALL {
        if cmd.direction() == Direction::BoardToApp {
            assert!(cmd.code() >= 0x80, "{cmd:?}");
        }
        if cmd.direction() == Direction::AppToBoard {
            assert!(cmd.code() < 33 || cmd.code() >= 0xAA, "{cmd:?}");
        }
    }
}
