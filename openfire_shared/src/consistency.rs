//! Offline consistency check over the compiled-in tables.
//!
//! Nothing here runs on the docking path. The check is meant for tests, CI
//! and the `openfire-tool check` command, and catches data-authoring defects
//! before a build ships.

use crate::board::Board;
use crate::board_presets::{self, mapping_defects};
use crate::layout::{board_layout, Region};
use crate::pin_function::PinFunction;
use crate::serial_codes::{is_reserved_ascii, SerialCommand};
use crate::sync_fields::{
    undeclared_indices, BoolField, IrLayout, OledSetting, PeripheralKind, ProfileField,
    SettingsField, SyncField, UsbIdField,
};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// What the finding is about, e.g. `rpipico/default` or `serial/0xAA`.
    pub subject: String,
    pub message: String,
}

impl Finding {
    fn new(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.subject, self.message)
    }
}

/// Errors break an invariant; warnings break a convention.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConsistencyReport {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl ConsistencyReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn merge(&mut self, other: ConsistencyReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    fn error(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.errors.push(Finding::new(subject, message));
    }

    fn warning(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Finding::new(subject, message));
    }
}

pub fn check_all() -> ConsistencyReport {
    let mut report = ConsistencyReport::default();
    report.merge(check_presets());
    report.merge(check_layouts());
    report.merge(check_serial_codes());
    report.merge(check_catalogs());
    tracing::debug!(
        "Consistency check finished: {} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );
    report
}

/// Mapping rules for one mapping of `board`: length, single ownership, and
/// the board's layout convention for unexposed pins.
pub fn check_mapping(board: Board, subject: &str, pins: &[PinFunction]) -> ConsistencyReport {
    let mut report = ConsistencyReport::default();
    for defect in mapping_defects(pins, board.gpio_count()) {
        report.error(subject, defect.to_string());
    }
    let layout = board_layout(board);
    for (gpio, &function) in pins.iter().enumerate() {
        let Some(position) = layout.get(gpio) else {
            continue;
        };
        if function == PinFunction::Unavailable && position.region() != Region::Nothing {
            report.warning(
                subject,
                format!("GPIO {gpio} is unavailable but drawn in {:?}", position.region()),
            );
        }
    }
    report
}

/// Checks a user-authored mapping. On top of [`check_mapping`], a custom
/// mapping may not assign anything to a pin the board does not break out.
pub fn check_custom_mapping(board: Board, label: &str, pins: &[PinFunction]) -> ConsistencyReport {
    let subject = format!("{board}/custom:{label}");
    let mut report = check_mapping(board, &subject, pins);
    let default = board_presets::presets(board).default;
    for (gpio, &function) in pins.iter().enumerate() {
        if default.get(gpio) == Some(PinFunction::Unavailable)
            && function != PinFunction::Unavailable
        {
            report.error(
                &subject,
                format!("GPIO {gpio} is not broken out on {board} but is set to {function:?}"),
            );
        }
    }
    report
}

pub fn check_presets() -> ConsistencyReport {
    let mut report = ConsistencyReport::default();
    for presets in board_presets::boards() {
        let board = presets.board;
        report.merge(check_mapping(board, &format!("{board}/default"), presets.default.pins()));

        let mut labels = HashSet::new();
        for alt in presets.alternates {
            let subject = format!("{board}/{}", alt.label);
            if alt.board != board {
                report.error(&subject, format!("registered under {board} but names {}", alt.board));
            }
            if !labels.insert(alt.label) {
                report.error(&subject, "alternate label is not unique for this board");
            }
            report.merge(check_mapping(board, &subject, alt.mapping.pins()));
        }
    }
    report
}

pub fn check_layouts() -> ConsistencyReport {
    let mut report = ConsistencyReport::default();
    for board in Board::ALL {
        let layout = board_layout(board);
        if layout.len() != board.gpio_count() {
            report.error(
                format!("{board}/layout"),
                format!("{} entries for {} GPIOs", layout.len(), board.gpio_count()),
            );
        }
        let mut seen = HashMap::new();
        for (gpio, position) in layout.iter().enumerate() {
            if position.is_hidden() {
                continue;
            }
            if let Some(first) = seen.insert(*position, gpio) {
                report.warning(
                    format!("{board}/layout"),
                    format!(
                        "GPIO {first} and GPIO {gpio} share slot {} in {:?}",
                        position.slot(),
                        position.region()
                    ),
                );
            }
        }
    }
    report
}

pub fn check_serial_codes() -> ConsistencyReport {
    let mut report = ConsistencyReport::default();
    let mut seen: HashMap<u8, SerialCommand> = HashMap::new();
    for cmd in SerialCommand::ALL {
        let code = cmd.code();
        let subject = format!("serial/{code:#04X}");
        if let Some(other) = seen.insert(code, cmd) {
            report.error(&subject, format!("{cmd:?} collides with {other:?}"));
        }
        if is_reserved_ascii(code) {
            report.error(&subject, format!("{cmd:?} uses a printable ASCII byte"));
        }
        if cmd.class() != cmd.intended_class() {
            report.error(
                &subject,
                format!(
                    "{cmd:?} belongs in {:?} but its byte classifies as {:?}",
                    cmd.intended_class(),
                    cmd.class()
                ),
            );
        }
    }
    report
}

// Pin function indices scanned for variants missing from the catalog.
const PIN_FUNCTION_SCAN: std::ops::RangeInclusive<i32> = -256..=255;

fn check_field_family<F: SyncField>(name: &str, count: usize, report: &mut ConsistencyReport) {
    let subject = format!("fields/{name}");
    for (i, field) in F::ALL.iter().enumerate() {
        if usize::from(field.index()) != i {
            report.error(&subject, format!("{field:?} has index {} at position {i}", field.index()));
        }
    }
    for index in undeclared_indices::<F>() {
        report.error(&subject, format!("index {index} decodes but is not listed"));
    }
    if F::count() != count {
        report.error(
            &subject,
            format!("count marker is {count} but {} fields are listed", F::count()),
        );
    }
}

pub fn check_catalogs() -> ConsistencyReport {
    let mut report = ConsistencyReport::default();
    for (i, function) in PinFunction::ASSIGNABLE.iter().enumerate() {
        if function.index() != i as i32 {
            report.error(
                "catalog/pin_function",
                format!("{function:?} has index {} at position {i}", function.index()),
            );
        }
    }
    for index in PIN_FUNCTION_SCAN {
        let listed = index == PinFunction::Unavailable.index()
            || index == PinFunction::Unmapped.index()
            || (0..PinFunction::COUNT as i32).contains(&index);
        if PinFunction::try_from(index).is_ok() != listed {
            report.error(
                "catalog/pin_function",
                format!("index {index} disagrees with the count marker {}", PinFunction::COUNT),
            );
        }
    }
    check_field_family::<BoolField>("bool", BoolField::COUNT, &mut report);
    check_field_family::<SettingsField>("settings", SettingsField::COUNT, &mut report);
    check_field_family::<ProfileField>("profile", ProfileField::COUNT, &mut report);
    check_field_family::<UsbIdField>("usb_id", UsbIdField::COUNT, &mut report);
    check_field_family::<PeripheralKind>("peripheral", PeripheralKind::COUNT, &mut report);
    check_field_family::<OledSetting>("oled", OledSetting::COUNT, &mut report);
    for index in 0..=u8::MAX {
        if IrLayout::try_from(index).is_ok() != (usize::from(index) < IrLayout::COUNT) {
            report.error(
                "fields/ir_layout",
                format!("index {index} disagrees with the count marker {}", IrLayout::COUNT),
            );
        }
    }
    report
}
