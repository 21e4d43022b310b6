//! Runs the offline consistency check over the compiled-in tables and the
//! custom presets from the config file.

use crate::config::{Config, CustomPresetConfig};
use openfire_shared::board_presets::pins_from_indices;
use openfire_shared::consistency::{self, ConsistencyReport, Finding};
use openfire_shared::Board;

/// Validates one custom preset. Problems that stop the mapping from being
/// read at all (unknown board, unknown function index) are reported as
/// errors instead of aborting the whole check.
pub fn check_custom_preset(preset: &CustomPresetConfig) -> ConsistencyReport {
    let subject = format!("{}/custom:{}", preset.board, preset.label);
    let mut report = ConsistencyReport::default();

    let board: Board = match preset.board.parse() {
        Ok(board) => board,
        Err(e) => {
            report.errors.push(Finding {
                subject,
                message: e.to_string(),
            });
            return report;
        }
    };
    match pins_from_indices(&preset.pins) {
        Ok(pins) => report.merge(consistency::check_custom_mapping(board, &preset.label, &pins)),
        Err(e) => report.errors.push(Finding {
            subject,
            message: e.to_string(),
        }),
    }
    report
}

pub fn run_check(config: &Config) -> ConsistencyReport {
    let mut report = consistency::check_all();
    for preset in &config.custom_presets {
        tracing::debug!("Checking custom preset '{}' for {}", preset.label, preset.board);
        report.merge(check_custom_preset(preset));
    }

    for finding in &report.warnings {
        tracing::warn!("{}", finding);
    }
    for finding in &report.errors {
        tracing::error!("{}", finding);
    }
    tracing::info!(
        "Checked {} boards and {} custom presets: {} errors, {} warnings",
        Board::ALL.len(),
        config.custom_presets.len(),
        report.errors.len(),
        report.warnings.len()
    );
    report
}
