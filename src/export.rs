//! Dumps the whole shared vocabulary in one document, for app builds that
//! load the tables instead of linking this crate.

use crate::config::ExportFormat;
use crate::error::ToolError;
use openfire_shared::board_presets::{self, AlternatePreset, PinMapping};
use openfire_shared::layout::board_layout;
use openfire_shared::{
    BoolField, CommandClass, Direction, IrLayout, LayoutPosition, OledSetting, PeripheralKind,
    PinFunction, ProfileField, SerialCommand, SettingsField, SyncField, UsbIdField,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Vocabulary {
    pub pin_functions: Vec<PinFunctionEntry>,
    pub boards: Vec<BoardEntry>,
    pub serial_commands: Vec<CommandEntry>,
    pub fields: FieldTables,
}

#[derive(Debug, Serialize)]
pub struct PinFunctionEntry {
    pub index: i32,
    pub name: PinFunction,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BoardEntry {
    pub token: &'static str,
    pub display_name: &'static str,
    pub gpio_count: usize,
    pub default: PinMapping,
    pub layout: &'static [LayoutPosition],
    pub alternates: &'static [AlternatePreset],
}

#[derive(Debug, Serialize)]
pub struct CommandEntry {
    pub code: u8,
    pub name: SerialCommand,
    pub class: CommandClass,
    pub direction: Direction,
}

#[derive(Debug, Serialize)]
pub struct FieldEntry {
    pub index: u8,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct FieldTables {
    pub bool: Vec<FieldEntry>,
    pub settings: Vec<FieldEntry>,
    pub profile: Vec<FieldEntry>,
    pub usb_id: Vec<FieldEntry>,
    pub peripherals: Vec<FieldEntry>,
    pub oled: Vec<FieldEntry>,
    pub ir_layouts: Vec<FieldEntry>,
}

fn field_entries<F: SyncField>() -> Vec<FieldEntry> {
    F::ALL
        .iter()
        .map(|&field| FieldEntry {
            index: field.index(),
            name: format!("{field:?}"),
        })
        .collect()
}

impl Vocabulary {
    pub fn collect() -> Self {
        let pin_functions = [PinFunction::Unavailable, PinFunction::Unmapped]
            .into_iter()
            .chain(PinFunction::ASSIGNABLE)
            .map(|function| PinFunctionEntry {
                index: function.index(),
                name: function,
                label: function.label(),
            })
            .collect();

        let boards = board_presets::boards()
            .map(|presets| BoardEntry {
                token: presets.board.token(),
                display_name: presets.board.display_name(),
                gpio_count: presets.board.gpio_count(),
                default: presets.default,
                layout: board_layout(presets.board),
                alternates: presets.alternates,
            })
            .collect();

        let serial_commands = SerialCommand::ALL
            .into_iter()
            .map(|cmd| CommandEntry {
                code: cmd.code(),
                name: cmd,
                class: cmd.class(),
                direction: cmd.direction(),
            })
            .collect();

        let mut profile = field_entries::<ProfileField>();
        profile.push(FieldEntry {
            index: ProfileField::Name.index(),
            name: format!("{:?}", ProfileField::Name),
        });

        let fields = FieldTables {
            bool: field_entries::<BoolField>(),
            settings: field_entries::<SettingsField>(),
            profile,
            usb_id: field_entries::<UsbIdField>(),
            peripherals: field_entries::<PeripheralKind>(),
            oled: field_entries::<OledSetting>(),
            ir_layouts: IrLayout::ALL
                .into_iter()
                .map(|layout| FieldEntry {
                    index: layout.into(),
                    name: format!("{layout:?}"),
                })
                .collect(),
        };

        Self {
            pin_functions,
            boards,
            serial_commands,
            fields,
        }
    }
}

pub fn export(format: ExportFormat, pretty: bool) -> Result<String, ToolError> {
    let vocabulary = Vocabulary::collect();
    tracing::debug!(
        "Exporting {} boards and {} serial commands as {:?}",
        vocabulary.boards.len(),
        vocabulary.serial_commands.len(),
        format
    );
    let text = match (format, pretty) {
        (ExportFormat::Json, true) => serde_json::to_string_pretty(&vocabulary)?,
        (ExportFormat::Json, false) => serde_json::to_string(&vocabulary)?,
        (ExportFormat::Toml, true) => toml::to_string_pretty(&vocabulary)?,
        (ExportFormat::Toml, false) => toml::to_string(&vocabulary)?,
    };
    Ok(text)
}
