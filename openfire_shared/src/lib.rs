//! openfire_shared: the vocabulary shared by OpenFIRE firmware and the
//! desktop configuration app.
//!
//! Both ends compile these tables in and interpret indices and codes the same
//! way without negotiating. Everything is read-only after startup and safe to
//! read from any thread.

pub mod board;
pub mod board_presets;
pub mod consistency;
pub mod layout;
pub mod pin_function;
pub mod serial_codes;
pub mod sync_fields;

pub use board::{Board, FIRMWARE_BOARD, RP2040_GPIO_COUNT};
pub use board_presets::{
    alternate, alternates, default_mapping, AlternatePreset, BoardPresets, MappingError, PinMapping,
};
pub use layout::{layout, LayoutError, LayoutPosition, Region};
pub use pin_function::PinFunction;
pub use serial_codes::{classify, CommandClass, Direction, SerialCommand};
pub use sync_fields::{
    BoolField, IrLayout, OledSetting, PeripheralKind, ProfileField, SettingsField, SyncField,
    UsbIdField,
};
