// openfire-rs: app-side tooling around the shared OpenFIRE tables

pub mod check;
pub mod config;
pub mod error;
pub mod export;
pub mod inspect;

pub use error::ToolError;
pub use openfire_shared as shared;
