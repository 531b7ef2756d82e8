//! Dispensekit Settings Crate
//!
//! Holds the dispense process parameters, the cross-field validation rules
//! that gate program generation, and flat key/value persistence of the
//! parameter record.

pub mod config;
pub mod error;
pub mod persistence;
pub mod validation;

pub use config::DispenseParameters;
pub use error::{SettingsError, SettingsResult};
pub use persistence::ParameterStore;
pub use validation::{validate, Field, FieldStatus, ValidationReport};
