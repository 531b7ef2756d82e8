//! # Dispensekit
//!
//! Toolpath planner for a 3D printer converted into a solder dispensing rig.
//! Reads the hole locations of a through-hole PCB from a CAD drill file,
//! replicates them across a panel of identical boards on the work surface,
//! and writes a Marlin-style G-code program that visits each point and
//! dispenses solder.
//!
//! ## Architecture
//!
//! Dispensekit is organized as a workspace with multiple crates:
//!
//! 1. **dispensekit-core** - Geometry primitives and unit handling
//! 2. **dispensekit-settings** - Process parameters, validation, persistence
//! 3. **dispensekit-camtools** - Drill import, panelization, G-code generation
//! 4. **dispensekit** - Headless command-line driver
//!
//! ## Pipeline
//!
//! Parse the drill file, validate the process parameters against the parsed
//! extent, replicate the points across the panel, then generate the program.
//! Each stage is a pure function; the driver re-runs them whenever its inputs
//! change and gates persistence on a fully passing validation report.

pub use dispensekit_camtools::{drill, DispenseGenerator, PanelParams, Panelizer, ParsedDrillFile};
pub use dispensekit_core::{BoardExtent, Point, Units};
pub use dispensekit_settings::{
    validate, DispenseParameters, Field, FieldStatus, ParameterStore, SettingsError,
    ValidationReport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr
/// - RUST_LOG environment variable support
/// - INFO default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
