//! Parameter persistence.
//!
//! Parameters travel as a flat map of field name to the number rendered as a
//! string, stored as JSON or TOML in the per-user configuration directory.
//! Loading is tolerant: a missing or unreadable entry falls back to the
//! built-in default, so stores written by older versions keep working as
//! fields are added.

use crate::config::DispenseParameters;
use crate::error::{SettingsError, SettingsResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Directory under the platform config dir
const CONFIG_DIR_NAME: &str = "dispensekit";
/// Default store file name
const STORE_FILE_NAME: &str = "parameters.json";

/// Persistence layer for [`DispenseParameters`].
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    params: DispenseParameters,
}

impl ParameterStore {
    /// Create a store holding the built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store around existing parameters
    pub fn with_parameters(params: DispenseParameters) -> Self {
        Self { params }
    }

    /// The stored parameters
    pub fn parameters(&self) -> &DispenseParameters {
        &self.params
    }

    /// Mutable access for single-field updates
    pub fn parameters_mut(&mut self) -> &mut DispenseParameters {
        &mut self.params
    }

    /// Render the parameters as the flat field-name to string map
    pub fn to_store_map(&self) -> BTreeMap<String, String> {
        let p = &self.params;
        let mut map = BTreeMap::new();
        map.insert("work_area_width".to_string(), p.work_area_width.to_string());
        map.insert(
            "work_area_height".to_string(),
            p.work_area_height.to_string(),
        );
        map.insert("offset_width".to_string(), p.offset_width.to_string());
        map.insert("offset_height".to_string(), p.offset_height.to_string());
        map.insert(
            "pcb_outline_width".to_string(),
            p.pcb_outline_width.to_string(),
        );
        map.insert(
            "pcb_outline_height".to_string(),
            p.pcb_outline_height.to_string(),
        );
        map.insert("pcb_count_width".to_string(), p.pcb_count_width.to_string());
        map.insert(
            "pcb_count_height".to_string(),
            p.pcb_count_height.to_string(),
        );
        map.insert("rest_z".to_string(), p.rest_z.to_string());
        map.insert("nozzle_z".to_string(), p.nozzle_z.to_string());
        map.insert("nozzle_temp".to_string(), p.nozzle_temp.to_string());
        map.insert(
            "nozzle_hold_duration_ms".to_string(),
            p.nozzle_hold_duration_ms.to_string(),
        );
        map.insert(
            "nozzle_feed_forward".to_string(),
            p.nozzle_feed_forward.to_string(),
        );
        map.insert(
            "nozzle_feed_backward".to_string(),
            p.nozzle_feed_backward.to_string(),
        );
        map
    }

    /// Rebuild parameters from a flat map.
    ///
    /// Missing or malformed entries fall back to the built-in default for
    /// that field; unknown keys are ignored.
    pub fn from_store_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = DispenseParameters::default();
        let params = DispenseParameters {
            work_area_width: read_f64(map, "work_area_width", defaults.work_area_width),
            work_area_height: read_f64(map, "work_area_height", defaults.work_area_height),
            offset_width: read_f64(map, "offset_width", defaults.offset_width),
            offset_height: read_f64(map, "offset_height", defaults.offset_height),
            pcb_outline_width: read_f64(map, "pcb_outline_width", defaults.pcb_outline_width),
            pcb_outline_height: read_f64(map, "pcb_outline_height", defaults.pcb_outline_height),
            pcb_count_width: read_u32(map, "pcb_count_width", defaults.pcb_count_width),
            pcb_count_height: read_u32(map, "pcb_count_height", defaults.pcb_count_height),
            rest_z: read_f64(map, "rest_z", defaults.rest_z),
            nozzle_z: read_f64(map, "nozzle_z", defaults.nozzle_z),
            nozzle_temp: read_f64(map, "nozzle_temp", defaults.nozzle_temp),
            nozzle_hold_duration_ms: read_f64(
                map,
                "nozzle_hold_duration_ms",
                defaults.nozzle_hold_duration_ms,
            ),
            nozzle_feed_forward: read_f64(map, "nozzle_feed_forward", defaults.nozzle_feed_forward),
            nozzle_feed_backward: read_f64(
                map,
                "nozzle_feed_backward",
                defaults.nozzle_feed_backward,
            ),
        };
        Self { params }
    }

    /// Load a store from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::Load(format!("{}: {}", path.display(), e)))?;

        let map: BTreeMap<String, String> = if has_extension(path, "json") {
            serde_json::from_str(&content)?
        } else if has_extension(path, "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::UnsupportedFormat(
                path.display().to_string(),
            ));
        };

        Ok(Self::from_store_map(&map))
    }

    /// Save the store to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        let map = self.to_store_map();
        let content = if has_extension(path, "json") {
            serde_json::to_string_pretty(&map)?
        } else if has_extension(path, "toml") {
            toml::to_string_pretty(&map)?
        } else {
            return Err(SettingsError::UnsupportedFormat(
                path.display().to_string(),
            ));
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::Save(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Load from the per-user store file
    pub fn load_default() -> SettingsResult<Self> {
        Self::load_from_file(&Self::default_store_path()?)
    }

    /// Save to the per-user store file, creating the directory if needed
    pub fn save_default(&self) -> SettingsResult<()> {
        let path = Self::default_store_path()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
        }
        self.save_to_file(&path)
    }

    /// Platform path of the per-user parameter store
    pub fn default_store_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(base.join(CONFIG_DIR_NAME).join(STORE_FILE_NAME))
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}

fn read_f64(map: &BTreeMap<String, String>, key: &str, default: f64) -> f64 {
    match map.get(key) {
        Some(raw) => raw.trim().parse::<f64>().unwrap_or_else(|_| {
            warn!("parameter `{key}` has malformed value `{raw}`, using default {default}");
            default
        }),
        None => default,
    }
}

fn read_u32(map: &BTreeMap<String, String>, key: &str, default: u32) -> u32 {
    match map.get(key) {
        Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
            warn!("parameter `{key}` has malformed value `{raw}`, using default {default}");
            default
        }),
        None => default,
    }
}
