use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FibroscreenConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Where `assess --export` writes files. `None` = current directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    /// Formats written by `assess --export`. Added in v1.
    #[serde(default = "default_export_formats")]
    pub export_formats: Vec<ExportFormat>,
    /// Tera template used instead of the built-in text report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_template: Option<PathBuf>,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Json,
    Csv,
    Report,
}

fn default_export_formats() -> Vec<ExportFormat> {
    vec![ExportFormat::Json, ExportFormat::Csv]
}

impl Default for FibroscreenConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            export_dir: None,
            export_formats: default_export_formats(),
            report_template: None,
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl FibroscreenConfig {
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("fibroscreen"))
}

/// Load the config from the user config directory, or defaults if none has
/// been saved yet.
pub fn load_or_default() -> eyre::Result<FibroscreenConfig> {
    let dir = config_dir()?;
    if dir.join(CONFIG_FILE).exists() {
        load_config_from(&dir)
    } else {
        Ok(FibroscreenConfig::default())
    }
}

pub fn load_config_from(dir: &Path) -> eyre::Result<FibroscreenConfig> {
    let path = dir.join(CONFIG_FILE);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: FibroscreenConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update fibroscreen."
        ));
    }

    // v0 → v1: add export_formats (json + csv, what v0 always wrote)
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("export_formats")
            .or_insert_with(|| serde_json::json!(["json", "csv"]));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added export_formats)");
    }

    Ok(json)
}

pub fn save_config(config: &FibroscreenConfig) -> eyre::Result<PathBuf> {
    save_config_to(&config_dir()?, config)
}

pub fn save_config_to(dir: &Path, config: &FibroscreenConfig) -> eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(path)
}

pub fn delete_config() -> eyre::Result<()> {
    delete_config_in(&config_dir()?)
}

pub fn delete_config_in(dir: &Path) -> eyre::Result<()> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}
