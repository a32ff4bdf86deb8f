use std::path::{Path, PathBuf};

use cognita_export::styles::DocumentStyles;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

/// Environment variable that overrides the configured data directory.
pub const DATA_DIR_ENV: &str = "COGNITA_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitaConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Where records, reports and backups are kept.
    pub data_dir: PathBuf,
    /// Examiner recorded on new test records unless one is given.
    #[serde(default)]
    pub examiner: Option<String>,
    /// Raw→scaled conversion tables. Without one, scaled scores are entered
    /// by hand.
    #[serde(default)]
    pub scaled_norms_path: Option<PathBuf>,
    /// Sum→composite tables replacing the built-in ones.
    #[serde(default)]
    pub composite_norms_path: Option<PathBuf>,
    /// Added in v1.
    #[serde(default)]
    pub styles: DocumentStyles,
}

impl Default for CognitaConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir: default_data_dir(),
            examiner: None,
            scaled_norms_path: None,
            composite_norms_path: None,
            styles: DocumentStyles::default(),
        }
    }
}

impl CognitaConfig {
    /// The data directory in effect: `COGNITA_DATA_DIR` if set, else the
    /// configured one.
    pub fn effective_data_dir(&self) -> PathBuf {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => self.data_dir.clone(),
        }
    }
}

/// Platform data directory for Cognita, falling back to the working directory.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("cognita"))
        .unwrap_or_else(|| PathBuf::from("cognita-data"))
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("cognita"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// The saved config, or the defaults if none has been saved yet.
pub fn load_or_default(path: &Path) -> eyre::Result<CognitaConfig> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(CognitaConfig::default())
    }
}

pub fn load_config(path: &Path) -> eyre::Result<CognitaConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version = u32::try_from(on_disk_version)
        .map_err(|_| eyre::eyre!("config_version {on_disk_version} is not valid"))?;

    let migrated = migrate(json, on_disk_version)?;
    let config: CognitaConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Cognita."
        ));
    }

    // v0 → v1: `examiner_name` renamed to `examiner`, document styles added
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(name) = obj.remove("examiner_name") {
            obj.entry("examiner").or_insert(name);
        }
        obj.entry("styles")
            .or_insert(serde_json::to_value(DocumentStyles::default())?);
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::warn!("migrated config v0 → v1 (examiner, styles)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &CognitaConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
