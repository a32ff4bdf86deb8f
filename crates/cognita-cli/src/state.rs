use cognita_core::models::scale::ScaleType;
use cognita_instruments::norms::{NormStore, NormTables};
use cognita_instruments::scaled::{ScaledNormTable, ScaledScoreProvider};
use cognita_storage::objects::LocalStore;
use eyre::WrapErr;

use crate::config::CognitaConfig;

/// Everything a command needs: the config, the record store, and the norm
/// tables in effect.
pub struct AppState {
    pub config: CognitaConfig,
    pub store: LocalStore,
    pub norms: NormStore,
    pub scaled: Option<ScaledNormTable>,
}

impl AppState {
    pub fn load(config: CognitaConfig) -> eyre::Result<Self> {
        let store = LocalStore::open(config.effective_data_dir())?;

        let norms = load_norms(&config)?;

        let scaled = match &config.scaled_norms_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("reading scaled norms {}", path.display()))?;
                let table = ScaledNormTable::from_json(&json)
                    .wrap_err_with(|| format!("loading scaled norms {}", path.display()))?;
                tracing::info!(path = %path.display(), "using raw→scaled conversion tables");
                Some(table)
            }
            None => None,
        };

        Ok(Self {
            config,
            store,
            norms,
            scaled,
        })
    }

    pub fn scaled_provider(&self) -> Option<&dyn ScaledScoreProvider> {
        self.scaled.as_ref().map(|table| table as &dyn ScaledScoreProvider)
    }
}

/// The built-in composite tables, or the configured replacement.
pub fn load_norms(config: &CognitaConfig) -> eyre::Result<NormStore> {
    let Some(path) = &config.composite_norms_path else {
        return Ok(NormStore::builtin().clone());
    };
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("reading composite norms {}", path.display()))?;
    let tables = NormTables::from_json(&json)
        .wrap_err_with(|| format!("loading composite norms {}", path.display()))?;
    tracing::info!(path = %path.display(), "using external composite norms");
    Ok(NormStore::new().with_tables(ScaleType::Wisc, tables))
}
