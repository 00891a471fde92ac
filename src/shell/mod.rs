// Composition root for the volunteer log.
//
// - Read config from environment.
// - Instantiate the entry store and the remote mirror.
// - Load and repair stored entries, then wire the session state.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

use std::sync::Arc;

use anyhow::Context;

use crate::modules::volunteer_log::use_cases::load_entries::handler::LoadEntriesHandler;
use crate::shared::infrastructure::entry_store::EntryStore;
use crate::shared::infrastructure::entry_store::json_file::JsonFileEntryStore;
use crate::shared::infrastructure::remote_mirror::RemoteMirror;
use crate::shared::infrastructure::remote_mirror::disabled::DisabledRemoteMirror;
use crate::shared::infrastructure::remote_mirror::http::HttpRemoteMirror;
use config::AppConfig;
use state::AppState;

pub fn build_mirror(config: &AppConfig) -> anyhow::Result<Arc<dyn RemoteMirror>> {
    match &config.mirror_url {
        Some(url) => {
            let mirror = HttpRemoteMirror::new(url.clone(), config.mirror_timeout)
                .context("configuring remote mirror")?;
            tracing::info!(endpoint = mirror.endpoint(), "remote mirror enabled");
            Ok(Arc::new(mirror))
        }
        None => {
            tracing::info!("remote mirror disabled");
            Ok(Arc::new(DisabledRemoteMirror))
        }
    }
}

pub async fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let store: Arc<dyn EntryStore> = Arc::new(JsonFileEntryStore::new(
        config.store_path.clone(),
        config.store_quota_bytes,
    ));
    let mirror = build_mirror(config)?;

    let loaded = LoadEntriesHandler::new(store.clone())
        .handle()
        .await
        .with_context(|| format!("loading entries from {}", config.store_path.display()))?;

    Ok(AppState::new(
        loaded.collection,
        store,
        mirror,
        config.csv_quoting,
        config.mirror_wait,
    ))
}
