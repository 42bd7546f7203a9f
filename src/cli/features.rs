use std::path::PathBuf;

use tabled::Table;

use crate::{
    collector,
    dataset::FeatureTable,
    error,
    management::{DatasetManager, TokenManager},
    success,
    types::TrackPreviewRow,
    utils::{self, ExportFormat},
    warning,
};

pub async fn playlist(playlist_id: String, output: Option<PathBuf>, format: ExportFormat) {
    let mut token_mgr = load_token_manager().await;

    let table = match collector::collect_features_for_playlist(&mut token_mgr, &playlist_id).await {
        Ok(table) => table,
        Err(e) => {
            error!("Failed to collect playlist features: {}", e);
        }
    };

    finish(table, output, format).await;
}

pub async fn tracks(
    ids: Option<String>,
    file: Option<PathBuf>,
    output: Option<PathBuf>,
    format: ExportFormat,
) {
    let track_ids = resolve_track_ids(ids, file).await;
    if track_ids.is_empty() {
        error!("No track ids given. Use --ids or --file.");
    }

    let mut token_mgr = load_token_manager().await;

    let table = match collector::collect_features(&mut token_mgr, &track_ids).await {
        Ok(table) => table,
        Err(e) => {
            error!("Failed to collect track features: {}", e);
        }
    };

    finish(table, output, format).await;
}

async fn load_token_manager() -> TokenManager {
    match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run playfeat auth\n Error: {}",
                e
            );
        }
    }
}

async fn resolve_track_ids(ids: Option<String>, file: Option<PathBuf>) -> Vec<String> {
    if let Some(raw) = ids {
        return utils::parse_id_list(&raw);
    }

    if let Some(path) = file {
        let content = match async_fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) => {
                error!("Cannot read id file {}: {}", path.display(), e);
            }
        };
        return utils::parse_id_lines(&content);
    }

    Vec::new()
}

async fn finish(table: FeatureTable, output: Option<PathBuf>, format: ExportFormat) {
    if table.is_empty() {
        warning!("Collected an empty dataset.");
    }

    match output {
        Some(path) => {
            let manager = DatasetManager::new(table);
            match manager.export(&path, &format).await {
                Ok(_) => success!(
                    "Dataset with {rows} rows written to {path} ({format}).",
                    rows = manager.table().len(),
                    path = path.display(),
                    format = format
                ),
                Err(e) => {
                    error!("Failed to write dataset: {:?}", e);
                }
            }
        }
        None => {
            let preview_rows: Vec<TrackPreviewRow> = (0..table.len())
                .map(|i| TrackPreviewRow {
                    track: table.track_name[i].clone(),
                    artist: table.artist_name[i].clone(),
                    album: table.album_name[i].clone(),
                    year: table.release_year[i]
                        .map(|y| y.to_string())
                        .unwrap_or_default(),
                    tempo: format!("{:.1}", table.tempo[i]),
                    energy: format!("{:.3}", table.energy[i]),
                })
                .collect();

            let preview = Table::new(preview_rows);
            println!("{}", preview);
            success!("Collected {} rows. Pass --output to write the full dataset.", table.len());
        }
    }
}
