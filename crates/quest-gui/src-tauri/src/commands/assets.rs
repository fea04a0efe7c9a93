use quest_gui_shared::{AssetArgs, AssetDto};
use tauri::State;
use tracing::instrument;

use crate::state::AppState;

/// Bytes of a skin asset, or absent. The frontend falls back to flat
/// colors; a missing file never errors.
#[tauri::command]
#[instrument(skip(state), fields(name = %args.name))]
pub async fn asset_lookup(state: State<'_, AppState>, args: AssetArgs) -> Result<AssetDto, String> {
    Ok(AssetDto {
        bytes: state.asset(&args.name),
    })
}
