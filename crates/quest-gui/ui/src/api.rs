use quest_gui_shared::{
    AddItemArgs, AddOutcome, AssetArgs, AssetDto, ChromeHitArgs, ChromeHitDto, CommitEditArgs,
    DragStartArgs, DragToArgs, ListSnapshot, MenuGroupDto, MenuInvokeArgs, RowIndexArgs,
};
use serde::{Serialize, de::DeserializeOwned};
use tauri_wasm::{args, invoke};

/// Tauri commands take their payload under a single `args` key.
#[derive(Serialize)]
struct Payload<T: Serialize> {
    args: T,
}

async fn invoke_tauri<R, A>(cmd: &str, args_payload: A) -> Result<R, String>
where
    R: DeserializeOwned,
    A: Serialize,
{
    let payload =
        args(&Payload { args: args_payload }).map_err(|e| format!("failed to encode args: {e}"))?;
    let value = invoke(cmd)
        .with_args(payload)
        .await
        .map_err(|e| format!("invoke error: {e:?}"))?;

    serde_wasm_bindgen::from_value(value).map_err(|e| format!("decode error: {e}"))
}

async fn invoke_tauri_unit<R>(cmd: &str) -> Result<R, String>
where
    R: DeserializeOwned,
{
    let value = invoke(cmd)
        .await
        .map_err(|e| format!("invoke error: {e:?}"))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| format!("decode error: {e}"))
}

pub async fn list_snapshot() -> Result<ListSnapshot, String> {
    invoke_tauri_unit("list_snapshot").await
}

pub async fn row_toggle(index: usize) -> Result<bool, String> {
    invoke_tauri("row_toggle", RowIndexArgs { index }).await
}

pub async fn row_begin_edit(index: usize) -> Result<String, String> {
    invoke_tauri("row_begin_edit", RowIndexArgs { index }).await
}

pub async fn row_edit_changed(index: usize, text: String) -> Result<(), String> {
    invoke_tauri("row_edit_changed", CommitEditArgs { index, text }).await
}

pub async fn row_commit_edit(index: usize, text: String) -> Result<String, String> {
    invoke_tauri("row_commit_edit", CommitEditArgs { index, text }).await
}

pub async fn list_add(text: String) -> Result<AddOutcome, String> {
    invoke_tauri("list_add", AddItemArgs { text }).await
}

pub async fn menus_list() -> Result<Vec<MenuGroupDto>, String> {
    invoke_tauri_unit("menus_list").await
}

pub async fn menu_invoke(group: String, label: String) -> Result<(), String> {
    invoke_tauri("menu_invoke", MenuInvokeArgs { group, label }).await
}

pub async fn asset_lookup(name: String) -> Result<AssetDto, String> {
    invoke_tauri("asset_lookup", AssetArgs { name }).await
}

pub async fn chrome_pressed(x_ratio: f64) -> Result<ChromeHitDto, String> {
    invoke_tauri("chrome_pressed", ChromeHitArgs { x_ratio }).await
}

pub async fn window_drag_start(x: i32, y: i32) -> Result<(), String> {
    invoke_tauri("window_drag_start", DragStartArgs { x, y }).await
}

pub async fn window_drag_to(screen_x: i32, screen_y: i32) -> Result<(), String> {
    invoke_tauri("window_drag_to", DragToArgs { screen_x, screen_y }).await
}

pub async fn window_drag_end() -> Result<(), String> {
    invoke_tauri_unit("window_drag_end").await
}

pub async fn window_minimize() -> Result<(), String> {
    invoke_tauri_unit("window_minimize").await
}

pub async fn window_toggle_maximize() -> Result<(), String> {
    invoke_tauri_unit("window_toggle_maximize").await
}

pub async fn window_close() -> Result<(), String> {
    invoke_tauri_unit("window_close").await
}
