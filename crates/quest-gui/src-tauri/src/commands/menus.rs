use quest_core::shell::InputEvent;
use quest_gui_shared::{MenuGroupDto, MenuInvokeArgs};
use tauri::State;
use tracing::instrument;

use super::window::apply_effects;
use crate::state::AppState;

#[tauri::command]
#[instrument(skip(state))]
pub async fn menus_list(state: State<'_, AppState>) -> Result<Vec<MenuGroupDto>, String> {
    Ok(state.menus())
}

/// Runs one menu command. Exit closes the window; everything else is a
/// placeholder that logs its notice inside the registry.
#[tauri::command]
#[instrument(skip(window, state), fields(group = %args.group, label = %args.label))]
pub async fn menu_invoke(
    window: tauri::Window,
    state: State<'_, AppState>,
    args: MenuInvokeArgs,
) -> Result<(), String> {
    let Some(group) = state.parse_group(&args.group) else {
        return Err(format!("unknown menu group: {}", args.group));
    };

    let effects = state.handle(InputEvent::MenuInvoked {
        group,
        label: args.label,
    });
    apply_effects(&window, effects).map(|_| ())
}
