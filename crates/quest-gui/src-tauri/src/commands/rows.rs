use quest_core::shell::{Effect, InputEvent};
use quest_core::view::{RowRegion, ViewEffect};
use quest_gui_shared::{AddItemArgs, AddOutcome, CommitEditArgs, ListSnapshot, RowIndexArgs};
use tauri::State;
use tracing::instrument;

use crate::state::AppState;

#[tauri::command]
#[instrument(skip(state))]
pub async fn list_snapshot(state: State<'_, AppState>) -> Result<ListSnapshot, String> {
    Ok(state.snapshot())
}

#[tauri::command]
#[instrument(skip(state), fields(index = args.index))]
pub async fn row_toggle(state: State<'_, AppState>, args: RowIndexArgs) -> Result<bool, String> {
    let effects = state.handle(InputEvent::RowClicked {
        index: args.index,
        region: RowRegion::Checkbox,
    });
    for effect in effects {
        if let Effect::View(ViewEffect::UpdateIndicator { completed, .. }) = effect {
            return Ok(completed);
        }
    }
    Err(format!("row {} out of range", args.index))
}

/// Opens the inline editor and returns the text to seed it with.
#[tauri::command]
#[instrument(skip(state), fields(index = args.index))]
pub async fn row_begin_edit(state: State<'_, AppState>, args: RowIndexArgs) -> Result<String, String> {
    let effects = state.handle(InputEvent::RowClicked {
        index: args.index,
        region: RowRegion::Label,
    });
    for effect in effects {
        if let Effect::View(ViewEffect::ShowEditor { text, .. }) = effect {
            return Ok(text);
        }
    }
    Err(format!("row {} out of range", args.index))
}

/// Mirrors editor keystrokes so that clicking another row commits what
/// the user actually typed.
#[tauri::command]
#[instrument(skip(state, args), fields(index = args.index))]
pub async fn row_edit_changed(state: State<'_, AppState>, args: CommitEditArgs) -> Result<(), String> {
    state.handle(InputEvent::EditorChanged {
        index: args.index,
        text: args.text,
    });
    Ok(())
}

/// Shared commit path for confirm-on-enter and focus loss; returns the
/// stored (trimmed) text for repaint.
#[tauri::command]
#[instrument(skip(state, args), fields(index = args.index))]
pub async fn row_commit_edit(
    state: State<'_, AppState>,
    args: CommitEditArgs,
) -> Result<String, String> {
    let effects = state.handle(InputEvent::EditorConfirmed {
        index: args.index,
        text: args.text,
    });
    for effect in effects {
        if let Effect::View(ViewEffect::UpdateLabel { text, .. }) = effect {
            return Ok(text);
        }
    }
    Ok(String::new())
}

#[tauri::command]
#[instrument(skip(state, args))]
pub async fn list_add(state: State<'_, AppState>, args: AddItemArgs) -> Result<AddOutcome, String> {
    let effects = state.handle(InputEvent::AddSubmitted { text: args.text });
    let mut outcome = AddOutcome::Ignored;
    for effect in effects {
        match effect {
            Effect::View(ViewEffect::UpdateLabel { index, .. }) => {
                outcome = AddOutcome::Placed { index };
            }
            Effect::View(ViewEffect::AddRejected) => {
                outcome = AddOutcome::Rejected;
            }
            _ => {}
        }
    }
    Ok(outcome)
}
