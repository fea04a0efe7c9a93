use quest_core::shell::{
  Effect,
  InputEvent
};
use quest_gui_shared::{
  ChromeHitArgs,
  ChromeHitDto,
  DragStartArgs,
  DragToArgs
};
use tauri::{
  PhysicalPosition,
  PhysicalSize,
  State
};
use tracing::{
  instrument,
  warn
};

use crate::state::AppState;

/// Pushes the window's real
/// placement into the shell so the
/// maximize machine saves what the
/// OS actually reports.
fn sync_geometry(
  window: &tauri::Window,
  state: &AppState
) -> Result<(), String> {
  let position = window
    .outer_position()
    .map_err(|err| err.to_string())?;
  let size = window
    .outer_size()
    .map_err(|err| err.to_string())?;

  state.handle(
    InputEvent::WindowMoved {
      x: position.x,
      y: position.y
    }
  );
  state.handle(InputEvent::Resized {
    width:  size.width,
    height: size.height
  });
  Ok(())
}

/// Applies window-level effects and
/// reports which menu (if any) the
/// press should open.
pub(crate) fn apply_effects(
  window: &tauri::Window,
  effects: Vec<Effect>
) -> Result<ChromeHitDto, String> {
  let mut hit = ChromeHitDto::Nothing;
  for effect in effects {
    match effect {
      | Effect::MoveWindow {
        x,
        y
      } => {
        window
          .set_position(
            PhysicalPosition::new(
              x, y
            )
          )
          .map_err(|err| {
            err.to_string()
          })?;
      }
      | Effect::Minimize => {
        hit = ChromeHitDto::Minimize;
        window.minimize().map_err(
          |err| err.to_string()
        )?;
      }
      | Effect::Maximize => {
        hit = ChromeHitDto::Maximize;
        window.maximize().map_err(
          |err| err.to_string()
        )?;
      }
      | Effect::Restore {
        geometry
      } => {
        hit = ChromeHitDto::Maximize;
        window.unmaximize().map_err(
          |err| err.to_string()
        )?;
        if let Some(geometry) =
          geometry
        {
          window
            .set_position(
              PhysicalPosition::new(
                geometry.x,
                geometry.y
              )
            )
            .map_err(|err| {
              err.to_string()
            })?;
          window
            .set_size(
              PhysicalSize::new(
                geometry.width,
                geometry.height
              )
            )
            .map_err(|err| {
              err.to_string()
            })?;
        }
      }
      | Effect::CloseWindow => {
        hit = ChromeHitDto::Close;
        window.close().map_err(
          |err| err.to_string()
        )?;
      }
      | Effect::OpenMenu {
        group
      } => {
        hit = ChromeHitDto::Menu {
          group: group
            .label()
            .to_string()
        };
      }
      | Effect::Relayout
      | Effect::View(_) => {}
    }
  }
  Ok(hit)
}

/// One press on the chrome bar:
/// hit-test by width ratio, run the
/// resulting action, tell the
/// frontend what was hit.
#[tauri::command]
#[instrument(skip(window, state))]
pub async fn chrome_pressed(
  window: tauri::Window,
  state: State<'_, AppState>,
  args: ChromeHitArgs
) -> Result<ChromeHitDto, String> {
  sync_geometry(&window, &state)?;
  let effects = state.handle(
    InputEvent::ChromePressed {
      x_ratio: args.x_ratio
    }
  );
  apply_effects(&window, effects)
}

#[tauri::command]
#[instrument(skip(state))]
pub async fn window_drag_start(
  state: State<'_, AppState>,
  args: DragStartArgs
) -> Result<(), String> {
  state.handle(
    InputEvent::ChromeDragStarted {
      x: args.x,
      y: args.y
    }
  );
  Ok(())
}

#[tauri::command]
pub async fn window_drag_to(
  window: tauri::Window,
  state: State<'_, AppState>,
  args: DragToArgs
) -> Result<(), String> {
  let effects = state.handle(
    InputEvent::PointerDragged {
      screen_x: args.screen_x,
      screen_y: args.screen_y
    }
  );
  apply_effects(&window, effects)
    .map(|_| ())
}

#[tauri::command]
pub async fn window_drag_end(
  state: State<'_, AppState>
) -> Result<(), String> {
  state
    .handle(InputEvent::DragEnded);
  Ok(())
}

#[tauri::command]
#[instrument(skip(window, state))]
pub async fn window_minimize(
  window: tauri::Window,
  state: State<'_, AppState>
) -> Result<(), String> {
  let effects = state.handle(
    InputEvent::MinimizeRequested
  );
  apply_effects(&window, effects)
    .map(|_| ())
}

#[tauri::command]
#[instrument(skip(window, state))]
pub async fn window_toggle_maximize(
  window: tauri::Window,
  state: State<'_, AppState>
) -> Result<(), String> {
  sync_geometry(&window, &state)?;
  let effects = state.handle(
    InputEvent::MaximizeToggled
  );
  apply_effects(&window, effects)
    .map(|_| ())
}

#[tauri::command]
#[instrument(skip(window, state))]
pub async fn window_close(
  window: tauri::Window,
  state: State<'_, AppState>
) -> Result<(), String> {
  let effects = state.handle(
    InputEvent::CloseRequested
  );
  if effects.is_empty() {
    warn!(
      "close produced no effect; \
       closing anyway"
    );
    return window
      .close()
      .map_err(|err| err.to_string());
  }
  apply_effects(&window, effects)
    .map(|_| ())
}
