use quest_gui_shared::{
  AddOutcome,
  ChromeHitDto,
  ListSnapshot,
  MenuGroupDto
};
use web_sys::MouseEvent;
use yew::{
  Callback,
  Html,
  UseStateHandle,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::api;
use crate::components::{
  AddBar,
  Checklist,
  MenuPopup,
  TitleEntry,
  WindowChrome
};

const CHROME_FALLBACK_COLOR: &str =
  "#6a1b9a";
const PAGE_FALLBACK_COLOR: &str =
  "#e7cbff";

fn png_data_url(
  bytes: &[u8]
) -> String {
  let encoded = base64::Engine::encode(
    &base64::engine::general_purpose::STANDARD,
    bytes
  );
  format!(
    "data:image/png;base64,{encoded}"
  )
}

fn load_asset_into(
  name: &'static str,
  slot: UseStateHandle<Option<String>>
) {
  wasm_bindgen_futures::spawn_local(
    async move {
      match api::asset_lookup(
        name.to_string()
      )
      .await
      {
        | Ok(asset) => {
          slot.set(
            asset
              .bytes
              .as_deref()
              .map(png_data_url)
          );
        }
        | Err(err) => tracing::error!(error = %err, asset = name, "asset lookup failed")
      }
    }
  );
}

fn refresh_snapshot(
  snapshot: UseStateHandle<
    Option<ListSnapshot>
  >
) {
  wasm_bindgen_futures::spawn_local(
    async move {
      match api::list_snapshot().await {
        | Ok(state) => {
          snapshot.set(Some(state));
        }
        | Err(err) => tracing::error!(error = %err, "list_snapshot failed")
      }
    }
  );
}

#[function_component(App)]
pub fn app() -> Html {
  let snapshot = use_state(|| {
    None::<ListSnapshot>
  });
  let menus = use_state(
    Vec::<MenuGroupDto>::new
  );
  let open_menu =
    use_state(|| None::<String>);
  let add_text =
    use_state(String::new);
  let list_full = use_state(|| false);
  let editing_text =
    use_state(|| None::<String>);
  let dragging = use_state(|| false);
  let chrome_bg =
    use_state(|| None::<String>);
  let page_bg =
    use_state(|| None::<String>);
  let checked_glyph =
    use_state(|| None::<String>);
  let unchecked_glyph =
    use_state(|| None::<String>);

  {
    let snapshot = snapshot.clone();
    let menus = menus.clone();
    let chrome_bg = chrome_bg.clone();
    let page_bg = page_bg.clone();
    let checked_glyph =
      checked_glyph.clone();
    let unchecked_glyph =
      unchecked_glyph.clone();
    use_effect_with((), move |_| {
      refresh_snapshot(snapshot);

      wasm_bindgen_futures::spawn_local(
        async move {
          match api::menus_list().await {
            | Ok(list) => {
              menus.set(list)
            }
            | Err(err) => tracing::error!(error = %err, "menus_list failed")
          }
        }
      );

      load_asset_into(
        "tabbar.png",
        chrome_bg
      );
      load_asset_into(
        "page_background.png",
        page_bg
      );
      load_asset_into(
        "checkbox_checked_purple.png",
        checked_glyph
      );
      load_asset_into(
        "checkbox_unchecked.png",
        unchecked_glyph
      );

      || ()
    });
  }

  let on_toggle = {
    let snapshot = snapshot.clone();
    Callback::from(
      move |index: usize| {
        let snapshot = snapshot.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            match api::row_toggle(index)
              .await
            {
              | Ok(_) => {
                refresh_snapshot(
                  snapshot
                )
              }
              | Err(err) => tracing::error!(error = %err, index, "row_toggle failed")
            }
          }
        );
      }
    )
  };

  let on_label_click = {
    let snapshot = snapshot.clone();
    let editing_text =
      editing_text.clone();
    Callback::from(
      move |index: usize| {
        let snapshot = snapshot.clone();
        let editing_text =
          editing_text.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            match api::row_begin_edit(
              index
            )
            .await
            {
              | Ok(text) => {
                editing_text
                  .set(Some(text));
                refresh_snapshot(
                  snapshot
                );
              }
              | Err(err) => tracing::error!(error = %err, index, "row_begin_edit failed")
            }
          }
        );
      }
    )
  };

  let on_editor_input = {
    let editing_text =
      editing_text.clone();
    Callback::from(
      move |(index, text): (
        usize,
        String
      )| {
        editing_text
          .set(Some(text.clone()));
        // Mirror keystrokes into the
        // backend so an implicit
        // commit sees the live text.
        wasm_bindgen_futures::spawn_local(
          async move {
            if let Err(err) =
              api::row_edit_changed(
                index, text
              )
              .await
            {
              tracing::error!(error = %err, index, "row_edit_changed failed");
            }
          }
        );
      }
    )
  };

  let on_editor_commit = {
    let snapshot = snapshot.clone();
    let editing_text =
      editing_text.clone();
    Callback::from(
      move |(index, text): (
        usize,
        String
      )| {
        let snapshot = snapshot.clone();
        let editing_text =
          editing_text.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            match api::row_commit_edit(
              index, text
            )
            .await
            {
              | Ok(_) => {
                editing_text.set(None);
                refresh_snapshot(
                  snapshot
                );
              }
              | Err(err) => tracing::error!(error = %err, index, "row_commit_edit failed")
            }
          }
        );
      }
    )
  };

  let on_add_input = {
    let add_text = add_text.clone();
    Callback::from(
      move |text: String| {
        add_text.set(text);
      }
    )
  };

  let on_add_submit = {
    let snapshot = snapshot.clone();
    let add_text = add_text.clone();
    let list_full = list_full.clone();
    Callback::from(move |()| {
      let snapshot = snapshot.clone();
      let add_text = add_text.clone();
      let list_full = list_full.clone();
      let text = (*add_text).clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          match api::list_add(text)
            .await
          {
            | Ok(
              AddOutcome::Placed {
                index
              }
            ) => {
              tracing::debug!(
                index,
                "item placed"
              );
              add_text
                .set(String::new());
              list_full.set(false);
              refresh_snapshot(
                snapshot
              );
            }
            | Ok(
              AddOutcome::Rejected
            ) => {
              list_full.set(true);
            }
            | Ok(
              AddOutcome::Ignored
            ) => {}
            | Err(err) => tracing::error!(error = %err, "list_add failed")
          }
        }
      );
    })
  };

  let on_bar_pressed = {
    let open_menu = open_menu.clone();
    let dragging = dragging.clone();
    Callback::from(
      move |(ratio, x, y): (
        f64,
        i32,
        i32
      )| {
        let open_menu =
          open_menu.clone();
        let dragging = dragging.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            // Every press on the bar
            // anchors a drag; menus
            // coexist with the move.
            match api::window_drag_start(
              x, y
            )
            .await
            {
              | Ok(()) => {
                dragging.set(true)
              }
              | Err(err) => tracing::error!(error = %err, "window_drag_start failed")
            }

            match api::chrome_pressed(
              ratio
            )
            .await
            {
              | Ok(
                ChromeHitDto::Menu {
                  group
                }
              ) => {
                open_menu
                  .set(Some(group));
              }
              // Minimize, maximize
              // and close were
              // already applied by
              // the backend; misses
              // leave just the drag.
              | Ok(_) => {}
              | Err(err) => tracing::error!(error = %err, "chrome_pressed failed")
            }
          }
        );
      }
    )
  };

  let on_mouse_move = {
    let dragging = dragging.clone();
    Callback::from(
      move |event: MouseEvent| {
        if !*dragging {
          return;
        }
        let screen_x = event.screen_x();
        let screen_y = event.screen_y();
        wasm_bindgen_futures::spawn_local(
          async move {
            if let Err(err) =
              api::window_drag_to(
                screen_x, screen_y
              )
              .await
            {
              tracing::error!(error = %err, "window_drag_to failed");
            }
          }
        );
      }
    )
  };

  let on_mouse_up = {
    let dragging = dragging.clone();
    Callback::from(
      move |_: MouseEvent| {
        if !*dragging {
          return;
        }
        dragging.set(false);
        wasm_bindgen_futures::spawn_local(
          async move {
            if let Err(err) =
              api::window_drag_end()
                .await
            {
              tracing::error!(error = %err, "window_drag_end failed");
            }
          }
        );
      }
    )
  };

  let on_tab = {
    let menus = menus.clone();
    let open_menu = open_menu.clone();
    Callback::from(
      move |label: String| {
        let Some(group) = menus
          .iter()
          .find(|group| {
            group.label == label
          })
          .map(|group| {
            group.group.clone()
          })
        else {
          tracing::warn!(
            label = %label,
            "unknown chrome tab"
          );
          return;
        };

        if (*open_menu).as_deref()
          == Some(group.as_str())
        {
          open_menu.set(None);
        } else {
          open_menu.set(Some(group));
        }
      }
    )
  };

  let on_menu_invoke = {
    let open_menu = open_menu.clone();
    let snapshot = snapshot.clone();
    Callback::from(
      move |(group, label): (
        String,
        String
      )| {
        open_menu.set(None);
        let snapshot = snapshot.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            match api::menu_invoke(
              group.clone(),
              label.clone()
            )
            .await
            {
              // Clear Completed (and
              // any future command)
              // may rewrite rows.
              | Ok(()) => {
                refresh_snapshot(
                  snapshot
                )
              }
              | Err(err) => tracing::error!(error = %err, group = %group, label = %label, "menu_invoke failed")
            }
          }
        );
      }
    )
  };

  let on_menu_dismiss = {
    let open_menu = open_menu.clone();
    Callback::from(move |()| {
      open_menu.set(None);
    })
  };

  let on_window_minimize =
    Callback::from(move |()| {
      wasm_bindgen_futures::spawn_local(
        async move {
          if let Err(err) =
            api::window_minimize()
              .await
          {
            tracing::error!(error = %err, "window_minimize failed");
          }
        }
      );
    });

  let on_window_toggle_maximize =
    Callback::from(move |()| {
      wasm_bindgen_futures::spawn_local(
        async move {
          if let Err(err) =
            api::window_toggle_maximize(
            )
            .await
          {
            tracing::error!(error = %err, "window_toggle_maximize failed");
          }
        }
      );
    });

  let on_window_close =
    Callback::from(move |()| {
      wasm_bindgen_futures::spawn_local(
        async move {
          if let Err(err) =
            api::window_close().await
          {
            tracing::error!(error = %err, "window_close failed");
          }
        }
      );
    });

  let page_style = match &*page_bg {
    | Some(url) => format!(
      "background-image:url({url});\
       background-size:100% 100%;"
    ),
    | None => format!(
      "background-color:\
       {PAGE_FALLBACK_COLOR};"
    )
  };
  let chrome_style =
    match &*chrome_bg {
      | Some(_) => String::new(),
      | None => format!(
        "background-color:\
         {CHROME_FALLBACK_COLOR};"
      )
    };

  let open_group = (*open_menu)
    .as_ref()
    .and_then(|wanted| {
      menus
        .iter()
        .find(|group| {
          &group.group == wanted
        })
        .cloned()
    });

  html! {
      <div
          class="app-root"
          style={chrome_style}
          onmousemove={on_mouse_move}
          onmouseup={on_mouse_up}
      >
          <WindowChrome
              on_bar_pressed={on_bar_pressed}
              on_tab={on_tab}
              on_window_minimize={on_window_minimize}
              on_window_toggle_maximize={on_window_toggle_maximize}
              on_window_close={on_window_close}
              background={(*chrome_bg).clone()}
          />
          {
              match open_group {
                  Some(group) => html! {
                      <MenuPopup
                          group={group}
                          on_invoke={on_menu_invoke}
                          on_dismiss={on_menu_dismiss}
                      />
                  },
                  None => html! {}
              }
          }
          <div class="page" style={page_style}>
              <TitleEntry />
              {
                  match (*snapshot).clone() {
                      Some(snapshot) => html! {
                          <Checklist
                              snapshot={snapshot}
                              editing_text={(*editing_text).clone()}
                              checked_glyph={(*checked_glyph).clone()}
                              unchecked_glyph={(*unchecked_glyph).clone()}
                              on_toggle={on_toggle}
                              on_label_click={on_label_click}
                              on_editor_input={on_editor_input}
                              on_editor_commit={on_editor_commit}
                          />
                      },
                      None => html! { <div class="checklist loading">{ "Loading..." }</div> }
                  }
              }
              <AddBar
                  value={(*add_text).clone()}
                  list_full={*list_full}
                  on_input={on_add_input}
                  on_submit={on_add_submit}
              />
          </div>
      </div>
  }
}
