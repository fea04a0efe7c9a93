use quest_gui_shared::ListSnapshot;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::ChecklistRow;

#[derive(Properties, PartialEq)]
pub struct ChecklistProps {
  pub snapshot:        ListSnapshot,
  /// Live text of the open editor,
  /// if any. Pairs with
  /// `snapshot.editing_index`.
  pub editing_text:    Option<String>,
  pub checked_glyph:   Option<String>,
  pub unchecked_glyph: Option<String>,
  pub on_toggle:       Callback<usize>,
  pub on_label_click:  Callback<usize>,
  pub on_editor_input:
    Callback<(usize, String)>,
  pub on_editor_commit:
    Callback<(usize, String)>
}

#[function_component(Checklist)]
pub fn checklist(
  props: &ChecklistProps
) -> Html {
  html! {
      <div class="checklist">
          {
              for props.snapshot.rows.iter().map(|row| {
                  let editing_text = if props.snapshot.editing_index
                      == Some(row.index)
                  {
                      props.editing_text.clone().or_else(|| {
                          Some(row.text.clone())
                      })
                  } else {
                      None
                  };
                  html! {
                      <ChecklistRow
                          key={row.index}
                          row={row.clone()}
                          editing_text={editing_text}
                          checked_glyph={props.checked_glyph.clone()}
                          unchecked_glyph={props.unchecked_glyph.clone()}
                          on_toggle={props.on_toggle.clone()}
                          on_label_click={props.on_label_click.clone()}
                          on_editor_input={props.on_editor_input.clone()}
                          on_editor_commit={props.on_editor_commit.clone()}
                      />
                  }
              })
          }
      </div>
  }
}
