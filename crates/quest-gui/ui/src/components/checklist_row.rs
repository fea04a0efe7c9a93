use quest_gui_shared::RowDto;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  FocusEvent,
  Html,
  KeyboardEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ChecklistRowProps {
  /// Each row is constructed with
  /// its own dto, so the handlers
  /// below are bound to this slot
  /// and no other.
  pub row:              RowDto,
  pub editing_text:     Option<String>,
  pub checked_glyph:    Option<String>,
  pub unchecked_glyph:  Option<String>,
  pub on_toggle:        Callback<usize>,
  pub on_label_click:   Callback<usize>,
  pub on_editor_input:
    Callback<(usize, String)>,
  pub on_editor_commit:
    Callback<(usize, String)>
}

#[function_component(ChecklistRow)]
pub fn checklist_row(
  props: &ChecklistRowProps
) -> Html {
  let index = props.row.index;

  let on_toggle =
    props.on_toggle.clone();
  let toggle = Callback::from(
    move |_| on_toggle.emit(index)
  );

  let on_label_click =
    props.on_label_click.clone();
  let label_click = Callback::from(
    move |_| {
      on_label_click.emit(index)
    }
  );

  let checkbox = {
    let glyph = if props.row.completed
    {
      props.checked_glyph.as_ref()
    } else {
      props.unchecked_glyph.as_ref()
    };
    match glyph {
      | Some(src) => html! {
          <img class="row-checkbox" src={src.clone()} onclick={toggle} />
      },
      | None => html! {
          <span
              class={if props.row.completed { "row-checkbox checked" } else { "row-checkbox" }}
              onclick={toggle}
          >
              { if props.row.completed { "\u{2611}" } else { "\u{2610}" } }
          </span>
      }
    }
  };

  let editor = props
    .editing_text
    .clone()
    .map(|text| {
      let on_input = props
        .on_editor_input
        .clone();
      let oninput =
        move |event: yew::InputEvent| {
          if let Some(input) = event
            .target_dyn_into::<HtmlInputElement>()
          {
            on_input.emit((
              index,
              input.value()
            ));
          }
        };

      let on_commit = props
        .on_editor_commit
        .clone();
      let onkeydown =
        Callback::from(move |event: KeyboardEvent| {
          if event.key() != "Enter" {
            return;
          }
          if let Some(input) = event
            .target_dyn_into::<HtmlInputElement>()
          {
            on_commit.emit((
              index,
              input.value()
            ));
          }
        });

      let on_commit = props
        .on_editor_commit
        .clone();
      let onblur =
        Callback::from(move |event: FocusEvent| {
          if let Some(input) = event
            .target_dyn_into::<HtmlInputElement>()
          {
            on_commit.emit((
              index,
              input.value()
            ));
          }
        });

      html! {
          <input
              class="row-editor"
              value={text}
              oninput={oninput}
              onkeydown={onkeydown}
              onblur={onblur}
          />
      }
    });

  html! {
      <div class="checklist-row">
          { checkbox }
          {
              match editor {
                  Some(editor) => editor,
                  None => html! {
                      <span class="row-label" onclick={label_click}>
                          { props.row.text.clone() }
                      </span>
                  }
              }
          }
      </div>
  }
}
