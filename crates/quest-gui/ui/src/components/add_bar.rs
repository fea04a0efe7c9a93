use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  KeyboardEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct AddBarProps {
  pub value:         String,
  /// Set when the last add was
  /// rejected because every slot is
  /// taken.
  pub list_full:     bool,
  pub on_input:      Callback<String>,
  pub on_submit:     Callback<()>
}

#[function_component(AddBar)]
pub fn add_bar(
  props: &AddBarProps
) -> Html {
  let on_input =
    props.on_input.clone();
  let oninput =
    move |event: yew::InputEvent| {
      if let Some(input) = event
        .target_dyn_into::<HtmlInputElement>()
      {
        on_input.emit(input.value());
      }
    };

  let on_submit =
    props.on_submit.clone();
  let onkeydown =
    Callback::from(move |event: KeyboardEvent| {
      if event.key() == "Enter" {
        on_submit.emit(());
      }
    });

  let on_submit_click =
    props.on_submit.clone();

  html! {
      <div class="add-bar">
          <input
              class="add-input"
              placeholder="Add an item..."
              value={props.value.clone()}
              oninput={oninput}
              onkeydown={onkeydown}
          />
          <button
              class="add-btn"
              type="button"
              onclick={Callback::from(move |_| on_submit_click.emit(()))}
          >
              { "Add" }
          </button>
          {
              if props.list_full {
                  html! { <span class="add-notice">{ "List is full" }</span> }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
