use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TabButtonProps {
  pub label:   String,
  pub onclick: Callback<MouseEvent>
}

#[function_component(TabButton)]
pub fn tab_button(
  props: &TabButtonProps
) -> Html {
  let onclick =
    props.onclick.clone();
  let onclick =
    Callback::from(move |event: MouseEvent| {
      event.stop_propagation();
      onclick.emit(event);
    });
  // the bar hit-tests on mousedown;
  // a press on the tab itself must
  // not reach it
  let onmousedown =
    Callback::from(|event: MouseEvent| {
      event.stop_propagation();
    });

  html! {
      <button
          class="chrome-tab"
          type="button"
          onmousedown={onmousedown}
          onclick={onclick}
      >
          { props.label.clone() }
      </button>
  }
}
