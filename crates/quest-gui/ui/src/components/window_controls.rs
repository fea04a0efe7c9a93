use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct WindowControlsProps {
  pub on_window_minimize: Callback<()>,
  pub on_window_toggle_maximize:
    Callback<()>,
  pub on_window_close:   Callback<()>
}

fn control(
  class: &'static str,
  title: &'static str,
  glyph: &'static str,
  action: Callback<()>
) -> Html {
  let onclick =
    Callback::from(move |event: MouseEvent| {
      event.stop_propagation();
      action.emit(());
    });
  // keep the press off the bar's
  // mousedown hit test; the command
  // runs once, from the click
  let onmousedown =
    Callback::from(|event: MouseEvent| {
      event.stop_propagation();
    });
  html! {
      <button
          class={class}
          type="button"
          title={title}
          onmousedown={onmousedown}
          onclick={onclick}
      >
          { glyph }
      </button>
  }
}

#[function_component(WindowControls)]
pub fn window_controls(
  props: &WindowControlsProps
) -> Html {
  html! {
      <div class="window-controls">
          { control("window-btn", "Minimize", "-", props.on_window_minimize.clone()) }
          { control("window-btn", "Maximize/Restore", "\u{25a1}", props.on_window_toggle_maximize.clone()) }
          { control("window-btn danger", "Close", "X", props.on_window_close.clone()) }
      </div>
  }
}
