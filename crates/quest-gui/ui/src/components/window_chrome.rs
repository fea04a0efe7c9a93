use wasm_bindgen::JsCast;
use web_sys::{
  Element,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::{
  TabStrip,
  WindowControls
};

#[derive(Properties, PartialEq)]
pub struct WindowChromeProps {
  /// Fired with the press position
  /// as a fraction of the bar width
  /// plus the raw offset for the
  /// drag anchor.
  pub on_bar_pressed:
    Callback<(f64, i32, i32)>,
  pub on_tab:            Callback<String>,
  pub on_window_minimize: Callback<()>,
  pub on_window_toggle_maximize:
    Callback<()>,
  pub on_window_close:   Callback<()>,
  pub background:        Option<String>
}

#[function_component(WindowChrome)]
pub fn window_chrome(
  props: &WindowChromeProps
) -> Html {
  let on_bar_pressed =
    props.on_bar_pressed.clone();
  let onmousedown =
    Callback::from(move |event: MouseEvent| {
      let Some(target) = event
        .current_target()
        .and_then(|t| {
          t.dyn_into::<Element>().ok()
        })
      else {
        return;
      };
      let rect =
        target.get_bounding_client_rect();
      let width = rect.width().max(1.0);
      let ratio = (f64::from(
        event.client_x()
      ) - rect.x())
        / width;
      on_bar_pressed.emit((
        ratio,
        event.offset_x(),
        event.offset_y()
      ));
    });

  let style = props
    .background
    .as_ref()
    .map(|url| {
      format!(
        "background-image:url({url});\
         background-size:100% 100%;"
      )
    })
    .unwrap_or_default();

  html! {
      <div class="window-chrome" style={style} onmousedown={onmousedown}>
          <TabStrip on_tab={props.on_tab.clone()} />
          <WindowControls
              on_window_minimize={props.on_window_minimize.clone()}
              on_window_toggle_maximize={props.on_window_toggle_maximize.clone()}
              on_window_close={props.on_window_close.clone()}
          />
      </div>
  }
}
