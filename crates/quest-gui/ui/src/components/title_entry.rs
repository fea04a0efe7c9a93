use yew::{
  Html,
  function_component,
  html,
  use_state
};
use yew::TargetCast;
use web_sys::HtmlInputElement;

/// The big page title. Editable for
/// looks only; nothing stores it.
#[function_component(TitleEntry)]
pub fn title_entry() -> Html {
  let title = use_state(|| {
    "Check List Title".to_string()
  });

  let oninput = {
    let title = title.clone();
    move |event: yew::InputEvent| {
      if let Some(input) = event
        .target_dyn_into::<HtmlInputElement>()
      {
        title.set(input.value());
      }
    }
  };

  html! {
      <input
          class="page-title"
          value={(*title).clone()}
          oninput={oninput}
      />
  }
}
