use quest_gui_shared::MenuGroupDto;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct MenuPopupProps {
  pub group:      MenuGroupDto,
  pub on_invoke:
    Callback<(String, String)>,
  pub on_dismiss: Callback<()>
}

/// Dropdown under a chrome tab.
/// Disabled entries render but take
/// no clicks.
#[function_component(MenuPopup)]
pub fn menu_popup(
  props: &MenuPopupProps
) -> Html {
  let on_dismiss =
    props.on_dismiss.clone();
  let backdrop_click =
    Callback::from(move |_: MouseEvent| {
      on_dismiss.emit(());
    });

  html! {
      <>
          <div class="menu-backdrop" onclick={backdrop_click}></div>
          <div class="menu-popup">
              {
                  for props.group.entries.iter().map(|entry| {
                      if entry.separator {
                          return html! { <div class="menu-separator"></div> };
                      }
                      let label = entry
                          .label
                          .clone()
                          .unwrap_or_default();
                      if !entry.enabled {
                          return html! {
                              <div class="menu-entry disabled">{ label }</div>
                          };
                      }
                      let on_invoke = props.on_invoke.clone();
                      let group = props.group.group.clone();
                      let invoke_label = label.clone();
                      html! {
                          <div
                              class="menu-entry"
                              onclick={Callback::from(move |_| {
                                  on_invoke.emit((group.clone(), invoke_label.clone()));
                              })}
                          >
                              { label }
                          </div>
                      }
                  })
              }
          </div>
      </>
  }
}
