use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TabButton;

const TABS: [&str; 5] = [
  "File",
  "Settings",
  "Themes",
  "Tools",
  "XP"
];

#[derive(Properties, PartialEq)]
pub struct TabStripProps {
  pub on_tab: Callback<String>
}

#[function_component(TabStrip)]
pub fn tab_strip(
  props: &TabStripProps
) -> Html {
  html! {
      <div class="chrome-tabs">
          {
              for TABS.iter().map(|label| {
                  let on_tab = props.on_tab.clone();
                  let tab = label.to_string();
                  html! {
                      <TabButton
                          label={tab.clone()}
                          onclick={Callback::from(move |_| on_tab.emit(tab.clone()))}
                      />
                  }
              })
          }
      </div>
  }
}
