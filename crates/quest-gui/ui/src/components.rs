mod add_bar;
mod checklist;
mod checklist_row;
mod menu_popup;
mod tab_button;
mod tab_strip;
mod title_entry;
mod window_chrome;
mod window_controls;

pub use add_bar::AddBar;
pub use checklist::Checklist;
pub use checklist_row::ChecklistRow;
pub use menu_popup::MenuPopup;
pub use tab_button::TabButton;
pub use tab_strip::TabStrip;
pub use title_entry::TitleEntry;
pub use window_chrome::WindowChrome;
pub use window_controls::WindowControls;
