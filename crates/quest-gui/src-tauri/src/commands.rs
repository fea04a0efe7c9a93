pub mod assets;
pub mod menus;
pub mod rows;
pub mod window;

pub use assets::asset_lookup;
pub use menus::{menu_invoke, menus_list};
pub use rows::{list_add, list_snapshot, row_begin_edit, row_commit_edit, row_edit_changed, row_toggle};
pub use window::{
    chrome_pressed, window_close, window_drag_end, window_drag_start, window_drag_to,
    window_minimize, window_toggle_maximize,
};
