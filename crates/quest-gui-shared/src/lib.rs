use serde::{
  Deserialize,
  Serialize
};

/// One checklist slot. Identity is
/// the fixed index; rows never move.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct RowDto {
  pub index:     usize,
  pub completed: bool,
  pub text:      String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct ListSnapshot {
  pub capacity:      usize,
  pub rows:          Vec<RowDto>,
  pub editing_index: Option<usize>
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct RowIndexArgs {
  pub index: usize
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct CommitEditArgs {
  pub index: usize,
  pub text:  String
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct AddItemArgs {
  pub text: String
}

/// Outcome of an add: either the
/// slot that took the text, or a
/// capacity rejection the frontend
/// must surface.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub enum AddOutcome {
  Placed { index: usize },
  Rejected,
  Ignored
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct ChromeHitArgs {
  pub x_ratio: f64
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub enum ChromeHitDto {
  Menu { group: String },
  Minimize,
  Maximize,
  Close,
  Nothing
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct DragStartArgs {
  pub x: i32,
  pub y: i32
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct DragToArgs {
  pub screen_x: i32,
  pub screen_y: i32
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct MenuEntryDto {
  pub label:     Option<String>,
  pub enabled:   bool,
  pub separator: bool
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct MenuGroupDto {
  pub group:   String,
  pub label:   String,
  pub entries: Vec<MenuEntryDto>
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct MenuInvokeArgs {
  pub group: String,
  pub label: String
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct AssetArgs {
  pub name: String
}

/// Asset bytes travel base64-free as
/// a plain byte vector; `None` means
/// absent and the frontend paints
/// the flat-color fallback.
#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct AssetDto {
  pub bytes: Option<Vec<u8>>
}
