use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::store::{ChecklistStore, StoreError};

/// Layout constants for the canvas list, in the coordinate space of the
/// content area. Values match the skinned draft's hand-tuned positions.
#[derive(Debug, Clone, Copy)]
pub struct LayoutSpec {
    pub list_padx: i32,
    pub list_start_y: f64,
    pub row_height: f64,
    pub checkbox_size: i32,
    pub text_gap: i32,
    pub min_text_width: i32,
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self {
            list_padx: 24,
            list_start_y: 172.0,
            row_height: 35.6,
            checkbox_size: 24,
            text_gap: 14,
            min_text_width: 100,
        }
    }
}

/// Where one row's pieces sit after layout. `line_y` is the ruled line
/// the checkbox and text hang from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowGeometry {
    pub line_y: i32,
    pub checkbox_x: i32,
    pub checkbox_y: i32,
    pub text_x: i32,
    pub text_y: i32,
    pub editor_y: i32,
    pub text_width: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowRegion {
    Checkbox,
    Label,
}

/// Repaint instructions for the renderer. The view mutates the store and
/// tells the host exactly which visuals changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewEffect {
    UpdateIndicator { index: usize, completed: bool },
    UpdateLabel { index: usize, text: String },
    ShowEditor { index: usize, text: String },
    HideEditor { index: usize },
    ClearAddInput,
    AddRejected,
}

/// Projects store rows onto positioned visuals and translates row-local
/// pointer events into store calls. Owns no row data of its own.
#[derive(Debug)]
pub struct ChecklistView {
    spec: LayoutSpec,
    geometry: Vec<RowGeometry>,
}

impl ChecklistView {
    pub fn new(spec: LayoutSpec, rows: usize) -> Self {
        let mut view = Self {
            spec,
            geometry: Vec::with_capacity(rows),
        };
        // reference design width; a real resize event follows immediately
        view.relayout(rows, crate::chrome::REFERENCE_WIDTH as i32);
        view
    }

    pub fn geometry(&self) -> &[RowGeometry] {
        &self.geometry
    }

    /// Recomputes every row position for the given viewport width.
    /// Idempotent; must be re-run whenever the viewport resizes.
    #[instrument(skip(self))]
    pub fn layout(&mut self, viewport_width: i32) -> &[RowGeometry] {
        let rows = self.geometry.len();
        self.relayout(rows, viewport_width);
        debug!(rows, viewport_width, "laid out checklist");
        &self.geometry
    }

    fn relayout(&mut self, rows: usize, viewport_width: i32) {
        let spec = self.spec;
        let text_x = spec.list_padx + spec.checkbox_size + spec.text_gap;
        let text_width = (viewport_width - text_x - spec.list_padx).max(spec.min_text_width);

        self.geometry.clear();
        for index in 0..rows {
            let line_y = (spec.list_start_y + index as f64 * spec.row_height).round() as i32;
            self.geometry.push(RowGeometry {
                line_y,
                checkbox_x: spec.list_padx,
                checkbox_y: line_y - spec.checkbox_size / 2,
                text_x,
                text_y: line_y - 10,
                editor_y: line_y - 12,
                text_width,
            });
        }
    }

    /// Checkbox region toggles; label region opens the inline editor
    /// seeded with the row's current text.
    pub fn on_row_primary_click(
        &self,
        store: &mut ChecklistStore,
        index: usize,
        region: RowRegion,
    ) -> Result<ViewEffect, StoreError> {
        match region {
            RowRegion::Checkbox => {
                let completed = store.toggle(index)?;
                Ok(ViewEffect::UpdateIndicator { index, completed })
            }
            RowRegion::Label => {
                let text = store.begin_edit(index)?;
                Ok(ViewEffect::ShowEditor { index, text })
            }
        }
    }

    /// Confirm-on-enter and confirm-on-focus-loss are the same commit
    /// path; both hide the editor and repaint the label.
    pub fn on_editor_commit(
        &self,
        store: &mut ChecklistStore,
        index: usize,
        text: &str,
    ) -> Vec<ViewEffect> {
        store.commit_edit(text);
        let label = store
            .rows()
            .get(index)
            .map(|row| row.text.clone())
            .unwrap_or_default();
        vec![
            ViewEffect::HideEditor { index },
            ViewEffect::UpdateLabel { index, text: label },
        ]
    }

    /// Add-bar submission. Blank input is ignored; a full list surfaces
    /// the rejection instead of silently dropping the text.
    pub fn on_add(&self, store: &mut ChecklistStore, text: &str) -> Vec<ViewEffect> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return vec![];
        }
        match store.add(trimmed) {
            Ok(index) => vec![
                ViewEffect::UpdateLabel {
                    index,
                    text: trimmed.to_string(),
                },
                ViewEffect::ClearAddInput,
            ],
            Err(StoreError::CapacityExceeded) => vec![ViewEffect::AddRejected],
            Err(err) => {
                debug!(error = %err, "add failed");
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChecklistView, LayoutSpec, RowRegion, ViewEffect};
    use crate::store::ChecklistStore;

    fn view(rows: usize) -> ChecklistView {
        ChecklistView::new(LayoutSpec::default(), rows)
    }

    #[test]
    fn layout_positions_rows_on_ruled_lines() {
        let mut view = view(20);
        let geometry = view.layout(600);

        // line_y = round(172 + i * 35.6)
        assert_eq!(geometry[0].line_y, 172);
        assert_eq!(geometry[1].line_y, 208);
        assert_eq!(geometry[5].line_y, 350);

        let row = &geometry[0];
        assert_eq!(row.checkbox_x, 24);
        assert_eq!(row.checkbox_y, 172 - 12);
        assert_eq!(row.text_x, 24 + 24 + 14);
        assert_eq!(row.text_width, 600 - row.text_x - 24);
    }

    #[test]
    fn layout_is_idempotent_and_clamps_text_width() {
        let mut view = view(4);
        view.layout(180);
        let narrow = view.geometry().to_vec();
        view.layout(180);
        assert_eq!(view.geometry(), &narrow[..]);

        // 180 - 62 - 24 < 100, so the editor width clamps
        assert_eq!(narrow[0].text_width, 100);
    }

    #[test]
    fn checkbox_click_toggles_and_label_click_edits() {
        let view = view(3);
        let mut store = ChecklistStore::new(3);
        store.add("buy milk").expect("add");

        let effect = view
            .on_row_primary_click(&mut store, 0, RowRegion::Checkbox)
            .expect("toggle");
        assert_eq!(
            effect,
            ViewEffect::UpdateIndicator {
                index: 0,
                completed: true
            }
        );

        let effect = view
            .on_row_primary_click(&mut store, 0, RowRegion::Label)
            .expect("edit");
        assert_eq!(
            effect,
            ViewEffect::ShowEditor {
                index: 0,
                text: "buy milk".to_string()
            }
        );
        assert_eq!(store.editing_index(), Some(0));
    }

    #[test]
    fn commit_hides_editor_and_repaints_label() {
        let view = view(3);
        let mut store = ChecklistStore::new(3);
        store.begin_edit(1).expect("begin");

        let effects = view.on_editor_commit(&mut store, 1, " walk dog ");
        assert_eq!(
            effects,
            vec![
                ViewEffect::HideEditor { index: 1 },
                ViewEffect::UpdateLabel {
                    index: 1,
                    text: "walk dog".to_string()
                },
            ]
        );
        assert_eq!(store.editing_index(), None);
    }

    #[test]
    fn add_fills_slots_then_rejects_when_full() {
        let view = view(2);
        let mut store = ChecklistStore::new(2);

        assert!(view.on_add(&mut store, "   ").is_empty());

        let effects = view.on_add(&mut store, "first");
        assert!(effects.contains(&ViewEffect::ClearAddInput));

        view.on_add(&mut store, "second");
        let effects = view.on_add(&mut store, "third");
        assert_eq!(effects, vec![ViewEffect::AddRejected]);
        assert_eq!(store.rows()[0].text, "first");
        assert_eq!(store.rows()[1].text, "second");
    }
}
