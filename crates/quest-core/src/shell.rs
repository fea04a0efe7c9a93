use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::chrome::{
    ChromeControl, Geometry, MaximizeTransition, Point, WindowChrome, hit_test,
};
use crate::config::Config;
use crate::menu::{MenuAction, MenuGroupId, MenuRegistry};
use crate::store::ChecklistStore;
use crate::view::{ChecklistView, LayoutSpec, RowRegion, ViewEffect};

/// Everything the host can feed into the shell. Events are handled
/// strictly in arrival order on one thread; there is no other mutation
/// path into the store or the chrome state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    ChromePressed { x_ratio: f64 },
    ChromeDragStarted { x: i32, y: i32 },
    PointerDragged { screen_x: i32, screen_y: i32 },
    DragEnded,
    WindowMoved { x: i32, y: i32 },
    Resized { width: u32, height: u32 },
    RowClicked { index: usize, region: RowRegion },
    EditorChanged { index: usize, text: String },
    EditorConfirmed { index: usize, text: String },
    EditorBlurred { index: usize, text: String },
    AddSubmitted { text: String },
    MenuInvoked { group: MenuGroupId, label: String },
    // the widget-based draft wires the window buttons directly instead
    // of going through the chrome bar's hit bands
    MinimizeRequested,
    MaximizeToggled,
    CloseRequested,
}

/// What the host must do in response. Window-level effects are requests
/// to the OS shell; view effects name the visuals to repaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    MoveWindow { x: i32, y: i32 },
    Minimize,
    Maximize,
    Restore { geometry: Option<Geometry> },
    CloseWindow,
    OpenMenu { group: MenuGroupId },
    Relayout,
    View(ViewEffect),
}

/// Single top-level controller owning all mutable UI state: the row
/// store, the chrome state machine, the layout view and the menus. The
/// host constructs one and funnels every input event through `handle`.
#[derive(Debug)]
pub struct AppShell {
    store: ChecklistStore,
    chrome: WindowChrome,
    view: ChecklistView,
    menus: MenuRegistry,
    geometry: Geometry,
}

impl AppShell {
    pub fn new(cfg: &Config) -> Self {
        let capacity = cfg.list_capacity();
        let geometry = Geometry {
            x: 0,
            y: 0,
            width: cfg.get_u32("window.width", 600),
            height: cfg.get_u32("window.height", 800),
        };
        debug!(capacity, ?geometry, "shell constructed");
        Self {
            store: ChecklistStore::new(capacity),
            chrome: WindowChrome::new(),
            view: ChecklistView::new(LayoutSpec::default(), capacity),
            menus: MenuRegistry::standard(),
            geometry,
        }
    }

    pub fn store(&self) -> &ChecklistStore {
        &self.store
    }

    pub fn chrome(&self) -> &WindowChrome {
        &self.chrome
    }

    pub fn view(&self) -> &ChecklistView {
        &self.view
    }

    pub fn menus(&self) -> &MenuRegistry {
        &self.menus
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[instrument(skip(self))]
    pub fn handle(&mut self, event: InputEvent) -> Vec<Effect> {
        match event {
            InputEvent::ChromePressed { x_ratio } => self.on_chrome_pressed(x_ratio),
            InputEvent::ChromeDragStarted { x, y } => {
                self.chrome.start_drag(Point { x, y });
                vec![]
            }
            InputEvent::PointerDragged { screen_x, screen_y } => {
                match self.chrome.drag_to(Point {
                    x: screen_x,
                    y: screen_y,
                }) {
                    Some(origin) => {
                        self.geometry.x = origin.x;
                        self.geometry.y = origin.y;
                        vec![Effect::MoveWindow {
                            x: origin.x,
                            y: origin.y,
                        }]
                    }
                    None => vec![],
                }
            }
            InputEvent::DragEnded => {
                self.chrome.end_drag();
                vec![]
            }
            InputEvent::WindowMoved { x, y } => {
                self.geometry.x = x;
                self.geometry.y = y;
                vec![]
            }
            InputEvent::Resized { width, height } => {
                self.geometry.width = width;
                self.geometry.height = height;
                // relayout before the next paint, always
                self.view.layout(width as i32);
                vec![Effect::Relayout]
            }
            InputEvent::RowClicked { index, region } => {
                match self.view.on_row_primary_click(&mut self.store, index, region) {
                    Ok(effect) => vec![Effect::View(effect)],
                    Err(err) => {
                        // indices come from laid-out rows, so this is a
                        // host bug rather than user input
                        warn!(error = %err, "row event rejected");
                        vec![]
                    }
                }
            }
            InputEvent::EditorChanged { index: _, text } => {
                self.store.set_draft(&text);
                vec![]
            }
            InputEvent::EditorConfirmed { index, text }
            | InputEvent::EditorBlurred { index, text } => self
                .view
                .on_editor_commit(&mut self.store, index, &text)
                .into_iter()
                .map(Effect::View)
                .collect(),
            InputEvent::AddSubmitted { text } => self
                .view
                .on_add(&mut self.store, &text)
                .into_iter()
                .map(Effect::View)
                .collect(),
            InputEvent::MenuInvoked { group, label } => {
                match self.menus.invoke(group, &label) {
                    Some(MenuAction::Exit) => vec![Effect::CloseWindow],
                    Some(MenuAction::ClearCompleted) => self.on_clear_completed(),
                    Some(MenuAction::NotImplemented) | None => vec![],
                }
            }
            InputEvent::MinimizeRequested => vec![Effect::Minimize],
            InputEvent::MaximizeToggled => self.on_maximize_toggled(),
            InputEvent::CloseRequested => vec![Effect::CloseWindow],
        }
    }

    fn on_chrome_pressed(&mut self, x_ratio: f64) -> Vec<Effect> {
        match hit_test(x_ratio) {
            Some(ChromeControl::Menu(group)) => vec![Effect::OpenMenu { group }],
            Some(ChromeControl::Minimize) => vec![Effect::Minimize],
            Some(ChromeControl::Maximize) => self.on_maximize_toggled(),
            Some(ChromeControl::Close) => vec![Effect::CloseWindow],
            None => vec![],
        }
    }

    fn on_clear_completed(&mut self) -> Vec<Effect> {
        let cleared: Vec<usize> = self
            .store
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| row.completed)
            .map(|(index, _)| index)
            .collect();
        self.store.clear_completed();
        cleared
            .into_iter()
            .flat_map(|index| {
                [
                    Effect::View(ViewEffect::UpdateIndicator {
                        index,
                        completed: false,
                    }),
                    Effect::View(ViewEffect::UpdateLabel {
                        index,
                        text: String::new(),
                    }),
                ]
            })
            .collect()
    }

    fn on_maximize_toggled(&mut self) -> Vec<Effect> {
        match self.chrome.toggle_maximize(self.geometry) {
            MaximizeTransition::Maximize => vec![Effect::Maximize],
            MaximizeTransition::Restore(geometry) => {
                self.geometry = geometry;
                vec![Effect::Restore {
                    geometry: Some(geometry),
                }]
            }
            MaximizeTransition::RestoreUnsaved => vec![Effect::Restore { geometry: None }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppShell, Effect, InputEvent};
    use crate::config::Config;
    use crate::view::{RowRegion, ViewEffect};

    fn shell() -> AppShell {
        let dir = tempfile::tempdir().expect("tempdir");
        let rc = dir.path().join("questrc");
        std::fs::write(&rc, "list.capacity = 3\n").expect("write rc");
        let cfg = Config::load(Some(&rc)).expect("load config");
        AppShell::new(&cfg)
    }

    #[test]
    fn chrome_press_routes_by_band() {
        let mut shell = shell();

        assert!(matches!(
            shell.handle(InputEvent::ChromePressed { x_ratio: 0.05 })[..],
            [Effect::OpenMenu { .. }]
        ));
        assert_eq!(
            shell.handle(InputEvent::ChromePressed { x_ratio: 0.87 }),
            vec![Effect::Minimize]
        );
        assert_eq!(
            shell.handle(InputEvent::ChromePressed { x_ratio: 0.96 }),
            vec![Effect::CloseWindow]
        );
        assert!(
            shell
                .handle(InputEvent::ChromePressed { x_ratio: 0.84 })
                .is_empty()
        );
    }

    #[test]
    fn maximize_round_trip_restores_placement() {
        let mut shell = shell();
        shell.handle(InputEvent::WindowMoved { x: 40, y: 30 });
        let before = shell.geometry();

        assert_eq!(
            shell.handle(InputEvent::ChromePressed { x_ratio: 0.92 }),
            vec![Effect::Maximize]
        );
        // the host reports the maximized placement back
        shell.handle(InputEvent::WindowMoved { x: 0, y: 0 });
        shell.handle(InputEvent::Resized {
            width: 1920,
            height: 1080,
        });

        assert_eq!(
            shell.handle(InputEvent::ChromePressed { x_ratio: 0.92 }),
            vec![Effect::Restore {
                geometry: Some(before)
            }]
        );
        assert_eq!(shell.geometry(), before);
    }

    #[test]
    fn dragging_moves_the_window_but_not_while_maximized() {
        let mut shell = shell();
        shell.handle(InputEvent::ChromeDragStarted { x: 10, y: 5 });
        assert_eq!(
            shell.handle(InputEvent::PointerDragged {
                screen_x: 200,
                screen_y: 100
            }),
            vec![Effect::MoveWindow { x: 190, y: 95 }]
        );

        shell.handle(InputEvent::ChromePressed { x_ratio: 0.92 });
        assert!(
            shell
                .handle(InputEvent::PointerDragged {
                    screen_x: 300,
                    screen_y: 300
                })
                .is_empty()
        );
    }

    #[test]
    fn resize_relayouts_before_paint() {
        let mut shell = shell();
        let effects = shell.handle(InputEvent::Resized {
            width: 900,
            height: 800,
        });
        assert_eq!(effects, vec![Effect::Relayout]);
        assert_eq!(shell.view().geometry()[0].text_width, 900 - 62 - 24);
    }

    #[test]
    fn exit_closes_and_placeholders_do_nothing() {
        let mut shell = shell();
        assert_eq!(
            shell.handle(InputEvent::MenuInvoked {
                group: crate::menu::MenuGroupId::File,
                label: "Exit".to_string()
            }),
            vec![Effect::CloseWindow]
        );
        assert!(
            shell
                .handle(InputEvent::MenuInvoked {
                    group: crate::menu::MenuGroupId::Tools,
                    label: "Task Timer".to_string()
                })
                .is_empty()
        );
    }

    #[test]
    fn clear_completed_menu_resets_rows() {
        let mut shell = shell();
        shell.handle(InputEvent::AddSubmitted {
            text: "buy milk".to_string(),
        });
        shell.handle(InputEvent::AddSubmitted {
            text: "walk dog".to_string(),
        });
        shell.handle(InputEvent::RowClicked {
            index: 0,
            region: RowRegion::Checkbox,
        });

        let effects = shell.handle(InputEvent::MenuInvoked {
            group: crate::menu::MenuGroupId::Tools,
            label: "Clear Completed".to_string(),
        });
        assert_eq!(
            effects,
            vec![
                Effect::View(ViewEffect::UpdateIndicator {
                    index: 0,
                    completed: false
                }),
                Effect::View(ViewEffect::UpdateLabel {
                    index: 0,
                    text: String::new()
                }),
            ]
        );
        assert!(shell.store().rows()[0].is_empty());
        assert_eq!(shell.store().rows()[1].text, "walk dog");
    }

    #[test]
    fn menu_band_press_does_not_block_a_drag() {
        let mut shell = shell();
        // the press opens a menu and anchors a drag at the same time;
        // the host reports both events
        assert!(matches!(
            shell.handle(InputEvent::ChromePressed { x_ratio: 0.05 })[..],
            [Effect::OpenMenu { .. }]
        ));
        shell.handle(InputEvent::ChromeDragStarted { x: 8, y: 20 });
        assert_eq!(
            shell.handle(InputEvent::PointerDragged {
                screen_x: 100,
                screen_y: 90
            }),
            vec![Effect::MoveWindow { x: 92, y: 70 }]
        );
    }

    #[test]
    fn editor_confirm_and_blur_share_the_commit_path() {
        let mut shell = shell();
        shell.handle(InputEvent::AddSubmitted {
            text: "buy milk".to_string(),
        });

        shell.handle(InputEvent::RowClicked {
            index: 0,
            region: RowRegion::Label,
        });
        let confirmed = shell.handle(InputEvent::EditorConfirmed {
            index: 0,
            text: "buy oat milk".to_string(),
        });
        assert!(
            confirmed.contains(&Effect::View(ViewEffect::UpdateLabel {
                index: 0,
                text: "buy oat milk".to_string()
            }))
        );

        shell.handle(InputEvent::RowClicked {
            index: 0,
            region: RowRegion::Label,
        });
        let blurred = shell.handle(InputEvent::EditorBlurred {
            index: 0,
            text: "buy oat milk".to_string(),
        });
        assert_eq!(confirmed, blurred);
        assert_eq!(shell.store().editing_index(), None);
    }
}
