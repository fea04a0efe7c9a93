use anyhow::Context;
use parking_lot::Mutex;
use quest_core::assets::{AssetName, AssetProvider};
use quest_core::config::{self, Config};
use quest_core::menu::{MenuEntry, MenuGroupId};
use quest_core::shell::{AppShell, Effect, InputEvent};
use quest_gui_shared::{ListSnapshot, MenuEntryDto, MenuGroupDto, RowDto};
use tracing::{debug, instrument};

/// All mutable UI state behind one lock. Tauri commands arrive on
/// multiple threads, but every store/chrome mutation goes through this
/// mutex, preserving the single-writer ordering the shell assumes.
pub struct AppState {
    shell: Mutex<AppShell>,
    assets: Mutex<AssetProvider>,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let cfg = Config::load(None).context("failed to load questrc")?;
        let assets_dir = config::resolve_assets_dir(&cfg);
        Ok(Self {
            shell: Mutex::new(AppShell::new(&cfg)),
            assets: Mutex::new(AssetProvider::new(assets_dir)),
        })
    }

    /// Feeds one event through the shell and returns its effects, in
    /// order.
    #[instrument(skip(self))]
    pub fn handle(&self, event: InputEvent) -> Vec<Effect> {
        let effects = self.shell.lock().handle(event);
        debug!(effects = effects.len(), "event handled");
        effects
    }

    pub fn snapshot(&self) -> ListSnapshot {
        let shell = self.shell.lock();
        let store = shell.store();
        ListSnapshot {
            capacity: store.capacity(),
            rows: store
                .rows()
                .iter()
                .enumerate()
                .map(|(index, row)| RowDto {
                    index,
                    completed: row.completed,
                    text: row.text.clone(),
                })
                .collect(),
            editing_index: store.editing_index(),
        }
    }

    pub fn menus(&self) -> Vec<MenuGroupDto> {
        let shell = self.shell.lock();
        shell
            .menus()
            .groups()
            .iter()
            .map(|group| MenuGroupDto {
                group: group.id.label().to_string(),
                label: group.id.label().to_string(),
                entries: group
                    .entries
                    .iter()
                    .map(|entry| match entry {
                        MenuEntry::Command(command) => MenuEntryDto {
                            label: Some(command.label.to_string()),
                            enabled: command.enabled,
                            separator: false,
                        },
                        MenuEntry::Separator => MenuEntryDto {
                            label: None,
                            enabled: false,
                            separator: true,
                        },
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn parse_group(&self, label: &str) -> Option<MenuGroupId> {
        MenuGroupId::from_label(label)
    }

    pub fn asset(&self, name: &str) -> Option<Vec<u8>> {
        let asset = AssetName::parse(name)?;
        self.assets.lock().load(asset).map(<[u8]>::to_vec)
    }
}
