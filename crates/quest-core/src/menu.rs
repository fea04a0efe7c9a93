use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuGroupId {
    File,
    Settings,
    Themes,
    Tools,
    Xp,
}

impl MenuGroupId {
    pub const ALL: [MenuGroupId; 5] = [
        MenuGroupId::File,
        MenuGroupId::Settings,
        MenuGroupId::Themes,
        MenuGroupId::Tools,
        MenuGroupId::Xp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuGroupId::File => "File",
            MenuGroupId::Settings => "Settings",
            MenuGroupId::Themes => "Themes",
            MenuGroupId::Tools => "Tools",
            MenuGroupId::Xp => "XP",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        MenuGroupId::ALL.into_iter().find(|id| id.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    /// Placeholder command: logs a notice and changes nothing.
    NotImplemented,
    /// Reset every completed row to empty and unchecked.
    ClearCompleted,
    /// Request window close / process exit.
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCommand {
    pub label: &'static str,
    pub enabled: bool,
    pub action: MenuAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Command(MenuCommand),
    Separator,
}

impl MenuEntry {
    fn todo(label: &'static str) -> Self {
        MenuEntry::Command(MenuCommand {
            label,
            enabled: true,
            action: MenuAction::NotImplemented,
        })
    }

    fn disabled(label: &'static str) -> Self {
        MenuEntry::Command(MenuCommand {
            label,
            enabled: false,
            action: MenuAction::NotImplemented,
        })
    }
}

#[derive(Debug, Clone)]
pub struct MenuGroup {
    pub id: MenuGroupId,
    pub entries: Vec<MenuEntry>,
}

/// The five dropdown menus behind the chrome tabs. Every command except
/// Exit and Clear Completed is an explicit placeholder in current scope;
/// disabled entries must render non-interactive.
#[derive(Debug, Clone)]
pub struct MenuRegistry {
    groups: Vec<MenuGroup>,
}

impl MenuRegistry {
    pub fn standard() -> Self {
        let file = MenuGroup {
            id: MenuGroupId::File,
            entries: vec![
                MenuEntry::todo("New List"),
                MenuEntry::todo("Open..."),
                MenuEntry::todo("Save"),
                MenuEntry::todo("Save As..."),
                MenuEntry::Separator,
                MenuEntry::todo("Export..."),
                MenuEntry::todo("Import..."),
                MenuEntry::Separator,
                MenuEntry::todo("Pin to Desktop"),
                MenuEntry::todo("Reset Template"),
                MenuEntry::Separator,
                MenuEntry::Command(MenuCommand {
                    label: "Exit",
                    enabled: true,
                    action: MenuAction::Exit,
                }),
            ],
        };

        let settings = MenuGroup {
            id: MenuGroupId::Settings,
            entries: vec![
                MenuEntry::todo("Title Font..."),
                MenuEntry::todo("Title Color..."),
                MenuEntry::Separator,
                MenuEntry::todo("Item Font..."),
                MenuEntry::todo("Item Color..."),
                MenuEntry::Separator,
                MenuEntry::todo("Bullet Style..."),
            ],
        };

        let themes = MenuGroup {
            id: MenuGroupId::Themes,
            entries: vec![
                MenuEntry::todo("Default"),
                MenuEntry::todo("Goth Girly"),
                MenuEntry::todo("Pastel Gamer"),
                MenuEntry::todo("Custom..."),
            ],
        };

        let tools = MenuGroup {
            id: MenuGroupId::Tools,
            entries: vec![
                MenuEntry::todo("Task Timer"),
                MenuEntry::Command(MenuCommand {
                    label: "Clear Completed",
                    enabled: true,
                    action: MenuAction::ClearCompleted,
                }),
            ],
        };

        let xp = MenuGroup {
            id: MenuGroupId::Xp,
            entries: vec![
                MenuEntry::todo("My Stickers"),
                MenuEntry::todo("Progress"),
                MenuEntry::Separator,
                MenuEntry::disabled("Watch Ad for Sticker (coming soon)"),
            ],
        };

        Self {
            groups: vec![file, settings, themes, tools, xp],
        }
    }

    pub fn groups(&self) -> &[MenuGroup] {
        &self.groups
    }

    pub fn group(&self, id: MenuGroupId) -> &MenuGroup {
        self.groups
            .iter()
            .find(|group| group.id == id)
            .unwrap_or_else(|| unreachable!("all five groups are always registered"))
    }

    /// Resolves a command by group and label. Unknown labels and disabled
    /// entries are reported and yield nothing; placeholder commands log
    /// the not-implemented notice here so every caller gets it.
    pub fn invoke(&self, id: MenuGroupId, label: &str) -> Option<MenuAction> {
        for entry in &self.group(id).entries {
            let MenuEntry::Command(command) = entry else {
                continue;
            };
            if command.label != label {
                continue;
            }
            if !command.enabled {
                info!(group = id.label(), label, "ignoring disabled menu entry");
                return None;
            }
            if command.action == MenuAction::NotImplemented {
                info!(group = id.label(), label, "not implemented yet");
            }
            return Some(command.action);
        }

        warn!(group = id.label(), label, "unknown menu command");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuAction, MenuEntry, MenuGroupId, MenuRegistry};

    #[test]
    fn all_five_groups_are_registered() {
        let registry = MenuRegistry::standard();
        for id in MenuGroupId::ALL {
            assert!(!registry.group(id).entries.is_empty());
        }
    }

    #[test]
    fn real_commands_are_exit_and_clear_completed() {
        let registry = MenuRegistry::standard();
        let mut real = Vec::new();
        for group in registry.groups() {
            for entry in &group.entries {
                if let MenuEntry::Command(command) = entry
                    && command.action != MenuAction::NotImplemented
                {
                    real.push((group.id, command.label, command.action));
                }
            }
        }
        assert_eq!(
            real,
            vec![
                (MenuGroupId::File, "Exit", MenuAction::Exit),
                (
                    MenuGroupId::Tools,
                    "Clear Completed",
                    MenuAction::ClearCompleted
                ),
            ]
        );
    }

    #[test]
    fn invoke_resolves_placeholders_and_real_commands() {
        let registry = MenuRegistry::standard();
        assert_eq!(
            registry.invoke(MenuGroupId::Tools, "Task Timer"),
            Some(MenuAction::NotImplemented)
        );
        assert_eq!(
            registry.invoke(MenuGroupId::Tools, "Clear Completed"),
            Some(MenuAction::ClearCompleted)
        );
        assert_eq!(
            registry.invoke(MenuGroupId::File, "Exit"),
            Some(MenuAction::Exit)
        );
    }

    #[test]
    fn disabled_and_unknown_entries_yield_nothing() {
        let registry = MenuRegistry::standard();
        assert_eq!(
            registry.invoke(MenuGroupId::Xp, "Watch Ad for Sticker (coming soon)"),
            None
        );
        assert_eq!(registry.invoke(MenuGroupId::Themes, "Neon"), None);
    }
}
