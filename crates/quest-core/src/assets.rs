use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

/// Flat-color fallbacks when art is missing. Absence of an asset must
/// never fail the application.
pub const CHROME_FALLBACK_COLOR: &str = "#6a1b9a";
pub const PAGE_FALLBACK_COLOR: &str = "#e7cbff";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetName {
    TabBar,
    AppBackground,
    PageBackground,
    CheckboxUnchecked,
    CheckboxChecked,
    IconMinimize,
    IconMaximize,
    IconClose,
}

impl AssetName {
    pub const ALL: [AssetName; 8] = [
        AssetName::TabBar,
        AssetName::AppBackground,
        AssetName::PageBackground,
        AssetName::CheckboxUnchecked,
        AssetName::CheckboxChecked,
        AssetName::IconMinimize,
        AssetName::IconMaximize,
        AssetName::IconClose,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            AssetName::TabBar => "tabbar.png",
            AssetName::AppBackground => "app_background.png",
            AssetName::PageBackground => "page_background.png",
            AssetName::CheckboxUnchecked => "checkbox_unchecked.png",
            AssetName::CheckboxChecked => "checkbox_checked_purple.png",
            AssetName::IconMinimize => "minimize.png",
            AssetName::IconMaximize => "maximize.png",
            AssetName::IconClose => "close.png",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        AssetName::ALL
            .into_iter()
            .find(|asset| asset.file_name() == name || format!("{asset:?}") == name)
    }
}

/// Loads skin images by logical name and keeps them alive for the
/// application's lifetime. Both hits and misses are cached, so the disk
/// is touched at most once per asset.
#[derive(Debug)]
pub struct AssetProvider {
    assets_dir: PathBuf,
    cache: HashMap<AssetName, Option<Vec<u8>>>,
}

impl AssetProvider {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        let assets_dir = assets_dir.into();
        debug!(dir = %assets_dir.display(), "asset provider ready");
        Self {
            assets_dir,
            cache: HashMap::new(),
        }
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Bytes of the named asset, or `None` when the file is absent. The
    /// caller degrades to the flat-color fallback; missing art is not an
    /// error.
    pub fn load(&mut self, name: AssetName) -> Option<&[u8]> {
        let dir = &self.assets_dir;
        let bytes = self.cache.entry(name).or_insert_with(|| {
            let path = dir.join(name.file_name());
            match fs::read(&path) {
                Ok(bytes) => {
                    trace!(path = %path.display(), len = bytes.len(), "loaded asset");
                    Some(bytes)
                }
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "asset absent; using fallback");
                    None
                }
            }
        });
        bytes.as_deref()
    }
}
