use std::collections::HashMap;
use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  anyhow
};
use tracing::{
  debug,
  info,
  trace,
  warn
};

/// Key=value rc file for the shell:
/// row capacity, window geometry and
/// the skin directory. Loaded from
/// `$QUESTRC` or `~/.questrc`;
/// missing file means defaults.
#[derive(Debug, Clone)]
pub struct Config {
  map: HashMap<String, String>,
  pub loaded_file: Option<PathBuf>
}

impl Config {
  #[tracing::instrument(skip(
    questrc_override
  ))]
  pub fn load(
    questrc_override: Option<&Path>
  ) -> anyhow::Result<Self> {
    let mut cfg = Config {
      map:         defaults(),
      loaded_file: None
    };

    let questrc = resolve_questrc_path(
      questrc_override
    )?;
    if let Some(path) = questrc {
      info!(questrc = %path.display(), "loading questrc");
      cfg.load_file(&path)?;
    } else {
      debug!(
        "no questrc found; using \
         defaults"
      );
    }

    Ok(cfg)
  }

  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (k, v) in overrides {
      debug!(key = %k, value = %v, "applying override");
      self.map.insert(k, v);
    }
  }

  pub fn get(
    &self,
    key: &str
  ) -> Option<String> {
    self.map.get(key).cloned()
  }

  /// Numeric getter; an unparsable
  /// value falls back to the built-in
  /// default with a warning instead
  /// of failing startup.
  pub fn get_usize(
    &self,
    key: &str,
    fallback: usize
  ) -> usize {
    match self.map.get(key) {
      | None => fallback,
      | Some(raw) => {
        match raw.trim().parse() {
          | Ok(value) => value,
          | Err(_) => {
            warn!(
              key,
              value = %raw,
              fallback,
              "invalid numeric \
               setting; using \
               fallback"
            );
            fallback
          }
        }
      }
    }
  }

  pub fn get_u32(
    &self,
    key: &str,
    fallback: u32
  ) -> u32 {
    match self.map.get(key) {
      | None => fallback,
      | Some(raw) => {
        match raw.trim().parse() {
          | Ok(value) => value,
          | Err(_) => {
            warn!(
              key,
              value = %raw,
              fallback,
              "invalid numeric \
               setting; using \
               fallback"
            );
            fallback
          }
        }
      }
    }
  }

  pub fn list_capacity(
    &self
  ) -> usize {
    self
      .get_usize("list.capacity", 20)
  }

  #[tracing::instrument(skip(self))]
  fn load_file(
    &mut self,
    path: &Path
  ) -> anyhow::Result<()> {
    let path = expand_tilde(path);
    let text =
      fs::read_to_string(&path)
        .with_context(|| {
          format!(
            "failed to read {}",
            path.display()
          )
        })?;

    self.loaded_file =
      Some(path.clone());

    for (line_num, raw_line) in
      text.lines().enumerate()
    {
      let mut line = raw_line.trim();
      if line.is_empty()
        || line.starts_with('#')
      {
        continue;
      }

      if let Some((before, _)) =
        line.split_once('#')
      {
        line = before.trim();
      }
      if line.is_empty() {
        continue;
      }

      let (k, v) = line
        .split_once('=')
        .ok_or_else(|| {
          anyhow!(
            "invalid config line \
             {}:{}: {}",
            path.display(),
            line_num + 1,
            raw_line
          )
        })?;

      let key = k.trim().to_string();
      let value = v.trim().to_string();
      trace!(key = %key, value = %value, "loaded config key");
      self.map.insert(key, value);
    }

    Ok(())
  }
}

fn defaults()
-> HashMap<String, String> {
  let pairs = [
    ("list.capacity", "20"),
    ("window.width", "600"),
    ("window.height", "800"),
    ("window.min_width", "600"),
    ("window.min_height", "800"),
    ("chrome.height", "60"),
    ("assets.location", "assets")
  ];
  pairs
    .into_iter()
    .map(|(k, v)| {
      (k.to_string(), v.to_string())
    })
    .collect()
}

/// Directory the skin images live
/// in, relative paths resolved from
/// the working directory.
pub fn resolve_assets_dir(
  cfg: &Config
) -> PathBuf {
  let raw = cfg
    .get("assets.location")
    .unwrap_or_else(|| {
      "assets".to_string()
    });
  expand_tilde(Path::new(&raw))
}

fn resolve_questrc_path(
  override_path: Option<&Path>
) -> anyhow::Result<Option<PathBuf>> {
  if let Some(path) = override_path {
    return Ok(Some(path.to_path_buf()));
  }

  if let Ok(questrc_env) =
    std::env::var("QUESTRC")
  {
    if questrc_env == "/dev/null" {
      return Ok(None);
    }
    return Ok(Some(PathBuf::from(
      questrc_env
    )));
  }

  let home = dirs::home_dir()
    .ok_or_else(|| {
      anyhow!(
        "cannot determine home \
         directory"
      )
    })?;
  let candidate =
    home.join(".questrc");
  if candidate.exists() {
    return Ok(Some(candidate));
  }

  Ok(None)
}

fn expand_tilde(
  path: &Path
) -> PathBuf {
  let text = path.to_string_lossy();
  if let Some(rest) =
    text.strip_prefix("~/")
    && let Some(home) = dirs::home_dir()
  {
    return home.join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::{
    Config,
    resolve_assets_dir
  };

  #[test]
  fn defaults_cover_the_shell() {
    let cfg = Config::load(Some(
      std::path::Path::new(
        "/nonexistent/questrc"
      )
    ));
    // an explicit override that does
    // not exist is an error
    assert!(cfg.is_err());

    let dir =
      tempdir().expect("tempdir");
    let rc = dir.path().join("rc");
    fs::write(&rc, "")
      .expect("write rc");
    let cfg = Config::load(Some(&rc))
      .expect("load");
    assert_eq!(
      cfg.list_capacity(),
      20
    );
    assert_eq!(
      cfg.get_u32(
        "window.width",
        0
      ),
      600
    );
  }

  #[test]
  fn rc_file_overrides_defaults() {
    let dir =
      tempdir().expect("tempdir");
    let rc =
      dir.path().join("questrc");
    fs::write(
      &rc,
      "# checklist quest rc\n\
       list.capacity = 12\n\
       assets.location = skins/\
       pastel # trailing comment\n"
    )
    .expect("write rc");

    let cfg = Config::load(Some(&rc))
      .expect("load");
    assert_eq!(
      cfg.list_capacity(),
      12
    );
    assert_eq!(
      resolve_assets_dir(&cfg),
      std::path::PathBuf::from(
        "skins/pastel"
      )
    );
  }

  #[test]
  fn invalid_numbers_fall_back() {
    let dir =
      tempdir().expect("tempdir");
    let rc =
      dir.path().join("questrc");
    fs::write(
      &rc,
      "list.capacity = a lot\n"
    )
    .expect("write rc");

    let cfg = Config::load(Some(&rc))
      .expect("load");
    assert_eq!(
      cfg.list_capacity(),
      20
    );
  }

  #[test]
  fn overrides_win_over_file() {
    let dir =
      tempdir().expect("tempdir");
    let rc =
      dir.path().join("questrc");
    fs::write(
      &rc,
      "window.height = 720\n"
    )
    .expect("write rc");

    let mut cfg =
      Config::load(Some(&rc))
        .expect("load");
    cfg.apply_overrides([(
      "window.height".to_string(),
      "900".to_string()
    )]);
    assert_eq!(
      cfg.get_u32(
        "window.height",
        0
      ),
      900
    );
  }
}
