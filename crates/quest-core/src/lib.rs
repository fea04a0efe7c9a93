pub mod assets;
pub mod chrome;
pub mod config;
pub mod menu;
pub mod shell;
pub mod store;
pub mod view;

use std::io::IsTerminal;

use anyhow::anyhow;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Shared subscriber setup for the
/// harness and the desktop shell.
/// `RUST_LOG` wins over the level
/// passed in.
pub fn init_tracing(
  default_level: &str
) -> anyhow::Result<()> {
  let env_filter =
    EnvFilter::try_from_default_env()
      .or_else(|_| {
        EnvFilter::try_new(
          default_level
        )
      })
      .map_err(|e| {
        anyhow!(
          "invalid RUST_LOG / log \
           filter: {e}"
        )
      })?;

  let init_result =
    tracing_subscriber::fmt()
      .with_env_filter(env_filter)
      .with_target(true)
      .with_level(true)
      .with_ansi(
        std::io::stderr()
          .is_terminal()
      )
      .try_init();

  if let Err(err) = init_result {
    debug!(
      error = %err,
      "tracing subscriber already \
       set, continuing"
    );
  }

  Ok(())
}
