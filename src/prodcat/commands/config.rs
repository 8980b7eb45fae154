use crate::commands::{CatalogPaths, CmdMessage, CmdResult};
use crate::config::CatalogConfig;
use crate::error::Result;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or changes the catalog config.
///
/// `data_file` is the backing file the current session actually uses. It can
/// differ from the configured one when the caller overrides it, and `ShowAll`
/// reports both so the difference is visible.
pub fn run(
    paths: &CatalogPaths,
    data_file: Option<&Path>,
    action: ConfigAction,
) -> Result<CmdResult> {
    let mut config = CatalogConfig::load(&paths.root)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            let configured = config.data_file(&paths.root);
            match data_file {
                Some(in_use) if in_use != configured => result.add_message(CmdMessage::info(
                    format!("Catalog file in use: {} (overrides file-name)", in_use.display()),
                )),
                _ => result.add_message(CmdMessage::info(format!(
                    "Catalog file in use: {}",
                    configured.display()
                ))),
            }
            return Ok(result.with_config(config));
        }
        ConfigAction::ShowKey(key) => {
            let message = config
                .get(&key)
                .map(CmdMessage::info)
                .unwrap_or_else(|| CmdMessage::error(format!("Unknown config key: {}", key)));
            result.add_message(message);
        }
        ConfigAction::Set(key, value) => {
            let previous_file = config.data_file(&paths.root);
            if let Err(reason) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(reason));
                return Ok(result);
            }
            config.save(&paths.root)?;
            info!(key = %key, "config updated");

            let shown = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));

            let new_file = config.data_file(&paths.root);
            if new_file != previous_file && previous_file.exists() {
                result.add_message(CmdMessage::warning(format!(
                    "{} still holds the previous catalog; it is not moved to {}",
                    previous_file.display(),
                    new_file.display()
                )));
            }
            result = result.with_config(config);
        }
    }
    Ok(result)
}
