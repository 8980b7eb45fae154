use crate::commands::{CatalogPaths, CmdMessage, CmdResult};
use crate::config::{CatalogConfig, CONFIG_FILENAME};
use crate::error::Result;
use crate::store::DataStore;
use std::fs;

/// Creates the catalog directory, a default config and an empty backing
/// file. Existing files are left alone.
pub fn run<S: DataStore>(store: &mut S, paths: &CatalogPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.root)?;

    let config_path = paths.root.join(CONFIG_FILENAME);
    let config = CatalogConfig::load(&paths.root)?;
    if !config_path.exists() {
        config.save(&paths.root)?;
    }

    let mut result = CmdResult::default();
    match store.data_path().map(|p| p.to_path_buf()) {
        Some(data_path) if data_path.exists() => {
            result.add_message(CmdMessage::info(format!(
                "Using existing catalog file {}",
                data_path.display()
            )));
        }
        Some(_) => store.save(&[])?,
        None => {}
    }

    result.add_message(CmdMessage::success(format!(
        "Initialized catalog at {}",
        paths.root.display()
    )));
    Ok(result.with_config(config))
}
