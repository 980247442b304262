use crate::commands::{CmdMessage, CmdResult};
use crate::config::CatalogConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    SetDataFile(PathBuf),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = CatalogConfig::load(config_dir)?;

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::SetDataFile(path) => {
            config.set_data_file(&path);
            config.save(config_dir)?;
            Ok(CmdResult::default()
                .with_message(CmdMessage::success(format!(
                    "data-file set to {}",
                    path.display()
                )))
                .with_config(config))
        }
    }
}
