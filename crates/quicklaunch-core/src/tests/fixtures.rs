//! Test fixtures and helpers

use crate::catalog::{Catalog, LaunchableItem};
use crate::dispatch::{CommandDispatcher, ProcessLauncher};
use crate::pagination::PageSize;
use crate::palette::Palette;
use crate::{Error, Result};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Records every launch request instead of spawning anything.
#[derive(Clone, Default)]
pub struct RecordingLauncher {
    pub launched: Arc<Mutex<Vec<String>>>,
}

impl RecordingLauncher {
    pub fn launched(&self) -> Vec<String> {
        self.launched.lock().unwrap().clone()
    }
}

impl ProcessLauncher for RecordingLauncher {
    fn launch(&self, exec_command: &str) -> Result<()> {
        self.launched
            .lock()
            .unwrap()
            .push(exec_command.to_string());
        Ok(())
    }
}

/// Rejects every launch request.
pub struct FailingLauncher;

impl ProcessLauncher for FailingLauncher {
    fn launch(&self, exec_command: &str) -> Result<()> {
        Err(Error::Launch(format!("cannot start {exec_command}")))
    }
}

pub fn page_size(n: i64) -> PageSize {
    PageSize::new(n).unwrap()
}

/// Catalog whose exec commands are the lowercased names.
pub fn make_catalog(names: &[&str]) -> Catalog {
    Catalog::new(
        names
            .iter()
            .map(|name| LaunchableItem::new(*name, name.to_lowercase()))
            .collect(),
    )
}

/// Palette over `names` with a recording launcher.
pub fn make_palette(names: &[&str], per_page: i64) -> (Palette, RecordingLauncher) {
    let launcher = RecordingLauncher::default();
    let dispatcher = CommandDispatcher::new(Box::new(launcher.clone()));
    let palette = Palette::new(make_catalog(names), page_size(per_page), dispatcher);
    (palette, launcher)
}

/// Write a minimal application desktop entry.
pub fn write_desktop_file(dir: &Path, file_name: &str, name: &str, exec: &str) {
    let content = format!("[Desktop Entry]\nType=Application\nName={name}\nExec={exec}\n");
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(file_name), content).unwrap();
}
