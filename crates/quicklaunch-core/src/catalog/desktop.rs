//! Catalog source backed by freedesktop `.desktop` entries.

use super::{CatalogSource, LaunchableItem};
use crate::Result;
use crate::config::{CatalogConfig, LauncherConfig};
use directories::BaseDirs;
use regex::{Captures, Regex};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};

static FIELD_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("%[fFuUdDnNickvm%]").expect("field code pattern is valid"));

/// The `[Desktop Entry]` keys we care about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesktopEntry {
    pub entry_type: Option<String>,
    pub name: String,
    pub icon: Option<String>,
    pub exec: Option<String>,
    pub terminal: bool,
    pub no_display: bool,
    pub hidden: bool,
}

/// Parse the `[Desktop Entry]` group of a desktop file.
///
/// Returns `None` when the group is missing. Localized keys (`Name[de]`)
/// and other groups (`[Desktop Action ...]`) are ignored.
#[must_use]
pub fn parse_desktop_entry(content: &str) -> Option<DesktopEntry> {
    let mut entry = DesktopEntry::default();
    let mut in_main_group = false;
    let mut found_group = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            in_main_group = line == "[Desktop Entry]";
            found_group |= in_main_group;
            continue;
        }

        if !in_main_group {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = unescape_value(value.trim());

        match key {
            "Type" => entry.entry_type = Some(value),
            "Name" => entry.name = value,
            "Icon" if !value.is_empty() => entry.icon = Some(value),
            "Exec" if !value.is_empty() => entry.exec = Some(value),
            "Terminal" => entry.terminal = value == "true",
            "NoDisplay" => entry.no_display = value == "true",
            "Hidden" => entry.hidden = value == "true",
            _ => {}
        }
    }

    found_group.then_some(entry)
}

fn unescape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('s') => out.push(' '),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Remove `Exec` field codes (`%f`, `%U`, ...). `%%` becomes a literal `%`.
#[must_use]
pub fn strip_field_codes(exec: &str) -> String {
    FIELD_CODE
        .replace_all(exec, |caps: &Captures| {
            if &caps[0] == "%%" { "%" } else { "" }
        })
        .split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Scans XDG application directories for desktop entries.
#[derive(Debug, Clone)]
pub struct DesktopCatalogSource {
    /// Directories in precedence order; earlier ones shadow later ones.
    dirs: Vec<PathBuf>,
    terminal: Option<String>,
    show_hidden: bool,
}

impl DesktopCatalogSource {
    #[must_use]
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self {
            dirs,
            terminal: None,
            show_hidden: false,
        }
    }

    /// Build a source from config plus the XDG environment.
    #[must_use]
    pub fn from_config(catalog: &CatalogConfig, launcher: &LauncherConfig) -> Self {
        let mut dirs = catalog.extra_dirs.clone();
        dirs.extend(xdg_application_dirs());
        Self {
            dirs,
            terminal: launcher.terminal.clone(),
            show_hidden: catalog.show_hidden,
        }
    }

    #[must_use]
    pub fn with_terminal(mut self, terminal: impl Into<String>) -> Self {
        self.terminal = Some(terminal.into());
        self
    }

    #[must_use]
    pub fn with_show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    #[must_use]
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    fn to_item(&self, entry: DesktopEntry, path: &Path) -> Option<LaunchableItem> {
        if entry.entry_type.as_deref() != Some("Application") || entry.hidden {
            return None;
        }
        if entry.no_display && !self.show_hidden {
            return None;
        }
        if entry.name.trim().is_empty() && entry.icon.is_none() && entry.exec.is_none() {
            return None;
        }

        let exec = strip_field_codes(entry.exec.as_deref()?);
        if exec.is_empty() {
            return None;
        }
        let exec = match (&self.terminal, entry.terminal) {
            (Some(terminal), true) => format!("{terminal} -e {exec}"),
            _ => exec,
        };

        Some(LaunchableItem {
            key: entry.name,
            icon: entry.icon,
            exec,
            source: Some(path.to_path_buf()),
        })
    }
}

impl CatalogSource for DesktopCatalogSource {
    fn load_catalog(&self) -> Result<Vec<LaunchableItem>> {
        let mut seen_ids = HashSet::new();
        let mut items = Vec::new();
        let mut skipped = 0usize;

        for dir in &self.dirs {
            if !dir.is_dir() {
                debug!("Skipping missing application dir {}", dir.display());
                continue;
            }

            let mut files = Vec::new();
            collect_desktop_files(dir, &mut files);

            for path in files {
                let id = desktop_id(dir, &path);
                if !seen_ids.insert(id) {
                    continue;
                }

                let content = match std::fs::read_to_string(&path) {
                    Ok(c) => c,
                    Err(e) => {
                        warn!("Failed to read {}: {e}", path.display());
                        skipped += 1;
                        continue;
                    }
                };

                match parse_desktop_entry(&content).and_then(|e| self.to_item(e, &path)) {
                    Some(item) => items.push(item),
                    None => skipped += 1,
                }
            }
        }

        items.sort_by(|a, b| {
            a.key
                .to_lowercase()
                .cmp(&b.key.to_lowercase())
                .then_with(|| a.source.cmp(&b.source))
        });

        debug!(
            "Desktop scan found {} applications ({} entries skipped)",
            items.len(),
            skipped
        );
        Ok(items)
    }
}

fn collect_desktop_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to read directory {}: {e}", dir.display());
            return;
        }
    };

    let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
    paths.sort();

    for path in paths {
        if path.is_dir() {
            collect_desktop_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "desktop") {
            out.push(path);
        }
    }
}

/// Desktop file ID: path relative to the base dir with `/` replaced by `-`.
fn desktop_id(base: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("-")
}

fn xdg_application_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Some(base) = BaseDirs::new() {
        dirs.push(base.data_dir().join("applications"));
    }

    let data_dirs = std::env::var("XDG_DATA_DIRS")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "/usr/local/share:/usr/share".to_string());

    for dir in data_dirs.split(':').filter(|d| !d.is_empty()) {
        let apps = PathBuf::from(dir).join("applications");
        if !dirs.contains(&apps) {
            dirs.push(apps);
        }
    }

    dirs
}
