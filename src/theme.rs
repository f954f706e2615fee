use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Palette for the frontend. Toggled at runtime with the `t` key and
/// persisted so the choice survives restarts.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub mode: ThemeMode,
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
}

impl Theme {
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                mode,
                bg: Color::Black,
                fg: Color::White,
                accent: Color::Cyan,
                muted: Color::DarkGray,
            },
            ThemeMode::Light => Self {
                mode,
                bg: Color::White,
                fg: Color::Black,
                accent: Color::Blue,
                muted: Color::Gray,
            },
        }
    }

    pub fn toggled(&self) -> Self {
        match self.mode {
            ThemeMode::Dark => Self::from_mode(ThemeMode::Light),
            ThemeMode::Light => Self::from_mode(ThemeMode::Dark),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeStore {
    theme: String,
}

fn store_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("carousel").join("theme.toml"))
}

/// Read the persisted theme choice. A missing or unreadable store falls
/// back to dark.
pub fn load_mode() -> ThemeMode {
    let Some(path) = store_path() else {
        return ThemeMode::Dark;
    };
    match fs::read_to_string(&path) {
        Ok(raw) => match toml::from_str::<ThemeStore>(&raw) {
            Ok(store) if store.theme == "light" => ThemeMode::Light,
            _ => ThemeMode::Dark,
        },
        Err(_) => ThemeMode::Dark,
    }
}

pub fn save_mode(mode: ThemeMode) -> Result<()> {
    let Some(path) = store_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let store = ThemeStore {
        theme: match mode {
            ThemeMode::Light => "light".into(),
            ThemeMode::Dark => "dark".into(),
        },
    };
    let raw = toml::to_string(&store).context("failed to serialize theme store")?;
    fs::write(&path, raw).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
