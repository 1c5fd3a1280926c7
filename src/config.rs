use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use directories::{BaseDirs, ProjectDirs};
use egui::{Color32, Stroke};
use serde::Deserialize;

const CONFIG_FILE_NAME: &str = "meterlab.toml";

fn alpha_to_u8(alpha: f32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: [u8; 3],
    pub alpha: f32,
    pub thickness: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: [80, 200, 120],
            alpha: 1.0,
            thickness: 2.0,
        }
    }
}

impl StrokeStyle {
    pub fn color32(&self) -> Color32 {
        Color32::from_rgba_unmultiplied(
            self.color[0],
            self.color[1],
            self.color[2],
            alpha_to_u8(self.alpha),
        )
    }

    pub fn stroke(&self) -> Stroke {
        Stroke {
            width: self.thickness.max(0.1),
            color: self.color32(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rail: StrokeStyle,
    pub diagram: StrokeStyle,
    pub max_scale: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rail: StrokeStyle {
                color: [160, 160, 160],
                alpha: 1.0,
                thickness: 1.0,
            },
            diagram: StrokeStyle::default(),
            max_scale: 2.0,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        for path in Self::candidate_paths() {
            if !path.is_file() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(cfg) => return cfg,
                Err(err) => {
                    eprintln!("Failed to load config {}: {err:#}", path.display());
                }
            }
        }
        Self::default()
    }

    fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).context("reading config file")?;
        toml::from_str(&contents).context("parsing config file")
    }

    pub const fn max_scale_factor(&self) -> f32 {
        self.max_scale.clamp(1.0, 8.0)
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(exe_path) = std::env::current_exe()
            && let Some(dir) = exe_path.parent()
        {
            paths.push(dir.join(CONFIG_FILE_NAME));
        }

        if let Some(proj_dirs) = ProjectDirs::from("dev", "Meterlab", "Meterlab") {
            paths.push(proj_dirs.config_dir().join(CONFIG_FILE_NAME));
        }

        if let Some(base_dirs) = BaseDirs::new() {
            paths.push(
                base_dirs
                    .config_dir()
                    .join("meterlab")
                    .join(CONFIG_FILE_NAME),
            );
        }

        paths
    }
}
