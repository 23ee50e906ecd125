//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Defaults reproduce
//! the stock game (1200×800 window, 60 updates per second, 150×25 world) so a
//! missing file is not an error.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1200
//! height = 800
//! target_fps = 60
//! vsync = true
//!
//! [content]
//! root = ./assets
//!
//! [world]
//! columns = 150
//! rows = 25
//! seed = 1234
//!
//! [controls]
//! pan_speed = 200
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 1200;
const DEFAULT_WINDOW_HEIGHT: u32 = 800;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_CONTENT_ROOT: &str = "./assets";
const DEFAULT_WORLD_COLUMNS: u32 = 150;
const DEFAULT_WORLD_ROWS: u32 = 25;
const DEFAULT_PAN_SPEED: f32 = 200.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Fixed update rate, also used as raylib's frame cap.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Directory holding `textures/` and `fonts/`.
    pub content_root: PathBuf,
    /// World grid width in blocs.
    pub world_columns: u32,
    /// World grid height in blocs.
    pub world_rows: u32,
    /// Terrain seed. `None` picks a random one at startup.
    pub seed: Option<u64>,
    /// Camera pan speed in pixels per second.
    pub pan_speed: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with the stock values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            content_root: PathBuf::from(DEFAULT_CONTENT_ROOT),
            world_columns: DEFAULT_WORLD_COLUMNS,
            world_rows: DEFAULT_WORLD_ROWS,
            seed: None,
            pan_speed: DEFAULT_PAN_SPEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, world {}x{}, content at {:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.world_columns,
            self.world_rows,
            self.content_root
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            // zero would make the fixed step infinite
            self.target_fps = (fps as u32).max(1);
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [content] section
        if let Some(root) = config.get("content", "root") {
            self.content_root = PathBuf::from(root);
        }

        // [world] section
        if let Some(columns) = config.getuint("world", "columns").ok().flatten() {
            self.world_columns = columns as u32;
        }
        if let Some(rows) = config.getuint("world", "rows").ok().flatten() {
            self.world_rows = rows as u32;
        }
        if let Some(seed) = config.getuint("world", "seed").ok().flatten() {
            self.seed = Some(seed);
        }

        // [controls] section
        if let Some(speed) = config.getfloat("controls", "pan_speed").ok().flatten() {
            self.pan_speed = speed as f32;
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
