use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ggez::graphics::Color;
use log::info;
use serde::Deserialize;

use crate::basic::Point;
use crate::error::{Error, ErrorConversion, ErrorType, Result};
use crate::keyboard_layout::Layout;
use crate::rendering::segments::{Stroke, ViewStyle};
use crate::shape::{Vertices, DEFAULT_VERTICES};

/// Read from the working directory when no other file is given
pub const DEFAULT_PREFS_FILE: &str = "hex_fill.toml";

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: [u8; 3],
    pub outline: [u8; 3],
    pub fill: [u8; 3],
    pub text: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [255, 255, 255],
            outline: [0, 0, 0],
            fill: [90, 160, 230],
            text: [0, 0, 0],
        }
    }
}

pub fn color([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgb(r, g, b)
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Prefs {
    pub window_width: f32,
    pub window_height: f32,
    /// Top left corner of the drawing area
    pub scene_origin: Point,
    pub scene_size: Point,

    pub layout: Layout,
    pub move_step: f32,
    pub rotation_step_degrees: f32,
    pub shrink_factor: f32,
    pub grow_factor: f32,

    pub draw_fill: bool,
    pub outline_thickness: f32,
    pub fill_thickness: f32,
    pub vertices: Vertices,

    pub palette: Palette,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            window_width: 800.,
            window_height: 600.,
            scene_origin: Point::new(220., 25.),
            scene_size: Point::new(550., 550.),

            layout: Layout::Qwerty,
            move_step: 10.,
            rotation_step_degrees: 15.,
            shrink_factor: 0.7,
            grow_factor: 1.3,

            draw_fill: true,
            outline_thickness: 1.,
            fill_thickness: 1.,
            vertices: DEFAULT_VERTICES,

            palette: Palette::default(),
        }
    }
}

// builder
impl Prefs {
    pub fn draw_fill(mut self, draw_fill: bool) -> Self {
        self.draw_fill = draw_fill;
        self
    }
}

impl Prefs {
    pub fn view_style(&self) -> ViewStyle {
        ViewStyle {
            outline: Stroke {
                color: color(self.palette.outline),
                thickness: self.outline_thickness,
            },
            fill: Stroke {
                color: color(self.palette.fill),
                thickness: self.fill_thickness,
            },
            draw_fill: self.draw_fill,
            scene_size: self.scene_size,
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| {
            ErrorType::Config { path: Some(path.to_owned()), source }.into()
        })
    }

    /// An explicit path has to exist, the default file is optional
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_owned(), true),
            None => (PathBuf::from(DEFAULT_PREFS_FILE), false),
        };

        match Self::read(&path) {
            Ok(prefs) => {
                info!("loaded preferences from {}", path.display());
                Ok(prefs)
            }
            Err(e) if !required && is_not_found(&e) => {
                info!("no {} found, using default preferences", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e).with_trace_step(format!("Prefs::load({})", path.display())),
        }
    }
}

fn is_not_found(e: &Error) -> bool {
    matches!(e.error_type(), ErrorType::Io(e) if e.kind() == io::ErrorKind::NotFound)
}
