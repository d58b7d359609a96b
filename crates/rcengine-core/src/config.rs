//! Construction-time configuration: [`EngineConfig`] and [`AudioSpec`].

use std::path::PathBuf;

use crate::error::EngineError;

/// Audio device parameters requested at startup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AudioSpec {
    /// Samples per second.
    pub sample_rate: u32,
    /// Output channels (2 = stereo).
    pub channels: u16,
    /// Buffer size in sample frames.
    pub buffer_size: u32,
}

impl Default for AudioSpec {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            channels: 2,
            buffer_size: 2048,
        }
    }
}

/// Configuration for an engine instance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Base window title; the driver appends the FPS readout.
    pub title: String,
    /// Path to the 16×16 glyph sheet.
    pub tileset_path: PathBuf,
    /// Number of grid rows.
    pub rows: i32,
    /// Number of grid columns.
    pub cols: i32,
    /// Cell width in pixels.
    pub cell_width: i32,
    /// Cell height in pixels.
    pub cell_height: i32,
    pub audio: AudioSpec,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "RCEngine".into(),
            tileset_path: PathBuf::from("./RCE_tileset.png"),
            rows: 30,
            cols: 40,
            cell_width: 20,
            cell_height: 20,
            audio: AudioSpec::default(),
        }
    }
}

impl EngineConfig {
    /// Surface width in pixels.
    #[inline]
    pub fn screen_width(&self) -> i32 {
        self.cols.saturating_mul(self.cell_width)
    }

    /// Surface height in pixels.
    #[inline]
    pub fn screen_height(&self) -> i32 {
        self.rows.saturating_mul(self.cell_height)
    }

    /// Reject dimensions that cannot form a console.
    pub fn validate(&self) -> Result<(), EngineError> {
        let dims = [
            ("rows", self.rows),
            ("cols", self.cols),
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
        ];
        for (name, value) in dims {
            if value <= 0 {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        let extents = [
            ("cols * cell_width", self.cols, self.cell_width),
            ("rows * cell_height", self.rows, self.cell_height),
        ];
        for (name, count, size) in extents {
            if count.checked_mul(size).is_none() {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} overflows the surface size ({count} * {size})"
                )));
            }
        }
        Ok(())
    }
}
