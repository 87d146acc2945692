use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::segmenter;
use crate::srt_generator;

// @module: Application controller for transcript conversion

/// Main application controller for transcript to SRT conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config
            .validate()
            .map_err(AppError::from)
            .context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Convert transcript text to SRT text entirely in memory
    pub fn convert_str(&self, content: &str) -> Result<String> {
        let lines = segmenter::split_lines(content);

        let blocks = segmenter::segment(&lines, self.config.subtract_one_hour, self.config.fps)
            .map_err(AppError::from)
            .context("Failed to segment transcript")?;

        Ok(srt_generator::generate(&blocks, self.config.hour_offset))
    }

    /// Convert the transcript at `input_file` and write the SRT to `output_file`.
    ///
    /// Nothing is written unless the whole conversion succeeds.
    pub fn run(&self, input_file: &Path, output_file: &Path) -> Result<()> {
        let start_time = std::time::Instant::now();

        debug!(
            "Converting {:?} with fps={}, hour_offset={}, subtract_one_hour={}",
            input_file, self.config.fps, self.config.hour_offset, self.config.subtract_one_hour
        );

        let content = FileManager::read_to_string(input_file)?;
        let srt = self
            .convert_str(&content)
            .with_context(|| format!("Failed to convert {}", input_file.display()))?;

        FileManager::write_to_file(output_file, &srt)?;

        info!("Converted {:?} in {:.2?}", input_file, start_time.elapsed());
        Ok(())
    }
}
