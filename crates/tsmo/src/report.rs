//! JSON configuration and report helpers, plus the plain-text rendering.

use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Write as _},
    fs,
    path::{Path, PathBuf},
};
use tsmo_core::{ThresholdParams, ThresholdResult};

#[derive(thiserror::Error, Debug)]
pub enum ReportIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Batch configuration, loaded from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Image files or directories to scan.
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Where to write the JSON report, if anywhere.
    #[serde(default)]
    pub output_path: Option<String>,
    /// Descend into subdirectories of directory inputs.
    #[serde(default)]
    pub recursive: bool,
    #[serde(default)]
    pub params: Option<ThresholdParams>,
}

impl ThresholdConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ReportIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ReportIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Parameters from the config, or the defaults.
    pub fn params(&self) -> ThresholdParams {
        self.params.unwrap_or_default()
    }

    pub fn input_paths(&self) -> Vec<PathBuf> {
        self.inputs.iter().map(PathBuf::from).collect()
    }
}

/// Outcome for one image of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageReport {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valleys: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ImageReport {
    pub fn success(path: &Path, result: &ThresholdResult) -> Self {
        Self {
            path: path.display().to_string(),
            thresholds: Some(result.thresholds.clone()),
            valleys: Some(result.valleys.clone()),
            error: None,
        }
    }

    pub fn failure(path: &Path, err: impl fmt::Display) -> Self {
        Self {
            path: path.display().to_string(),
            thresholds: None,
            valleys: None,
            error: Some(err.to_string()),
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Reports for every processed image, with the parameters used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub params: ThresholdParams,
    pub images: Vec<ImageReport>,
}

impl BatchReport {
    pub fn new(params: ThresholdParams, images: Vec<ImageReport>) -> Self {
        Self { params, images }
    }

    pub fn failures(&self) -> usize {
        self.images.iter().filter(|r| !r.is_ok()).count()
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ReportIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ReportIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Render one image in the plain-text format:
///
/// ```text
/// <path>
/// Threshold[0] - <value>
/// Threshold[1] - <value>
///
/// ```
///
/// Failed images get an `error: <message>` line instead of thresholds.
pub fn render_image(report: &ImageReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.path);
    match (&report.thresholds, &report.error) {
        (_, Some(err)) => {
            let _ = writeln!(out, "error: {err}");
        }
        (Some(thresholds), None) => {
            for (i, t) in thresholds.iter().enumerate() {
                let _ = writeln!(out, "Threshold[{i}] - {t}");
            }
        }
        (None, None) => {}
    }
    out.push('\n');
    out
}

/// Render every image of a batch, in order.
pub fn render_text(reports: &[ImageReport]) -> String {
    reports.iter().map(render_image).collect()
}
