use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use image::DynamicImage;
use tracing::{debug, warn};

use crate::ocr::progress::ProgressSink;
use crate::ocr::{OcrEngine, RecognizedPage};

/// OCR engine backed by an external recognizer process. The raster is written
/// to a work directory and the nested recognition result is read back as JSON
/// from the process's stdout.
#[derive(Debug, Clone)]
pub struct ProcessOcrEngine {
    work_dir: PathBuf,
    command: PathBuf,
    languages: String,
}

impl ProcessOcrEngine {
    pub fn new(work_dir: PathBuf) -> Self {
        Self {
            work_dir,
            command: PathBuf::from("pagelens-ocr"),
            languages: "eng+rus".to_string(),
        }
    }

    pub fn with_command(mut self, command: PathBuf) -> Self {
        self.command = command;
        self
    }

    pub fn with_languages(mut self, languages: String) -> Self {
        self.languages = languages;
        self
    }
}

// The recognizer runtime is probed once per process; repeated engine
// construction must not re-enter the check.
static RUNTIME_PROBE: OnceLock<bool> = OnceLock::new();

fn ensure_runtime_probed(command: &Path) -> bool {
    *RUNTIME_PROBE.get_or_init(|| {
        debug!(command = %command.display(), "probing OCR runtime");
        let available = Command::new(command)
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false);
        if !available {
            warn!(command = %command.display(), "OCR runtime probe failed");
        }
        available
    })
}

impl OcrEngine for ProcessOcrEngine {
    fn recognize(
        &self,
        raster: &DynamicImage,
        _progress: &dyn ProgressSink,
    ) -> Result<RecognizedPage> {
        ensure_runtime_probed(&self.command);

        fs::create_dir_all(&self.work_dir)?;
        let image_path = self.work_dir.join("page.png");
        raster
            .save(&image_path)
            .with_context(|| format!("failed to write raster to {}", image_path.display()))?;

        let output = Command::new(&self.command)
            .arg("--image")
            .arg(&image_path)
            .arg("--lang")
            .arg(&self.languages)
            .output()
            .with_context(|| {
                format!(
                    "failed to invoke OCR engine; is {} installed?",
                    self.command.display()
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("OCR engine failed: {stderr}");
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let page: RecognizedPage =
            serde_json::from_str(&stdout).with_context(|| "failed to parse OCR JSON response")?;

        debug!(blocks = page.blocks.len(), "recognition finished");
        Ok(page)
    }
}
