use std::ffi::OsString;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::ocr::tsv::parse_tsv;
use crate::ocr::OcrEngine;
use crate::tools::{run_tool, ToolCommand};
use crate::word::WordBox;

/// The `tesseract` command-line OCR engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tesseract {
    pub command: ToolCommand,
    /// Language pack(s) passed with `-l`, e.g. `eng` or `eng+deu`.
    pub language: Option<String>,
    /// Page segmentation mode passed with `--psm`.
    pub psm: Option<u8>,
}

impl Default for Tesseract {
    fn default() -> Self {
        Self {
            command: ToolCommand::new("tesseract"),
            language: None,
            psm: None,
        }
    }
}

impl Tesseract {
    fn arguments(&self, image: &Path, output_base: &Path) -> Vec<OsString> {
        let mut args = vec![image.as_os_str().to_owned(), output_base.as_os_str().to_owned()];
        if let Some(ref lang) = self.language {
            args.push("-l".into());
            args.push(lang.into());
        }
        if let Some(psm) = self.psm {
            args.push("--psm".into());
            args.push(psm.to_string().into());
        }
        args.push("-c".into());
        args.push("tessedit_create_tsv=1".into());
        args
    }
}

impl OcrEngine for Tesseract {
    fn recognize(&self, image: &Path) -> Result<Vec<WordBox>> {
        let dir = tempfile::tempdir()?;
        let output_base = dir.path().join("ocr");

        run_tool(&self.command, &self.arguments(image, &output_base), None)?;

        let tsv_path = output_base.with_extension("tsv");
        let contents = std::fs::read_to_string(&tsv_path)?;
        let words = parse_tsv(&contents);

        debug!(tsv = %tsv_path.display(), "parsed tesseract output");
        info!("Recognized {} words in {}", words.len(), image.display());
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_include_language_and_psm() {
        let engine = Tesseract {
            language: Some("eng+deu".into()),
            psm: Some(11),
            ..Default::default()
        };
        let args = engine.arguments(Path::new("/tmp/a.png"), Path::new("/tmp/out"));
        let args: Vec<String> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(
            args,
            [
                "/tmp/a.png",
                "/tmp/out",
                "-l",
                "eng+deu",
                "--psm",
                "11",
                "-c",
                "tessedit_create_tsv=1"
            ]
        );
    }
}
