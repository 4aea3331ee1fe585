use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("could not decode image for recognition: {0}")]
    Decode(String),
    #[error("recognition engine failed: {0}")]
    Engine(String),
}

/// A text-recognition backend.
///
/// Implementations take normalized PNG bytes and return the recognized text
/// with line structure intact; the line parser downstream depends on it.
pub trait OcrEngine: Send + Sync {
    fn read_text(&self, image_png: &[u8]) -> Result<String, OcrError>;
}

/// Engine that returns a fixed string regardless of input.
///
/// Lets the scan pipeline be exercised end to end without a Tesseract
/// install.
pub struct FixedText {
    text: String,
}

impl FixedText {
    pub fn new(text: impl Into<String>) -> Self {
        FixedText { text: text.into() }
    }
}

impl OcrEngine for FixedText {
    fn read_text(&self, _image_png: &[u8]) -> Result<String, OcrError> {
        Ok(self.text.clone())
    }
}

// ── Tesseract backend (needs the `tesseract` cargo feature) ───────────────────

#[cfg(feature = "tesseract")]
pub mod tesseract {
    use super::{OcrEngine, OcrError};
    use leptess::LepTess;

    /// Leptonica/Tesseract-backed engine. Needs the system libraries at
    /// build time; see the `tesseract` cargo feature.
    pub struct TesseractEngine {
        data_path: Option<String>,
        lang: String,
    }

    impl TesseractEngine {
        pub fn new(data_path: Option<String>, lang: impl Into<String>) -> Self {
            TesseractEngine { data_path, lang: lang.into() }
        }
    }

    impl OcrEngine for TesseractEngine {
        fn read_text(&self, image_png: &[u8]) -> Result<String, OcrError> {
            let mut tess = LepTess::new(self.data_path.as_deref(), &self.lang)
                .map_err(|e| OcrError::Engine(e.to_string()))?;
            tess.set_image_from_mem(image_png)
                .map_err(|e| OcrError::Decode(e.to_string()))?;
            tess.get_utf8_text()
                .map_err(|e| OcrError::Engine(e.to_string()))
        }
    }
}
