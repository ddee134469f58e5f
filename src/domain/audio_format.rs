use std::path::Path;

/// Audio formats accepted for upload, recognized by file extension alone.
///
/// No content sniffing happens anywhere in the system: a renamed file with a
/// `.wav` extension is accepted, a real WAV under another extension is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
}

impl AudioFormat {
    /// Case-insensitive extension match; `None` means the upload is rejected.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = Path::new(filename).extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
        }
    }
}
