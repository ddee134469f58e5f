use std::fmt;
use std::path::Path;

/// Storage filename for an upload: `<slug>_<epoch-millis>.<ext>`.
///
/// Two uploads of the same original name within the same millisecond collide;
/// that window is accepted, not eliminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageName(String);

impl StorageName {
    /// Derives the storage name from the original upload name and a Unix
    /// timestamp in milliseconds. Whitespace runs in the base name collapse
    /// to single underscores, the extension is lower-cased, and the case of
    /// the base name is preserved.
    pub fn generate(original: &str, epoch_millis: i64) -> Self {
        let path = Path::new(original);
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        let base = slug(stem);

        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => Self(format!(
                "{}_{}.{}",
                base,
                epoch_millis,
                ext.to_ascii_lowercase()
            )),
            None => Self(format!("{}_{}", base, epoch_millis)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn slug(stem: &str) -> String {
    let collapsed = stem.split_whitespace().collect::<Vec<_>>().join("_");
    if collapsed.is_empty() {
        "audio".to_string()
    } else {
        collapsed
    }
}
