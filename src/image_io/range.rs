//! HDR/LDR classification from the destination file extension

use std::ffi::OsStr;
use std::path::Path;

/// Extensions whose encoders store linear float values verbatim.
const HDR_EXTENSIONS: [&str; 4] = ["hdr", "exr", "pfm", "dpx"];

/// Dynamic range of a destination image format.
///
/// LDR encoders clip to an 8-bit-equivalent range, so linear values must be
/// gamma-encoded before handoff. HDR encoders accept linear values as-is,
/// including values beyond [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicRange {
    Hdr,
    Ldr,
}

impl DynamicRange {
    /// Classifies a destination path by its extension, case-insensitively.
    ///
    /// Unrecognized or missing extensions classify as LDR.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(OsStr::to_str) {
            Some(ext) if HDR_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) => {
                DynamicRange::Hdr
            }
            _ => DynamicRange::Ldr,
        }
    }

    pub fn is_hdr(self) -> bool {
        matches!(self, DynamicRange::Hdr)
    }
}
