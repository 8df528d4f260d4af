use std::path::Path;

/// State of the merge button. The original two-phase button (pick files,
/// then confirm the destination) is driven by this enum instead of
/// rebinding handlers at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeControl {
    Idle,
    Confirm,
}

impl Default for MergeControl {
    fn default() -> Self {
        MergeControl::Idle
    }
}

impl MergeControl {
    pub fn label(self) -> &'static str {
        match self {
            MergeControl::Idle => "Merge PDFs",
            MergeControl::Confirm => "Confirm Merge",
        }
    }
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
