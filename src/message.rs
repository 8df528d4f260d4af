use crate::ops::{MergeOutcome, SplitOutcome};
use std::path::PathBuf;

/// Operation results carry `None` when the user cancelled a dialog, so a
/// cancel never surfaces as an error.
#[derive(Debug, Clone)]
pub enum Message {
    PickFiles,
    FilesPicked(Vec<PathBuf>),
    MoveEntryUp(usize),
    MoveEntryDown(usize),
    RemoveEntry(usize),
    ConfirmMerge,
    MergeFinished(Option<Result<MergeOutcome, String>>),
    SplitPdf,
    SplitFinished(Option<Result<SplitOutcome, String>>),
    PrefixChanged(String),
    OpenResult,
    ClearStatus,
}
