use std::path::{Path, PathBuf};

use crate::error::AppResult;
use crate::minutes::model::MeetingResult;

/// Fixed name of the exported artifact.
pub const EXPORT_FILE_NAME: &str = "meeting-minutes.md";

/// Content type of the exported artifact.
pub const EXPORT_CONTENT_TYPE: &str = "text/markdown";

/// Single portable markdown document: title, minutes verbatim, summary,
/// and the action items numbered in original order.
pub fn render_document(result: &MeetingResult) -> String {
    let mut out = String::new();
    out.push_str("# Meeting Minutes\n\n");
    out.push_str(&result.minutes);
    out.push_str("\n\n## Summary\n\n");
    out.push_str(&result.summary);
    out.push_str("\n\n## Action Items\n\n");
    for (index, item) in result.action_items.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} (assignee: {}, deadline: {}, priority: {})\n",
            index + 1,
            item.task,
            item.assignee,
            item.deadline,
            item.priority
        ));
    }
    out
}

/// Writes the document into `dir` under the fixed file name and returns the
/// full path.
pub fn write_document(dir: &Path, result: &MeetingResult) -> AppResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, render_document(result))?;
    Ok(path)
}
