//! Deploy step identifiers

use std::fmt;

/// One step of the per-host deploy sequence, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepKind {
    Upload,
    RemoveStaleRelease,
    CreateReleaseDir,
    Extract,
    RemoveUpload,
    Flatten,
    RemoveNestedDir,
    RemoveCurrentLink,
    LinkCurrent,
}

impl StepKind {
    pub const ALL: [StepKind; 9] = [
        StepKind::Upload,
        StepKind::RemoveStaleRelease,
        StepKind::CreateReleaseDir,
        StepKind::Extract,
        StepKind::RemoveUpload,
        StepKind::Flatten,
        StepKind::RemoveNestedDir,
        StepKind::RemoveCurrentLink,
        StepKind::LinkCurrent,
    ];

    /// Stable identifier used in JSON events
    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Upload => "upload",
            StepKind::RemoveStaleRelease => "remove_stale_release",
            StepKind::CreateReleaseDir => "create_release_dir",
            StepKind::Extract => "extract",
            StepKind::RemoveUpload => "remove_upload",
            StepKind::Flatten => "flatten",
            StepKind::RemoveNestedDir => "remove_nested_dir",
            StepKind::RemoveCurrentLink => "remove_current_link",
            StepKind::LinkCurrent => "link_current",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StepKind::Upload => "Upload archive",
            StepKind::RemoveStaleRelease => "Remove old release",
            StepKind::CreateReleaseDir => "Create release directory",
            StepKind::Extract => "Extract archive",
            StepKind::RemoveUpload => "Remove temporary archive",
            StepKind::Flatten => "Move files into release",
            StepKind::RemoveNestedDir => "Remove nested archive directory",
            StepKind::RemoveCurrentLink => "Remove current symbolic link",
            StepKind::LinkCurrent => "Create new symbolic link",
        }
    }

    /// Status line printed when this step fails
    pub fn failure_message(self) -> &'static str {
        match self {
            StepKind::Upload => "Failed to upload archive.",
            StepKind::RemoveStaleRelease => "Failed to remove old release.",
            StepKind::CreateReleaseDir => "Failed to create release directory.",
            StepKind::Extract => "Failed to extract archive.",
            StepKind::RemoveUpload => "Failed to remove temporary archive.",
            StepKind::Flatten => "Failed to move files.",
            StepKind::RemoveNestedDir => "Failed to remove nested archive directory.",
            StepKind::RemoveCurrentLink => "Failed to remove current symbolic link.",
            StepKind::LinkCurrent => "Failed to create new symbolic link.",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        let mut sorted = StepKind::ALL;
        sorted.sort();
        assert_eq!(sorted, StepKind::ALL);
    }

    #[test]
    fn identifiers_are_unique() {
        let ids: std::collections::HashSet<_> = StepKind::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(ids.len(), StepKind::ALL.len());
    }
}
