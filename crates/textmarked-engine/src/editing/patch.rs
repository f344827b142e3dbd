/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Line indices touched by the edit, in the updated document.
    pub changed: std::ops::Range<usize>,
    pub version: u64,
}
