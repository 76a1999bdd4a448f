/// Aggregated view of session progress, useful for UI.
///
/// `current` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub current: usize,
    pub total: usize,
    pub score: u32,
    pub attempted: u32,
    pub is_finished: bool,
}
