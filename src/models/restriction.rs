#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestrictionStatus {
    /// Inside a term: no weekly cap.
    Unrestricted,
    Ok,
    Exceeded,
}

impl RestrictionStatus {
    pub fn is_breach(&self) -> bool {
        matches!(self, RestrictionStatus::Exceeded)
    }
}

/// Outcome of the weekly cap check. `ratio` is in `[0, 1]` (progress bar width).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Restriction {
    pub status: RestrictionStatus,
    pub ratio: f64,
}
