//! Advisor configuration

use shakmaty::Color;

/// Which side the advisor plays and how deep it searches.
///
/// The side doubles as the side to move in every reconstructed position:
/// the client always asks on behalf of the side whose turn it is, and the
/// inventory itself cannot express whose turn that is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Side the advisor computes moves for.
    pub side: Color,
    /// Total look-ahead in plies; the root loop consumes one of them.
    pub depth: u32,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            side: Color::Black,
            depth: 3,
        }
    }
}
