use std::cmp::Ordering;

use strum::{Display, EnumCount, EnumIter};

/// Organization level of a shelf, from best to worst.
///
/// Iteration order (`ClassificationLabel::iter()`) is the order in which the
/// exemplars are shown to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum ClassificationLabel {
    #[strum(to_string = "Organized")]
    Organized,
    #[strum(to_string = "Partially organized")]
    PartiallyOrganized,
    #[strum(to_string = "Disorganized")]
    Disorganized,
}

impl ClassificationLabel {
    /// Ordinal rank, higher is better organized
    pub fn rank(self) -> u8 {
        match self {
            Self::Organized => 2,
            Self::PartiallyOrganized => 1,
            Self::Disorganized => 0,
        }
    }
}

impl PartialOrd for ClassificationLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClassificationLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}
