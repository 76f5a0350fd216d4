use std::fmt;

/// Granularity at which character predicates are tested.
///
/// At grapheme-cluster level one "character" is an extended grapheme cluster
/// (what a user perceives as a character). At scalar level it is a single
/// Unicode scalar value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MatchLevel {
    #[default]
    GraphemeCluster,
    UnicodeScalar,
}

impl MatchLevel {
    pub fn is_grapheme(self) -> bool {
        self == Self::GraphemeCluster
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GraphemeCluster => f.write_str("grapheme"),
            Self::UnicodeScalar => f.write_str("scalar"),
        }
    }
}
