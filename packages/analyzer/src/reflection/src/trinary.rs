// Trinary Logic
//
// Three-valued answers from the type-relation oracle.

/// Answer to a subtype query. The oracle may be unable to decide, e.g. for
/// union types or types it only knows through an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trinary {
    Yes,
    Maybe,
    No,
}

impl Trinary {
    pub fn yes(self) -> bool {
        self == Trinary::Yes
    }

    pub fn no(self) -> bool {
        self == Trinary::No
    }

    /// Disjunction: `Yes` dominates, then `Maybe`.
    pub fn or(self, other: Trinary) -> Trinary {
        match (self, other) {
            (Trinary::Yes, _) | (_, Trinary::Yes) => Trinary::Yes,
            (Trinary::Maybe, _) | (_, Trinary::Maybe) => Trinary::Maybe,
            _ => Trinary::No,
        }
    }
}

impl From<bool> for Trinary {
    fn from(value: bool) -> Self {
        if value {
            Trinary::Yes
        } else {
            Trinary::No
        }
    }
}
