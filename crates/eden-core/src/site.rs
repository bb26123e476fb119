//! Per-cell site state.

use std::fmt;

/// The state of a single lattice site.
///
/// Every cell holds exactly one state. The numeric codes are stable and
/// are what volume dumps and slice projections carry:
///
/// | State | Code |
/// |-------|------|
/// | [`Empty`](Self::Empty) | 0 |
/// | [`TypeA`](Self::TypeA) | 1 |
/// | [`TypeB`](Self::TypeB) | 2 |
/// | [`Obstacle`](Self::Obstacle) | 3 |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SiteState {
    /// Unoccupied and growable.
    #[default]
    Empty = 0,
    /// Occupied by colony type A.
    TypeA = 1,
    /// Occupied by colony type B.
    TypeB = 2,
    /// Permanently excluded from growth.
    Obstacle = 3,
}

impl SiteState {
    /// Both colony types, in code order.
    pub const COLONIES: [SiteState; 2] = [SiteState::TypeA, SiteState::TypeB];

    /// Stable numeric code for this state.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a numeric code. Returns `None` for codes above 3.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::TypeA),
            2 => Some(Self::TypeB),
            3 => Some(Self::Obstacle),
            _ => None,
        }
    }

    /// `true` for `TypeA` and `TypeB`: the site belongs to a colony and
    /// may propagate its type.
    pub fn is_colony(self) -> bool {
        matches!(self, Self::TypeA | Self::TypeB)
    }

    /// `true` only for [`Empty`](Self::Empty).
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}

impl fmt::Display for SiteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<u8> for SiteState {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(code)
    }
}

impl From<SiteState> for u8 {
    fn from(state: SiteState) -> Self {
        state.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(SiteState::Empty.code(), 0);
        assert_eq!(SiteState::TypeA.code(), 1);
        assert_eq!(SiteState::TypeB.code(), 2);
        assert_eq!(SiteState::Obstacle.code(), 3);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(SiteState::default(), SiteState::Empty);
    }

    #[test]
    fn colony_predicate() {
        assert!(SiteState::TypeA.is_colony());
        assert!(SiteState::TypeB.is_colony());
        assert!(!SiteState::Empty.is_colony());
        assert!(!SiteState::Obstacle.is_colony());
    }

    #[test]
    fn unknown_code_rejected() {
        assert_eq!(SiteState::try_from(4u8), Err(4));
        assert_eq!(SiteState::from_code(255), None);
    }

    proptest! {
        #[test]
        fn code_round_trips_for_known_codes(code in 0u8..4) {
            let state = SiteState::from_code(code).unwrap();
            prop_assert_eq!(u8::from(state), code);
        }
    }
}
