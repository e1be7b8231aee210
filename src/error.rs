//! Error and status types for list operations.
//!
//! Every fallible operation in this crate reports its outcome to the caller
//! through one of two types:
//!
//! - [`ListError`]: the operation failed and the chain was left untouched.
//! - [`Status`]: the operation succeeded, possibly with nothing to do
//!   ([`Status::EmptyList`]).
//!
//! Both map onto a fixed set of integer codes (see [`ListError::code`] and
//! [`Status::code`]) for callers that need to pass outcomes across a
//! boundary that only understands integers.

/// Code reported for a completed operation.
pub const SUCCESS_CODE: u8 = 0;
/// Code reported when an operation found the list already empty.
pub const EMPTY_LIST_CODE: u8 = 123;
/// Code reported for a position outside `[0, count)`.
pub const POSITION_OUT_OF_BOUNDS_CODE: u8 = 124;
/// Code reported for an absent node argument.
pub const NULL_NODE_CODE: u8 = 125;
/// Code reported for an absent head or head-slot argument.
pub const NULL_HEAD_CODE: u8 = 126;
/// Code reported when node storage could not be obtained.
pub const ALLOCATION_CODE: u8 = 127;

/// Details of a rejected position.
///
/// `position` is wide enough to hold both the signed positions taken by
/// `insert_at`/`delete_at` and the unsigned ones taken by `element_at`, so the
/// report always shows the position exactly as the caller passed it.
/// `max_index` is `None` when the list is empty: there is no valid index to
/// report, and the list length is carried in `total` instead.
///
/// # Examples
///
/// ```rust
/// use glist::OutOfBounds;
///
/// let report = OutOfBounds { position: -1, max_index: Some(0), total: 1 };
/// assert_eq!(
///     format!("{report}"),
///     "position -1 out of bounds (max index 0, total elements 1)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfBounds {
    /// The position the caller asked for.
    pub position: i128,
    /// The highest valid index, or `None` if the list is empty.
    pub max_index: Option<usize>,
    /// The number of elements in the list.
    pub total: usize,
}

impl OutOfBounds {
    /// Builds a report for `position` against a list of `total` elements.
    #[must_use]
    pub const fn new(position: i128, total: usize) -> Self {
        Self {
            position,
            max_index: total.checked_sub(1),
            total,
        }
    }
}

impl std::fmt::Display for OutOfBounds {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max_index {
            Some(max_index) => write!(
                formatter,
                "position {} out of bounds (max index {}, total elements {})",
                self.position, max_index, self.total
            ),
            None => write!(
                formatter,
                "position {} out of bounds (empty list, total elements {})",
                self.position, self.total
            ),
        }
    }
}

/// Errors reported by list operations.
///
/// No error leaves a chain partially modified: either the operation's
/// documented mutation happened in full, or the chain is exactly as it was
/// before the call.
///
/// # Examples
///
/// ```rust
/// use glist::{ListError, chain};
///
/// let error = chain::append::<i32>(None, &mut None).unwrap_err();
/// assert_eq!(error, ListError::NullHead);
/// assert_eq!(error.code(), 126);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// Storage for a node could not be obtained.
    Allocation {
        /// Size in bytes of the node that could not be allocated.
        size: usize,
    },
    /// A required head argument was absent.
    NullHead,
    /// A required reference to the head slot was absent.
    NullHeadRef,
    /// A required node argument was absent.
    NullNode,
    /// The requested position lies outside `[0, count)`.
    PositionOutOfBounds(OutOfBounds),
    /// The operation needs an element but the list is empty.
    EmptyList,
}

impl ListError {
    /// Returns the integer status code for this error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use glist::{ListError, OutOfBounds};
    ///
    /// assert_eq!(ListError::NullNode.code(), 125);
    /// assert_eq!(ListError::PositionOutOfBounds(OutOfBounds::new(3, 2)).code(), 124);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Allocation { .. } => ALLOCATION_CODE,
            Self::NullHead | Self::NullHeadRef => NULL_HEAD_CODE,
            Self::NullNode => NULL_NODE_CODE,
            Self::PositionOutOfBounds(_) => POSITION_OUT_OF_BOUNDS_CODE,
            Self::EmptyList => EMPTY_LIST_CODE,
        }
    }

    /// Returns `true` if this error only signals an empty list.
    #[must_use]
    pub const fn is_empty_list(&self) -> bool {
        matches!(self, Self::EmptyList)
    }
}

impl std::fmt::Display for ListError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Allocation { size } => {
                write!(formatter, "failed to allocate a list node of {size} bytes")
            }
            Self::NullHead => write!(formatter, "null head"),
            Self::NullHeadRef => write!(formatter, "null head reference"),
            Self::NullNode => write!(formatter, "null node"),
            Self::PositionOutOfBounds(report) => write!(formatter, "{report}"),
            Self::EmptyList => write!(formatter, "empty list"),
        }
    }
}

impl std::error::Error for ListError {}

impl From<OutOfBounds> for ListError {
    fn from(report: OutOfBounds) -> Self {
        Self::PositionOutOfBounds(report)
    }
}

/// Outcome of an operation that cannot fail once its arguments are present.
///
/// [`Status::EmptyList`] is informational: the operation was well defined but
/// had nothing to do, and the list was left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Status {
    /// The operation completed as documented.
    Success,
    /// The list was already empty.
    EmptyList,
}

impl Status {
    /// Returns the integer status code for this outcome.
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => SUCCESS_CODE,
            Self::EmptyList => EMPTY_LIST_CODE,
        }
    }

    /// Returns `true` for [`Status::Success`].
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(formatter, "success"),
            Self::EmptyList => write!(formatter, "empty list"),
        }
    }
}
