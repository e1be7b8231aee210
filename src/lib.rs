//! # glist
//!
//! A generic singly-linked list.
//!
//! ## Overview
//!
//! Each list node is a link header followed by a payload of the caller's type
//! `T`. The crate exposes the list at two levels:
//!
//! - **Chain operations** ([`chain`]): free functions over an explicit head
//!   (`Option<&Node<T>>`) or head slot (`&mut Link<T>`): `create_node`,
//!   `append`, `insert_at`, `delete_at`, `destroy`, `count`, `element_at`
//!   and `for_each`.
//! - **Owning handle** ([`GenericList`]): owns a head slot, delegates to the
//!   chain operations and implements the standard collection traits.
//!
//! Every fallible operation returns a [`ListError`] or a [`Status`]; both map
//! onto a fixed set of integer status codes.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`GenericList`]
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! Error paths emit [`tracing`] events (`warn` for rejected arguments,
//! `debug` for empty-list outcomes) and structural mutations emit `trace`
//! events. No subscriber is installed by the library.
//!
//! ## Example
//!
//! ```rust
//! use glist::{GenericList, Status};
//!
//! let mut list = GenericList::new();
//! for value in [10, 20, 30] {
//!     list.push(value).unwrap();
//! }
//!
//! let mut visited = Vec::new();
//! let status = list.for_each(|value, index| visited.push((index, *value)));
//! assert_eq!(status, Status::Success);
//! assert_eq!(visited, vec![(0, 10), (1, 20), (2, 30)]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod chain;
mod error;
mod list;
mod node;

pub use error::{
    ALLOCATION_CODE, EMPTY_LIST_CODE, ListError, NULL_HEAD_CODE, NULL_NODE_CODE, OutOfBounds,
    POSITION_OUT_OF_BOUNDS_CODE, SUCCESS_CODE, Status,
};
pub use list::{GenericList, IntoIter};
pub use node::{Link, Node};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use glist::prelude::*;
///
/// let list: GenericList<u8> = GenericList::new();
/// assert_eq!(chain::count(list.head()), 0);
/// ```
pub mod prelude {
    pub use crate::chain;
    pub use crate::{GenericList, Link, ListError, Node, OutOfBounds, Status};
}
