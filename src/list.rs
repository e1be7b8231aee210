//! Owning handle to a generic singly-linked list.
//!
//! This module provides [`GenericList`], which owns the head slot of a chain
//! of [`Node`]s and exposes the chain operations from [`crate::chain`] as
//! methods, together with the usual container traits.
//!
//! # Overview
//!
//! - O(1) `is_empty`, head access
//! - O(n) `push`, `len`, positional `get`, `insert_at` and `delete_at`
//! - Iterative teardown on drop and `destroy`, independent of length
//!
//! # Examples
//!
//! ```rust
//! use glist::GenericList;
//!
//! let mut list = GenericList::new();
//! list.push(10).unwrap();
//! list.push(20).unwrap();
//!
//! list.insert_at(1, 30).unwrap();
//! assert_eq!(list.to_string(), "[10, 30, 20]");
//!
//! assert_eq!(list.delete_at(1), Ok(30));
//! assert_eq!(list.to_string(), "[10, 20]");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

use crate::chain::{self, Iter, IterMut};
use crate::error::{ListError, Status};
use crate::node::{Link, Node, release};

/// A singly-linked list that owns its head slot.
///
/// An empty list holds no node at all. Every node is owned by its
/// predecessor, and the first node by the list.
///
/// # Time Complexity
///
/// | Operation   | Complexity |
/// |-------------|------------|
/// | `new`       | O(1)       |
/// | `is_empty`  | O(1)       |
/// | `first`     | O(1)       |
/// | `len`       | O(n)       |
/// | `push`      | O(n)       |
/// | `get`       | O(n)       |
/// | `insert_at` | O(n)       |
/// | `delete_at` | O(n)       |
/// | `destroy`   | O(n)       |
pub struct GenericList<T> {
    head: Link<T>,
}

impl<T> GenericList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use glist::GenericList;
    ///
    /// let list: GenericList<i32> = GenericList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Takes ownership of an existing chain.
    #[inline]
    #[must_use]
    pub const fn from_head(head: Link<T>) -> Self {
        Self { head }
    }

    /// Gives up ownership of the chain, leaving nothing to release on drop.
    #[inline]
    #[must_use]
    pub fn into_head(mut self) -> Link<T> {
        self.head.take()
    }

    /// Returns the first node, if any.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Returns the first node mutably, if any.
    #[inline]
    pub fn head_mut(&mut self) -> Option<&mut Node<T>> {
        self.head.as_deref_mut()
    }

    /// Returns the head slot itself, for use with the [`chain`] functions.
    #[inline]
    pub const fn head_slot_mut(&mut self) -> &mut Link<T> {
        &mut self.head
    }

    /// Returns `true` if the list holds no node.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// O(n), the length is not cached
    #[must_use]
    pub fn len(&self) -> usize {
        chain::count(self.head())
    }

    /// Returns a reference to the first element.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.head().map(Node::value)
    }

    /// Allocates a node for `element` and links it at the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Allocation`] if the node could not be allocated;
    /// the list is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use glist::GenericList;
    ///
    /// let mut list = GenericList::new();
    /// list.push("a").unwrap();
    /// list.push("b").unwrap();
    /// assert_eq!(list.get(1), Ok(&"b"));
    /// ```
    pub fn push(&mut self, element: T) -> Result<(), ListError> {
        let node = chain::create_node(element)?;
        self.append_node(node)
    }

    /// Links `node`, and any chain behind it, at the end of the list.
    ///
    /// On an empty list `node` becomes the head.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`chain::append`]; with a present node and a
    /// present head none can occur.
    pub fn append_node(&mut self, node: Box<Node<T>>) -> Result<(), ListError> {
        match self.head.as_deref_mut() {
            Some(head) => chain::append(Some(head), &mut Some(node)),
            None => {
                self.head = Some(node);
                Ok(())
            }
        }
    }

    /// Allocates a node for `element` and inserts it at `position`.
    ///
    /// Valid positions are `0..len()`; appending past the end is done with
    /// [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// - [`ListError::PositionOutOfBounds`] if `position` is negative or not
    ///   less than `len()`.
    /// - [`ListError::Allocation`] if the node could not be allocated.
    ///
    /// The list is unchanged on error and `element` is dropped. Use
    /// [`insert_node_at`](Self::insert_node_at) to keep a rejected node.
    pub fn insert_at(&mut self, position: isize, element: T) -> Result<(), ListError> {
        let node = chain::create_node(element)?;
        self.insert_node_at(position, &mut Some(node))
    }

    /// Inserts the node held in `node` at `position`.
    ///
    /// `node` is emptied only on success, so a rejected node stays with the
    /// caller.
    ///
    /// # Errors
    ///
    /// - Same bounds rules as [`insert_at`](Self::insert_at).
    /// - [`ListError::NullNode`] if `node` holds no node.
    pub fn insert_node_at(&mut self, position: isize, node: &mut Link<T>) -> Result<(), ListError> {
        chain::insert_at(&mut self.head, position, node)
    }

    /// Removes the element at `position` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::PositionOutOfBounds`] if `position` is negative or
    /// not less than `len()`; the list is unchanged.
    pub fn delete_at(&mut self, position: isize) -> Result<T, ListError> {
        chain::delete_at(&mut self.head, position)
    }

    /// Releases every element, head to tail, leaving the list empty.
    ///
    /// Returns [`Status::EmptyList`] if there was nothing to release.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use glist::{GenericList, Status};
    ///
    /// let mut list: GenericList<i32> = (1..=3).collect();
    /// assert_eq!(list.destroy(), Status::Success);
    /// assert_eq!(list.destroy(), Status::EmptyList);
    /// ```
    pub fn destroy(&mut self) -> Status {
        if self.head.is_none() {
            tracing::debug!("destroy: empty list");
            return Status::EmptyList;
        }
        let released = release(self.head.take());
        tracing::trace!(released, "destroy: list released");
        Status::Success
    }

    /// Returns a reference to the element at `position`.
    ///
    /// # Errors
    ///
    /// - [`ListError::EmptyList`] if the list is empty.
    /// - [`ListError::PositionOutOfBounds`] if `position >= len()`.
    pub fn get(&self, position: usize) -> Result<&T, ListError> {
        chain::element_at(self.head(), position)
    }

    /// Returns a mutable reference to the element at `position`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_mut(&mut self, position: usize) -> Result<&mut T, ListError> {
        chain::element_at_mut(self.head_mut(), position)
    }

    /// Calls `visitor` with every element and its index, head to tail.
    ///
    /// Returns [`Status::EmptyList`] without calling `visitor` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use glist::GenericList;
    ///
    /// let list: GenericList<i32> = vec![10, 20, 30].into_iter().collect();
    /// let mut lines = Vec::new();
    /// let _ = list.for_each(|value, index| lines.push(format!("{index}: {value}")));
    /// assert_eq!(lines, vec!["0: 10", "1: 20", "2: 30"]);
    /// ```
    pub fn for_each<F>(&self, visitor: F) -> Status
    where
        F: FnMut(&T, usize),
    {
        chain::for_each(self.head(), visitor)
    }

    /// Calls `visitor` once with the element at `position`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn print_element<F>(&self, position: usize, visitor: F) -> Result<(), ListError>
    where
        F: FnOnce(&T, usize),
    {
        chain::print_element(self.head(), position, visitor)
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        chain::iter(self.head())
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        chain::iter_mut(self.head_mut())
    }

    /// Detaches and returns the first element.
    fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|mut node| {
            self.head = node.take_next();
            node.into_value()
        })
    }
}

impl<T> Drop for GenericList<T> {
    fn drop(&mut self) {
        release(self.head.take());
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An owning iterator over the elements of a [`GenericList`].
pub struct IntoIter<T> {
    list: GenericList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for GenericList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for GenericList<T> {
    /// Collects elements in iteration order.
    ///
    /// # Panics
    ///
    /// Panics if a node cannot be allocated, like other standard collections.
    /// Use [`push`](GenericList::push) to handle allocation failure.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for GenericList<T> {
    /// Appends elements in iteration order.
    ///
    /// # Panics
    ///
    /// Panics if a node cannot be allocated.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        for element in iter {
            let node = match chain::create_node(element) {
                Ok(node) => node,
                Err(error) => panic!("glist: {error}"),
            };
            slot = &mut slot.insert(node).next;
        }
    }
}

impl<T> IntoIterator for GenericList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a GenericList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GenericList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Clone> Clone for GenericList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for GenericList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GenericList<T> {}

impl<T: Hash> Hash for GenericList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GenericList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for GenericList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for GenericList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct GenericListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> GenericListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for GenericListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = GenericList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        use serde::de::Error;

        let mut list = GenericList::new();
        while let Some(element) = seq.next_element()? {
            list.push(element).map_err(A::Error::custom)?;
        }
        Ok(list)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for GenericList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(GenericListVisitor::new())
    }
}
