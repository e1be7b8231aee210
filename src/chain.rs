//! Operations on raw chains of [`Node`]s.
//!
//! These functions take the head of a chain explicitly: a head reference for
//! reads and appends, or the head slot itself (`&mut Link<T>`) for operations
//! that may replace the first node. Absent arguments are modelled with
//! `Option`, so a missing head or node is reported as an error rather than
//! dereferenced.
//!
//! [`GenericList`](crate::GenericList) wraps a head slot and delegates to
//! these functions; use it unless you need to manage the head yourself.
//!
//! # Examples
//!
//! ```rust
//! use glist::{Link, chain};
//!
//! let mut head: Link<i32> = Some(chain::create_node(10).unwrap());
//! chain::append(head.as_deref_mut(), &mut Some(chain::create_node(20).unwrap())).unwrap();
//! chain::insert_at(&mut head, 1, &mut Some(chain::create_node(15).unwrap())).unwrap();
//!
//! let values: Vec<i32> = chain::iter(head.as_deref()).copied().collect();
//! assert_eq!(values, vec![10, 15, 20]);
//!
//! assert_eq!(chain::delete_at(&mut head, 0), Ok(10));
//! assert_eq!(chain::count(head.as_deref()), 2);
//! ```

use std::iter::FusedIterator;

use crate::error::{ListError, OutOfBounds, Status};
use crate::node::{Link, Node, release};

/// Allocates a detached node holding `value`.
///
/// # Errors
///
/// Returns [`ListError::Allocation`] if storage for the node could not be
/// obtained.
#[inline]
pub fn create_node<T>(value: T) -> Result<Box<Node<T>>, ListError> {
    Node::try_new(value)
}

/// Links the node in `node` behind the last node of the chain starting at `head`.
///
/// `node` is the caller's slot: it is emptied only once the node has been
/// linked, so on error the caller still owns the node and can retry with it.
/// The `next` link of the node is kept as is: if it already heads a chain,
/// that whole chain is spliced on.
///
/// # Errors
///
/// - [`ListError::NullHead`] if `head` is `None`.
/// - [`ListError::NullNode`] if `node` holds no node.
///
/// Neither the chain nor `node` is modified in either case.
///
/// # Complexity
///
/// O(n) where n = length of the chain at `head`
pub fn append<T>(head: Option<&mut Node<T>>, node: &mut Link<T>) -> Result<(), ListError> {
    let Some(head) = head else {
        tracing::warn!("append: null head");
        return Err(ListError::NullHead);
    };
    if node.is_none() {
        tracing::warn!("append: null node");
        return Err(ListError::NullNode);
    }

    *tail_slot(&mut head.next) = node.take();
    tracing::trace!("append: node linked at tail");
    Ok(())
}

/// Inserts the node in `node` so that it ends up at `position`.
///
/// Valid positions are `0..count`. Position `0` makes the node the new head;
/// any other position links it between the nodes previously at
/// `position - 1` and `position`. A chain previously linked behind the node
/// is released before it is spliced in.
///
/// `node` is the caller's slot and is emptied only on success.
///
/// # Errors
///
/// - [`ListError::PositionOutOfBounds`] if `position` is negative or not less
///   than the current count. An empty list has no valid position.
/// - [`ListError::NullNode`] if `node` holds no node.
///
/// Neither the chain nor `node` is modified in either case.
///
/// # Examples
///
/// ```rust
/// use glist::{Link, ListError, OutOfBounds, chain};
///
/// let mut head: Link<i32> = Some(chain::create_node(10).unwrap());
/// let mut node = Some(chain::create_node(99).unwrap());
/// let error = chain::insert_at(&mut head, -1, &mut node);
/// assert_eq!(
///     error,
///     Err(ListError::PositionOutOfBounds(OutOfBounds {
///         position: -1,
///         max_index: Some(0),
///         total: 1,
///     }))
/// );
///
/// // The rejected node is still ours.
/// chain::insert_at(&mut head, 0, &mut node).unwrap();
/// assert!(node.is_none());
/// assert_eq!(chain::count(head.as_deref()), 2);
/// ```
pub fn insert_at<T>(head_ref: &mut Link<T>, position: isize, node: &mut Link<T>) -> Result<(), ListError> {
    let index = checked_index(head_ref.as_deref(), position)?;
    let Some(mut node) = node.take() else {
        tracing::warn!(position, "insert_at: null node");
        return Err(ListError::NullNode);
    };

    release(node.next.take());

    let slot = slot_at(head_ref, index);
    node.next = slot.take();
    *slot = Some(node);
    tracing::trace!(position, "insert_at: node linked");
    Ok(())
}

/// Unlinks the node at `position`, releases its storage and returns its payload.
///
/// Position `0` advances the head to the second node, or to `None` if the
/// chain had a single node.
///
/// # Errors
///
/// Returns [`ListError::PositionOutOfBounds`] if `position` is negative or not
/// less than the current count. The chain is not modified.
pub fn delete_at<T>(head_ref: &mut Link<T>, position: isize) -> Result<T, ListError> {
    let index = checked_index(head_ref.as_deref(), position)?;

    let slot = slot_at(head_ref, index);
    match slot.take() {
        Some(mut removed) => {
            *slot = removed.next.take();
            tracing::trace!(position, "delete_at: node released");
            Ok(removed.into_value())
        }
        None => Err(OutOfBounds::new(position as i128, index).into()),
    }
}

/// Returns the number of nodes reachable from `head`.
///
/// # Complexity
///
/// O(n)
#[must_use]
pub fn count<T>(head: Option<&Node<T>>) -> usize {
    iter(head).count()
}

/// Releases every node of the chain in the slot, head to tail, and empties it.
///
/// Releasing is iterative, so arbitrarily long chains are torn down without
/// deep recursion. Calling this again on the emptied slot reports
/// [`Status::EmptyList`].
///
/// # Errors
///
/// Returns [`ListError::NullHeadRef`] if `head_ref` is `None`.
///
/// # Examples
///
/// ```rust
/// use glist::{Link, Status, chain};
///
/// let mut head: Link<&str> = Some(chain::create_node("only").unwrap());
/// assert_eq!(chain::destroy(Some(&mut head)), Ok(Status::Success));
/// assert!(head.is_none());
/// assert_eq!(chain::destroy(Some(&mut head)), Ok(Status::EmptyList));
/// ```
pub fn destroy<T>(head_ref: Option<&mut Link<T>>) -> Result<Status, ListError> {
    let Some(head_ref) = head_ref else {
        tracing::warn!("destroy: null head reference");
        return Err(ListError::NullHeadRef);
    };
    if head_ref.is_none() {
        tracing::debug!("destroy: empty list");
        return Ok(Status::EmptyList);
    }

    let released = release(head_ref.take());
    tracing::trace!(released, "destroy: list released");
    Ok(Status::Success)
}

/// Returns a reference to the payload at `position`.
///
/// # Errors
///
/// - [`ListError::EmptyList`] if `head` is `None`.
/// - [`ListError::PositionOutOfBounds`] if `position` is past the last node.
///
/// # Complexity
///
/// O(n) where n = position
pub fn element_at<T>(head: Option<&Node<T>>, position: usize) -> Result<&T, ListError> {
    if head.is_none() {
        tracing::debug!(position, "element_at: empty list");
        return Err(ListError::EmptyList);
    }
    iter(head)
        .nth(position)
        .ok_or_else(|| beyond_chain(position, count(head)))
}

/// Returns a mutable reference to the payload at `position`.
///
/// # Errors
///
/// Same as [`element_at`].
pub fn element_at_mut<T>(head: Option<&mut Node<T>>, position: usize) -> Result<&mut T, ListError> {
    let Some(head) = head else {
        tracing::debug!(position, "element_at_mut: empty list");
        return Err(ListError::EmptyList);
    };
    let total = count(Some(&*head));
    iter_mut(Some(head))
        .nth(position)
        .ok_or_else(|| beyond_chain(position, total))
}

/// Calls `visitor` with every payload and its zero-based index, head to tail.
///
/// Returns [`Status::EmptyList`] without calling `visitor` if `head` is
/// `None`.
///
/// # Examples
///
/// ```rust
/// use glist::{Status, chain};
///
/// let head = chain::create_node(1).unwrap();
/// let mut seen = Vec::new();
/// let status = chain::for_each(Some(&head), |value, index| seen.push((index, *value)));
/// assert_eq!(status, Status::Success);
/// assert_eq!(seen, vec![(0, 1)]);
///
/// assert_eq!(chain::for_each::<i32, _>(None, |_, _| {}), Status::EmptyList);
/// ```
pub fn for_each<T, F>(head: Option<&Node<T>>, mut visitor: F) -> Status
where
    F: FnMut(&T, usize),
{
    if head.is_none() {
        tracing::debug!("for_each: empty list");
        return Status::EmptyList;
    }

    for (index, value) in iter(head).enumerate() {
        visitor(value, index);
    }
    Status::Success
}

/// Calls `visitor` once with the payload at `position` and that position.
///
/// # Errors
///
/// Same as [`element_at`]. `visitor` is not called on error.
pub fn print_element<T, F>(head: Option<&Node<T>>, position: usize, visitor: F) -> Result<(), ListError>
where
    F: FnOnce(&T, usize),
{
    let value = element_at(head, position)?;
    visitor(value, position);
    Ok(())
}

/// Returns a forward iterator over the payloads of the chain at `head`.
#[inline]
#[must_use]
pub const fn iter<T>(head: Option<&Node<T>>) -> Iter<'_, T> {
    Iter { current: head }
}

/// Returns a forward iterator over mutable payloads of the chain at `head`.
#[inline]
pub const fn iter_mut<T>(head: Option<&mut Node<T>>) -> IterMut<'_, T> {
    IterMut { current: head }
}

// =============================================================================
// Helpers
// =============================================================================

/// Validates `position` against `[0, count)` and converts it to an index.
fn checked_index<T>(head: Option<&Node<T>>, position: isize) -> Result<usize, ListError> {
    let total = count(head);
    match usize::try_from(position) {
        Ok(index) if index < total => Ok(index),
        _ => {
            let report = OutOfBounds::new(position as i128, total);
            tracing::warn!(
                position,
                max_index = ?report.max_index,
                total,
                "position out of bounds"
            );
            Err(report.into())
        }
    }
}

fn beyond_chain(position: usize, total: usize) -> ListError {
    let report = OutOfBounds::new(position as i128, total);
    tracing::warn!(
        position,
        max_index = ?report.max_index,
        total,
        "position out of bounds"
    );
    report.into()
}

/// Returns the slot holding the node at `index`, or the terminal slot if the
/// chain is shorter.
fn slot_at<T>(head_ref: &mut Link<T>, index: usize) -> &mut Link<T> {
    let mut slot = head_ref;
    for _ in 0..index {
        match slot {
            Some(node) => slot = &mut node.next,
            None => break,
        }
    }
    slot
}

/// Returns the empty slot behind the last node.
fn tail_slot<T>(head_ref: &mut Link<T>) -> &mut Link<T> {
    let mut slot = head_ref;
    while let Some(node) = slot {
        slot = &mut node.next;
    }
    slot
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the payloads of a chain.
///
/// Created by [`iter`] and [`GenericList::iter`](crate::GenericList::iter).
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            &node.value
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
        }
    }
}

/// An iterator over mutable references to the payloads of a chain.
///
/// Created by [`iter_mut`] and
/// [`GenericList::iter_mut`](crate::GenericList::iter_mut).
pub struct IterMut<'a, T> {
    current: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|node| {
            self.current = node.next.as_deref_mut();
            &mut node.value
        })
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}
