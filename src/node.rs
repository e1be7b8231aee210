//! List nodes.
//!
//! A [`Node`] is a link header (`next`) followed by a payload of the caller's
//! type. Nodes are always handled through a `Box`, so the link header is the
//! exclusive owner of the rest of the chain.

use std::alloc::Layout;
use std::ptr::NonNull;

use crate::error::ListError;

/// The head slot of a chain: `None` for an empty list, otherwise the first node.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single list node holding one payload value.
///
/// A node is created detached (its `next` link is `None`) and joins a chain
/// only when it is appended or inserted.
///
/// # Examples
///
/// ```rust
/// use glist::Node;
///
/// let node = Node::try_new(42).unwrap();
/// assert_eq!(*node.value(), 42);
/// assert!(node.is_detached());
/// ```
pub struct Node<T> {
    pub(crate) next: Link<T>,
    pub(crate) value: T,
}

impl<T> Node<T> {
    /// Allocates a detached node holding `value`.
    ///
    /// Storage is requested from the global allocator without aborting on
    /// failure, so an exhausted allocator is reported to the caller instead of
    /// terminating the process.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Allocation`] if the node storage could not be
    /// obtained. `value` is dropped in that case.
    #[allow(unsafe_code)]
    pub fn try_new(value: T) -> Result<Box<Self>, ListError> {
        let layout = Layout::new::<Self>();

        // SAFETY:
        //
        // `Self` always contains a pointer-sized link, so `layout` has a
        // non-zero size.
        let raw = unsafe { std::alloc::alloc(layout) }.cast::<Self>();

        let Some(pointer) = NonNull::new(raw) else {
            tracing::warn!(size = layout.size(), "failed to allocate list node");
            return Err(ListError::Allocation {
                size: layout.size(),
            });
        };

        // SAFETY:
        //
        // `pointer` was just returned by the global allocator for the layout
        // of `Self`, so it is valid for writes and suitably aligned. After the
        // write it holds an initialized `Self`, and `Box` frees it through the
        // global allocator with that same layout.
        unsafe {
            pointer.as_ptr().write(Self { next: None, value });
            Ok(Box::from_raw(pointer.as_ptr()))
        }
    }

    /// Returns a reference to the payload.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the payload.
    #[inline]
    pub const fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Returns the next node, if any.
    #[inline]
    #[must_use]
    pub fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }

    /// Returns the next node mutably, if any.
    #[inline]
    pub fn next_mut(&mut self) -> Option<&mut Self> {
        self.next.as_deref_mut()
    }

    /// Returns `true` if this node links to nothing.
    #[inline]
    #[must_use]
    pub const fn is_detached(&self) -> bool {
        self.next.is_none()
    }

    /// Detaches and returns the chain that follows this node.
    #[inline]
    pub const fn take_next(&mut self) -> Link<T> {
        self.next.take()
    }

    /// Consumes the node, releasing its storage, and returns the payload.
    ///
    /// Any chain still linked behind the node is released as well.
    #[must_use]
    pub fn into_value(self: Box<Self>) -> T {
        let Self { next, value } = *self;
        release(next);
        value
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Node<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Node")
            .field("value", &self.value)
            .field("detached", &self.is_detached())
            .finish()
    }
}

/// Releases every node of `link` head to tail, returning how many were freed.
///
/// Dropping a `Box<Node<T>>` directly recurses once per node; this walks the
/// chain instead so its stack use does not grow with the length.
pub(crate) fn release<T>(link: Link<T>) -> usize {
    let mut current = link;
    let mut released = 0;
    while let Some(mut node) = current {
        current = node.next.take();
        released += 1;
    }
    released
}
