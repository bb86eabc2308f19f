use std::fmt;
use std::ptr::NonNull;

/// A single link in a [`LinkedList`](super::LinkedList).
///
/// A node owns its value and, while it is part of a list, the node that
/// follows it. Detached nodes travel as `Box<Node<T>>` and never carry a
/// `next` link, so handing one to another list keeps its allocation.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    /// Creates a detached node holding `value`
    ///
    /// # Arguments
    ///
    /// `value`: The value the node will own
    pub fn new(value: T) -> Self {
        Self { value, next: None }
    }

    /// Creates a detached, heap-allocated node ready to be handed to a list
    ///
    /// # Arguments
    ///
    /// `value`: The value the node will own
    pub fn boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// Get a reference to the contained value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Get a mutable reference to the contained value
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the node, returning its value
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the node following this one, if any. Always `None` for a
    /// detached node.
    pub fn next(&self) -> Option<&Node<T>> {
        // a linked `next` is owned by the same list that owns `self`, so it
        // lives at least as long as the borrow of `self`
        self.next.map(|next| unsafe { next.as_ref() })
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    // only the value: following `next` would walk the whole chain
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node").field("value", &self.value).finish()
    }
}

unsafe impl<T: Send> Send for Node<T> {}
unsafe impl<T: Sync> Sync for Node<T> {}
