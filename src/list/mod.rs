use crate::error::{Error, Result};
use crate::list::iter::{Iter, IterMut};
use itertools::Itertools;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

pub mod iter;
mod node;

pub use node::Node;

/// A singly linked list with head and tail pointers.
///
/// The list owns every node reachable from `head`. `tail` is a non-owning
/// pointer to the last of those nodes, which is what makes appending O(1).
/// Both are `None` exactly when the list is empty.
pub struct LinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Create a new, empty list.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Get the list's size
    pub fn len(&self) -> usize {
        self.len
    }

    /// If the list is empty or not
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Get a reference to the first node, if any
    ///
    /// # Return
    /// The head node if present, `None` if the list is empty.
    pub fn get_first(&self) -> Option<&Node<T>> {
        self.head.map(|head| unsafe { head.as_ref() })
    }

    /// Get a mutable reference to the first value, if any
    ///
    /// # Return
    /// A mutable reference to the head value if present, `None` if the list is empty.
    pub fn get_first_mut(&mut self) -> Option<&mut T> {
        self.head
            .map(|mut head| unsafe { head.as_mut() }.value_mut())
    }

    /// Get a reference to the last node, if any
    ///
    /// # Return
    /// The tail node if present, `None` if the list is empty.
    pub fn get_last(&self) -> Option<&Node<T>> {
        self.tail.map(|tail| unsafe { tail.as_ref() })
    }

    /// Inserts a new node holding `value` at the front of the list
    pub fn insert_first(&mut self, value: T) {
        self.insert_first_node(Node::boxed(value))
    }

    /// Takes ownership of `node` and makes it the new head. Whatever the
    /// node previously pointed at is replaced by the current head.
    ///
    /// # Arguments
    ///
    /// `node`: The node to link in
    pub fn insert_first_node(&mut self, node: Box<Node<T>>) {
        let mut node = NonNull::from(Box::leak(node));
        unsafe { node.as_mut() }.next = self.head;
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Takes ownership of `node` and makes it the new tail
    ///
    /// # Arguments
    ///
    /// `node`: The node to link in
    pub fn insert_last(&mut self, node: Box<Node<T>>) {
        let mut node = NonNull::from(Box::leak(node));
        unsafe { node.as_mut() }.next = None;
        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut() }.next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Inserts a new node holding `value` at the back of the list
    pub fn insert_last_value(&mut self, value: T) {
        self.insert_last(Node::boxed(value))
    }

    /// Detaches the first node and hands it to the caller
    ///
    /// # Return
    /// The old head, with no `next` link, or `Error::EmptyStructure` if the
    /// list is empty.
    pub fn remove_first(&mut self) -> Result<Box<Node<T>>> {
        let head = self.head.ok_or(Error::EmptyStructure)?;
        // every linked node was leaked from a box by one of the inserts
        let mut node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next.take();
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node)
    }

    /// Removes the first node, returning its value
    pub fn remove_first_value(&mut self) -> Result<T> {
        self.remove_first().map(|node| node.into_value())
    }

    /// Finds the first value equal to `probe`.
    ///
    /// Equality is whatever `T: PartialEq<Q>` says it is, so a list of
    /// key-value entries can be searched with a bare key.
    ///
    /// # Arguments
    ///
    /// `probe`: The value to compare against
    pub fn find<Q: ?Sized>(&self, probe: &Q) -> Option<&T>
    where
        T: PartialEq<Q>,
    {
        self.iter()
            .find(|value| <T as PartialEq<Q>>::eq(value, probe))
    }

    /// Finds the first value equal to `probe`, mutably
    ///
    /// # Arguments
    ///
    /// `probe`: The value to compare against
    pub fn find_mut<Q: ?Sized>(&mut self, probe: &Q) -> Option<&mut T>
    where
        T: PartialEq<Q>,
    {
        self.iter_mut()
            .find(|value| <T as PartialEq<Q>>::eq(value, probe))
    }

    /// Remove all elements from this list
    pub fn clear(&mut self) {
        // one node at a time; dropping the head box would recurse down the chain
        while self.remove_first().is_ok() {}
    }

    /// Return a forward iterator for this list
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            len: self.len,
            current_node: self.head,
            marker: PhantomData,
        }
    }

    /// Return a mutable forward iterator for this list
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            len: self.len,
            current_node: self.head,
            marker: PhantomData,
        }
    }
}

impl<T: fmt::Display> LinkedList<T> {
    /// The values from head to tail, separated by a single space
    pub fn list_to_string(&self) -> String {
        self.to_string()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().format(" "))
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert_last_value(item)
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}
