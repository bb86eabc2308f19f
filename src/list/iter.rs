use crate::list::node::Node;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// Iterator over `LinkedList`, yielding references from head to tail
pub struct Iter<'a, T: 'a> {
    pub(crate) len: usize,
    pub(crate) current_node: Option<NonNull<Node<T>>>,
    pub(crate) marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current_node.map(|node| {
            let node = unsafe { node.as_ref() };
            self.len -= 1;
            self.current_node = node.next;
            node.value()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            current_node: self.current_node,
            marker: PhantomData,
        }
    }
}

/// Iterator over `LinkedList`, yielding mutable references from head to tail
pub struct IterMut<'a, T: 'a> {
    pub(crate) len: usize,
    pub(crate) current_node: Option<NonNull<Node<T>>>,
    pub(crate) marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current_node.map(|mut node| {
            let node = unsafe { node.as_mut() };
            self.len -= 1;
            self.current_node = node.next;
            node.value_mut()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}
