use crate::error::{Error, Result};
use crate::list::iter::{Iter, IterMut};
use crate::list::{LinkedList, Node};
use std::fmt::{self, Debug, Display, Formatter};

/// A last-in, first-out data structure backed by a `LinkedList`.
///
/// The top of the stack is the head of the list.
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    /// Creates a new empty stack
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    /// Turns the `Stack` into its inner `LinkedList`
    pub fn into_inner(self) -> LinkedList<T> {
        self.list
    }

    /// Returns true if the stack contains no elements
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Produces an iterator over all of the elements from top to bottom
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Produces a mutable iterator over all of the elements from top to bottom
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.list.iter_mut()
    }

    /// Returns the number of elements in the stack
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Pops the element on top of the stack
    pub fn pop(&mut self) -> Result<T> {
        self.list.remove_first_value()
    }

    /// Pushes an element onto the stack
    pub fn push(&mut self, elem: T) {
        self.list.insert_first(elem);
    }

    /// Peeks the top element without popping it
    pub fn peek(&self) -> Result<&T> {
        self.list
            .get_first()
            .map(Node::value)
            .ok_or(Error::EmptyStructure)
    }

    /// Peeks the top element mutably without popping it
    pub fn peek_mut(&mut self) -> Result<&mut T> {
        self.list.get_first_mut().ok_or(Error::EmptyStructure)
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.list, f)
    }
}

/// The elements from top to bottom, separated by a single space
impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes the items in order, leaving the last one on top
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        iter.into_iter().for_each(|elem| stack.push(elem));
        stack
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::stack::Stack;

    #[test]
    fn push_pop() {
        let mut s = Stack::new();

        assert!(s.is_empty());
        assert_eq!(s.len(), 0);

        for i in 0..256 {
            s.push(i);
        }
        assert_eq!(s.peek(), Ok(&255));
        assert!(!s.is_empty());
        assert_eq!(s.len(), 256);

        for i in (0..256).rev() {
            assert_eq!(s.pop(), Ok(i));
        }

        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn empty() {
        let mut s = Stack::<u32>::new();
        assert_eq!(s.pop(), Err(Error::EmptyStructure));
        assert_eq!(s.peek(), Err(Error::EmptyStructure));
        assert_eq!(s.peek_mut(), Err(Error::EmptyStructure));
    }

    #[test]
    fn scenario() {
        let mut s = Stack::new();
        s.push(100);
        s.push(200);
        assert_eq!(s.len(), 2);
        assert_eq!(s.peek().unwrap().to_string(), "200");
        assert_eq!(s.pop().unwrap().to_string(), "200");

        s.push(300);
        s.push(400);
        assert_eq!(s.to_string(), "400 300 100");

        s.pop().unwrap();
        s.pop().unwrap();
        assert_eq!(s.to_string(), "100");

        s.pop().unwrap();
        assert!(s.is_empty());
        assert_eq!(s.to_string(), "");
    }

    #[test]
    fn peek_mut() {
        let mut s: Stack<String> = ["a", "b"].into_iter().map(String::from).collect();
        s.peek_mut().unwrap().push('!');
        assert_eq!(s.pop().as_deref(), Ok("b!"));
    }

    #[test]
    fn iter() {
        let s: Stack<i32> = (0..4).collect();
        itertools::assert_equal(s.iter(), &[3i32, 2, 1, 0]);
        let list = s.into_inner();
        assert_eq!(list.list_to_string(), "3 2 1 0");
    }
}
