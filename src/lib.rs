//! A singly linked list with head and tail pointers, a fixed-capacity hash
//! table that chains colliding keys through that list, and a stack adapter.

pub mod error;
pub mod hash;
pub mod hash_table;
pub mod list;
pub mod stack;

pub use error::{Error, Result};
pub use hash::{DefaultHash, Hash, StdHash};
pub use hash_table::{HashTable, KeyValueEntry, DEFAULT_CAPACITY};
pub use list::{LinkedList, Node};
pub use stack::Stack;
