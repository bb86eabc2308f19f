use duplicate::duplicate_item;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Defines a hash function which should have good anti-collision
/// properties
pub trait Hash<T: ?Sized> {
    fn hash(val: &T) -> usize;
}

/// The default hash struct implemented for basic types
pub struct DefaultHash<T: ?Sized> {
    _ignore_type: PhantomData<T>,
}

// Integers hash to their own bit pattern, sign-extended and wrapped to `usize`
#[duplicate_item(
    int_type;
    [u8]; [i8]; [u16]; [i16]; [u32]; [i32]; [u64]; [i64];
    [u128]; [i128]; [usize]; [isize]; [bool]; [char];
)]
impl Hash<int_type> for DefaultHash<int_type> {
    fn hash(val: &int_type) -> usize {
        *val as usize
    }
}

/// The FNV1 hash function
///
/// # Arguments
///
/// `str`: The string to hash
fn fnv1<S: AsRef<str>>(str: S) -> usize {
    let mut res: u32 = 2166136261;
    str.as_ref()
        .bytes()
        .for_each(|c| res = (res.wrapping_mul(16777619)) ^ (c as u32));
    res as usize
}

impl Hash<str> for DefaultHash<str> {
    fn hash(val: &str) -> usize {
        fnv1(val)
    }
}

impl Hash<String> for DefaultHash<String> {
    fn hash(val: &String) -> usize {
        fnv1(val)
    }
}

impl<'a, T: ?Sized> Hash<&'a T> for DefaultHash<&'a T>
where
    DefaultHash<T>: Hash<T>,
{
    fn hash(val: &&'a T) -> usize {
        DefaultHash::<T>::hash(*val)
    }
}

/// An absent key hashes to 0
impl<T> Hash<Option<T>> for DefaultHash<Option<T>>
where
    DefaultHash<T>: Hash<T>,
{
    fn hash(val: &Option<T>) -> usize {
        val.as_ref().map_or(0, DefaultHash::<T>::hash)
    }
}

/// Hashes anything implementing `std::hash::Hash` with the standard
/// library's SipHash, keyed with zeros so the result is stable for the life
/// of the process.
pub struct StdHash<T: ?Sized> {
    _ignore_type: PhantomData<T>,
}

impl<T: std::hash::Hash + ?Sized> Hash<T> for StdHash<T> {
    fn hash(val: &T) -> usize {
        let mut hasher = DefaultHasher::new();
        std::hash::Hash::hash(val, &mut hasher);
        hasher.finish() as usize
    }
}

#[cfg(test)]
mod test {
    use super::{DefaultHash, Hash, StdHash};

    #[test]
    fn test_str() {
        assert_eq!(DefaultHash::hash(""), 2166136261);
        assert_eq!(DefaultHash::hash("Test"), 556965705);
        assert_eq!(
            DefaultHash::<String>::hash(&"Test".to_string()),
            556965705
        );
        assert_eq!(
            DefaultHash::hash("The big brown fox jumped over the lazy dog"),
            3003320415
        );
    }

    #[test]
    fn test_int() {
        assert_eq!(DefaultHash::<u32>::hash(&42), 42);
        assert_eq!(DefaultHash::<i32>::hash(&-1), usize::MAX);
        assert_eq!(DefaultHash::<bool>::hash(&true), 1);
        assert_eq!(DefaultHash::<&u8>::hash(&&7), 7);
    }

    #[test]
    fn test_option() {
        assert_eq!(DefaultHash::<Option<u32>>::hash(&None), 0);
        assert_eq!(DefaultHash::<Option<u32>>::hash(&Some(9)), 9);
    }

    #[test]
    fn test_std() {
        let key = (1u8, "pair");
        assert_eq!(
            StdHash::<(u8, &str)>::hash(&key),
            StdHash::<(u8, &str)>::hash(&(1, "pair"))
        );
    }
}
