//! [`BstSet`] similar to [`std::collections::BTreeSet`], backed by an
//! unbalanced binary search tree.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::mem;

use crate::collections::tree::{self, Tree};

/// An ordered set based on an unbalanced binary search tree.
///
/// Element order follows [`Ord`]. The tree never rebalances, so operations
/// are O(height): O(log n) on well-mixed insertion orders and O(n) when
/// elements arrive already sorted. [`len`] is computed by traversal.
///
/// # Guide to methods
///
/// Set Creation: [`new`]
///
/// Properties: [`len`], [`is_empty`], [`contains`]
///
/// Insertion: [`insert`], [`get_or_insert`], [`replace`]
///
/// Retrieve: [`get`], [`first`], [`last`]
///
/// Removal: [`remove`], [`take`], [`pop_first`], [`pop_last`]
///
/// Bulk: [`append`], [`merge`], [`retain`], [`clear`]
///
/// Iterators: [`iter`]
///
/// [`new`]: BstSet::new
/// [`len`]: BstSet::len
/// [`is_empty`]: BstSet::is_empty
/// [`contains`]: BstSet::contains
/// [`insert`]: BstSet::insert
/// [`get_or_insert`]: BstSet::get_or_insert
/// [`replace`]: BstSet::replace
/// [`get`]: BstSet::get
/// [`first`]: BstSet::first
/// [`last`]: BstSet::last
/// [`remove`]: BstSet::remove
/// [`take`]: BstSet::take
/// [`pop_first`]: BstSet::pop_first
/// [`pop_last`]: BstSet::pop_last
/// [`append`]: BstSet::append
/// [`merge`]: BstSet::merge
/// [`retain`]: BstSet::retain
/// [`clear`]: BstSet::clear
/// [`iter`]: BstSet::iter
///
/// # Examples
///
/// ```
/// use bstd::collections::BstSet;
///
/// let mut books = BstSet::new();
///
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
///
/// if !books.contains("The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.",
///              books.len());
/// }
///
/// books.remove("The Odyssey");
///
/// for book in &books {
///     println!("{book}");
/// }
/// ```
///
/// A `BstSet` with a known list of items can be initialized from an array:
///
/// ```
/// use bstd::collections::BstSet;
///
/// let set = BstSet::from([1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct BstSet<T> {
    tree: Tree<T>,
}

impl<T> BstSet<T> {
    /// Returns a new, empty `BstSet`.
    ///
    /// # Example
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// use bstd::collections::BstSet;
    ///
    /// let mut set: BstSet<i32> = BstSet::new();
    /// ```
    #[must_use]
    pub fn new() -> BstSet<T> {
        BstSet { tree: Tree::new() }
    }

    /// Returns the number of elements in the set, counted by traversal.
    ///
    /// # Example
    ///
    /// ```
    /// use bstd::collections::BstSet;
    ///
    /// let mut v = BstSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Does the set have any elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Clears the set, removing all elements.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Adds a value to the set. Returns whether the value was newly inserted;
    /// if an equal value was already present the set is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use bstd::collections::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        self.tree.insert_unique_by(value, T::cmp).1.is_none()
    }

    /// Adds a value to the set, replacing the existing element, if any, that
    /// is equal to the value. Returns the replaced element.
    ///
    /// # Example
    ///
    /// ```
    /// use bstd::collections::BstSet;
    ///
    /// let mut set = BstSet::new();
    /// set.insert(Vec::<i32>::new());
    ///
    /// assert_eq!(set.get(&[][..]).unwrap().capacity(), 0);
    /// set.replace(Vec::with_capacity(10));
    /// assert_eq!(set.get(&[][..]).unwrap().capacity(), 10);
    /// ```
    pub fn replace(&mut self, value: T) -> Option<T>
    where
        T: Ord,
    {
        let (id, rejected) = self.tree.insert_unique_by(value, T::cmp);
        rejected.map(|value| mem::replace(self.tree.entry_mut(id), value))
    }

    /// Inserts the given `value` into the set if it is not present, then
    /// returns a reference to the value in the set.
    ///
    /// # Example
    ///
    /// ```
    /// use bstd::collections::BstSet;
    ///
    /// let mut set = BstSet::from([1, 2, 3]);
    /// assert_eq!(set.get_or_insert(2), &2);
    /// assert_eq!(set.get_or_insert(100), &100);
    /// assert_eq!(set.len(), 4); // 100 was inserted
    /// ```
    pub fn get_or_insert(&mut self, value: T) -> &T
    where
        T: Ord,
    {
        let (id, _rejected) = self.tree.insert_unique_by(value, T::cmp);
        self.tree.entry(id)
    }

    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// The value may be any borrowed form of the set's element type,
    /// but the ordering on the borrowed form *must* match the
    /// ordering on the element type.
    ///
    /// # Example
    ///
    /// ```
    /// use bstd::collections::BstSet;
    ///
    /// let set = BstSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.get(value).is_some()
    }

    /// Returns a reference to the element in the set, if any, that is equal
    /// to the value.
    ///
    /// # Example
    ///
    /// ```
    /// use bstd::collections::BstSet;
    ///
    /// let set = BstSet::from([1, 2, 3]);
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        let id = self.tree.find_by(|e| value.cmp(e.borrow()))?;
        Some(self.tree.entry(id))
    }

    /// Returns a reference to the first ( smallest ) element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns a reference to the last ( largest ) element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Removes an element from the set. Returns whether it was present.
    ///
    /// # Example
    ///
    /// ```
    /// use bstd::collections::BstSet;
    ///
    /// let mut set = BstSet::new();
    ///
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.take(value).is_some()
    }

    /// Removes and returns the element equal to the value, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use bstd::collections::BstSet;
    ///
    /// let mut set = BstSet::from([1, 2, 3]);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        let id = self.tree.find_by(|e| value.cmp(e.borrow()))?;
        Some(self.tree.unlink(id))
    }

    /// Removes and returns the first ( smallest ) element.
    pub fn pop_first(&mut self) -> Option<T> {
        self.tree.pop_first()
    }

    /// Removes and returns the last ( largest ) element.
    pub fn pop_last(&mut self) -> Option<T> {
        self.tree.pop_last()
    }

    /// Retains only the elements for which the predicate returns `true`,
    /// visiting them in ascending order.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut id = self.tree.first_id();
        while id != self.tree.end_id() {
            let next = self.tree.successor(id);
            if !f(self.tree.entry(id)) {
                self.tree.unlink(id);
            }
            id = next;
        }
    }

    /// Moves all elements from `other` into `self`, leaving `other` empty.
    /// An element already present in `self` keeps the copy of `self` and the
    /// copy from `other` is dropped.
    pub fn append(&mut self, other: &mut BstSet<T>)
    where
        T: Ord,
    {
        let other = mem::replace(other, BstSet::new());
        for value in other {
            self.insert(value);
        }
    }

    /// Moves the elements of `other` that are not yet present into `self` by
    /// relinking their nodes, without copying the elements. Elements whose
    /// equal is already in `self` remain in `other`.
    ///
    /// If `self` is empty the whole tree of `other` is taken over in O(1).
    ///
    /// # Example
    ///
    /// ```
    /// use bstd::collections::BstSet;
    ///
    /// let mut a = BstSet::from([1, 2, 3]);
    /// let mut b = BstSet::from([3, 4, 5]);
    /// a.merge(&mut b);
    /// assert_eq!(a.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    /// assert_eq!(b.iter().copied().collect::<Vec<_>>(), [3]);
    /// ```
    pub fn merge(&mut self, other: &mut BstSet<T>)
    where
        T: Ord,
    {
        self.tree.merge_by(&mut other.tree, true, T::cmp);
    }

    /// Gets an iterator that visits the elements in ascending order.
    ///
    /// # Example
    ///
    /// ```
    /// use bstd::collections::BstSet;
    ///
    /// let set = BstSet::from([3, 1, 2]);
    /// let mut iter = set.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&3));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.tree.iter())
    }

    #[cfg(test)]
    pub(crate) fn check(&self)
    where
        T: Ord,
    {
        self.tree.check_by(T::cmp);
    }
}

impl<T> Default for BstSet<T> {
    /// Creates an empty `BstSet`.
    fn default() -> BstSet<T> {
        BstSet::new()
    }
}

impl<T: Debug> Debug for BstSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash> Hash for BstSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T: PartialEq> PartialEq for BstSet<T> {
    fn eq(&self, other: &BstSet<T>) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for BstSet<T> {}

impl<T: PartialOrd> PartialOrd for BstSet<T> {
    fn partial_cmp(&self, other: &BstSet<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for BstSet<T> {
    fn cmp(&self, other: &BstSet<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Ord> FromIterator<T> for BstSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> BstSet<T> {
        let mut set = BstSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BstSet<T> {
    fn from(arr: [T; N]) -> BstSet<T> {
        arr.into_iter().collect()
    }
}

impl<T: Ord> Extend<T> for BstSet<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Ord + Copy> Extend<&'a T> for BstSet<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a T>,
    {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for BstSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Convert `BstSet` to [`IntoIter`].
    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self.tree.into_iter())
    }
}

impl<'a, T> IntoIterator for &'a BstSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Iterator returned by [`BstSet::iter`].
pub struct Iter<'a, T>(tree::Iter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

impl<'a, T: Debug> Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.0.next()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.0.next_back()
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// Consuming iterator returned by [`BstSet::into_iter`].
pub struct IntoIter<T>(tree::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.0.next()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.next_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(feature = "serde")]
use serde::{
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for BstSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct BstSetVisitor<T> {
    marker: std::marker::PhantomData<fn() -> BstSet<T>>,
}

#[cfg(feature = "serde")]
impl<'de, T> Visitor<'de> for BstSetVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = BstSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("BstSet")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = BstSet::new();
        while let Some(value) = access.next_element()? {
            set.insert(value);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for BstSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(BstSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(test)]
mod mytests;
