//! Chain adapter: the sequence operations separate chaining needs from a
//! per-bucket container.

use std::collections::{LinkedList, VecDeque};

/// Uniform operations over a per-bucket sequence container.
///
/// Elements keep their relative order: `append` pushes to the back and
/// `remove` closes the gap, so positions reported by a scan stay valid until
/// the chain is next modified.
pub trait Chain<T>: Default {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&T>;

    fn append(&mut self, item: T);

    /// Remove and return the element at `index`, or `None` if out of bounds.
    fn remove(&mut self, index: usize) -> Option<T>;
}

impl<T> Chain<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn append(&mut self, item: T) {
        Vec::push(self, item)
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        (index < Vec::len(self)).then(|| Vec::remove(self, index))
    }
}

impl<T> Chain<T> for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn append(&mut self, item: T) {
        VecDeque::push_back(self, item)
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        VecDeque::remove(self, index)
    }
}

impl<T> Chain<T> for LinkedList<T> {
    #[inline]
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    #[inline]
    fn append(&mut self, item: T) {
        LinkedList::push_back(self, item)
    }

    fn remove(&mut self, index: usize) -> Option<T> {
        if index >= LinkedList::len(self) {
            return None;
        }
        let mut tail = self.split_off(index);
        let item = tail.pop_front();
        LinkedList::append(self, &mut tail);
        item
    }
}
