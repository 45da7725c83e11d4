//! Runs array-based sort functions over linked-list inputs.
//!
//! The list is flattened to a `Vec`, the wrapped function runs on that, and
//! the result (every frame of it, in traced mode) is rebuilt as a list.
//! Each boundary crossing costs O(n).

use crate::sequence::DoublyLinkedList;
use crate::trace::Trace;

/// Run an array sort over a linked list, returning a new list. The input
/// list is left untouched.
pub fn sort_linked<T, F>(list: &DoublyLinkedList<T>, sort: F) -> DoublyLinkedList<T>
where
    T: Clone,
    F: Fn(&[T]) -> Vec<T>,
{
    sort(&list.to_vec()).into_iter().collect()
}

/// Traced counterpart: every captured frame converts back to a list as it
/// is pulled.
pub fn sort_linked_traced<T, F>(list: &DoublyLinkedList<T>, sort: F) -> LinkedTrace<T>
where
    T: Clone,
    F: Fn(&[T]) -> Trace<T>,
{
    LinkedTrace {
        inner: sort(&list.to_vec()),
    }
}

/// View of a [`Trace`] whose frames materialize as linked lists.
#[derive(Debug)]
pub struct LinkedTrace<T> {
    inner: Trace<T>,
}

impl<T> LinkedTrace<T> {
    /// Terminal frame as a list; `None` only if already drained.
    pub fn into_final(self) -> Option<DoublyLinkedList<T>> {
        self.inner.into_final().map(|values| values.into_iter().collect())
    }
}

impl<T> Iterator for LinkedTrace<T> {
    type Item = DoublyLinkedList<T>;

    fn next(&mut self) -> Option<DoublyLinkedList<T>> {
        self.inner
            .next()
            .map(|step| step.into_values().into_iter().collect())
    }
}
