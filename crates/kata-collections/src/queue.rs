// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Singly linked FIFO queue over an index arena.
//!
//! ```text
//!  head                 tail
//!   |                    |
//!   v                    v
//! [ A ] -> [ B ] -> [ C ] -> None
//! ```
//!
//! Nodes are stored in slots of a `Vec` and link to their successor through a
//! `NodeIndex` instead of a pointer. Each node is reachable from exactly one
//! place: its predecessor's `next`, or `head` for the first node. Dequeuing
//! moves the value out, resets the whole slot (so the detached node keeps no
//! link into the rest of the chain) and threads the slot onto a free list that
//! later enqueues reuse. A queue that is drained and refilled therefore does
//! not grow its arena.
//!
//! The queue maintains the following invariant after every operation:
//!
//! - `head` is `None` if and only if `tail` is `None` if and only if `len == 0`.
//! - Following `next` from `head` reaches `tail` in exactly `len - 1` steps,
//!   and `tail` has no successor.
//! - Exactly `len` slots are occupied.
//!
//! Debug builds re-check it after each mutation.

use kata_core::utils::index::{TypedIndex, TypedIndexTag};
use std::iter::FusedIterator;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NodeIndexTag;

impl TypedIndexTag for NodeIndexTag {
    const NAME: &'static str = "NodeIndex";
}

/// A typed index addressing a node slot inside a `Queue`.
pub type NodeIndex = TypedIndex<NodeIndexTag>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeIndex>,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeIndex> },
}

/// A first-in, first-out queue.
///
/// # Examples
///
/// ```rust
/// # use kata_collections::queue::Queue;
/// let mut queue = Queue::new();
/// queue.enqueue('a');
/// queue.enqueue('b');
/// queue.enqueue('c');
///
/// assert_eq!(queue.len(), 3);
/// assert_eq!(queue.peek(), Some(&'a'));
/// assert_eq!(queue.dequeue(), Some('a'));
/// assert_eq!(queue.dequeue(), Some('b'));
/// assert_eq!(queue.dequeue(), Some('c'));
/// assert_eq!(queue.dequeue(), None);
/// assert_eq!(queue.peek(), None);
/// ```
#[derive(Clone)]
pub struct Queue<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<NodeIndex>,
    head: Option<NodeIndex>,
    tail: Option<NodeIndex>,
    len: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates a new, empty `Queue`. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates a new, empty `Queue` with room for `capacity` elements
    /// before the arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the queue can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Removes all elements. Keeps the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Appends `item` at the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        let index = self.allocate(Node {
            value: item,
            next: None,
        });

        match self.tail {
            Some(tail) => {
                if let Some(node) = self.node_mut(tail) {
                    node.next = Some(index);
                }
            }
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;

        debug_assert!(
            self.is_consistent(),
            "called `Queue::enqueue` leaving head, tail and len out of sync"
        );
    }

    /// Removes the element at the front of the queue and returns it,
    /// or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let head = self.head?;
        let Node { value, next } = self.release(head)?;

        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;

        debug_assert!(
            self.is_consistent(),
            "called `Queue::dequeue` leaving head, tail and len out of sync"
        );
        Some(value)
    }

    /// Returns a reference to the element at the front of the queue,
    /// or `None` if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.head
            .and_then(|head| self.node(head))
            .map(|node| &node.value)
    }

    /// Returns a mutable reference to the element at the front of the queue,
    /// or `None` if the queue is empty.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        let head = self.head?;
        self.node_mut(head).map(|node| &mut node.value)
    }

    /// Returns a reference to the element at the back of the queue,
    /// or `None` if the queue is empty.
    #[inline]
    pub fn peek_back(&self) -> Option<&T> {
        self.tail
            .and_then(|tail| self.node(tail))
            .map(|node| &node.value)
    }

    /// Returns an iterator over the elements from front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            cursor: self.head,
            remaining: self.len,
        }
    }

    #[inline]
    fn node(&self, index: NodeIndex) -> Option<&Node<T>> {
        let slot = self.slots.get(index.get());
        debug_assert!(
            matches!(slot, Some(Slot::Occupied(_))),
            "called `Queue::node` with index {} that does not hold a node",
            index
        );

        match slot {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    #[inline]
    fn node_mut(&mut self, index: NodeIndex) -> Option<&mut Node<T>> {
        let slot = self.slots.get_mut(index.get());
        debug_assert!(
            matches!(slot, Some(Slot::Occupied(_))),
            "called `Queue::node_mut` with index {} that does not hold a node",
            index
        );

        match slot {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Stores `node` in a free slot, reusing a released one if available.
    fn allocate(&mut self, node: Node<T>) -> NodeIndex {
        if let Some(free) = self.free_head {
            let slot = self.slots.get_mut(free.get());
            debug_assert!(
                matches!(slot, Some(Slot::Vacant { .. })),
                "free list of `Queue` points at slot {} that is not vacant",
                free
            );

            if let Some(slot) = slot {
                if let Slot::Vacant { next_free } = *slot {
                    self.free_head = next_free;
                    *slot = Slot::Occupied(node);
                    return free;
                }
            }
        }

        let index = NodeIndex::new(self.slots.len());
        self.slots.push(Slot::Occupied(node));
        index
    }

    /// Takes the node out of `index` and threads the slot onto the free list.
    fn release(&mut self, index: NodeIndex) -> Option<Node<T>> {
        let slot = self.slots.get_mut(index.get())?;
        debug_assert!(
            matches!(slot, Slot::Occupied(_)),
            "called `Queue::release` with index {} that does not hold a node",
            index
        );
        if !matches!(slot, Slot::Occupied(_)) {
            return None;
        }

        let taken = std::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(index);

        match taken {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    /// Checks the head/tail/len invariant by walking the chain.
    fn is_consistent(&self) -> bool {
        let occupied = self
            .slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied(_)))
            .count();
        if occupied != self.len {
            return false;
        }

        match (self.head, self.tail) {
            (None, None) => self.len == 0,
            (Some(head), Some(tail)) => {
                let mut cursor = head;
                for _ in 1..self.len {
                    match self.node(cursor).and_then(|node| node.next) {
                        Some(next) => cursor = next,
                        None => return false,
                    }
                }
                cursor == tail && self.node(tail).is_some_and(|node| node.next.is_none())
            }
            _ => false,
        }
    }
}

impl<T> std::fmt::Debug for Queue<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> std::fmt::Display for Queue<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T> PartialEq for Queue<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Queue<T> where T: Eq {}

impl<T> Extend<T> for Queue<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        let iter = iter.into_iter();
        self.slots.reserve(iter.size_hint().0);
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

/// Borrowing iterator over a `Queue`, front to back.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    cursor: Option<NodeIndex>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        match self.slots.get(index.get()) {
            Some(Slot::Occupied(node)) => {
                self.cursor = node.next;
                self.remaining -= 1;
                Some(&node.value)
            }
            _ => {
                self.cursor = None;
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a `Queue`, dequeuing front to back.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    queue: Queue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[test]
    fn test_new_queue_is_empty() {
        let queue: Queue<i32> = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.peek_back(), None);
        assert_eq!(queue.capacity(), 0);
    }

    #[test]
    fn test_dequeue_and_peek_on_empty_return_none() {
        let mut queue: Queue<String> = Queue::default();
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.peek_mut(), None);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        queue.enqueue("c");

        assert_eq!(queue.dequeue(), Some("a"));
        assert_eq!(queue.dequeue(), Some("b"));
        assert_eq!(queue.dequeue(), Some("c"));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_single_element_is_head_and_tail() {
        let mut queue = Queue::new();
        queue.enqueue(7);
        assert_eq!(queue.peek(), Some(&7));
        assert_eq!(queue.peek_back(), Some(&7));
        assert_eq!(queue.head, queue.tail);

        assert_eq!(queue.dequeue(), Some(7));
        assert!(queue.head.is_none());
        assert!(queue.tail.is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_peek_does_not_change_state() {
        let mut queue: Queue<u32> = (1..=3).collect();
        for _ in 0..5 {
            assert_eq!(queue.peek(), Some(&1));
        }
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.peek(), Some(&2));
        assert_eq!(queue.peek_back(), Some(&3));
    }

    #[test]
    fn test_peek_mut_modifies_front() {
        let mut queue: Queue<i32> = [10, 20].into_iter().collect();
        if let Some(front) = queue.peek_mut() {
            *front += 5;
        }
        assert_eq!(queue.dequeue(), Some(15));
        assert_eq!(queue.dequeue(), Some(20));
    }

    #[test]
    fn test_len_tracks_enqueues_minus_dequeues() {
        let mut queue = Queue::new();
        for i in 0..10 {
            queue.enqueue(i);
        }
        for _ in 0..4 {
            queue.dequeue();
        }
        assert_eq!(queue.len(), 6);
        assert_eq!(queue.peek(), Some(&4));
    }

    #[test]
    fn test_interleaved_after_emptying() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        assert_eq!(queue.dequeue(), Some(1));
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Some(2));
        queue.enqueue(4);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn test_released_slots_are_reused() {
        let mut queue = Queue::with_capacity(4);
        for round in 0..1000 {
            queue.enqueue(round);
            queue.enqueue(round + 1);
            assert_eq!(queue.dequeue(), Some(round));
            assert_eq!(queue.dequeue(), Some(round + 1));
        }
        assert!(queue.is_empty());
        assert!(queue.slots.len() <= 2);
    }

    #[test]
    fn test_dequeue_detaches_node() {
        let mut queue: Queue<i32> = (0..3).collect();
        let head = queue.head.expect("queue has a head");
        queue.dequeue();

        match &queue.slots[head.get()] {
            Slot::Vacant { .. } => {}
            Slot::Occupied(node) => panic!("dequeued slot still holds node {:?}", node),
        }
        assert_eq!(queue.free_head, Some(head));
    }

    #[test]
    fn test_dequeue_hands_out_value_and_clear_drops_rest() {
        let token = Rc::new(());
        let mut queue = Queue::new();
        for _ in 0..5 {
            queue.enqueue(Rc::clone(&token));
        }
        assert_eq!(Rc::strong_count(&token), 6);

        let first = queue.dequeue();
        assert_eq!(Rc::strong_count(&token), 6);
        drop(first);
        assert_eq!(Rc::strong_count(&token), 5);

        queue.clear();
        assert_eq!(Rc::strong_count(&token), 1);
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_drop_releases_all_values() {
        let token = Rc::new(());
        {
            let queue: Queue<Rc<()>> = (0..8).map(|_| Rc::clone(&token)).collect();
            assert_eq!(queue.len(), 8);
        }
        assert_eq!(Rc::strong_count(&token), 1);
    }

    #[test]
    fn test_iterators() {
        let queue: Queue<i32> = (1..=4).collect();

        let mut iter = queue.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.len(), 3);

        let borrowed: Vec<i32> = (&queue).into_iter().copied().collect();
        assert_eq!(borrowed, vec![1, 2, 3, 4]);

        let mut owned = queue.clone().into_iter();
        assert_eq!(owned.len(), 4);
        assert_eq!(owned.next(), Some(1));
        assert_eq!(owned.collect::<Vec<_>>(), vec![2, 3, 4]);

        // The clone was consumed; the original is untouched.
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn test_extend_appends_at_tail() {
        let mut queue: Queue<i32> = vec![1, 2].into_iter().collect();
        queue.extend([3, 4, 5]);
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_equality_ignores_arena_layout() {
        let mut churned = Queue::new();
        churned.extend([0, 0, 1, 2]);
        churned.dequeue();
        churned.dequeue();
        churned.enqueue(3);

        let fresh: Queue<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(churned, fresh);

        let shorter: Queue<i32> = [1, 2].into_iter().collect();
        assert_ne!(churned, shorter);
    }

    #[test]
    fn test_display_and_debug() {
        let queue: Queue<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(format!("{}", queue), "[1 -> 2 -> 3]");
        assert_eq!(format!("{:?}", queue), "[1, 2, 3]");

        let empty: Queue<i32> = Queue::new();
        assert_eq!(format!("{}", empty), "[]");
    }

    #[test]
    fn test_matches_vec_deque_under_random_operations() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x0123_4567);
        let mut queue = Queue::new();
        let mut model = VecDeque::new();

        for step in 0..5_000_u32 {
            match rng.random_range(0..3) {
                0 | 1 => {
                    queue.enqueue(step);
                    model.push_back(step);
                }
                _ => assert_eq!(queue.dequeue(), model.pop_front()),
            }

            assert_eq!(queue.len(), model.len());
            assert_eq!(queue.peek(), model.front());
            assert_eq!(queue.peek_back(), model.back());
        }

        assert!(queue.iter().eq(model.iter()));
        assert!(queue.is_consistent());
    }

    #[test]
    fn test_queue_is_send_and_sync_for_send_sync_items() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Queue<u64>>();
        assert_send_sync::<Queue<String>>();
    }
}
