//! # Separate Chaining Course Table
//!
//! This module implements the planner's core store: a hash table with
//! **separate chaining**, keyed by course id. It supports:
//! - **Insert** (always succeeds, duplicates allowed — a repeated id shadows
//!   rather than replaces),
//! - **Search** by exact, case-sensitive id,
//! - **Sorted export** of every stored course,
//! - **Automatic growth** into a prime-sized table once the load factor
//!   reaches 1.0.
//!
//! The hash function is deliberately naive (sum each byte, square the
//! accumulator at every step, wrap on overflow): bucket placement is part of
//! the table's observable, deterministic behavior and must not be "improved".
//! Collisions chain off the bucket head, which lives inline in the bucket
//! vector; overflow nodes are boxed and owned by their predecessor, so a
//! whole chain drops transitively with the table.

use log::debug;

use crate::catalog::Course;

/// Default number of buckets when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 179;

/// One entry in a bucket's chain.
#[derive(Debug)]
struct Node {
    course: Course,
    next: Option<Box<Node>>,
}

impl Node {
    fn new(course: Course) -> Self {
        Node { course, next: None }
    }

    /// Appends at the chain tail, keeping insertion order.
    fn push_tail(&mut self, course: Course) {
        match self.next {
            Some(ref mut next) => next.push_tail(course),
            None => self.next = Some(Box::new(Node::new(course))),
        }
    }
}

/// A separate-chaining hash table of [`Course`] records keyed by course id.
#[derive(Debug)]
pub struct ChainedHashTable {
    /// Chain heads, inline. `None` means the bucket was never used.
    buckets: Vec<Option<Node>>,
    /// Number of buckets.
    capacity: usize,
    /// Number of stored courses, duplicates included.
    count: usize,
}

impl Default for ChainedHashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainedHashTable {
    /// Creates a table with the default capacity of 179 buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a table with an explicit initial bucket count (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        ChainedHashTable {
            buckets,
            capacity,
            count: 0,
        }
    }

    /// Returns the number of stored courses, duplicates included.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no courses are stored.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the current bucket count.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts a course. Never fails and never deduplicates: a course whose
    /// id is already present is appended to the same chain, where the
    /// earlier entry shadows it on lookup.
    ///
    /// If the insert pushes the load factor to 1.0 the table grows before
    /// returning, so an individual call can be much slower than O(1).
    pub fn insert(&mut self, course: Course) {
        let index = hash(&course.course_id, self.capacity);
        match self.buckets[index] {
            Some(ref mut head) => head.push_tail(course),
            None => self.buckets[index] = Some(Node::new(course)),
        }
        self.count += 1;

        if self.count as f64 / self.capacity as f64 >= 1.0 {
            self.resize();
        }
    }

    /// Looks up a course by exact, case-sensitive id. Walks the chain
    /// head-first, so with duplicate ids the first one inserted wins.
    pub fn search(&self, course_id: &str) -> Option<&Course> {
        let index = hash(course_id, self.capacity);
        let mut node = self.buckets[index].as_ref()?;
        loop {
            if node.course.course_id == course_id {
                return Some(&node.course);
            }
            node = node.next.as_deref()?;
        }
    }

    /// Returns every stored course, sorted by id. Duplicates appear once
    /// each; equal ids keep bucket-then-chain order (the sort is stable), so
    /// repeated calls without an intervening insert are identical.
    pub fn all_sorted(&self) -> Vec<Course> {
        let mut courses = Vec::with_capacity(self.count);
        for bucket in &self.buckets {
            let mut node = bucket.as_ref();
            while let Some(current) = node {
                courses.push(current.course.clone());
                node = current.next.as_deref();
            }
        }
        courses.sort_by(|a, b| a.course_id.cmp(&b.course_id));
        courses
    }

    /// Grows into the smallest prime capacity strictly above double the
    /// current one and re-inserts every course through the ordinary insert
    /// path, old-bucket-then-chain order. Each re-insert re-checks the load
    /// factor, so re-entrant growth is tolerated even though the chosen
    /// capacity makes it unreachable in practice.
    fn resize(&mut self) {
        let new_capacity = next_prime_above(self.capacity * 2);
        debug!(
            "resizing course table: {} -> {} buckets ({} entries)",
            self.capacity, new_capacity, self.count
        );

        let mut fresh = Vec::with_capacity(new_capacity);
        fresh.resize_with(new_capacity, || None);
        let old_buckets = std::mem::replace(&mut self.buckets, fresh);
        self.capacity = new_capacity;
        self.count = 0;

        for slot in old_buckets {
            let Some(head) = slot else { continue };
            self.insert(head.course);
            let mut node = head.next;
            while let Some(boxed) = node {
                let Node { course, next } = *boxed;
                self.insert(course);
                node = next;
            }
        }
    }
}

/// Maps a course id to a bucket index in `[0, capacity)`.
///
/// Reproduces the reference behavior exactly: a 32-bit unsigned accumulator
/// starts at 0, and for each byte of the key the byte value is added and the
/// accumulator is then squared. Overflow wraps; the resulting clustering is
/// accepted, deterministic behavior.
fn hash(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "table capacity must be positive");
    let mut acc: u32 = 0;
    for &byte in key.as_bytes() {
        acc = acc.wrapping_add(u32::from(byte));
        acc = acc.wrapping_mul(acc);
    }
    acc as usize % capacity
}

/// Smallest prime strictly greater than `n`, by trial division. Each
/// candidate is scanned against every divisor from 2 up to `candidate / 2`,
/// and the scan restarts from 2 after the candidate is bumped.
fn next_prime_above(n: usize) -> usize {
    let mut candidate = n + 1;
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    for divisor in 2..=n / 2 {
        if n % divisor == 0 {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn course(id: &str, title: &str) -> Course {
        Course {
            course_id: id.to_string(),
            title: title.to_string(),
            prerequisites: Vec::new(),
        }
    }

    #[test]
    fn hash_is_deterministic_and_in_range() {
        for key in ["CS101", "MATH201", "", "a", "WEBPROG400"] {
            let first = hash(key, DEFAULT_CAPACITY);
            assert_eq!(first, hash(key, DEFAULT_CAPACITY));
            assert!(first < DEFAULT_CAPACITY);
        }
    }

    #[test]
    fn hash_wraps_on_long_keys() {
        // Squaring every step overflows a u32 within a few bytes; wrapping
        // must keep the result in range instead of panicking.
        let long_key = "X".repeat(300);
        assert!(hash(&long_key, 179) < 179);
    }

    #[test]
    fn insert_and_search() {
        let mut table = ChainedHashTable::new();
        assert!(table.is_empty());

        table.insert(course("CS101", "Intro to Programming"));
        table.insert(course("CS102", "Programming Concepts"));
        table.insert(course("MATH201", "Discrete Mathematics"));

        assert_eq!(table.len(), 3);
        assert_eq!(table.capacity(), DEFAULT_CAPACITY);

        let found = table.search("CS101").unwrap();
        assert_eq!(found.title, "Intro to Programming");
        assert!(table.search("CS999").is_none());
        // Case-sensitive: no folding happens in the table.
        assert!(table.search("cs101").is_none());
    }

    #[test]
    fn all_sorted_orders_by_id() {
        let mut table = ChainedHashTable::new();
        table.insert(course("MATH201", "Discrete Mathematics"));
        table.insert(course("CS102", "Programming Concepts"));
        table.insert(course("CS101", "Intro to Programming"));

        let sorted = table.all_sorted();
        let ids: Vec<&str> = sorted.iter().map(|c| c.course_id.as_str()).collect();
        assert_eq!(ids, vec!["CS101", "CS102", "MATH201"]);
    }

    #[test]
    fn all_sorted_is_idempotent() {
        let mut table = ChainedHashTable::new();
        table.insert(course("CS200", "Algorithms"));
        table.insert(course("CS100", "Intro"));
        assert_eq!(table.all_sorted(), table.all_sorted());

        let empty = ChainedHashTable::new();
        assert!(empty.all_sorted().is_empty());
    }

    #[test]
    fn duplicate_id_shadows() {
        let mut table = ChainedHashTable::new();
        table.insert(course("CS101", "first"));
        table.insert(course("CS101", "second"));

        assert_eq!(table.len(), 2);
        assert_eq!(table.search("CS101").unwrap().title, "first");

        let sorted = table.all_sorted();
        assert_eq!(sorted.len(), 2);
        assert_eq!(sorted[0].course_id, "CS101");
        assert_eq!(sorted[1].course_id, "CS101");
        assert_eq!(sorted[0].title, "first");
        assert_eq!(sorted[1].title, "second");
    }

    #[test]
    fn resize_at_full_load() {
        let mut table = ChainedHashTable::with_capacity(3);
        table.insert(course("CS101", "Intro to Programming"));
        table.insert(course("CS102", "Programming Concepts"));
        assert_eq!(table.capacity(), 3);

        // Third insert brings the load factor to 1.0.
        table.insert(course("MATH201", "Discrete Mathematics"));
        assert_eq!(table.capacity(), 7);
        assert!(is_prime(table.capacity()));
        assert_eq!(table.len(), 3);

        for id in ["CS101", "CS102", "MATH201"] {
            assert!(table.search(id).is_some(), "{id} lost in resize");
        }
    }

    #[test]
    fn duplicate_order_survives_resize() {
        let mut table = ChainedHashTable::with_capacity(3);
        table.insert(course("CS101", "first"));
        table.insert(course("CS101", "second"));
        table.insert(course("CS102", "filler"));
        assert!(table.capacity() > 3);

        // Rehashing replays each old chain in order, so the original first
        // entry is still the one a lookup finds.
        assert_eq!(table.search("CS101").unwrap().title, "first");
    }

    #[test]
    fn repeated_growth_keeps_everything() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut ids: Vec<String> = (0..500).map(|i| format!("C{i:04}")).collect();
        ids.shuffle(&mut rng);

        let mut table = ChainedHashTable::with_capacity(3);
        for id in &ids {
            table.insert(course(id, "title"));
        }

        assert_eq!(table.len(), 500);
        assert!(table.capacity() > 500);
        assert!(is_prime(table.capacity()));
        for id in &ids {
            assert_eq!(table.search(id).unwrap().course_id, *id);
        }

        let sorted = table.all_sorted();
        assert_eq!(sorted.len(), 500);
        assert!(sorted.windows(2).all(|w| w[0].course_id <= w[1].course_id));
    }

    #[test]
    fn prime_search() {
        assert_eq!(next_prime_above(6), 7);
        assert_eq!(next_prime_above(7), 11);
        assert_eq!(next_prime_above(358), 359);
        assert!(is_prime(2));
        assert!(is_prime(179));
        assert!(!is_prime(1));
        assert!(!is_prime(358));
    }

    #[test]
    fn tiny_capacity_is_clamped() {
        let mut table = ChainedHashTable::with_capacity(0);
        assert_eq!(table.capacity(), 1);
        table.insert(course("CS101", "Intro"));
        // Load factor hit 1.0 immediately; 1 grows to 3.
        assert_eq!(table.capacity(), 3);
        assert!(table.search("CS101").is_some());
    }
}
