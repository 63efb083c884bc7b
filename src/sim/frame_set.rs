//! FrameSet - the resident pages of a simulated physical memory.
//!
//! A [`FrameSet`] holds the pages currently occupying frames, in
//! insertion order, plus the swap space: the log of pages that have been
//! evicted and not referenced back in.

use crate::common::PageRef;

/// The set of resident pages for one simulation run.
///
/// # Invariants
/// - At most `capacity` pages are resident at once.
/// - No page is resident twice.
/// - The resident order is insertion order: evicting a page preserves
///   the relative order of the survivors, so the head is always the
///   longest-resident page.
/// - A page is never in the frames and in swap space at the same
///   instant. Eviction moves a page into swap space; referencing it
///   again swaps it back in (and a later eviction re-appends it).
pub struct FrameSet {
    /// Maximum number of resident pages.
    capacity: usize,

    /// Resident pages in insertion order (front = oldest).
    resident: Vec<PageRef>,

    /// Pages currently evicted to the backing store, in eviction order.
    swap: Vec<PageRef>,
}

impl FrameSet {
    /// Create an empty frame set.
    ///
    /// # Panics
    /// Panics if `capacity` is 0. The driver validates the configured
    /// frame count before constructing one.
    pub(crate) fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        Self {
            capacity,
            resident: Vec::with_capacity(capacity),
            swap: Vec::new(),
        }
    }

    /// Number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.resident.len()
    }

    /// Whether no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.resident.is_empty()
    }

    /// Whether every frame is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.resident.len() == self.capacity
    }

    /// Whether `page` is currently resident.
    #[inline]
    pub fn contains(&self, page: PageRef) -> bool {
        self.resident.contains(&page)
    }

    /// Resident pages in insertion order.
    #[inline]
    pub fn resident(&self) -> &[PageRef] {
        &self.resident
    }

    /// Evicted pages in eviction order.
    #[inline]
    pub fn swap_space(&self) -> &[PageRef] {
        &self.swap
    }

    /// The longest-resident page, if any.
    #[inline]
    pub fn oldest(&self) -> Option<PageRef> {
        self.resident.first().copied()
    }

    /// Make `page` resident.
    ///
    /// If the page was sitting in swap space it is swapped back in.
    pub(crate) fn insert(&mut self, page: PageRef) {
        debug_assert!(!self.is_full(), "inserting into a full frame set");
        debug_assert!(!self.contains(page), "page is already resident");

        if let Some(slot) = self.swap.iter().position(|&p| p == page) {
            self.swap.remove(slot);
        }
        self.resident.push(page);
    }

    /// Move `victim` out of the frames and append it to swap space.
    pub(crate) fn evict(&mut self, victim: PageRef) {
        let slot = self
            .resident
            .iter()
            .position(|&p| p == victim)
            .expect("victim page is not resident");

        self.resident.remove(slot);
        self.swap.push(victim);
    }
}
