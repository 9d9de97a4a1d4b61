//! Backing store with amortized growth.

/// Contiguous byte region split into a live prefix and zero-filled slack.
///
/// `data.len()` is the physical capacity; `len` is the logical length.
/// Capacity only grows (by half plus one, or to the requested minimum if
/// larger) and never shrinks except through [`reset`](Store::reset), which
/// keeps the allocation.
#[derive(Debug, Clone)]
pub(crate) struct Store {
    data: Vec<u8>,
    len: usize,
}

impl Store {
    /// Creates an empty store backed by `capacity` zeroed bytes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Store {
            data: vec![0; capacity],
            len: 0,
        }
    }

    /// Adopts an existing region; its full length becomes the live region.
    pub(crate) fn from_vec(data: Vec<u8>) -> Self {
        let len = data.len();
        Store { data, len }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// The live bytes `[0, len)`.
    pub(crate) fn live(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// The full physical region, slack included.
    pub(crate) fn raw(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the store, returning the live bytes.
    pub(crate) fn into_vec(self) -> Vec<u8> {
        let mut data = self.data;
        data.truncate(self.len);
        data
    }

    /// Guarantees the physical region holds at least `min` bytes.
    ///
    /// Growth preserves the entire previous region, not just the live
    /// prefix, and over-allocates so repeated small appends stay O(1)
    /// amortized per byte.
    pub(crate) fn ensure(&mut self, min: usize) {
        if min > self.data.len() {
            let grown = self.data.len() + self.data.len() / 2 + 1;
            self.data.resize(min.max(grown), 0);
        }
    }

    /// Writes `bytes` at `offset`, growing physical and logical size as
    /// needed. Any gap between the old length and `offset` stays zeroed.
    pub(crate) fn put(&mut self, offset: usize, bytes: &[u8]) {
        let end = offset + bytes.len();
        self.ensure(end);
        self.data[offset..end].copy_from_slice(bytes);
        if end > self.len {
            self.len = end;
        }
    }

    /// Opens a `width`-byte gap at `offset`, shifting `[offset, len)`
    /// rightward and raising the logical length by `width`.
    ///
    /// The shift is self-overlapping; `copy_within` moves from the tail
    /// backward when the ranges overlap.
    pub(crate) fn open_gap(&mut self, offset: usize, width: usize) {
        self.ensure(self.len + width);
        self.data.copy_within(offset..self.len, offset + width);
        self.len += width;
    }

    /// Drops all live data and rezeroes the region; capacity is retained.
    pub(crate) fn reset(&mut self) {
        self.len = 0;
        self.data.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_capacity_zeroed() {
        let store = Store::with_capacity(8);
        assert_eq!(store.capacity(), 8);
        assert_eq!(store.len(), 0);
        assert_eq!(store.raw(), &[0; 8]);
        assert!(store.live().is_empty());
    }

    #[test]
    fn test_from_vec_fully_live() {
        let store = Store::from_vec(vec![1, 2, 3]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.capacity(), 3);
        assert_eq!(store.live(), &[1, 2, 3]);
    }

    #[test]
    fn test_growth_policy() {
        let mut store = Store::with_capacity(4);

        // Small overshoot grows by half plus one
        store.ensure(5);
        assert_eq!(store.capacity(), 7);

        // Large request wins over the half-growth
        store.ensure(100);
        assert_eq!(store.capacity(), 100);

        // Never shrinks
        store.ensure(10);
        assert_eq!(store.capacity(), 100);
    }

    #[test]
    fn test_growth_preserves_whole_region() {
        let mut store = Store::with_capacity(4);
        store.put(0, &[1, 2, 3, 4]);
        store.ensure(6);
        assert_eq!(&store.raw()[..4], &[1, 2, 3, 4]);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_put_past_len_zero_gap() {
        let mut store = Store::with_capacity(4);
        store.put(0, &[1, 2]);
        store.put(4, &[9]);
        assert_eq!(store.len(), 5);
        assert_eq!(store.live(), &[1, 2, 0, 0, 9]);
    }

    #[test]
    fn test_open_gap_shifts_overlapping() {
        let mut store = Store::from_vec(vec![1, 2, 3, 4, 5]);
        store.open_gap(1, 2);
        assert_eq!(store.len(), 7);
        assert_eq!(&store.live()[..1], &[1]);
        assert_eq!(&store.live()[3..], &[2, 3, 4, 5]);
    }

    #[test]
    fn test_open_gap_at_end() {
        let mut store = Store::from_vec(vec![1, 2]);
        store.open_gap(2, 3);
        assert_eq!(store.len(), 5);
        assert_eq!(&store.live()[..2], &[1, 2]);
    }

    #[test]
    fn test_reset_keeps_capacity() {
        let mut store = Store::with_capacity(4);
        store.put(0, &[1, 2, 3, 4]);
        store.reset();
        assert_eq!(store.len(), 0);
        assert_eq!(store.capacity(), 4);
        assert_eq!(store.raw(), &[0; 4]);
    }

    #[test]
    fn test_into_vec_truncates_slack() {
        let mut store = Store::with_capacity(8);
        store.put(0, &[1, 2, 3]);
        assert_eq!(store.into_vec(), vec![1, 2, 3]);
    }
}
