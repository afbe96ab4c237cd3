use std::cmp::Ordering;

/// Binary min-heap over vertex indices `0..capacity` with decrease-key.
///
/// `pq` is the 1-based heap of indices, `qp` its inverse (heap position of
/// each index, `None` when absent) and `keys` the priority per index.
#[derive(Debug, Clone)]
pub struct IndexMinPq {
    pq: Vec<usize>,
    qp: Vec<Option<usize>>,
    keys: Vec<f64>,
    len: usize,
}

impl IndexMinPq {
    pub fn new(capacity: usize) -> Self {
        Self {
            pq: vec![0; capacity + 1],
            qp: vec![None; capacity],
            keys: vec![f64::INFINITY; capacity],
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn contains(&self, index: usize) -> bool {
        self.qp.get(index).is_some_and(Option::is_some)
    }

    /// Inserts `index` with `key`. Indices out of range or already queued are
    /// ignored.
    pub fn insert(&mut self, index: usize, key: f64) {
        if index >= self.qp.len() || self.contains(index) {
            return;
        }
        self.len += 1;
        self.qp[index] = Some(self.len);
        self.pq[self.len] = index;
        self.keys[index] = key;
        self.swim(self.len);
    }

    /// Lowers the key of a queued index. Larger keys and absent indices are
    /// ignored.
    pub fn decrease_key(&mut self, index: usize, key: f64) {
        let Some(position) = self.qp.get(index).copied().flatten() else {
            return;
        };
        if self.keys[index].partial_cmp(&key) != Some(Ordering::Greater) {
            return;
        }
        self.keys[index] = key;
        self.swim(position);
    }

    pub fn min_key(&self) -> Option<f64> {
        (!self.is_empty()).then(|| self.keys[self.pq[1]])
    }

    /// Removes and returns the index with the smallest key.
    pub fn del_min(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let min = self.pq[1];
        self.exchange(1, self.len);
        self.len -= 1;
        self.sink(1);
        self.qp[min] = None;
        Some(min)
    }

    fn greater(&self, i: usize, j: usize) -> bool {
        self.keys[self.pq[i]] > self.keys[self.pq[j]]
    }

    fn exchange(&mut self, i: usize, j: usize) {
        self.pq.swap(i, j);
        self.qp[self.pq[i]] = Some(i);
        self.qp[self.pq[j]] = Some(j);
    }

    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.greater(k / 2, k) {
            self.exchange(k, k / 2);
            k /= 2;
        }
    }

    fn sink(&mut self, mut k: usize) {
        while 2 * k <= self.len {
            let mut child = 2 * k;
            if child < self.len && self.greater(child, child + 1) {
                child += 1;
            }
            if !self.greater(k, child) {
                break;
            }
            self.exchange(k, child);
            k = child;
        }
    }
}
