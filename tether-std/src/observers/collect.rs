//! Collecting observer.

/// Collects `(index, value)` pairs reported during an observed invocation.
///
/// # Example
///
/// ```rust
/// use tether_core::MulticastDelegate;
/// use tether_std::observers::Collector;
///
/// let first = || 10;
/// let second = || 20;
/// let mut multicast = MulticastDelegate::<(), i32>::new();
/// multicast.push_closure(&first);
/// multicast.push_closure(&second);
///
/// let mut collector = Collector::<i32>::new();
/// multicast.invoke_observed(collector.observer());
/// assert_eq!(collector.entries(), &[(0, 10), (1, 20)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collector<R> {
    entries: Vec<(usize, R)>,
}

impl<R> Collector<R> {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records one result.
    pub fn record(&mut self, index: usize, value: R) {
        self.entries.push((index, value));
    }

    /// The recorded pairs, in the order they were observed.
    pub fn entries(&self) -> &[(usize, R)] {
        &self.entries
    }

    /// The recorded values without their indices.
    pub fn values(&self) -> impl Iterator<Item = &R> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Consumes the collector, returning the recorded pairs.
    pub fn into_entries(self) -> Vec<(usize, R)> {
        self.entries
    }

    /// Number of recorded results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discard every recorded result.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<R: Clone> Collector<R> {
    /// An observer that clones each reported value into this collector.
    pub fn observer(&mut self) -> impl FnMut(usize, &R) + '_ {
        move |index: usize, value: &R| self.record(index, value.clone())
    }
}

impl<R> Default for Collector<R> {
    fn default() -> Self {
        Self::new()
    }
}
