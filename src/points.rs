//! The user's plotted values, in insertion order, behind stable handles.

use crate::util::complex::Complex;

/// Stable handle of a plotted value. Never reused within one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(u64);

/// Ordered multiset of plotted values.
///
/// Duplicates are allowed. Lookups by value use tolerant equality and hit
/// the earliest matching entry; everything else goes through [`PointId`].
#[derive(Debug, Clone, Default)]
pub struct PlottedPoints {
    entries: Vec<(PointId, Complex)>,
    next_id: u64,
}

impl PlottedPoints {
    /// Empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value and return its handle.
    pub fn insert(&mut self, value: Complex) -> PointId {
        let id = PointId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, value));
        id
    }

    /// Remove the entry with this handle.
    pub fn remove(&mut self, id: PointId) -> Option<Complex> {
        let index = self.entries.iter().position(|(i, _)| *i == id)?;
        Some(self.entries.remove(index).1)
    }

    /// Remove the earliest entry approximately equal to `value`.
    pub fn remove_value(&mut self, value: Complex) -> Option<PointId> {
        let index = self.entries.iter().position(|(_, v)| v.approx_eq(value))?;
        Some(self.entries.remove(index).0)
    }

    /// Value behind a handle.
    #[must_use]
    pub fn get(&self, id: PointId) -> Option<Complex> {
        self.entries.iter().find(|(i, _)| *i == id).map(|(_, v)| *v)
    }

    /// Whether a handle is still present.
    #[must_use]
    pub fn contains(&self, id: PointId) -> bool {
        self.entries.iter().any(|(i, _)| *i == id)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, Complex)> + '_ {
        self.entries.iter().copied()
    }

    /// Values in insertion order.
    #[must_use]
    pub fn values(&self) -> Vec<Complex> {
        self.entries.iter().map(|(_, v)| *v).collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is plotted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by ascending magnitude (stable, so ties keep
    /// insertion order).
    ///
    /// With `zeros_last`, exact zeros sort after every non-zero value.
    #[must_use]
    pub fn sorted_by_magnitude(&self, zeros_last: bool) -> Vec<(PointId, Complex)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|(_, a), (_, b)| {
            let key = |v: &Complex| (zeros_last && v.is_zero(), v.norm());
            let (za, na) = key(a);
            let (zb, nb) = key(b);
            za.cmp(&zb).then(na.total_cmp(&nb))
        });
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_survive_removals() {
        let mut points = PlottedPoints::new();
        let a = points.insert(Complex::real(1.0));
        let b = points.insert(Complex::real(2.0));
        let c = points.insert(Complex::real(3.0));
        assert_eq!(points.remove(b), Some(Complex::real(2.0)));
        assert_eq!(points.get(a), Some(Complex::real(1.0)));
        assert_eq!(points.get(c), Some(Complex::real(3.0)));
        assert!(!points.contains(b));
        let d = points.insert(Complex::real(4.0));
        assert_ne!(d, b);
        assert_eq!(points.values(), vec![Complex::real(1.0), Complex::real(3.0), Complex::real(4.0)]);
    }

    #[test]
    fn duplicates_remove_earliest() {
        let mut points = PlottedPoints::new();
        let first = points.insert(Complex::real(0.3));
        let second = points.insert(Complex::real(0.1 + 0.2));
        assert_eq!(points.remove_value(Complex::real(0.3)), Some(first));
        assert_eq!(points.iter().map(|(id, _)| id).collect::<Vec<_>>(), vec![second]);
        assert_eq!(points.remove_value(Complex::real(7.0)), None);
    }

    #[test]
    fn magnitude_order_can_defer_zeros() {
        let mut points = PlottedPoints::new();
        let _ = points.insert(Complex::real(-3.0));
        let _ = points.insert(Complex::ZERO);
        let _ = points.insert(Complex::new(0.0, 2.0));
        let plain: Vec<_> = points.sorted_by_magnitude(false).iter().map(|(_, v)| v.norm()).collect();
        assert_eq!(plain, vec![0.0, 2.0, 3.0]);
        let deferred: Vec<_> = points.sorted_by_magnitude(true).iter().map(|(_, v)| v.norm()).collect();
        assert_eq!(deferred, vec![2.0, 3.0, 0.0]);
    }
}
