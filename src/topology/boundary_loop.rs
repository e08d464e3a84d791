/// A closed cycle of segments, each tail joined to the next one's head.
///
/// Members are segment positions in traversal order; the last member wraps
/// around to the first. A single member is a self-closing polyline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loop {
    segments: Vec<usize>,
}

impl Loop {
    #[must_use]
    pub fn new(segments: Vec<usize>) -> Self {
        Self { segments }
    }

    /// Member segment positions in traversal order.
    #[must_use]
    pub fn segments(&self) -> &[usize] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn contains(&self, segment: usize) -> bool {
        self.segments.contains(&segment)
    }

    /// Returns the member following `segment`, wrapping around.
    #[must_use]
    pub fn next_after(&self, segment: usize) -> Option<usize> {
        let idx = self.segments.iter().position(|&s| s == segment)?;
        Some(self.segments[(idx + 1) % self.segments.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_around() {
        let l = Loop::new(vec![3, 0, 2]);
        assert_eq!(l.next_after(3), Some(0));
        assert_eq!(l.next_after(2), Some(3));
        assert_eq!(l.next_after(1), None);
    }

    #[test]
    fn singleton_is_its_own_successor() {
        let l = Loop::new(vec![4]);
        assert_eq!(l.next_after(4), Some(4));
        assert!(l.contains(4));
        assert_eq!(l.len(), 1);
    }
}
