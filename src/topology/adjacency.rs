use crate::geometry::End;

/// One endpoint of one segment, addressed by the segment's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndpointRef {
    pub segment: usize,
    pub end: End,
}

impl EndpointRef {
    #[must_use]
    pub fn new(segment: usize, end: End) -> Self {
        Self { segment, end }
    }

    /// Total order used to list each connection once.
    fn key(self) -> (usize, usize) {
        (self.segment, self.end.index())
    }
}

/// The nearest endpoint found for some endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    pub target: EndpointRef,
    pub distance: f64,
}

/// Signed connectivity between segment endpoints.
///
/// Every endpoint records exactly one nearest endpoint (possibly the opposite
/// end of its own segment). A match is a *connection* only when it is
/// reciprocated: the target's own nearest endpoint points back. Connections
/// therefore pair up endpoints one-to-one, and the unreciprocated matches are
/// dangling ends that cannot be closed into a loop.
#[derive(Debug, Clone)]
pub struct Adjacency {
    /// Indexed by segment position, then by [`End::index`].
    matches: Vec<[Match; 2]>,
}

impl Adjacency {
    pub(crate) fn from_matches(matches: Vec<[Match; 2]>) -> Self {
        Self { matches }
    }

    /// Number of segments covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Returns the raw nearest match of an endpoint.
    #[must_use]
    pub fn matched(&self, endpoint: EndpointRef) -> &Match {
        &self.matches[endpoint.segment][endpoint.end.index()]
    }

    /// Returns the endpoint this one is connected to, if the match is reciprocated.
    #[must_use]
    pub fn connection(&self, endpoint: EndpointRef) -> Option<EndpointRef> {
        let target = self.matched(endpoint).target;
        (self.matched(target).target == endpoint).then_some(target)
    }

    /// Signed relation from segment `i` to segment `j`: `+1` for the tail of
    /// `i` matching into `j`, `-1` for the head, summed.
    #[must_use]
    pub fn sign(&self, i: usize, j: usize) -> i32 {
        End::BOTH
            .into_iter()
            .filter(|&end| self.matched(EndpointRef::new(i, end)).target.segment == j)
            .map(End::sign)
            .sum()
    }

    /// Connected ends of segment `i`, with the endpoint each one joins.
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = (End, EndpointRef)> + '_ {
        End::BOTH.into_iter().filter_map(move |end| {
            self.connection(EndpointRef::new(i, end))
                .map(|other| (end, other))
        })
    }

    /// Every connection, listed once.
    pub fn connections(&self) -> impl Iterator<Item = (EndpointRef, EndpointRef)> + '_ {
        (0..self.len())
            .flat_map(|i| End::BOTH.into_iter().map(move |end| EndpointRef::new(i, end)))
            .filter_map(|a| self.connection(a).map(|b| (a, b)))
            .filter(|(a, b)| a.key() <= b.key())
    }

    /// Endpoints whose nearest match is not reciprocated.
    pub fn dangling(&self) -> impl Iterator<Item = EndpointRef> + '_ {
        (0..self.len())
            .flat_map(|i| End::BOTH.into_iter().map(move |end| EndpointRef::new(i, end)))
            .filter(|&e| self.connection(e).is_none())
    }

    /// Connections joining two heads or two tails.
    #[must_use]
    pub fn inconsistencies(&self) -> Vec<(EndpointRef, EndpointRef)> {
        self.connections().filter(|(a, b)| a.end == b.end).collect()
    }

    /// Returns `true` if every connection joins a tail to a head.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.connections().all(|(a, b)| a.end != b.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(segment: usize, end: End) -> Match {
        Match {
            target: EndpointRef::new(segment, end),
            distance: 0.0,
        }
    }

    /// Two segments joined tail-to-head at both ends.
    fn ring() -> Adjacency {
        Adjacency::from_matches(vec![
            [m(1, End::Tail), m(1, End::Head)],
            [m(0, End::Tail), m(0, End::Head)],
        ])
    }

    #[test]
    fn reciprocated_matches_are_connections() {
        let adj = ring();
        assert_eq!(
            adj.connection(EndpointRef::new(0, End::Tail)),
            Some(EndpointRef::new(1, End::Head))
        );
        assert_eq!(adj.connections().count(), 2);
        assert_eq!(adj.dangling().count(), 0);
        assert!(adj.is_consistent());
    }

    #[test]
    fn both_ends_into_one_segment_do_not_cancel() {
        let adj = ring();
        // Head and tail of 0 both land on 1: the signed sum is zero, but both
        // connections are still present.
        assert_eq!(adj.sign(0, 1), 0);
        assert_eq!(adj.neighbors(0).count(), 2);
    }

    #[test]
    fn one_sided_match_is_dangling() {
        let adj = Adjacency::from_matches(vec![
            [m(1, End::Head), m(1, End::Head)],
            [m(0, End::Tail), m(0, End::Tail)],
        ]);
        // 0.tail <-> 1.head is mutual; 0.head -> 1.head and 1.tail -> 0.tail are not.
        assert_eq!(adj.connections().count(), 1);
        assert_eq!(adj.dangling().count(), 2);
        assert_eq!(adj.sign(0, 1), 0);
        assert_eq!(adj.sign(1, 0), 0);
    }

    #[test]
    fn self_connection_listed_once() {
        let adj = Adjacency::from_matches(vec![[m(0, End::Tail), m(0, End::Head)]]);
        let conns: Vec<_> = adj.connections().collect();
        assert_eq!(
            conns,
            vec![(EndpointRef::new(0, End::Head), EndpointRef::new(0, End::Tail))]
        );
        assert!(adj.is_consistent());
        assert_eq!(adj.sign(0, 0), 0);
    }

    #[test]
    fn tail_to_tail_is_inconsistent() {
        let adj = Adjacency::from_matches(vec![
            [m(1, End::Head), m(1, End::Tail)],
            [m(0, End::Head), m(0, End::Tail)],
        ]);
        assert!(!adj.is_consistent());
        assert_eq!(adj.inconsistencies().len(), 2);
        assert_eq!(adj.sign(0, 1), 0);
    }
}
