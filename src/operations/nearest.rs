use crate::geometry::{End, Segment};
use crate::math::distance_2d::distance;
use crate::topology::{EndpointRef, Match};

/// Finds the endpoint nearest to the `end` of segment `i`.
///
/// Candidates are the heads and tails of every other segment, in position
/// order with the head first, followed by the opposite end of segment `i`
/// itself (so a closed polyline matches its own other end). The first
/// candidate at the minimal distance wins. There is always a candidate, so
/// a match is returned however far away it is.
///
/// # Panics
///
/// Panics if `i` is out of bounds.
#[must_use]
pub fn find_nearest(segments: &[Segment], i: usize, end: End) -> Match {
    let origin = segments[i].endpoint(end);

    let others = segments
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .flat_map(|(j, s)| End::BOTH.into_iter().map(move |e| (EndpointRef::new(j, e), s)));
    let own = std::iter::once((EndpointRef::new(i, end.opposite()), &segments[i]));

    let mut best = Match {
        target: EndpointRef::new(i, end.opposite()),
        distance: f64::INFINITY,
    };
    for (candidate, segment) in others.chain(own) {
        let d = distance(origin, segment.endpoint(candidate.end));
        if d < best.distance {
            best = Match {
                target: candidate,
                distance: d,
            };
        }
    }
    best
}
