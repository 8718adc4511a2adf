use pretzelrs::{Pretzel, Twist};

/// The torus link `T(p, q)` as the closure of the braid
/// `(s_1 s_2 ... s_{p-1})^q` on `p` strands.
pub fn torus_link(p: usize, q: usize) -> Pretzel {
    assert!(p >= 2, "torus links need at least two strands");

    (0..q)
        .flat_map(|_| 1..p)
        .map(|strand| Twist::new(strand, 1).expect("torus strands start at 1"))
        .collect()
}

/// Number of crossings of [`torus_link`]`(p, q)`.
pub fn torus_link_crossings(p: usize, q: usize) -> usize {
    (p - 1) * q
}
