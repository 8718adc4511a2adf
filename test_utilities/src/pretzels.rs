use pretzelrs::Pretzel;

fn from_pairs(pairs: &[(usize, i32)]) -> Pretzel {
    Pretzel::from_pairs(pairs.iter().copied()).expect("fixture strands are positive")
}

/// Right-handed trefoil as the closure of a 2-strand braid.
pub fn trefoil() -> Pretzel {
    from_pairs(&[(1, 3)])
}

pub fn figure_eight() -> Pretzel {
    from_pairs(&[(1, 1), (2, -1), (1, 1), (2, -1)])
}

pub fn hopf_link() -> Pretzel {
    from_pairs(&[(1, 2)])
}

/// A trefoil on strands 1 and 2 next to a negative Hopf link on strands 3 and
/// 4, with strand 3 untouched by the trefoil.
pub fn split_trefoil_hopf() -> Pretzel {
    from_pairs(&[(1, 3), (3, -2)])
}

/// Two canceling crossings, whose closure is the 2-component unlink.
pub fn unlink() -> Pretzel {
    from_pairs(&[(1, 1), (1, -1)])
}

/// Three unknots, each linked once with its neighbour.
pub fn chain_link() -> Pretzel {
    from_pairs(&[(1, 2), (2, 2)])
}

/// A generator on strands 2 and 3 sitting inside one on strands 1 and 2.
pub fn nested_pretzel() -> Pretzel {
    from_pairs(&[(1, 1), (2, 2), (1, 1)])
}

pub fn mixed_pretzel() -> Pretzel {
    from_pairs(&[(1, 2), (2, -1), (1, -1), (2, 3)])
}
