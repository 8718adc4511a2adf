use pretzelrs::{
    Pretzel, Twist, component_count, missing_strands, number_of_strands, partition_twists,
    strand_cycles, strand_permutations,
};
use test_utilities::{
    chain_link, figure_eight, hopf_link, mixed_pretzel, nested_pretzel, split_trefoil_hopf,
    torus_link, trefoil, unlink,
};

fn fixtures() -> Vec<Pretzel> {
    vec![
        Pretzel::default(),
        trefoil(),
        figure_eight(),
        hopf_link(),
        split_trefoil_hopf(),
        unlink(),
        chain_link(),
        nested_pretzel(),
        mixed_pretzel(),
        torus_link(3, 4),
        torus_link(4, 5),
        Pretzel::from_pairs([(6, 1), (2, -3), (6, 2), (1, 0), (9, 1), (2, 1)]).unwrap(),
    ]
}

#[test]
fn strand_count_covers_every_twist() {
    for pretzel in fixtures() {
        let n = number_of_strands(&pretzel);
        assert!(pretzel.iter().all(|twist| twist.right_strand() <= n));
    }
}

#[test]
fn missing_strands_are_untouched_and_in_range() {
    for pretzel in fixtures() {
        let n = number_of_strands(&pretzel);
        let missing = missing_strands(&pretzel);
        assert!(missing.windows(2).all(|pair| pair[0] < pair[1]));
        for strand in missing {
            assert!((1..n).contains(&strand));
            assert!(!pretzel.iter().any(|twist| twist.touches(strand)));
        }
    }
}

#[test]
fn missing_strands_of_sparse_pretzel() {
    let pretzel = Pretzel::from_pairs([(6, 1), (2, -3), (6, 2), (1, 0), (9, 1), (2, 1)]).unwrap();
    assert_eq!(number_of_strands(&pretzel), 10);
    assert_eq!(missing_strands(&pretzel), vec![4, 5, 8]);
}

#[test]
fn partition_keeps_twists_and_groups_blocks() {
    let mut pretzel =
        Pretzel::from_pairs([(6, 1), (2, -3), (6, 2), (1, 0), (9, 1), (2, 1)]).unwrap();
    let original = pretzel.clone();
    let missing = missing_strands(&pretzel);
    partition_twists(&missing, &mut pretzel);

    assert_eq!(
        pretzel,
        Pretzel::from_pairs([(2, -3), (1, 0), (2, 1), (6, 1), (6, 2), (9, 1)]).unwrap()
    );

    let mut sorted = pretzel.twists().to_vec();
    let mut expected = original.twists().to_vec();
    sorted.sort_by_key(|twist| (twist.strand(), twist.count()));
    expected.sort_by_key(|twist| (twist.strand(), twist.count()));
    assert_eq!(sorted, expected);

    // partitioning never changes which strands are used
    assert_eq!(missing_strands(&pretzel), missing);
    assert_eq!(number_of_strands(&pretzel), number_of_strands(&original));
}

#[test]
fn partition_is_idempotent() {
    for mut pretzel in fixtures() {
        partition_twists(&missing_strands(&pretzel), &mut pretzel);
        let once = pretzel.clone();
        partition_twists(&missing_strands(&pretzel), &mut pretzel);
        assert_eq!(pretzel, once);
    }
}

#[test]
fn permutation_is_bijection() {
    for pretzel in fixtures() {
        let mut exits = strand_permutations(&pretzel);
        assert_eq!(exits.len(), number_of_strands(&pretzel));
        exits.sort_unstable();
        assert!(exits.into_iter().eq(1..=number_of_strands(&pretzel)));
    }
}

#[test]
fn cycles_partition_strands() {
    for pretzel in fixtures() {
        let mut strands: Vec<_> = strand_cycles(&pretzel).into_iter().flatten().collect();
        strands.sort_unstable();
        assert!(strands.into_iter().eq(1..=number_of_strands(&pretzel)));
    }
}

#[test]
fn component_counts() {
    assert_eq!(component_count(&trefoil()), 1);
    assert_eq!(component_count(&figure_eight()), 1);
    assert_eq!(component_count(&hopf_link()), 2);
    assert_eq!(component_count(&unlink()), 2);
    assert_eq!(component_count(&chain_link()), 3);
    assert_eq!(component_count(&torus_link(2, 4)), 2);
    assert_eq!(component_count(&torus_link(3, 3)), 3);
    assert_eq!(component_count(&torus_link(4, 6)), 2);
}

#[test]
fn pretzel_from_json() {
    let pretzel: Pretzel = serde_json::from_str("[[1, 1], [2, -1], [1, 1], [2, -1]]").unwrap();
    assert_eq!(pretzel, figure_eight());
    assert_eq!(pretzel[1], Twist::new(2, -1).unwrap());

    assert!(serde_json::from_str::<Pretzel>("[[0, 1]]").is_err());
    assert!(serde_json::from_str::<Pretzel>("[[1, 1, 1]]").is_err());
}
