mod pretzels;
mod torus;

pub use pretzels::{
    chain_link, figure_eight, hopf_link, mixed_pretzel, nested_pretzel, split_trefoil_hopf,
    trefoil, unlink,
};
pub use torus::{torus_link, torus_link_crossings};
