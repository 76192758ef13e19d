pub mod cs;
pub mod error;

pub use cs::selection;
pub use cs::selection::{
    deterministic_select, deterministic_select_in_place, group_medians, partition,
    randomized_select, randomized_select_with_rng, PartitionBounds, Quickselect,
    QuickselectConfig,
};
pub use error::{Error, Result};
