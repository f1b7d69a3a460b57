pub mod helpers;
pub mod serialized;

pub use helpers::*;
pub use serialized::write_serialized_tree;
