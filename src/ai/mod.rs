pub mod greedy;
pub mod material;

pub use greedy::{GreedySelector, select_move};
