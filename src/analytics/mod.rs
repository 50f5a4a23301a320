pub mod bs_analytic;
pub mod payoffs;

pub use bs_analytic::{d1_d2, evaluate, GreekSet};
pub use payoffs::payoff;
