pub mod audit;
pub mod cors;
