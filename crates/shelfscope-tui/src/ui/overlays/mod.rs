pub mod favorites;
pub mod help;
