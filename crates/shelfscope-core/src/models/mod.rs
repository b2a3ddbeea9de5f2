pub mod book;
pub mod genre;

pub use book::*;
pub use genre::*;
