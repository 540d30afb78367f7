pub mod generation;
pub mod image;
pub mod sort;
pub mod time;
