pub mod cards;
pub mod charts;
