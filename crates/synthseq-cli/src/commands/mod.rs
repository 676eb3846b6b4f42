pub mod compose;
pub mod generate;
