pub mod output;
pub mod summary;
pub mod synthetic;
