pub mod catalog;
pub mod movie_filter;
pub mod resolve;

pub use catalog::*;
pub use movie_filter::*;
pub use resolve::*;
