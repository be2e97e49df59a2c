pub mod actor;
pub mod common;
pub mod filter;
pub mod movie;
pub mod response;

pub use actor::*;
pub use common::*;
pub use filter::*;
pub use movie::*;
pub use response::*;
