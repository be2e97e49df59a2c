pub mod handlers;
pub mod query;
pub mod routes;

pub use handlers::*;
pub use query::*;
pub use routes::*;
