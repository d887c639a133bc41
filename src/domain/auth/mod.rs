pub mod jwt;
pub mod model;

pub use jwt::{Claims, JwtManager};
pub use model::Role;
