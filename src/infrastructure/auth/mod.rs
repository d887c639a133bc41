pub mod middleware;
pub mod request_id;

pub use middleware::{auth_middleware, require_admin, AuthUser};
pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};
