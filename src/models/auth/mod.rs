pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::{SessionUser, UserRole};
pub use requests::LoginRequest;
pub use responses::LoginResponse;
