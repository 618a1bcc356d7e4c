pub mod controller;
pub mod router;
pub mod service;

pub use router::{init_admin_router, init_users_router};
