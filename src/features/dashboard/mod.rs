//! Host dashboard feature
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/host/dashboard` | Host | Catalog counts for the admin landing page |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::host_routes;
pub use services::DashboardService;
