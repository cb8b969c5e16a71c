//! Quiz categories feature.
//!
//! Categories group questions into named topics. Any authenticated user can
//! browse them; creating, renaming and deleting requires the host role.
//! Deleting a category cascades to its questions and their answers.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/categories` | Yes | List categories (quiz home) |
//! | GET | `/api/host/categories` | Host | List categories |
//! | GET | `/api/host/categories/{id}` | Host | Get single category |
//! | POST | `/api/host/categories` | Host | Create category |
//! | PUT | `/api/host/categories/{id}` | Host | Rename category |
//! | DELETE | `/api/host/categories/{id}` | Host | Delete category (cascades) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
