//! Authentication feature.
//!
//! Registration and login are delegated to an external identity provider
//! that owns user accounts and credentials; this service only verifies
//! outcomes and issues its own HS256 access tokens.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/auth/register` | No | Register via identity provider |
//! | POST | `/api/auth/login` | No | Login with email and password |
//! | GET | `/api/auth/me` | Yes | Current authenticated user |
//! | POST | `/api/auth/logout` | Yes | End session, clear quiz progress |

mod validator;

pub mod clients;
pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;

pub use validator::JwtValidator;
