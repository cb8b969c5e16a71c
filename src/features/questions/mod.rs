//! Question catalog feature (host-only).
//!
//! A question belongs to exactly one category and carries a point value
//! ("marks") plus a set of answer choices edited as one unit, the way the
//! original host panel edits a question together with its inline answers.
//! Deleting a question cascades to its answers.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/host/questions` | Host | List questions, newest first |
//! | GET | `/api/host/questions/{id}` | Host | Get question with answers |
//! | POST | `/api/host/questions` | Host | Create question + answers |
//! | PUT | `/api/host/questions/{id}` | Host | Update question, replace answers |
//! | DELETE | `/api/host/questions/{id}` | Host | Delete question (cascades) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
