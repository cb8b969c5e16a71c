//! Quiz play feature
//!
//! | Component | Responsibility |
//! |-----------|----------------|
//! | `engine` | Pure quiz attempt state machine: shuffle, progress, scoring |
//! | `models` | `quiz_sessions` row mapping |
//! | `dtos` | Player-facing request/response shapes (no correctness leaks) |
//! | `services` | Persistence-backed orchestration of the engine |
//! | `handlers` | HTTP endpoints for playing a quiz and reading results |
//! | `routes` | Router wiring |

pub mod dtos;
pub mod engine;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuizService;
