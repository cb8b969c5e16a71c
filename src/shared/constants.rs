/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Maximum page number allowed (keeps OFFSET arithmetic in range)
pub const MAX_PAGE: i64 = 1_000_000;

// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Host role - can manage categories, questions and answers
pub const ROLE_HOST: &str = "host";

/// Player role - can take quizzes and view their results
#[allow(dead_code)]
pub const ROLE_PLAYER: &str = "player";
