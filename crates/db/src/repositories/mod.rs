//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod question_repo;
pub mod test_repo;
pub mod user_repo;

pub use question_repo::QuestionRepo;
pub use test_repo::TestRepo;
pub use user_repo::UserRepo;
