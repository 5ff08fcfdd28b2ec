pub mod domain;
pub mod error;

pub use domain::{RequestOutcome, UserId, UserRecord};
pub use error::{FetchError, InvalidUserId};
