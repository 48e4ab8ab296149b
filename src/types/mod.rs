mod user;
pub use self::user::{Department, Role, User, UserEnvelope, UserID, UserPayload};
