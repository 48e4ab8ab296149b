mod common;
pub use self::common::Query;

mod user;
pub use self::user::UserQuery;
