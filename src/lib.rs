mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::{
    Error, ERR_CODE_DELETE_ACTIVE_USER_EXCEPTION, ERR_CODE_NETWORK_EXCEPTION,
};
pub use self::query::{Query, UserQuery};
