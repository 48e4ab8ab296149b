//! Error types for the API client.

/// Stable numeric code for [`Error::Network`]. Part of the logging contract;
/// must not change between releases.
pub const ERR_CODE_NETWORK_EXCEPTION: i64 = 1000;

/// Stable numeric code for [`Error::AttemptDeleteActiveUser`]. Part of the
/// logging contract; must not change between releases.
pub const ERR_CODE_DELETE_ACTIVE_USER_EXCEPTION: i64 = 1001;

type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur when making API requests.
///
/// Every variant renders as `status: <code>, err: <detail>`, where the code
/// is the variant's fixed numeric constant. Callers branching on the kind of
/// failure should use [`Error::code`] or match on the variant rather than
/// parse the message.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Deletion was requested for a user account that is still active.
    /// Active users must be deactivated before they can be deleted.
    #[error(
        "status: {code}, err: deleting active user {user} is not supported",
        code = ERR_CODE_DELETE_ACTIVE_USER_EXCEPTION
    )]
    AttemptDeleteActiveUser {
        /// Identifier (email) of the user whose deletion was refused.
        user: String,
    },
    /// A lower-level transport or decoding failure, rendered verbatim.
    #[error("status: {code}, err: {cause}", code = ERR_CODE_NETWORK_EXCEPTION)]
    Network {
        /// The underlying failure.
        #[source]
        cause: Cause,
    },
}

impl Error {
    /// Builds the error returned when a caller attempts to delete a user
    /// that is still active.
    pub fn attempt_delete_active_user(user: impl Into<String>) -> Self {
        Error::AttemptDeleteActiveUser { user: user.into() }
    }

    /// Wraps a lower-level transport or decoding failure.
    pub fn network(cause: impl Into<Cause>) -> Self {
        Error::Network {
            cause: cause.into(),
        }
    }

    /// The variant's fixed numeric code.
    pub fn code(&self) -> i64 {
        match self {
            Error::AttemptDeleteActiveUser { .. } => ERR_CODE_DELETE_ACTIVE_USER_EXCEPTION,
            Error::Network { .. } => ERR_CODE_NETWORK_EXCEPTION,
        }
    }
}
