use url::Url;

use super::{common::QueryCommon, Query};

/// Query builder for the `/users.json` endpoint.
#[derive(Default)]
pub struct UserQuery {
    pub common: QueryCommon,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl Query for UserQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(email) = &self.email {
            url.query_pairs_mut().append_pair("email", email.as_str());
        };
        if let Some(role) = &self.role {
            url.query_pairs_mut().append_pair("role", role.as_str());
        };
        url
    }
}

impl UserQuery {
    /// Filters by exact email address.
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// Filters by role name (e.g. "Administrator").
    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }
}
