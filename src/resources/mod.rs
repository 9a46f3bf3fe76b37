//! Resource accessors, one per Freshdesk entity.
//!
//! Each accessor borrows a [`FreshdeskClient`](crate::client::FreshdeskClient)
//! and maps its operations onto endpoint paths. Payloads and responses pass
//! through unchanged.

mod agents;
mod business_hours;
mod categories;
mod comments;
mod companies;
mod contacts;
mod conversations;
mod email_configs;
mod forums;
mod groups;
mod products;
mod sla_policies;
mod tickets;
mod time_entries;
mod topics;

pub use agents::Agents;
pub use business_hours::BusinessHours;
pub use categories::Categories;
pub use comments::Comments;
pub use companies::Companies;
pub use contacts::Contacts;
pub use conversations::Conversations;
pub use email_configs::EmailConfigs;
pub use forums::Forums;
pub use groups::Groups;
pub use products::Products;
pub use sla_policies::SlaPolicies;
pub use tickets::Tickets;
pub use time_entries::TimeEntries;
pub use topics::Topics;

use serde_json::Value;

use crate::models::{Payload, Query};

/// Path of a single member of a collection, e.g. `/tickets/42`.
pub(crate) fn member(root: &str, id: u64) -> String {
    format!("{}/{}", root, id)
}

/// Query selecting a user, used by the follow endpoints.
pub(crate) fn user_query(user_id: Option<u64>) -> Option<Query> {
    user_id.map(|id| {
        let mut query = Query::new();
        query.insert("user_id".to_string(), Value::from(id));
        query
    })
}

/// Payload naming a user, used when following forums and topics.
pub(crate) fn user_payload(user_id: u64) -> Payload {
    let mut data = Payload::new();
    data.insert("user_id".to_string(), Value::from(user_id));
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_member_path() {
        assert_eq!(member("/tickets", 42), "/tickets/42");
        assert_eq!(member("/discussions/forums", 7), "/discussions/forums/7");
    }

    #[test]
    fn test_user_query() {
        assert!(user_query(None).is_none());
        let query = user_query(Some(9)).unwrap();
        assert_eq!(query.get("user_id"), Some(&Value::from(9u64)));
    }
}
