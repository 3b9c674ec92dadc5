//! Typed identifiers
//!
//! All identifiers are opaque strings in the snapshot (`"u1"`, `"g2"`, ...).
//! Wrapping them keeps a group id from being passed where a user id is expected.

use std::fmt;
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identifier of a [`crate::models::User`]
    UserId
);
string_id!(
    /// Identifier of a [`crate::models::Group`]
    GroupId
);
string_id!(
    /// Identifier of a [`crate::models::Event`]
    EventId
);
string_id!(
    /// Identifier of a [`crate::models::Message`]
    MessageId
);
