//! Discord snowflake ID newtypes.
//!
//! Snowflakes are 64-bit unsigned integers. The REST API transmits them as
//! JSON strings to survive lossy JSON number parsers; the wire types in
//! herald-infra convert at that boundary. Within the domain (and in the
//! persisted session record) they are raw `u64` values.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! snowflake {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// The raw snowflake value.
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

snowflake!(
    /// Identifier of a guild (server).
    GuildId
);
snowflake!(
    /// Identifier of a text channel.
    ChannelId
);
snowflake!(
    /// Identifier of a chat message.
    MessageId
);
snowflake!(
    /// Identifier of a guild role.
    RoleId
);
snowflake!(
    /// Identifier of a user account.
    UserId
);
