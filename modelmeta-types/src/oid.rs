//! Typed object identifiers (OIDs).
//!
//! Every model object type has its own OID newtype over a UUID v7, so an id
//! of one type can never be mistaken for an id of another. Declare them with
//! [`model_object_id!`](crate::model_object_id).

use std::fmt;
use std::hash::Hash;
use uuid::Uuid;

/// A typed identifier of a model object.
pub trait ModelObjectId: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Wraps an existing UUID.
    fn from_uuid(uuid: Uuid) -> Self;

    /// Returns the underlying UUID.
    fn as_uuid(&self) -> Uuid;
}

/// Declares an OID newtype over a UUID v7.
///
/// ```
/// modelmeta_types::model_object_id! {
///     /// Identifier of a user.
///     pub struct UserId;
/// }
///
/// let id = UserId::new();
/// assert_eq!(UserId::parse(&id.to_string()).unwrap(), id);
/// ```
#[macro_export]
macro_rules! model_object_id {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis struct $name($crate::__private::uuid::Uuid);

        impl $name {
            /// Creates a new id with the current timestamp.
            #[must_use]
            pub fn new() -> Self {
                Self($crate::__private::uuid::Uuid::now_v7())
            }

            /// Parses an id from a string.
            pub fn parse(s: &str) -> ::std::result::Result<Self, $crate::__private::uuid::Error> {
                Ok(Self($crate::__private::uuid::Uuid::parse_str(s)?))
            }
        }

        impl $crate::ModelObjectId for $name {
            fn from_uuid(uuid: $crate::__private::uuid::Uuid) -> Self {
                Self(uuid)
            }

            fn as_uuid(&self) -> $crate::__private::uuid::Uuid {
                self.0
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::__private::uuid::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <$crate::__private::uuid::Uuid as $crate::__private::serde::Deserialize<'de>>::deserialize(
                    deserializer,
                )
                .map(Self)
            }
        }
    };
}
