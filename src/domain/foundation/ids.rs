//! Strongly-typed identifier value objects.
//!
//! Every entity in the registration platform is keyed by a positive integer
//! primary key. Wrapping them keeps a `HotelId` from being passed where a
//! `TicketId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Declares an integer-backed identifier newtype.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates an identifier, rejecting zero and negative values.
            pub fn new(value: i32) -> Result<Self, ValidationError> {
                if value <= 0 {
                    return Err(ValidationError::invalid_format(
                        $field,
                        format!("must be a positive integer, got {}", value),
                    ));
                }
                Ok(Self(value))
            }

            /// Wraps a value read back from storage without validation.
            pub fn from_db(value: i32) -> Self {
                Self(value)
            }

            /// Returns the raw integer.
            pub fn value(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.trim().parse::<i32>().map_err(|e| {
                    ValidationError::invalid_format($field, e.to_string())
                })?;
                Self::new(value)
            }
        }
    };
}

define_id!(
    /// User identifier, as carried in the session token.
    UserId,
    "user_id"
);

define_id!(
    /// A user's registration record for the event.
    EnrollmentId,
    "enrollment_id"
);

define_id!(
    /// Unique identifier for a ticket.
    TicketId,
    "ticket_id"
);

define_id!(
    /// Unique identifier for a ticket category.
    TicketTypeId,
    "ticket_type_id"
);

define_id!(
    /// Unique identifier for a hotel.
    HotelId,
    "hotel_id"
);

define_id!(
    /// Unique identifier for a hotel room.
    RoomId,
    "room_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_positive_values() {
        let id = HotelId::new(7).unwrap();
        assert_eq!(id.value(), 7);
    }

    #[test]
    fn new_rejects_zero_and_negative() {
        assert!(UserId::new(0).is_err());
        assert!(TicketId::new(-3).is_err());
    }

    #[test]
    fn from_str_parses_integers() {
        let id: HotelId = "42".parse().unwrap();
        assert_eq!(id, HotelId::from_db(42));
    }

    #[test]
    fn from_str_rejects_garbage() {
        let err = "abc".parse::<HotelId>().unwrap_err();
        assert!(err.to_string().contains("hotel_id"));
    }

    #[test]
    fn display_prints_raw_value() {
        assert_eq!(format!("{}", EnrollmentId::from_db(12)), "12");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&RoomId::from_db(5)).unwrap();
        assert_eq!(json, "5");

        let id: TicketTypeId = serde_json::from_str("9").unwrap();
        assert_eq!(id.value(), 9);
    }
}
