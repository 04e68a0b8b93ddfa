//! Diesel schema for contact message persistence.

diesel::table! {
    /// Stored contact messages.
    contact_messages (id) {
        /// Message identifier.
        id -> Uuid,
        /// Insertion counter; defines listing order.
        position -> Int8,
        /// Visitor's name.
        name -> Text,
        /// Visitor's email address.
        email -> Text,
        /// Message body.
        message -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
