//! Form field descriptors

/// The contact form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Email,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 3] = [FieldId::Name, FieldId::Email, FieldId::Message];

    /// Stable key used for this field in the submitted mapping
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Message => "message",
        }
    }

    /// Label shown on the field's border
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Message => "Message",
        }
    }

    /// Only the message field accepts newlines
    pub fn is_multiline(self) -> bool {
        matches!(self, FieldId::Message)
    }
}
