use std::fmt;

use serde::Serialize;

/// A field set one lead-capture form collects.
pub trait LeadFields: Clone + Default + PartialEq + fmt::Debug + 'static {
    type Field: Copy + PartialEq + fmt::Debug + 'static;

    fn email(&self) -> &str;
    fn get(&self, field: Self::Field) -> &str;
    fn set(&mut self, field: Self::Field, value: String);
    /// First required field that is still empty, if any.
    fn missing_required(&self) -> Option<Self::Field>;
    fn into_submission(self) -> LeadSubmission;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarlyAccessField {
    Email,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EarlyAccessFields {
    pub email: String,
}

impl LeadFields for EarlyAccessFields {
    type Field = EarlyAccessField;

    fn email(&self) -> &str {
        &self.email
    }

    fn get(&self, field: EarlyAccessField) -> &str {
        match field {
            EarlyAccessField::Email => &self.email,
        }
    }

    fn set(&mut self, field: EarlyAccessField, value: String) {
        match field {
            EarlyAccessField::Email => self.email = value,
        }
    }

    fn missing_required(&self) -> Option<EarlyAccessField> {
        self.email.is_empty().then_some(EarlyAccessField::Email)
    }

    fn into_submission(self) -> LeadSubmission {
        LeadSubmission::EarlyAccess(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Message => "Your Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl LeadFields for ContactFields {
    type Field = ContactField;

    fn email(&self) -> &str {
        &self.email
    }

    fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    fn missing_required(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    fn into_submission(self) -> LeadSubmission {
        LeadSubmission::Contact(self)
    }
}

/// Body handed to the backend, tagged by which form produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum LeadSubmission {
    EarlyAccess(EarlyAccessFields),
    Contact(ContactFields),
}

impl LeadSubmission {
    pub fn kind(&self) -> &'static str {
        match self {
            LeadSubmission::EarlyAccess(_) => "early-access",
            LeadSubmission::Contact(_) => "contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contact_reports_first_missing_field() {
        let mut fields = ContactFields::default();
        assert_eq!(fields.missing_required(), Some(ContactField::Name));

        fields.set(ContactField::Name, "Jane".into());
        fields.set(ContactField::Email, "jane@x.com".into());
        assert_eq!(fields.missing_required(), Some(ContactField::Message));

        fields.set(ContactField::Message, "hello".into());
        assert_eq!(fields.missing_required(), None);
    }

    #[test]
    fn submission_body_is_tagged_by_form() {
        let body = serde_json::to_value(
            ContactFields {
                name: "Jane".into(),
                email: "jane@x.com".into(),
                message: "hello".into(),
            }
            .into_submission(),
        )
        .unwrap();
        assert_eq!(
            body,
            json!({"form": "contact", "name": "Jane", "email": "jane@x.com", "message": "hello"})
        );

        let body = serde_json::to_value(
            EarlyAccessFields { email: "a@b.com".into() }.into_submission(),
        )
        .unwrap();
        assert_eq!(body, json!({"form": "early_access", "email": "a@b.com"}));
    }
}
