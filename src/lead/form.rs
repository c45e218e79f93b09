use std::borrow::Cow;

use validator::{Validate, ValidationError};

/// What a visitor typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct LeadFormInput {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(email(message = "Укажите корректный email"))]
    pub email: String,
    /// Telegram handle, sent as `telegram`.
    pub contact_handle: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    ContactHandle,
    Message,
}

impl LeadField {
    /// Field name the form service expects.
    pub fn wire_name(self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Email => "email",
            LeadField::ContactHandle => "telegram",
            LeadField::Message => "message",
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::from("Укажите имя")));
    }
    Ok(())
}

impl LeadFormInput {
    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::ContactHandle => self.contact_handle = value,
            LeadField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::ContactHandle => &self.contact_handle,
            LeadField::Message => &self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = LeadFormInput::default();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        *self == LeadFormInput::default()
    }

    /// First required field that would make the browser refuse to submit,
    /// with the hint to show next to it.
    pub fn check(&self) -> Result<(), (LeadField, String)> {
        let errors = match self.validate() {
            Ok(()) => return Ok(()),
            Err(errors) => errors,
        };
        let field_errors = errors.field_errors();
        for (field, key) in [(LeadField::Name, "name"), (LeadField::Email, "email")] {
            if let Some(first) = field_errors.get(key).and_then(|errs| errs.first()) {
                let hint = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Проверьте поле".to_string());
                return Err((field, hint));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> LeadFormInput {
        LeadFormInput {
            name: "Ann".into(),
            email: "a@b.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        assert_eq!(ann().check(), Ok(()));
    }

    #[test]
    fn blank_name_is_reported_first() {
        let mut input = ann();
        input.name = "   ".into();
        input.email = "nope".into();
        let (field, hint) = input.check().unwrap_err();
        assert_eq!(field, LeadField::Name);
        assert_eq!(hint, "Укажите имя");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut input = ann();
        input.email = "a-at-b.com".into();
        assert_eq!(input.check().unwrap_err().0, LeadField::Email);
    }

    #[test]
    fn set_and_clear() {
        let mut input = LeadFormInput::default();
        input.set(LeadField::ContactHandle, "@ann".into());
        input.set(LeadField::Message, "hello".into());
        assert_eq!(input.get(LeadField::ContactHandle), "@ann");
        assert!(!input.is_empty());
        input.clear();
        assert!(input.is_empty());
    }
}
