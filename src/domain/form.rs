use serde::{Deserialize, Serialize};

use super::FormSchema;

/// Visitor input for the contact section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "subject" => Some(&self.subject),
            "message" => Some(&self.message),
            _ => None,
        }
    }

    /// Required schema fields that are blank or that this form does not carry.
    pub fn missing_required<'a>(&self, schema: &'a FormSchema) -> Vec<&'a str> {
        schema
            .fields
            .iter()
            .filter(|field| field.required)
            .filter(|field| {
                self.field(&field.name)
                    .map_or(true, |value| value.trim().is_empty())
            })
            .map(|field| field.name.as_str())
            .collect()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitNotice {
    Sent,
    Failed,
}

impl SubmitNotice {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitNotice::Sent => "Message sent successfully!",
            SubmitNotice::Failed => "Failed to send message. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormField;

    fn schema() -> FormSchema {
        FormSchema {
            fields: vec![
                FormField { name: "name".into(), required: true, ..Default::default() },
                FormField { name: "email".into(), required: true, ..Default::default() },
                FormField { name: "subject".into(), required: false, ..Default::default() },
                FormField { name: "phone".into(), required: true, ..Default::default() },
            ],
            submit_button: None,
        }
    }

    #[test]
    fn reports_blank_and_unknown_required_fields() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "   ".into(),
            ..Default::default()
        };
        assert_eq!(form.missing_required(&schema()), vec!["email", "phone"]);
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        };
        form.reset();
        assert_eq!(form, ContactForm::default());
    }
}
