//! Contact and job application drafts, opened in the visitor's mail client.
//!
//! Nothing is sent from the page. A `mailto:` URI is built and handed to the
//! browser; whether a mail handler actually opens is not observable here.

pub mod form;

use crate::config;
use crate::dom::{self, DomError};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

const MISSING_COMPANY: &str = "Not provided";

#[derive(Debug, Error)]
pub enum ContactError {
    #[error(transparent)]
    Dom(#[from] DomError),
    #[error("malformed form submission: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One contact form submission, as entered.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub service: String,
    pub message: String,
}

impl ContactSubmission {
    /// Builds a submission from raw `(field, value)` pairs. Unknown fields are
    /// ignored and later duplicates win.
    pub fn from_fields<I, K, V>(fields: I) -> Result<Self, ContactError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let record: Map<String, Value> = fields
            .into_iter()
            .map(|(key, value)| (key.into(), Value::String(value.into())))
            .collect();
        Ok(serde_json::from_value(Value::Object(record))?)
    }

    fn company_or_placeholder(&self) -> &str {
        self.company
            .as_deref()
            .filter(|company| !company.is_empty())
            .unwrap_or(MISSING_COMPANY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn new(subject: String, body: String) -> Self {
        Self {
            recipient: config::get_contact_email().to_string(),
            subject,
            body,
        }
    }

    pub fn to_mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

pub fn compose_contact_email(submission: &ContactSubmission) -> MailDraft {
    let subject = format!("New Contact Form Submission from {}", submission.name);
    let body = format!(
        "\nName: {}\nEmail: {}\nCompany: {}\nService: {}\nMessage: {}\n    ",
        submission.name,
        submission.email,
        submission.company_or_placeholder(),
        submission.service,
        submission.message
    );
    MailDraft::new(subject, body)
}

/// Application template for `job_title`; the applicant fills in the placeholders.
pub fn compose_job_application(job_title: &str) -> MailDraft {
    let company = config::get_company_name();
    let subject = format!("Job Application for {}", job_title);
    let body = format!(
        "\nDear {company} Team,\n\n\
         I am interested in applying for the {job_title} position at {company}.\n\n\
         Please find my resume attached. I look forward to hearing from you.\n\n\
         Best regards,\n\
         [Your Name]\n\
         [Your Phone Number]\n\
         [Your Email]\n    "
    );
    MailDraft::new(subject, body)
}

/// Points the window at the draft's `mailto:` URI.
pub fn open_mail_client(draft: &MailDraft) -> Result<(), DomError> {
    dom::window()?.location().set_href(&draft.to_mailto_uri())?;
    log::info!("Mail draft opened: {}", draft.subject);
    Ok(())
}
