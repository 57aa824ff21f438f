use crate::domain::model::{Attachment, VendorRegistration};
use crate::domain::ports::VendorRegistry;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{validate_email, validate_non_empty_string, validate_phone, Validate};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const MAX_ATTACHMENTS: usize = 5;
pub const MAX_ATTACHMENT_BYTES: usize = 5 * 1024 * 1024;

impl Attachment {
    pub fn from_bytes(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: &[u8],
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: STANDARD.encode(bytes),
        }
    }

    pub fn decoded_len(&self) -> Result<usize> {
        STANDARD
            .decode(self.data.as_bytes())
            .map(|bytes| bytes.len())
            .map_err(|e| {
                DirectoryError::validation(format!(
                    "Attachment '{}' is not valid base64: {}",
                    self.file_name, e
                ))
            })
    }
}

impl Validate for VendorRegistration {
    fn validate(&self) -> Result<()> {
        self.check_fields().map_err(as_form_error)
    }
}

/// Field checks report configuration-style errors; the form shows them as input errors.
fn as_form_error(e: DirectoryError) -> DirectoryError {
    match e {
        DirectoryError::InvalidConfigValueError { field, reason, .. } => {
            DirectoryError::validation(format!("{}: {}", field, reason))
        }
        other => other,
    }
}

impl VendorRegistration {
    fn check_fields(&self) -> Result<()> {
        validate_non_empty_string("contact_name", &self.contact_name)?;
        validate_phone("phone", &self.phone)?;
        validate_email("email", &self.email)?;
        validate_non_empty_string("business_name", &self.business_name)?;
        validate_non_empty_string("service_type", &self.service_type)?;
        validate_non_empty_string("address.address_line", &self.address.address_line)?;
        validate_non_empty_string("address.city", &self.address.city)?;
        validate_non_empty_string("address.country", &self.address.country)?;
        validate_non_empty_string("gst_number", &self.gst_number)?;

        if self.attachments.len() > MAX_ATTACHMENTS {
            return Err(DirectoryError::validation(format!(
                "At most {} documents can be attached",
                MAX_ATTACHMENTS
            )));
        }
        for attachment in &self.attachments {
            validate_non_empty_string("attachments.file_name", &attachment.file_name)?;
            if attachment.decoded_len()? > MAX_ATTACHMENT_BYTES {
                return Err(DirectoryError::validation(format!(
                    "Attachment '{}' exceeds {} MiB",
                    attachment.file_name,
                    MAX_ATTACHMENT_BYTES / (1024 * 1024)
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Succeeded(String),
    Failed(String),
}

/// The vendor sign-up form: a draft plus the outcome of the last submission.
#[derive(Debug, Clone)]
pub struct VendorForm {
    pub draft: VendorRegistration,
    status: SubmissionStatus,
}

impl Default for VendorForm {
    fn default() -> Self {
        Self::new(VendorRegistration::default())
    }
}

impl VendorForm {
    pub fn new(draft: VendorRegistration) -> Self {
        Self {
            draft,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn attach(&mut self, attachment: Attachment) {
        self.draft.attachments.push(attachment);
    }

    /// Validates locally, then submits. Invalid drafts never reach the registry.
    pub async fn submit<R: VendorRegistry + ?Sized>(&mut self, registry: &R) -> &SubmissionStatus {
        if let Err(e) = self.draft.validate() {
            self.status = SubmissionStatus::Failed(e.user_friendly_message());
            return &self.status;
        }

        self.status = match registry.register_vendor(&self.draft).await {
            Ok(ack) if ack.success => {
                tracing::info!("Vendor '{}' registered", self.draft.business_name);
                SubmissionStatus::Succeeded(ack.message)
            }
            Ok(ack) => {
                tracing::warn!("Vendor registration rejected: {}", ack.message);
                SubmissionStatus::Failed(ack.message)
            }
            Err(e) => {
                tracing::error!("Vendor registration failed: {}", e);
                SubmissionStatus::Failed(format!("Submission failed: {}", e.user_friendly_message()))
            }
        };
        &self.status
    }
}
