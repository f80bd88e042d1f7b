use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    Success,
    Destructive,
}

/// A short title/description pair shown to the customer after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn order_submitted() -> Self {
        Self::success(
            "Order submitted successfully!",
            "We'll contact you shortly to confirm your order.",
        )
    }

    pub fn booking_submitted() -> Self {
        Self::success(
            "Booking submitted successfully!",
            "We'll contact you within 24 hours to confirm your catering booking.",
        )
    }

    /// Shown for any storage or database failure; the details only go to the logs.
    ///
    /// `subject` is `"order"` or `"booking"`.
    pub fn submission_failed(subject: &str) -> Self {
        Self::error(
            format!("Error submitting {subject}"),
            "Please try again or contact us directly.",
        )
    }
}
