use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// How a customer pays.
///
/// Serialized in lowercase (`"gcash"`, `"bpi"`, `"cod"`, `"dp"`), which is also the value
/// stored in the `payment_method` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Gcash,
    Bpi,
    /// Cash on delivery.
    Cod,
    /// Reservation deposit, catering bookings only.
    Dp,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Gcash => "gcash",
            PaymentMethod::Bpi => "bpi",
            PaymentMethod::Cod => "cod",
            PaymentMethod::Dp => "dp",
        }
    }

    /// Everything except cash on delivery needs a receipt or payment slip.
    pub fn requires_proof(&self) -> bool {
        !matches!(self, PaymentMethod::Cod)
    }

    pub fn allowed_for_delivery(&self) -> bool {
        matches!(self, PaymentMethod::Gcash | PaymentMethod::Bpi | PaymentMethod::Cod)
    }

    pub fn allowed_for_catering(&self) -> bool {
        matches!(self, PaymentMethod::Gcash | PaymentMethod::Bpi | PaymentMethod::Dp)
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gcash" => Ok(PaymentMethod::Gcash),
            "bpi" => Ok(PaymentMethod::Bpi),
            "cod" => Ok(PaymentMethod::Cod),
            "dp" => Ok(PaymentMethod::Dp),
            other => Err(format!("Unknown payment method: {other}")),
        }
    }
}

/// An uploaded receipt or payment slip.
#[derive(Clone, PartialEq)]
pub struct PaymentProof {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PaymentProof {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

// Payload bytes stay out of the logs.
impl fmt::Debug for PaymentProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentProof")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("GCash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Gcash);
        assert_eq!(" dp ".parse::<PaymentMethod>().unwrap(), PaymentMethod::Dp);
        assert!("paypal".parse::<PaymentMethod>().is_err());
        assert_eq!(PaymentMethod::Cod.to_string(), "cod");
        assert_eq!(
            serde_json::to_value(PaymentMethod::Bpi).unwrap(),
            serde_json::json!("bpi")
        );
    }

    #[test]
    fn test_surfaces_accept_different_methods() {
        assert!(PaymentMethod::Cod.allowed_for_delivery());
        assert!(!PaymentMethod::Cod.allowed_for_catering());
        assert!(PaymentMethod::Dp.allowed_for_catering());
        assert!(!PaymentMethod::Dp.allowed_for_delivery());
        assert!(!PaymentMethod::Cod.requires_proof());
        assert!(PaymentMethod::Gcash.requires_proof());
    }

    #[test]
    fn test_proof_debug_omits_bytes() {
        let proof = PaymentProof::new("receipt.jpg", "image/jpeg", vec![0xff; 2048]);
        let rendered = format!("{proof:?}");
        assert!(rendered.contains("receipt.jpg"));
        assert!(rendered.contains("len: 2048"));
        assert!(!rendered.contains("255"));
    }
}
