use serde::{Deserialize, Serialize};

/// 機場資料，由外部 API 提供，選取後原樣保存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    pub iata_code: String,
}

impl Airport {
    /// `"<name> (<code>)"`, the text written into the input after a selection.
    pub fn canonical_label(&self) -> String {
        format!("{} ({})", self.name, self.iata_code)
    }

    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceType {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "addressLine", default)]
    pub address_line: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    #[serde(rename = "_id")]
    pub id: String,
    pub business_name: String,
    #[serde(default)]
    pub open_till: String,
    #[serde(default)]
    pub airport: String,
    #[serde(default)]
    pub ratings: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub provider_id: Option<String>,
}

pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x300/a0aec0/ffffff?text=Image";

impl Business {
    /// Filled and empty star counts for a five star scale.
    pub fn star_rating(&self) -> (usize, usize) {
        let filled = if self.ratings.is_finite() {
            self.ratings.round().clamp(0.0, 5.0) as usize
        } else {
            0
        };
        (filled, 5 - filled)
    }

    pub fn rating_text(&self) -> String {
        format!("{:.1}", self.ratings)
    }

    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .filter(|src| !src.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn short_address(&self) -> String {
        format!("{}, {}", self.address.address_line, self.address.city)
    }

    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {}",
            self.address.address_line, self.address.city, self.address.state
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// 服務提供者公開資料（不含敏感欄位）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub provider_name: String,
    #[serde(default)]
    pub about: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub contact_info: ContactInfo,
}

impl Provider {
    pub fn mailto(&self) -> Option<String> {
        let email = self.contact_info.email.trim();
        (!email.is_empty()).then(|| format!("mailto:{}", email))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    /// Standard base64 of the file contents.
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VendorRegistration {
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub business_name: String,
    pub service_type: String,
    pub address: Address,
    pub gst_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorAck {
    pub success: bool,
    pub message: String,
}
