use super::text::split_list;
use serde::{Deserialize, Deserializer, Serialize};

/// A person attached to a prospect. The first contact in the prospect's list
/// is treated as primary when no explicit contact is supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A target organization. `company_name` is the only required field and is
/// the de facto unique key; everything else is an absent-tolerant signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prospect {
    pub company_name: String,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub size_band: Option<String>,
    #[serde(default)]
    pub preferred_format: Option<String>,
    #[serde(default)]
    pub training_history: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

impl Prospect {
    pub fn primary_contact(&self) -> Option<&Contact> {
        self.contacts.first()
    }
}

/// A training offering from the catalog. List fields accept either a scalar
/// string (split on `;`/`,`) or an array at the serde boundary, so scoring
/// never has to branch on the shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub format: Vec<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub sectors: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub audiences: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub keywords: Vec<String>,
}

/// A reusable outreach asset: eligibility filters plus email and phone-script
/// patterns containing `{{variable}}` placeholders. An empty filter list is a
/// wildcard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub template_name: String,
    #[serde(default)]
    pub use_case: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub domain_filter: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub sector_filter: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub format_filter: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub audience_filter: Vec<String>,
    #[serde(default)]
    pub email_subject: Option<String>,
    #[serde(default)]
    pub email_body: Option<String>,
    #[serde(default)]
    pub speech_text: Option<String>,
}

/// Sender identity substituted into `your_*` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SellerProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(raw)) => split_list(&raw),
        Some(OneOrMany::Many(values)) => values
            .into_iter()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .collect(),
    })
}
