use super::domain::{Contact, Formation, Prospect, SellerProfile};
use super::text::string_list;
use std::collections::BTreeMap;

/// Builds the variable dictionary substituted into template text. Every
/// variable is present with an empty-string default so substitution never
/// depends on which sources were supplied.
pub fn build_placeholders(
    prospect: &Prospect,
    formation: Option<&Formation>,
    contact: Option<&Contact>,
    seller: Option<&SellerProfile>,
) -> BTreeMap<String, String> {
    let formats = formation
        .map(|f| string_list(&f.format))
        .unwrap_or_default();
    let resolved_format = if formats.is_empty() {
        prospect.preferred_format.clone().unwrap_or_default()
    } else {
        formats.join(", ")
    };

    let mut vars = BTreeMap::new();
    vars.insert("company_name".to_string(), prospect.company_name.clone());
    vars.insert(
        "sector".to_string(),
        prospect.sector.clone().unwrap_or_default(),
    );
    vars.insert(
        "region".to_string(),
        prospect.region.clone().unwrap_or_default(),
    );
    vars.insert(
        "contact_name".to_string(),
        contact.and_then(|c| c.name.clone()).unwrap_or_default(),
    );
    vars.insert(
        "contact_role".to_string(),
        contact.and_then(|c| c.role.clone()).unwrap_or_default(),
    );
    vars.insert(
        "formation_title".to_string(),
        formation.and_then(|f| f.title.clone()).unwrap_or_default(),
    );
    vars.insert(
        "duration".to_string(),
        formation
            .and_then(|f| f.duration.clone())
            .unwrap_or_default(),
    );
    vars.insert("format".to_string(), resolved_format);
    vars.insert(
        "domain".to_string(),
        formation.and_then(|f| f.domain.clone()).unwrap_or_default(),
    );
    vars.insert(
        "your_name".to_string(),
        seller.and_then(|s| s.name.clone()).unwrap_or_default(),
    );
    vars.insert(
        "your_email".to_string(),
        seller.and_then(|s| s.email.clone()).unwrap_or_default(),
    );
    vars.insert(
        "your_phone".to_string(),
        seller.and_then(|s| s.phone.clone()).unwrap_or_default(),
    );
    vars
}

/// Replaces every `{{key}}` occurrence for every key in the map. Unknown
/// tokens are left verbatim; keys never nest, so order is immaterial.
pub fn apply_placeholders(text: &str, vars: &BTreeMap<String, String>) -> String {
    vars.iter().fold(text.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{{{key}}}}}"), value)
    })
}
