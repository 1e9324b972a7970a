use crate::workflows::outreach::domain::{Contact, Formation, Prospect, Template};
use crate::workflows::outreach::text::split_list;
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Sector universe a "Tous secteurs" formation row expands into.
const ALL_SECTORS: [&str; 8] = [
    "Industrie",
    "Santé",
    "Retail/Luxe",
    "Transport",
    "BTP",
    "Tertiaire",
    "Public",
    "Éducation",
];

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b';')
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
}

pub(crate) fn parse_prospects<R: Read>(reader: R) -> Result<Vec<Prospect>, csv::Error> {
    let mut csv_reader = csv_reader(reader);
    let mut prospects = Vec::new();

    for record in csv_reader.deserialize::<ProspectRow>() {
        let row = record?;
        let Some(company_name) = row.company_name else {
            continue;
        };

        prospects.push(Prospect {
            company_name,
            sector: row.sector,
            region: row.region,
            size_band: row.size_band,
            preferred_format: row.preferred_format,
            training_history: row.training_history,
            stage: row.stage,
            notes: row.notes,
            contacts: parse_contacts(row.contacts.as_deref()),
        });
    }

    Ok(prospects)
}

pub(crate) fn parse_templates<R: Read>(reader: R) -> Result<Vec<Template>, csv::Error> {
    let mut csv_reader = csv_reader(reader);
    let mut templates = Vec::new();

    for record in csv_reader.deserialize::<TemplateRow>() {
        let row = record?;
        let Some(template_name) = row.template_name else {
            continue;
        };

        templates.push(Template {
            template_name,
            use_case: row.use_case,
            domain_filter: list_cell(row.domain_filter.as_deref()),
            sector_filter: list_cell(row.sector_filter.as_deref()),
            format_filter: list_cell(row.format_filter.as_deref()),
            audience_filter: list_cell(row.audience_filter.as_deref()),
            email_subject: row.email_subject,
            email_body: row.email_body,
            speech_text: row.speech_text,
        });
    }

    Ok(templates)
}

/// Formation rows are positional: title, domain, format, duration, audience,
/// sector, objectives, then any number of keyword columns. The seven named
/// columns make a complete row; keyword columns are optional.
pub(crate) fn parse_formations<R: Read>(reader: R) -> Result<Vec<Formation>, csv::Error> {
    let mut csv_reader = csv_reader(reader);
    let mut formations = Vec::new();

    for record in csv_reader.records() {
        let row = record?;
        if row.len() < 7 {
            continue;
        }

        let cell = |index: usize| {
            row.get(index)
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let sectors = match cell(5) {
            Some(sector) if sector == "Tous secteurs" => {
                ALL_SECTORS.iter().map(|s| s.to_string()).collect()
            }
            Some(sector) => vec![sector],
            None => Vec::new(),
        };
        let keywords = row
            .iter()
            .skip(7)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect();

        formations.push(Formation {
            title: cell(0),
            domain: cell(1),
            format: cell(2).map(|value| split_list(&value)).unwrap_or_default(),
            duration: cell(3),
            sectors,
            audiences: cell(4).into_iter().collect(),
            keywords,
        });
    }

    Ok(formations)
}

#[derive(Debug, Deserialize)]
struct ProspectRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    company_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    sector: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    region: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    size_band: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    preferred_format: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    training_history: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    stage: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    notes: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    contacts: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TemplateRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    template_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    use_case: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    domain_filter: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    sector_filter: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    format_filter: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    audience_filter: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    email_subject: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    email_body: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    speech_text: Option<String>,
}

/// The contacts cell holds a JSON array exported alongside the tabular
/// columns. A malformed cell degrades to an empty contact list rather than
/// failing the whole import.
fn parse_contacts(cell: Option<&str>) -> Vec<Contact> {
    let Some(raw) = cell.map(str::trim).filter(|value| !value.is_empty()) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<ContactCell>>(raw) {
        Ok(entries) => entries
            .into_iter()
            .map(|entry| Contact {
                name: entry.name,
                role: entry.role,
                email: entry.email,
                phone: entry.phone,
            })
            .collect(),
        Err(_) => Vec::new(),
    }
}

#[derive(Debug, Deserialize)]
struct ContactCell {
    #[serde(default, alias = "contact_name")]
    name: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

fn list_cell(cell: Option<&str>) -> Vec<String> {
    cell.map(split_list).unwrap_or_default()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
