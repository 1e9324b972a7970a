use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical comparison key for every free-text catalog value: NFD decompose,
/// drop combining marks, collapse non-alphanumeric runs to single spaces,
/// trim, lowercase. "Santé", "SANTE" and " sante " all map to "sante".
pub(crate) fn normalize_token(value: &str) -> String {
    let mut normalized = String::with_capacity(value.len());
    let mut pending_space = false;

    for c in value.nfd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_alphanumeric() {
            if pending_space && !normalized.is_empty() {
                normalized.push(' ');
            }
            pending_space = false;
            normalized.extend(c.to_lowercase());
        } else {
            pending_space = true;
        }
    }

    normalized
}

/// Splits a scalar list cell on `;` or `,`, trimming and dropping empties.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split([';', ','])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trims list elements and drops the empty ones.
pub(crate) fn string_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// True iff some normalized token of `a` equals some normalized token of `b`.
/// An empty side never intersects; the "empty filter = wildcard" policy
/// belongs to callers.
pub(crate) fn has_intersection(a: &[String], b: &[String]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let targets: Vec<String> = b.iter().map(|value| normalize_token(value)).collect();
    a.iter()
        .any(|value| targets.contains(&normalize_token(value)))
}

/// True iff `needle` is non-empty and normalizes to some element of `list`.
pub(crate) fn includes_token(list: &[String], needle: &str) -> bool {
    let target = normalize_token(needle);
    if target.is_empty() {
        return false;
    }
    list.iter().any(|value| normalize_token(value) == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn normalize_strips_accents_and_case() {
        assert_eq!(normalize_token("Santé"), "sante");
        assert_eq!(normalize_token("SANTE"), "sante");
        assert_eq!(normalize_token("  Qualité & Sécurité  "), "qualite securite");
    }

    #[test]
    fn normalize_collapses_punctuation_runs() {
        assert_eq!(normalize_token("cross-sell"), "cross sell");
        assert_eq!(normalize_token("follow -- up!!"), "follow up");
        assert_eq!(normalize_token("émaillé"), "emaille");
    }

    #[test]
    fn normalize_empty_input_yields_empty() {
        assert_eq!(normalize_token(""), "");
        assert_eq!(normalize_token(" -- "), "");
    }

    #[test]
    fn split_list_handles_both_separators() {
        assert_eq!(
            split_list("Distanciel; Présentiel , Mixte"),
            vec!["Distanciel", "Présentiel", "Mixte"]
        );
        assert_eq!(split_list(" ; , "), Vec::<String>::new());
    }

    #[test]
    fn string_list_drops_blank_entries() {
        assert_eq!(
            string_list(&owned(&[" BTP ", "", "  ", "Santé"])),
            vec!["BTP", "Santé"]
        );
    }

    #[test]
    fn intersection_requires_both_sides() {
        assert!(has_intersection(
            &owned(&["Distanciel"]),
            &owned(&["distanciel", "mixte"])
        ));
        assert!(!has_intersection(&owned(&[]), &owned(&["distanciel"])));
        assert!(!has_intersection(&owned(&["distanciel"]), &owned(&[])));
    }

    #[test]
    fn includes_token_normalizes_both_sides() {
        let list = owned(&["Santé", "Industrie"]);
        assert!(includes_token(&list, "SANTE"));
        assert!(includes_token(&list, "industrie"));
        assert!(!includes_token(&list, ""));
        assert!(!includes_token(&list, "BTP"));
    }
}
