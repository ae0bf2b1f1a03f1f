use strsim::levenshtein;

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

const SUGGESTION_MAX_DISTANCE: usize = 3;

/// Normalizes free-form selector input before it is compared against known labels.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Picks the label closest to `input`, if any is within a small edit distance.
pub(crate) fn closest_label<'a, I>(input: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = normalize_key(input);
    let mut scored: Vec<(usize, &str)> = candidates
        .into_iter()
        .map(|label| (levenshtein(&normalize_key(label), &needle), label))
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);
    scored
        .first()
        .filter(|(distance, _)| *distance <= SUGGESTION_MAX_DISTANCE)
        .map(|(_, label)| label.to_string())
}
