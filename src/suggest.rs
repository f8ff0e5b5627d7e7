//! "Did you mean" hints for mistyped sprite names

/// Edit distance between two names, counting insertions, deletions and substitutions.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != *cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Up to three names within `max_distance` of `query`, closest first.
///
/// Comparison ignores ASCII case, so `linkidle` still finds `linkIdle`.
pub fn suggest<'a>(query: &str, names: &[&'a str], max_distance: usize) -> Vec<&'a str> {
    let query = query.to_ascii_lowercase();
    let mut scored: Vec<(usize, &str)> = names
        .iter()
        .map(|&name| (edit_distance(&query, &name.to_ascii_lowercase()), name))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);
    scored.into_iter().take(3).map(|(_, name)| name).collect()
}

/// Phrase suggestions as a hint line, or `None` when there are none.
pub fn format_suggestion(suggestions: &[&str]) -> Option<String> {
    let quoted: Vec<String> = suggestions.iter().map(|s| format!("'{}'", s)).collect();
    match quoted.as_slice() {
        [] => None,
        [one] => Some(format!("Did you mean {}?", one)),
        [first, second] => Some(format!("Did you mean {} or {}?", first, second)),
        [init @ .., last] => Some(format!("Did you mean {}, or {}?", init.join(", "), last)),
    }
}
