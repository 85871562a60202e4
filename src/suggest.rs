//! "Did you mean" suggestions for unknown arguments.

/// Levenshtein (edit) distance with unit costs, over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b = b.chars().collect::<Vec<_>>();
    // costs[j] is the distance between the current prefix of `a` and b[..j].
    let mut costs = (0..=b.len()).collect::<Vec<_>>();
    for (i, ca) in a.chars().enumerate() {
        let mut corner = costs[0];
        costs[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let upper = costs[j + 1];
            costs[j + 1] = if ca == cb { corner } else { 1 + corner.min(upper).min(costs[j]) };
            corner = upper;
        }
    }
    costs[b.len()]
}

/// Picks the candidate closest to `input`.
///
/// Candidates further than `ceil(len / 2)` edits away never qualify. On a
/// tie the earlier candidate wins.
pub fn most_similar<'c>(input: &str, candidates: impl IntoIterator<Item = &'c str>) -> Option<&'c str> {
    let threshold = (input.chars().count() + 1) / 2;
    let mut best: Option<(usize, &'c str)> = None;
    for candidate in candidates {
        let dist = levenshtein(input, candidate);
        if dist > threshold {
            continue;
        }
        if best.map_or(true, |(min, _)| dist < min) {
            best = Some((dist, candidate));
        }
    }
    best.map(|(_, candidate)| candidate)
}
