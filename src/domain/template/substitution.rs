//! Macro scanning and substitution for `$$name$$` tokens

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::types::Params;

/// `$$` + identifier + `$$`, identifier starting with a letter.
static MACRO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\$([A-Za-z][A-Za-z0-9_]*)\$\$").expect("macro pattern is valid")
});

/// Collect the distinct macro names referenced in `pattern`.
///
/// Tokens are matched left to right without overlap, so in `$$a$$b$$`
/// only `a` is a macro.
pub fn scan_macros(pattern: &str) -> HashSet<String> {
    MACRO_RE
        .captures_iter(pattern)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Distinct macro names in order of first appearance.
fn macro_names_in_order(pattern: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    MACRO_RE
        .captures_iter(pattern)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .filter(|name| seen.insert(*name))
        .collect()
}

/// Replace every literal `$$name$$` whose name has a value in `params`.
///
/// Names are handled in scan order. Each one claims all of its literal
/// occurrences in the original pattern that do not overlap a span already
/// claimed by an earlier name. Macros without a value are left as literal text.
/// Values are inserted verbatim and never scanned again.
pub fn substitute_macros(pattern: &str, params: Option<&Params>) -> String {
    let params = match params {
        Some(params) if !params.is_empty() => params,
        _ => return pattern.to_string(),
    };

    let mut spans: Vec<(usize, usize, &str)> = Vec::new();
    for name in macro_names_in_order(pattern) {
        let Some(value) = params.get(name) else {
            tracing::trace!(macro_name = name, "Macro left unresolved");
            continue;
        };

        let token = format!("$${name}$$");
        for (start, _) in pattern.match_indices(&token) {
            let end = start + token.len();
            if spans.iter().all(|&(s, e, _)| end <= s || start >= e) {
                spans.push((start, end, value.as_str()));
            }
        }
    }

    if spans.is_empty() {
        return pattern.to_string();
    }
    spans.sort_unstable_by_key(|&(start, _, _)| start);

    let mut output = String::with_capacity(pattern.len());
    let mut cursor = 0;
    for (start, end, value) in spans {
        output.push_str(&pattern[cursor..start]);
        output.push_str(value);
        cursor = end;
    }
    output.push_str(&pattern[cursor..]);
    output
}
