//! Helpers for picking apart single configuration lines.

/// Iterate trimmed, non-blank lines of a configuration.
pub fn significant_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(str::trim).filter(|line| !line.is_empty())
}

/// Return the argument of `keyword` when `line` is `keyword <argument>`.
///
/// The keyword may contain spaces (`switchport access vlan`). It must be
/// followed by whitespace and a non-empty argument; the returned argument is
/// trimmed.
pub fn keyword_arg<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(keyword)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim();
    (!rest.is_empty()).then_some(rest)
}

/// Last whitespace-separated token of a line.
pub fn last_token(line: &str) -> Option<&str> {
    line.split_whitespace().next_back()
}

/// Remove every double quote.
pub fn strip_quotes(value: &str) -> String {
    value.replace('"', "")
}

/// Remove double quotes surrounding a value, keeping inner ones.
pub fn trim_quotes(value: &str) -> &str {
    value.trim_matches('"')
}

/// Trailing decimal digits of an interface name (`GigabitEthernet1/0/12` → `12`).
pub fn trailing_number(name: &str) -> Option<&str> {
    let digits = name
        .bytes()
        .rev()
        .take_while(|b| b.is_ascii_digit())
        .count();
    (digits > 0).then(|| &name[name.len() - digits..])
}

/// Sort key for numeric identifiers that are stored as strings.
///
/// Numbers order numerically; anything unparsable sorts after them,
/// lexically.
pub fn numeric_key(id: &str) -> (u64, &str) {
    (id.parse().unwrap_or(u64::MAX), id)
}
