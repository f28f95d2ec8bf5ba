use thiserror::Error;

/// Highest usable 802.1Q VLAN id.
pub const MAX_VLAN_ID: u32 = 4094;

/// Highest port index accepted in a port range.
pub const MAX_PORT_INDEX: u32 = 1024;

/// Reasons a VLAN or port list element is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Element (or one side of a range) is not a plain decimal number.
    #[error("range list element '{element}' is not numeric")]
    NonNumeric { element: String },
    /// Element contains a `-` but is not exactly `A-B`.
    #[error("range list element '{element}' must have the form A-B")]
    Arity { element: String },
    /// Number outside `1..=4094`.
    #[error("range list element '{element}' is outside 1-4094")]
    OutOfRange { element: String },
}

/// Check a comma separated list of numbers and `A-B` ranges.
///
/// Whitespace anywhere in the list is ignored. Every element must be a VLAN id
/// in `1..=4094` or two such ids joined by a single `-`.
pub fn validate_range_list(spec: &str) -> Result<(), RangeError> {
    let compact: String = spec.chars().filter(|c| !c.is_whitespace()).collect();

    for element in compact.split(',') {
        let bounds: Vec<&str> = element.split('-').collect();
        if bounds.len() > 2 {
            return Err(RangeError::Arity {
                element: element.to_string(),
            });
        }
        if !bounds.iter().all(|b| is_number(b)) {
            return Err(RangeError::NonNumeric {
                element: element.to_string(),
            });
        }
        if !bounds.iter().all(|b| is_vlan_id(b)) {
            return Err(RangeError::OutOfRange {
                element: element.to_string(),
            });
        }
    }
    Ok(())
}

/// Boolean form of [`validate_range_list`].
pub fn is_valid_range_list(spec: &str) -> bool {
    validate_range_list(spec).is_ok()
}

/// Expand `10,20-22` into `["10", "20", "21", "22"]`.
///
/// Plain tokens are kept as written (trimmed), in encounter order. A reversed,
/// unparsable or beyond-4094 range contributes nothing. Duplicates are kept.
pub fn expand_range_list(spec: &str) -> Vec<String> {
    let mut out = Vec::new();
    for part in spec.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match part.split_once('-') {
            Some((start, end)) => {
                let (Ok(start), Ok(end)) = (start.trim().parse::<u32>(), end.trim().parse::<u32>())
                else {
                    continue;
                };
                if end > MAX_VLAN_ID {
                    tracing::trace!(part, "skipping range beyond the vlan id space");
                    continue;
                }
                out.extend((start..=end).map(|v| v.to_string()));
            }
            None => out.push(part.to_string()),
        }
    }
    out
}

/// Expand a port list such as `1-8,12`.
///
/// Unlike [`expand_range_list`] this drops anything that is not numeric
/// (`A1`, `Trk1`) and normalizes numbers, so `05` becomes `5`. Ranges ending
/// past [`MAX_PORT_INDEX`] are dropped.
pub fn expand_port_list(spec: &str) -> Vec<String> {
    let mut out = Vec::new();
    for chunk in spec.split(',') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        if let Some((start, end)) = chunk.split_once('-') {
            match (parse_number(start), parse_number(end)) {
                (Some(start), Some(end)) if end >= start && end <= MAX_PORT_INDEX => {
                    out.extend((start..=end).map(|p| p.to_string()));
                }
                _ => tracing::trace!(chunk, "skipping unusable port range"),
            }
        } else if let Some(port) = parse_number(chunk) {
            out.push(port.to_string());
        } else {
            tracing::trace!(chunk, "skipping non-numeric port");
        }
    }
    out
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_vlan_id(s: &str) -> bool {
    s.parse::<u32>()
        .is_ok_and(|id| (1..=MAX_VLAN_ID).contains(&id))
}

fn parse_number(s: &str) -> Option<u32> {
    let s = s.trim();
    if is_number(s) {
        s.parse().ok()
    } else {
        None
    }
}
