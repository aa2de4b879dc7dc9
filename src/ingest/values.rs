//! Cell value coercion for exported numbers

/// Parse a money, count or rate cell
///
/// Currency symbols, thousands separators and spaces are ignored and a
/// trailing `%` turns the value into a fraction. Blank, `-` and `N/A`
/// cells are absent.
pub fn parse_number(raw: &str) -> Result<Option<f64>, String> {
    let trimmed = raw.trim();
    if is_blank(trimmed) {
        return Ok(None);
    }

    let (body, percent) = match trimmed.strip_suffix('%') {
        Some(body) => (body, true),
        None => (trimmed, false),
    };
    let cleaned: String = body
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | '¥' | ',' | ' ' | '\u{a0}'))
        .collect();

    let value: f64 = cleaned
        .parse()
        .map_err(|_| format!("'{}' is not a number", trimmed))?;
    if !value.is_finite() {
        return Err(format!("'{}' is not a finite number", trimmed));
    }

    Ok(Some(if percent { value / 100.0 } else { value }))
}

/// Largest count accepted from an export; every integer up to it is exact in an `f64`
pub const MAX_COUNT: f64 = 1e15;

/// Parse a non-negative whole-number cell such as clicks or orders
pub fn parse_count(raw: &str) -> Result<Option<u64>, String> {
    match parse_number(raw)? {
        None => Ok(None),
        Some(value) if value < 0.0 => Err(format!("'{}' cannot be negative", raw.trim())),
        Some(value) if value.round() > MAX_COUNT => {
            Err(format!("'{}' is too large for a count", raw.trim()))
        }
        Some(value) => Ok(Some(value.round() as u64)),
    }
}

fn is_blank(value: &str) -> bool {
    value.is_empty()
        || value == "-"
        || value == "--"
        || value.eq_ignore_ascii_case("n/a")
        || value.eq_ignore_ascii_case("na")
}
