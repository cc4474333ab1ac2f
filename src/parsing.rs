use crate::error::ValidationError;

pub fn parse_positive(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Missing { field });
    }
    match raw.parse::<i64>() {
        Ok(v) if v > 0 && v <= u32::MAX as i64 => Ok(v as u32),
        _ => Err(ValidationError::NotPositive { field, value: raw.to_string() }),
    }
}

/// Checks an optional sizing value coming from a typed source.
pub fn require_positive(field: &'static str, value: Option<i64>) -> Result<u32, ValidationError> {
    match value {
        None => Err(ValidationError::Missing { field }),
        Some(v) if v > 0 && v <= u32::MAX as i64 => Ok(v as u32),
        Some(v) => Err(ValidationError::NotPositive { field, value: v.to_string() }),
    }
}

/// Parses `k=v,k2=v2` into ordered pairs. Key uniqueness is checked by `Tags`.
pub fn parse_tags(raw: &str) -> Result<Vec<(String, String)>, ValidationError> {
    let mut tags = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| ValidationError::MalformedTag(entry.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(ValidationError::MalformedTag(entry.to_string()));
        }
        tags.push((key.to_string(), value.trim().to_string()));
    }
    Ok(tags)
}

pub fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim(), "1" | "true" | "TRUE" | "True")
}
