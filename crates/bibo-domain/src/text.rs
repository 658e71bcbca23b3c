/// Trim a value and treat the empty result as absent
pub(crate) fn normalize(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == v.len() {
            Some(v)
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Some("  Nature ".to_string())), Some("Nature".to_string()));
        assert_eq!(normalize(Some("Nature".to_string())), Some("Nature".to_string()));
        assert_eq!(normalize(Some(" \t ".to_string())), None);
        assert_eq!(normalize(None), None);
    }
}
