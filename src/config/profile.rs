pub fn resolve_profile(requested: &str) -> String {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        return "default".to_string();
    }

    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_for_blank_names() {
        assert_eq!(resolve_profile(""), "default");
        assert_eq!(resolve_profile("   "), "default");
    }

    #[test]
    fn trims_requested_name() {
        assert_eq!(resolve_profile(" work "), "work");
    }
}
