//! Identifier formatting rules shared by the builders and the driver.

/// Format a declared field name into its schema key: lower-case the first
/// character, and only when it is upper-case. Everything else passes
/// through untouched.
#[must_use]
pub fn schema_key(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) if first.is_uppercase() => {
            first.to_lowercase().chain(chars).collect()
        }
        _ => name.to_string(),
    }
}

/// Whether a type name is usable as an output artifact identifier.
/// Compiler-generated types carry marker characters that are not
/// filesystem-safe; those never get a document.
#[must_use]
pub fn is_artifact_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_leading_uppercase_only() {
        assert_eq!(schema_key("IncomeType"), "incomeType");
        assert_eq!(schema_key("Amount"), "amount");
    }

    #[test]
    fn passes_through_lowercase_and_oddities() {
        assert_eq!(schema_key("amount"), "amount");
        assert_eq!(schema_key(""), "");
        assert_eq!(schema_key("_Private"), "_Private");
        assert_eq!(schema_key("X"), "x");
    }

    #[test]
    fn artifact_names_reject_generated_markers() {
        assert!(is_artifact_name("EmploymentIncome"));
        assert!(is_artifact_name("Income_2"));
        assert!(!is_artifact_name("<>c__DisplayClass"));
        assert!(!is_artifact_name(""));
        assert!(!is_artifact_name("Income.Nested"));
    }
}
