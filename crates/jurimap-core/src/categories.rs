use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Presentation hint for a category's map marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDescriptor {
    pub color: String,
    pub symbol: String,
}

/// A searchable class of legal service.
///
/// `tags` are `key=value` predicates understood by the POI data source;
/// a place matches the category if it matches any one of them. Categories
/// are fixed at startup and iterated in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub name: String,
    pub tags: Vec<String>,
    pub icon: IconDescriptor,
}

#[derive(Debug, Deserialize)]
pub struct CategoriesFile {
    pub categories: Vec<ServiceCategory>,
}

fn category(name: &str, tags: &[&str], color: &str, symbol: &str) -> ServiceCategory {
    ServiceCategory {
        name: name.to_owned(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        icon: IconDescriptor {
            color: color.to_owned(),
            symbol: symbol.to_owned(),
        },
    }
}

/// The built-in category registry, used when no categories file is present.
///
/// Order is significant: it is the order categories are queried and the
/// order they appear in results.
#[must_use]
pub fn default_categories() -> Vec<ServiceCategory> {
    vec![
        category("Lawyers", &["office=lawyer"], "blue", "briefcase"),
        category(
            "Legal Aid",
            &["office=ngo", "amenity=social_facility"],
            "green",
            "hands-helping",
        ),
        category("Police", &["amenity=police"], "darkblue", "shield-alt"),
        category("Courts", &["amenity=courthouse"], "purple", "landmark"),
    ]
}

/// Load and validate the category registry from a YAML file.
///
/// File order is preserved.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_categories(path: &Path) -> Result<Vec<ServiceCategory>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CategoriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CategoriesFile = serde_yaml::from_str(&content)?;
    validate_categories(&file.categories)?;
    Ok(file.categories)
}

fn validate_categories(categories: &[ServiceCategory]) -> Result<(), ConfigError> {
    if categories.is_empty() {
        return Err(ConfigError::Validation(
            "category registry must not be empty".to_string(),
        ));
    }

    let mut seen_names = HashSet::new();
    for cat in categories {
        if cat.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "category name must be non-empty".to_string(),
            ));
        }

        if !seen_names.insert(cat.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category name: '{}'",
                cat.name
            )));
        }

        if cat.tags.is_empty() {
            return Err(ConfigError::Validation(format!(
                "category '{}' must declare at least one tag predicate",
                cat.name
            )));
        }

        for tag in &cat.tags {
            let valid = tag
                .split_once('=')
                .is_some_and(|(k, v)| !k.is_empty() && !v.is_empty());
            if !valid {
                return Err(ConfigError::Validation(format!(
                    "category '{}' has malformed tag predicate '{}'; expected key=value",
                    cat.name, tag
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_categories_order_is_fixed() {
        let names: Vec<String> = default_categories().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Lawyers", "Legal Aid", "Police", "Courts"]);
    }

    #[test]
    fn default_categories_pass_validation() {
        assert!(validate_categories(&default_categories()).is_ok());
    }

    #[test]
    fn validate_rejects_empty_registry() {
        let err = validate_categories(&[]).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn validate_rejects_empty_name() {
        let cats = vec![category("  ", &["office=lawyer"], "blue", "briefcase")];
        let err = validate_categories(&cats).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_duplicate_name_case_insensitive() {
        let cats = vec![
            category("Police", &["amenity=police"], "darkblue", "shield-alt"),
            category("police", &["amenity=police"], "darkblue", "shield-alt"),
        ];
        let err = validate_categories(&cats).unwrap_err();
        assert!(err.to_string().contains("duplicate category name"));
    }

    #[test]
    fn validate_rejects_category_without_tags() {
        let cats = vec![category("Courts", &[], "purple", "landmark")];
        let err = validate_categories(&cats).unwrap_err();
        assert!(err.to_string().contains("at least one tag"));
    }

    #[test]
    fn validate_rejects_malformed_tag_predicate() {
        for bad in ["courthouse", "amenity=", "=courthouse"] {
            let cats = vec![category("Courts", &[bad], "purple", "landmark")];
            let err = validate_categories(&cats).unwrap_err();
            assert!(
                err.to_string().contains("malformed tag predicate"),
                "tag '{bad}' should be rejected"
            );
        }
    }

    #[test]
    fn parse_categories_yaml() {
        let yaml = r"
categories:
  - name: Lawyers
    tags: [office=lawyer]
    icon: { color: blue, symbol: briefcase }
  - name: Courts
    tags: [amenity=courthouse]
    icon: { color: purple, symbol: landmark }
";
        let file: CategoriesFile = serde_yaml::from_str(yaml).unwrap();
        assert!(validate_categories(&file.categories).is_ok());
        assert_eq!(file.categories[0].name, "Lawyers");
        assert_eq!(file.categories[1].icon.symbol, "landmark");
    }
}
