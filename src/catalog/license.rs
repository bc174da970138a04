//! License entity and category types

use serde::Serialize;

/// How a license treats derivative works
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Permissive,
    #[serde(rename = "copyleft-weak")]
    WeakCopyleft,
    #[serde(rename = "copyleft-strong")]
    StrongCopyleft,
}

impl Category {
    /// All categories in display order (least to most restrictive)
    pub const ALL: [Category; 3] = [
        Category::Permissive,
        Category::WeakCopyleft,
        Category::StrongCopyleft,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Permissive => "Permissive",
            Category::WeakCopyleft => "Weak Copyleft",
            Category::StrongCopyleft => "Strong Copyleft",
        }
    }

    /// Stable token used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Permissive => "permissive",
            Category::WeakCopyleft => "copyleft-weak",
            Category::StrongCopyleft => "copyleft-strong",
        }
    }

    /// One-paragraph explanation shown in the category guide
    pub fn guide(&self) -> &'static str {
        match self {
            Category::Permissive => {
                "Maximum freedom. Commercial use and modification are allowed without \
                 requiring derived code to be open source."
            }
            Category::WeakCopyleft => {
                "Balance between freedom and protection. Linking with proprietary code is \
                 allowed, but certain components must stay open."
            }
            Category::StrongCopyleft => {
                "Maximum protection. All derived code must be distributed under the same \
                 open source license."
            }
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub category: Category,
    /// Subjective permissiveness score, 0..=100
    pub freedom_level: u8,
    pub description: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub key_points: Vec<String>,
    pub compatibility: String,
    /// Well-known projects using this license
    pub examples: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tokens_are_distinct() {
        let tokens: std::collections::HashSet<_> =
            Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_category_serializes_as_token() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Category::WeakCopyleft.to_string(), "Weak Copyleft");
    }
}
