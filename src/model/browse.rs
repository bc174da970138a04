//! Browse Model
//!
//! Owns the two pieces of transient browse state: the active category filter
//! and the (at most one) expanded license. Filtering and expansion are
//! independent: changing the filter never collapses the expanded entry, even
//! when that entry is no longer visible.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::catalog::{Catalog, Category, License};
use crate::error::BrowseError;

/// Active category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    /// Filters in the order shown in the filter bar
    pub const ALL: [Filter; 4] = [
        Filter::All,
        Filter::Category(Category::Permissive),
        Filter::Category(Category::WeakCopyleft),
        Filter::Category(Category::StrongCopyleft),
    ];

    /// Whether a license passes this filter
    pub fn matches(&self, license: &License) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(category) => license.category == *category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Category(category) => category.label(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Category(category) => category.as_str(),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Filter {
    type Err = BrowseError;

    /// Parse a filter token. Accepts the canonical tokens plus a few short
    /// aliases, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "permissive" => Ok(Filter::Category(Category::Permissive)),
            "copyleft-weak" | "weak-copyleft" | "weak" => {
                Ok(Filter::Category(Category::WeakCopyleft))
            }
            "copyleft-strong" | "strong-copyleft" | "strong" => {
                Ok(Filter::Category(Category::StrongCopyleft))
            }
            _ => Err(BrowseError::InvalidFilter(s.to_string())),
        }
    }
}

impl From<Category> for Filter {
    fn from(category: Category) -> Self {
        Filter::Category(category)
    }
}

/// Transient browse state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseState {
    pub active_filter: Filter,
    /// Id of the expanded license; a lookup key into the catalog, never owning
    pub expanded_id: Option<String>,
}

/// Result of a `toggle_expanded` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Expanded,
    Collapsed,
    /// The id is not in the catalog; state was left untouched
    Ignored,
}

/// Browse Controller: the only writer of `BrowseState`
#[derive(Debug, Clone)]
pub struct BrowseController<'c> {
    catalog: &'c Catalog,
    state: BrowseState,
}

impl<'c> BrowseController<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            state: BrowseState::default(),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    pub fn active_filter(&self) -> Filter {
        self.state.active_filter
    }

    pub fn expanded_id(&self) -> Option<&str> {
        self.state.expanded_id.as_deref()
    }

    /// Return to `{ All, nothing expanded }`
    pub fn reset(&mut self) {
        self.state = BrowseState::default();
    }

    /// Replace the active filter. The expanded entry is left as is.
    pub fn set_filter(&mut self, filter: Filter) {
        debug!(from = %self.state.active_filter, to = %filter, "set_filter");
        self.state.active_filter = filter;
    }

    /// Parse and apply a filter token; invalid tokens leave state untouched
    pub fn set_filter_str(&mut self, token: &str) -> Result<(), BrowseError> {
        let filter = token.parse::<Filter>()?;
        self.set_filter(filter);
        Ok(())
    }

    /// Expand `id`, or collapse it if it is already expanded
    pub fn toggle_expanded(&mut self, id: &str) -> Toggle {
        if !self.catalog.contains(id) {
            warn!(id, "toggle_expanded: unknown license id ignored");
            return Toggle::Ignored;
        }

        if self.state.expanded_id.as_deref() == Some(id) {
            self.state.expanded_id = None;
            debug!(id, "collapsed");
            Toggle::Collapsed
        } else {
            if let Some(previous) = self.state.expanded_id.replace(id.to_string()) {
                debug!(id, previous = %previous, "expanded (replacing previous)");
            } else {
                debug!(id, "expanded");
            }
            Toggle::Expanded
        }
    }

    /// Licenses passing the active filter, in catalog order
    pub fn visible_list(&self) -> Vec<&'c License> {
        let filter = self.state.active_filter;
        self.catalog
            .all()
            .iter()
            .filter(|l| filter.matches(l))
            .collect()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.state.expanded_id.as_deref() == Some(id)
    }

    /// The expanded license, if any
    pub fn expanded(&self) -> Option<&'c License> {
        self.state
            .expanded_id
            .as_deref()
            .and_then(|id| self.catalog.by_id(id))
    }

    /// True when a license is expanded but filtered out of the visible list
    pub fn expanded_is_hidden(&self) -> bool {
        self.expanded()
            .is_some_and(|l| !self.state.active_filter.matches(l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::license;

    fn abc() -> Catalog {
        Catalog::new(vec![
            license("a", Category::Permissive),
            license("b", Category::StrongCopyleft),
            license("c", Category::WeakCopyleft),
        ])
        .unwrap()
    }

    fn ids(list: &[&License]) -> Vec<String> {
        list.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn test_initial_state() {
        let catalog = abc();
        let controller = BrowseController::new(&catalog);
        assert_eq!(controller.active_filter(), Filter::All);
        assert!(controller.expanded_id().is_none());
    }

    #[test]
    fn test_filter_parse_tokens() {
        assert_eq!("all".parse::<Filter>(), Ok(Filter::All));
        assert_eq!(
            "Permissive".parse::<Filter>(),
            Ok(Filter::Category(Category::Permissive))
        );
        assert_eq!(
            " copyleft-weak ".parse::<Filter>(),
            Ok(Filter::Category(Category::WeakCopyleft))
        );
        assert_eq!(
            "strong".parse::<Filter>(),
            Ok(Filter::Category(Category::StrongCopyleft))
        );
    }

    #[test]
    fn test_filter_tokens_round_trip() {
        for filter in Filter::ALL {
            assert_eq!(filter.as_str().parse::<Filter>(), Ok(filter));
        }
    }

    #[test]
    fn test_set_filter_str_rejects_before_mutation() {
        let catalog = abc();
        let mut controller = BrowseController::new(&catalog);
        controller.set_filter(Filter::Category(Category::WeakCopyleft));

        let err = controller.set_filter_str("proprietary").unwrap_err();
        assert_eq!(err, BrowseError::InvalidFilter("proprietary".to_string()));
        assert_eq!(
            controller.active_filter(),
            Filter::Category(Category::WeakCopyleft)
        );
    }

    #[test]
    fn test_visible_list_per_filter() {
        let catalog = abc();
        let mut controller = BrowseController::new(&catalog);
        assert_eq!(ids(&controller.visible_list()), vec!["a", "b", "c"]);

        controller.set_filter(Category::WeakCopyleft.into());
        assert_eq!(ids(&controller.visible_list()), vec!["c"]);
    }

    #[test]
    fn test_visible_list_may_be_empty() {
        let catalog = Catalog::new(vec![license("only", Category::Permissive)]).unwrap();
        let mut controller = BrowseController::new(&catalog);
        controller.set_filter(Category::StrongCopyleft.into());
        assert!(controller.visible_list().is_empty());
    }

    #[test]
    fn test_toggle_replaces_previous() {
        let catalog = abc();
        let mut controller = BrowseController::new(&catalog);
        assert_eq!(controller.toggle_expanded("a"), Toggle::Expanded);
        assert_eq!(controller.toggle_expanded("c"), Toggle::Expanded);
        assert!(!controller.is_expanded("a"));
        assert!(controller.is_expanded("c"));
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let catalog = abc();
        let mut controller = BrowseController::new(&catalog);
        controller.toggle_expanded("b");
        let before = controller.state().clone();

        assert_eq!(controller.toggle_expanded("zzz"), Toggle::Ignored);
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn test_expanded_is_hidden() {
        let catalog = abc();
        let mut controller = BrowseController::new(&catalog);
        assert!(!controller.expanded_is_hidden());

        controller.toggle_expanded("b");
        assert!(!controller.expanded_is_hidden());

        controller.set_filter(Category::Permissive.into());
        assert!(controller.expanded_is_hidden());
        assert_eq!(controller.expanded().map(|l| l.id.as_str()), Some("b"));
    }

    #[test]
    fn test_reset() {
        let catalog = abc();
        let mut controller = BrowseController::new(&catalog);
        controller.set_filter(Category::Permissive.into());
        controller.toggle_expanded("a");

        controller.reset();
        assert_eq!(controller.state(), &BrowseState::default());
    }
}
