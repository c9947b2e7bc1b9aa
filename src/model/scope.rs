// Namespace scope of a diagram

use serde::{Deserialize, Serialize};

/// Root namespace plus sub-scope, e.g. `Shop` + `Database.Entities`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    pub namespace: String,
    pub sub_scope: String,
}

impl Scope {
    pub fn new(namespace: impl Into<String>, sub_scope: impl Into<String>) -> Self {
        let namespace = namespace.into().trim_end_matches('.').to_string();
        let sub_scope = sub_scope.into().trim_start_matches('.').to_string();
        Self {
            namespace,
            sub_scope,
        }
    }

    /// `{namespace}.{sub_scope}`, or just the namespace when the sub-scope is empty
    pub fn qualified(&self) -> String {
        if self.sub_scope.is_empty() {
            self.namespace.clone()
        } else {
            format!("{}.{}", self.namespace, self.sub_scope)
        }
    }

    /// Check if a type namespace is the scope itself or nested under it
    pub fn contains(&self, type_namespace: &str) -> bool {
        is_within(type_namespace, &self.qualified())
    }

    /// Check if a type namespace lies anywhere under the root namespace
    pub fn in_root(&self, type_namespace: &str) -> bool {
        is_within(type_namespace, &self.namespace)
    }

    /// Check if the sub-scope names an entities namespace
    pub fn is_entities(&self, marker: &str) -> bool {
        self.sub_scope.contains(marker)
    }
}

fn is_within(namespace: &str, prefix: &str) -> bool {
    namespace == prefix
        || namespace
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified() {
        assert_eq!(Scope::new("Shop", "Database.Entities").qualified(), "Shop.Database.Entities");
        assert_eq!(Scope::new("Shop", ".Database.Entities").qualified(), "Shop.Database.Entities");
        assert_eq!(Scope::new("Shop", "").qualified(), "Shop");
    }

    #[test]
    fn test_contains() {
        let scope = Scope::new("Shop", "Database.Entities");
        assert!(scope.contains("Shop.Database.Entities"));
        assert!(scope.contains("Shop.Database.Entities.Orders"));
        assert!(!scope.contains("Shop.Database.EntitiesExtra"));
        assert!(!scope.contains("Shop.Services"));
    }

    #[test]
    fn test_in_root() {
        let scope = Scope::new("Shop", "Database.Entities");
        assert!(scope.in_root("Shop"));
        assert!(scope.in_root("Shop.Services"));
        assert!(!scope.in_root("ShopFront"));
    }

    #[test]
    fn test_is_entities() {
        assert!(Scope::new("Shop", "Database.Entities").is_entities("Entities"));
        assert!(!Scope::new("Shop", "Services").is_entities("Entities"));
    }
}
