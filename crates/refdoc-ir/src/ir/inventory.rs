//! Compile-time class inventory
//!
//! Classes registered with [`register_class!`](crate::register_class) are
//! collected into a `linkme` distributed slice, so a front end can look a
//! class up by name without a hand-maintained list.

use crate::ir::ClassSymbol;

/// Distributed slice for collecting class tables at link time
#[linkme::distributed_slice]
pub static REFDOC_CLASSES: [fn() -> ClassSymbol];

/// Collect all registered classes from the distributed slice
pub fn collect_classes() -> Vec<ClassSymbol> {
    REFDOC_CLASSES.iter().map(|f| f()).collect()
}

/// Registry of class tables (alternative to the linkme inventory)
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: Vec<ClassSymbol>,
}

impl ClassRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from the distributed slice
    pub fn from_inventory() -> Self {
        Self {
            classes: collect_classes(),
        }
    }

    /// Register a class
    pub fn register(&mut self, class: ClassSymbol) {
        self.classes.push(class);
    }

    /// Get all registered classes
    pub fn classes(&self) -> &[ClassSymbol] {
        &self.classes
    }

    /// Find a class by type name
    pub fn find(&self, name: &str) -> Option<&ClassSymbol> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Names of all registered classes
    pub fn names(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Register a documented type in the distributed slice
///
/// The type must implement [`Documented`](crate::ir::Documented). The
/// expansion goes through this crate's `linkme` re-export, so callers need
/// no `linkme` dependency of their own.
#[macro_export]
macro_rules! register_class {
    ($ty:ty) => {
        const _: () = {
            #[$crate::linkme::distributed_slice($crate::ir::REFDOC_CLASSES)]
            #[linkme(crate = $crate::linkme)]
            static _REFDOC_CLASS: fn() -> $crate::ir::ClassSymbol =
                || <$ty as $crate::ir::Documented>::class_symbol();
        };
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::MemberSymbol;

    #[test]
    fn test_class_registry() {
        let mut registry = ClassRegistry::new();

        registry.register(
            ClassSymbol::new("VolumeSlicer")
                .with_constructor("(axis: u8)")
                .member(MemberSymbol::method("refresh", "(&self)")),
        );

        assert_eq!(registry.classes().len(), 1);
        assert_eq!(registry.names(), vec!["VolumeSlicer"]);
        assert!(registry.find("VolumeSlicer").is_some());
        assert!(registry.find("Other").is_none());
    }

    #[test]
    fn test_registry_from_inventory() {
        // Nothing is registered inside this crate
        let registry = ClassRegistry::from_inventory();
        assert!(registry.classes().is_empty());
    }
}
