use std::collections::BTreeMap;

use tracing::trace;

use super::{
    error::*,
    presets::*,
    table::*
};

/// Named color tables, owned by whoever renders with them.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tables: BTreeMap<String, ColorTable>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// A registry holding every [`Preset`] under its name.
    pub fn with_presets() -> Result<Registry, InvalidSpec> {
        let mut registry = Registry::new();
        for preset in Preset::ALL {
            registry.insert(preset.name(), preset.table()?);
        }
        Ok(registry)
    }

    /// Stores `table` under its own name, returning the table it replaces.
    pub fn register(&mut self, table: ColorTable) -> Result<Option<ColorTable>, TableError> {
        let name = table.name().ok_or(TableError::Unnamed)?.to_owned();
        Ok(self.insert(name, table))
    }

    /// Stores `table` under `name`, returning the table it replaces.
    pub fn insert(&mut self, name: impl Into<String>, table: ColorTable) -> Option<ColorTable> {
        let name = name.into();
        trace!(%name, anchors = table.len(), "registering color table");
        self.tables.insert(name, table)
    }

    pub fn get(&self, name: &str) -> Option<&ColorTable> {
        self.tables.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ColorTable> {
        self.tables.remove(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item=&str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::*;

    fn ramp(name: &str, top: f64) -> ColorTable {
        ColorTable::evenly_spaced([[0., 0., 0.], [top, top, top]], Encoding::Arithmetic)
            .unwrap()
            .with_name(name)
    }

    #[test]
    fn register_uses_table_name() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.register(ramp("gray", 1.0)).unwrap().is_none());
        assert_eq!(registry.get("gray").unwrap().lookup(1.0), Color::WHITE);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unnamed_tables_cannot_be_registered() {
        let mut registry = Registry::new();
        let table = ColorTable::evenly_spaced([[0., 0., 0.], [1., 1., 1.]], Encoding::Arithmetic)
            .unwrap();
        assert!(matches!(registry.register(table), Err(TableError::Unnamed)));
    }

    #[test]
    fn reregistering_replaces() {
        let mut registry = Registry::new();
        registry.register(ramp("gray", 1.0)).unwrap();
        let old = registry.register(ramp("gray", 0.5)).unwrap().unwrap();
        assert_eq!(old.lookup(1.0), Color::WHITE);
        assert_eq!(registry.get("gray").unwrap().lookup(1.0), Color::rgb(0.5, 0.5, 0.5));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn insert_under_alias() {
        let mut registry = Registry::new();
        registry.insert("alias", ramp("gray", 1.0));
        assert!(registry.get("gray").is_none());
        assert!(registry.remove("alias").is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn presets_are_all_registered() {
        let registry = Registry::with_presets().unwrap();
        assert_eq!(registry.len(), Preset::ALL.len());
        let names: Vec<_> = registry.names().collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        for preset in Preset::ALL {
            assert_eq!(registry.get(preset.name()).unwrap().name(), Some(preset.name()));
        }
    }
}
