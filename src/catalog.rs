//! Message catalogs: one tree per locale, looked up by dotted path.
//!
//! JSON shape:
//! {
//!   "en": { "home": "Home", "greetings": { "morning": "Good Morning {user}" } },
//!   "es": { "home": "Inicio", "greetings": { "morning": "Buenos días {user}" } }
//! }
//!
//! The caller always names the locale. Placeholders such as `{user}` are
//! returned as written.

use crate::error::{CatalogError, TreeError};
use crate::index::enumerate;
use crate::resolve::resolve;
use crate::tree::{Node, Scalar, branch_from_json};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: BTreeMap<String, Node>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an object keyed by locale name.
    pub fn from_json(value: &Value) -> Result<Self, TreeError> {
        let Value::Object(map) = value else {
            return Err(TreeError::RootIsLeaf);
        };
        let mut catalog = Catalog::new();
        for (name, tree) in map {
            catalog.insert(name.clone(), branch_from_json(tree)?)?;
        }
        Ok(catalog)
    }

    /// Add or replace a locale. Its root must be a branch.
    pub fn insert(&mut self, name: impl Into<String>, tree: Node) -> Result<Option<Node>, TreeError> {
        if tree.is_leaf() {
            return Err(TreeError::RootIsLeaf);
        }
        Ok(self.locales.insert(name.into(), tree))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn messages(&self, locale: &str) -> Result<Messages<'_>, CatalogError> {
        self.locales
            .get_key_value(locale)
            .map(|(name, tree)| Messages { locale: name, tree })
            .ok_or_else(|| CatalogError::UnknownLocale(locale.to_string()))
    }
}

/// One locale's messages, borrowed from a [`Catalog`].
#[derive(Debug, Clone, Copy)]
pub struct Messages<'c> {
    locale: &'c str,
    tree: &'c Node,
}

impl<'c> Messages<'c> {
    pub fn locale(&self) -> &'c str {
        self.locale
    }

    pub fn tree(&self) -> &'c Node {
        self.tree
    }

    pub fn t(&self, path: &str) -> Result<&'c Scalar, CatalogError> {
        resolve(self.tree, path).map_err(|source| CatalogError::NotFound {
            locale: self.locale.to_string(),
            source,
        })
    }

    /// Text for `path`, or `fallback` when it does not resolve.
    pub fn t_or(&self, path: &str, fallback: &str) -> String {
        match self.t(path) {
            Ok(value) => value.to_string(),
            Err(_) => fallback.to_string(),
        }
    }

    pub fn paths(&self) -> Vec<String> {
        enumerate(self.tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Miss;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn locales() -> Catalog {
        Catalog::from_json(&json!({
            "en": {
                "home": "Home",
                "about": "About",
                "contact": "Contact {user}",
                "greetings": { "morning": "Good Morning {user}", "saludito": "Saludito" }
            },
            "es": { "home": "Inicio", "greetings": { "morning": "" } }
        }))
        .unwrap()
    }

    #[test]
    fn looks_up_by_locale() {
        let catalog = locales();
        let en = catalog.messages("en").unwrap();

        assert_eq!(en.t("greetings.saludito"), Ok(&Scalar::from("Saludito")));
        assert_eq!(en.t_or("contact", "?"), "Contact {user}");
        assert_eq!(en.paths(), vec!["home", "about", "contact", "greetings.morning", "greetings.saludito"]);
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["en", "es"]);
    }

    #[test]
    fn empty_message_differs_from_missing_one() {
        let catalog = locales();
        let es = catalog.messages("es").unwrap();

        assert_eq!(es.t("greetings.morning"), Ok(&Scalar::from("")));
        assert_eq!(es.t_or("greetings.morning", "fallback"), "");
        assert_eq!(es.t_or("about", "fallback"), "fallback");

        match es.t("about") {
            Err(CatalogError::NotFound { locale, source }) => {
                assert_eq!(locale, "es");
                assert_eq!(source.miss, Miss::MissingKey);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn unknown_locale() {
        assert_eq!(
            locales().messages("fr").unwrap_err(),
            CatalogError::UnknownLocale("fr".to_string())
        );
    }

    #[test]
    fn rejects_leaf_locale() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.insert("en", Node::leaf("x")), Err(TreeError::RootIsLeaf));
        assert!(Catalog::from_json(&json!({"en": "flat"})).is_err());
    }
}
