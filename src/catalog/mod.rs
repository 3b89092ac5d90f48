mod builtin;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ItemId = u32;

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog resource: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse catalog resource")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate catalog id {0}")]
    DuplicateId(ItemId),
}

/// One displayable gallery entry.
///
/// `is_favorite` is advisory only; the favorites set decides membership.
/// The serialized shape uses the short field names the stored favorites
/// have always used, and accepts the `url`/`favorite` spellings as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    #[serde(rename = "src", alias = "url")]
    pub image_ref: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "fav", alias = "favorite", default)]
    pub is_favorite: bool,
}

impl CatalogItem {
    pub fn new<I, T>(id: ItemId, image_ref: &str, display_name: &str, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            id,
            image_ref: image_ref.to_string(),
            display_name: display_name.to_string(),
            tags: tags.into_iter().map(Into::into).collect(),
            is_favorite: false,
        }
    }

    /// Case-insensitive substring match against the name or any tag.
    /// `needle` must already be lowercase.
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.display_name.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    pub(crate) fn with_favorite(&self, is_favorite: bool) -> Self {
        Self {
            is_favorite,
            ..self.clone()
        }
    }
}

/// Free-text descriptions, keyed by item id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptions {
    by_id: HashMap<ItemId, String>,
}

impl Descriptions {
    pub fn insert(&mut self, id: ItemId, text: impl Into<String>) {
        self.by_id.insert(id, text.into());
    }

    pub fn get(&self, id: ItemId) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRecord {
    id: ItemId,
    #[serde(alias = "url")]
    src: String,
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    description: Option<String>,
}

/// The fixed, ordered reference list of gallery items.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    descriptions: Descriptions,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }

        Ok(Self {
            items,
            descriptions: Descriptions::default(),
        })
    }

    pub fn with_descriptions(mut self, descriptions: Descriptions) -> Self {
        self.descriptions = descriptions;
        self
    }

    /// The authored twelve-cat catalog bundled with the crate.
    pub fn builtin() -> Self {
        let (items, descriptions) = builtin::builtin_items();
        Self {
            items,
            descriptions,
        }
    }

    pub fn from_json(serialized: &str) -> CatalogResult<Self> {
        let records: Vec<CatalogRecord> = serde_json::from_str(serialized)?;
        let mut descriptions = Descriptions::default();
        let items = records
            .into_iter()
            .map(|record| {
                if let Some(text) = record.description {
                    descriptions.insert(record.id, text);
                }
                CatalogItem::new(record.id, &record.src, &record.name, record.tags)
            })
            .collect();

        Ok(Self::new(items)?.with_descriptions(descriptions))
    }

    pub fn load(path: &Path) -> CatalogResult<Self> {
        let serialized = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&serialized)?;
        tracing::info!(path = %path.display(), items = catalog.len(), "loaded catalog resource");
        Ok(catalog)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn description(&self, id: ItemId) -> Option<&str> {
        self.descriptions.get(id)
    }

    /// Catalog-ordered subsequence whose name or any tag contains `query`,
    /// ignoring case.
    pub fn filter(&self, query: &str) -> Vec<CatalogItem> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.matches_lowercase(&needle))
            .cloned()
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[CatalogItem]) -> Vec<ItemId> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn builtin_catalog_has_twelve_unique_items_in_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 12);
        assert_eq!(ids(catalog.items()), (1..=12).collect::<Vec<_>>());
        assert_eq!(catalog.get(3).map(|c| c.display_name.as_str()), Some("Барсик"));
        assert_eq!(catalog.get(3).unwrap().image_ref, "/images/cat3.jpg");
        assert!(catalog.items().iter().all(|item| !item.is_favorite));
        assert!(catalog.items().iter().all(|item| catalog.description(item.id).is_some()));
    }

    #[test]
    fn filter_matches_tags_case_insensitively() {
        let catalog = Catalog::builtin();
        assert_eq!(ids(&catalog.filter("ласков")), vec![3, 7]);
        assert_eq!(ids(&catalog.filter("ЛАСКОВ")), vec![3, 7]);
    }

    #[test]
    fn filter_matches_names_and_keeps_catalog_order() {
        let catalog = Catalog::builtin();
        assert_eq!(ids(&catalog.filter("барс")), vec![3]);
        assert_eq!(ids(&catalog.filter("пушист")), vec![4, 8, 12]);
        assert_eq!(ids(&catalog.filter("ноч")), vec![5, 11]);
    }

    #[test]
    fn filter_returns_empty_when_nothing_matches() {
        let catalog = Catalog::builtin();
        assert!(catalog.filter("зз").is_empty());
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            CatalogItem::new(1, "/a.jpg", "A", ["x"]),
            CatalogItem::new(1, "/b.jpg", "B", ["y"]),
        ])
        .expect_err("duplicate ids must be rejected");
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn from_json_reads_records_with_descriptions_and_aliases() {
        let catalog = Catalog::from_json(
            r#"[
                {"id": 1, "src": "/images/a.jpg", "name": "Луна", "tags": ["серый"], "description": "Спит весь день"},
                {"id": 2, "url": "/images/b.jpg", "name": "Марс"}
            ]"#,
        )
        .expect("catalog json should parse");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(2).unwrap().image_ref, "/images/b.jpg");
        assert!(catalog.get(2).unwrap().tags.is_empty());
        assert_eq!(catalog.description(1), Some("Спит весь день"));
        assert_eq!(catalog.description(2), None);
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let err = Catalog::from_json("{not json").expect_err("garbage must fail");
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join("cat-gallery-missing-catalog.json");
        let err = Catalog::load(&path).expect_err("missing file must fail");
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn item_deserializes_alternate_field_names() {
        let item: CatalogItem = serde_json::from_str(
            r#"{"id": 9, "url": "/images/cat9.jpg", "name": "Тигра", "tags": ["дикий"], "favorite": true}"#,
        )
        .unwrap();
        assert_eq!(item.image_ref, "/images/cat9.jpg");
        assert!(item.is_favorite);

        let serialized = serde_json::to_value(&item).unwrap();
        assert_eq!(serialized["src"], "/images/cat9.jpg");
        assert_eq!(serialized["fav"], true);
    }
}
