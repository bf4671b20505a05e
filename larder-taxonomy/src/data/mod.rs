//! Built-in taxonomy and locale tables

mod locales;
mod tags;

use larder_core::{TagId, TaxonomyError};

use crate::localization::{LocaleEntry, DEFAULT_LOCALE};
use crate::node::TagNode;
use crate::registry::{TaxonomyBuilder, TaxonomyRegistry};

/// Static definition of one built-in tag. The parent is implied by the id.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TagDef {
    pub id: &'static str,
    pub name: &'static str,
    pub popularity: u8,
    pub synonyms: &'static [&'static str],
    pub related: &'static [&'static str],
    pub description: Option<&'static str>,
}

impl TagDef {
    fn to_node(self) -> Result<TagNode, TaxonomyError> {
        let id = TagId::parse(self.id)?;
        let parent = id.structural_parent();
        let related = self
            .related
            .iter()
            .map(|r| TagId::parse(r))
            .collect::<Result<Vec<_>, _>>()?;

        let mut node = TagNode::new(id, self.name)
            .with_synonyms(self.synonyms.iter().copied())
            .with_related(related)
            .with_popularity(self.popularity);
        node.parent_id = parent;
        Ok(node)
    }
}

/// Build a `&'static [TagDef]` table.
///
/// `id => "Name", popularity [, syn: [..]] [, rel: [..]] [, desc: ".."];`
macro_rules! tag_table {
    (@desc) => { None };
    (@desc $desc:literal) => { Some($desc) };
    ($(
        $id:literal => $name:literal, $pop:literal
        $(, syn: [$($syn:literal),* $(,)?])?
        $(, rel: [$($rel:literal),* $(,)?])?
        $(, desc: $desc:literal)?
        ;
    )*) => {
        &[$(
            $crate::data::TagDef {
                id: $id,
                name: $name,
                popularity: $pop,
                synonyms: &[$($($syn),*)?],
                related: &[$($($rel),*)?],
                description: tag_table!(@desc $($desc)?),
            }
        ),*]
    };
}
pub(crate) use tag_table;

impl TaxonomyRegistry {
    /// The built-in recipe taxonomy.
    ///
    /// An error here means the static tables are defective; callers should
    /// treat it as fatal.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        let mut builder = TaxonomyBuilder::new();
        for def in tags::BUILTIN_TAGS {
            builder.register(def.to_node()?)?;
        }
        builder.finalize()
    }
}

/// English entries for every built-in tag plus the translation tables
pub(crate) fn builtin_locale_entries() -> Vec<LocaleEntry> {
    let english = tags::BUILTIN_TAGS.iter().filter_map(|def| {
        let id = TagId::parse(def.id).ok()?;
        let entry = LocaleEntry::new(id, DEFAULT_LOCALE, def.name);
        Some(match def.description {
            Some(description) => entry.with_description(description),
            None => entry,
        })
    });

    let translations = locales::TRANSLATIONS.iter().filter_map(|(locale, id, label, description)| {
        let id = TagId::parse(id).ok()?;
        let entry = LocaleEntry::new(id, locale, *label);
        Some(match description {
            Some(description) => entry.with_description(*description),
            None => entry,
        })
    });

    english.chain(translations).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::LocalizationStore;
    use larder_core::Category;

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = TaxonomyRegistry::builtin().unwrap();
        assert_eq!(registry.len(), tags::BUILTIN_TAGS.len());
        assert!(registry.len() >= 150);
        assert!(registry.collisions().is_empty(), "{:?}", registry.collisions());
    }

    #[test]
    fn test_every_category_but_other_is_populated() {
        let registry = TaxonomyRegistry::builtin().unwrap();
        for (category, count) in registry.categories() {
            if category == Category::Other {
                assert_eq!(count, 0);
            } else {
                assert!(count > 0, "{} has no tags", category);
            }
        }
    }

    #[test]
    fn test_locale_tables_reference_known_tags() {
        let registry = TaxonomyRegistry::builtin().unwrap();
        let entries = builtin_locale_entries();
        assert_eq!(
            entries.len(),
            tags::BUILTIN_TAGS.len() + locales::TRANSLATIONS.len()
        );
        for entry in &entries {
            assert!(registry.contains(&entry.tag_id), "unknown tag {}", entry.tag_id);
        }

        let store = LocalizationStore::builtin(&registry);
        assert_eq!(store.supported_locales(), vec!["en", "es", "fr", "it"]);
        assert_eq!(store.entry_count("en"), registry.len());
    }
}
