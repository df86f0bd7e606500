use crate::config::SENTINEL;
use serde::Deserialize;

/// Envelope of the paginated `/people/` listing. Only `count` is used.
#[derive(Debug, Deserialize)]
pub struct PeopleIndex {
    pub count: u64,
}

/// One person as returned by `/people/<id>/`.
///
/// Scalar fields may be absent from the payload; cross-reference fields hold
/// URLs to other resources (a single URL for `homeworld`, lists elsewhere).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPerson {
    pub name: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub skin_color: Option<String>,
    pub homeworld: Option<String>,
    pub films: Option<Vec<String>>,
    pub species: Option<Vec<String>>,
    pub starships: Option<Vec<String>>,
    pub vehicles: Option<Vec<String>>,
}

/// Any resource a cross-reference URL can point at. Planets and species carry
/// a `name`, films carry a `title`.
#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: Option<String>,
    pub title: Option<String>,
}

impl NamedResource {
    /// Display text for the resource, preferring `name` over `title`.
    pub fn display(&self) -> &str {
        self.name
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or(SENTINEL)
    }
}

/// The persisted representation: every column is text, cross-references are
/// resolved to delimited name strings, missing values hold the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRow {
    pub birth_year: String,
    pub eye_color: String,
    pub films: String,
    pub gender: String,
    pub hair_color: String,
    pub height: String,
    pub homeworld: String,
    pub mass: String,
    pub name: String,
    pub skin_color: String,
    pub species: String,
    pub starships: String,
    pub vehicles: String,
}

/// A scalar field with the sentinel substituted when absent.
pub fn scalar_or_sentinel(field: &Option<String>) -> String {
    field.clone().unwrap_or_else(|| SENTINEL.to_string())
}

/// A cross-reference field as a URL list, with a one-element sentinel list
/// standing in for an absent field.
pub fn refs_or_sentinel(field: &Option<Vec<String>>) -> Vec<String> {
    field.clone().unwrap_or_else(|| vec![SENTINEL.to_string()])
}

/// The single-URL variant (homeworld), wrapped as a one-element list.
pub fn single_ref_or_sentinel(field: &Option<String>) -> Vec<String> {
    vec![field.clone().unwrap_or_else(|| SENTINEL.to_string())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_present_is_copied() {
        let field = Some("19BBY".to_string());
        assert_eq!(scalar_or_sentinel(&field), "19BBY");
    }

    #[test]
    fn scalar_missing_becomes_sentinel() {
        assert_eq!(scalar_or_sentinel(&None), SENTINEL);
    }

    #[test]
    fn missing_ref_list_becomes_sentinel_list() {
        assert_eq!(refs_or_sentinel(&None), vec![SENTINEL.to_string()]);
    }

    #[test]
    fn present_ref_list_is_kept_in_order() {
        let urls = Some(vec![
            "http://x/films/1/".to_string(),
            "http://x/films/2/".to_string(),
        ]);
        assert_eq!(
            refs_or_sentinel(&urls),
            vec!["http://x/films/1/", "http://x/films/2/"]
        );
    }

    #[test]
    fn single_ref_wraps_into_one_element_list() {
        let url = Some("http://x/planets/1/".to_string());
        assert_eq!(single_ref_or_sentinel(&url), vec!["http://x/planets/1/"]);
        assert_eq!(single_ref_or_sentinel(&None), vec![SENTINEL.to_string()]);
    }

    #[test]
    fn named_resource_prefers_name_over_title() {
        let both = NamedResource {
            name: Some("Tatooine".to_string()),
            title: Some("A New Hope".to_string()),
        };
        assert_eq!(both.display(), "Tatooine");

        let title_only = NamedResource {
            name: None,
            title: Some("A New Hope".to_string()),
        };
        assert_eq!(title_only.display(), "A New Hope");

        let neither = NamedResource {
            name: None,
            title: None,
        };
        assert_eq!(neither.display(), SENTINEL);
    }

    #[test]
    fn raw_person_deserializes_with_missing_fields() {
        let raw: RawPerson = serde_json::from_str(r#"{"name": "Luke Skywalker"}"#).unwrap();
        assert_eq!(raw.name.as_deref(), Some("Luke Skywalker"));
        assert!(raw.birth_year.is_none());
        assert!(raw.films.is_none());
        assert!(raw.homeworld.is_none());
    }
}
