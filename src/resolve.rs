use crate::client::SwapiClient;
use crate::config::{NAME_SEPARATOR, SENTINEL};
use crate::models::{
    refs_or_sentinel, scalar_or_sentinel, single_ref_or_sentinel, PersonRow, RawPerson,
};
use anyhow::Result;

/// Resolve a list of cross-reference URLs into one `", "`-joined string of
/// display names, preserving input order.
///
/// A sentinel anywhere in the input short-circuits the whole call: the
/// sentinel string is returned as-is and no request is issued. URLs are
/// dereferenced sequentially through the shared client.
pub async fn resolve_names(client: &SwapiClient, urls: &[String]) -> Result<String> {
    if urls.iter().any(|u| u == SENTINEL) {
        return Ok(SENTINEL.to_string());
    }

    let mut names = Vec::with_capacity(urls.len());
    for url in urls {
        names.push(client.fetch_display_name(url).await?);
    }
    Ok(names.join(NAME_SEPARATOR))
}

/// Build the flat storage row for one raw record: scalars copied with
/// sentinel substitution, each cross-reference field resolved in turn.
pub async fn flatten_person(client: &SwapiClient, raw: &RawPerson) -> Result<PersonRow> {
    Ok(PersonRow {
        birth_year: scalar_or_sentinel(&raw.birth_year),
        eye_color: scalar_or_sentinel(&raw.eye_color),
        gender: scalar_or_sentinel(&raw.gender),
        hair_color: scalar_or_sentinel(&raw.hair_color),
        height: scalar_or_sentinel(&raw.height),
        mass: scalar_or_sentinel(&raw.mass),
        name: scalar_or_sentinel(&raw.name),
        skin_color: scalar_or_sentinel(&raw.skin_color),
        homeworld: resolve_names(client, &single_ref_or_sentinel(&raw.homeworld)).await?,
        films: resolve_names(client, &refs_or_sentinel(&raw.films)).await?,
        species: resolve_names(client, &refs_or_sentinel(&raw.species)).await?,
        starships: resolve_names(client, &refs_or_sentinel(&raw.starships)).await?,
        vehicles: resolve_names(client, &refs_or_sentinel(&raw.vehicles)).await?,
    })
}

/// Flatten a whole batch, one record at a time.
pub async fn flatten_batch(client: &SwapiClient, batch: &[RawPerson]) -> Result<Vec<PersonRow>> {
    let mut rows = Vec::with_capacity(batch.len());
    for raw in batch {
        rows.push(flatten_person(client, raw).await?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sentinel short-circuits before any network access, so these run
    // against a client pointing at a closed port.
    fn dead_client() -> SwapiClient {
        SwapiClient::new("http://127.0.0.1:1/api")
    }

    #[tokio::test]
    async fn sentinel_short_circuits_without_network() {
        let client = dead_client();
        let out = resolve_names(&client, &[SENTINEL.to_string()]).await.unwrap();
        assert_eq!(out, SENTINEL);
    }

    #[tokio::test]
    async fn sentinel_among_urls_short_circuits() {
        let client = dead_client();
        let urls = vec!["http://127.0.0.1:1/films/1/".to_string(), SENTINEL.to_string()];
        let out = resolve_names(&client, &urls).await.unwrap();
        assert_eq!(out, SENTINEL);
    }

    #[tokio::test]
    async fn sentinel_resolution_is_idempotent() {
        let client = dead_client();
        let first = resolve_names(&client, &[SENTINEL.to_string()]).await.unwrap();
        let second = resolve_names(&client, &[SENTINEL.to_string()]).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first, SENTINEL);
    }

    #[tokio::test]
    async fn fully_missing_record_flattens_to_sentinels() {
        let client = dead_client();
        let row = flatten_person(&client, &RawPerson::default()).await.unwrap();
        assert_eq!(row.name, SENTINEL);
        assert_eq!(row.birth_year, SENTINEL);
        assert_eq!(row.height, SENTINEL);
        assert_eq!(row.homeworld, SENTINEL);
        assert_eq!(row.films, SENTINEL);
        assert_eq!(row.species, SENTINEL);
        assert_eq!(row.starships, SENTINEL);
        assert_eq!(row.vehicles, SENTINEL);
    }
}
