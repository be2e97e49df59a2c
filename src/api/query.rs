use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::logic::{optional_id, Catalog};
use crate::model::{Id, MovieFilter, MovieInput};
use crate::store::traits::Store;

/// A named catalog operation with its arguments, e.g.
/// `{"operation": "moviesByGenre", "arguments": {"genre": "drama"}}`.
///
/// `arguments` may be omitted, `null` or `{}`. Missing ids and genres are
/// treated as "no match" and a missing filter as "list everything", never as
/// errors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "QueryEnvelope")]
pub enum CatalogQuery {
    Actor { id: Option<Id> },
    Actors,
    Movie { id: Option<Id> },
    Movies,
    MoviesByGenre { genre: Option<String> },
    SearchMovies { filter: Option<MovieFilter> },
    CreateMovie { input: MovieInput },
    UpdateMovie { id: Option<Id>, input: MovieInput },
    DeleteMovie { id: Option<Id> },
}

/// Wire shape of a request before the arguments are matched to an operation
#[derive(Debug, Deserialize)]
pub struct QueryEnvelope {
    operation: String,
    #[serde(default)]
    arguments: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QueryArguments {
    id: Option<Id>,
    genre: Option<String>,
    filter: Option<MovieFilter>,
    input: Option<MovieInput>,
}

impl TryFrom<QueryEnvelope> for CatalogQuery {
    type Error = String;

    fn try_from(envelope: QueryEnvelope) -> std::result::Result<Self, Self::Error> {
        let args = match envelope.arguments {
            None | Some(Value::Null) => QueryArguments::default(),
            Some(value) => serde_json::from_value(value)
                .map_err(|e| format!("invalid arguments for {}: {}", envelope.operation, e))?,
        };

        let query = match envelope.operation.as_str() {
            "actor" => CatalogQuery::Actor { id: args.id },
            "actors" => CatalogQuery::Actors,
            "movie" => CatalogQuery::Movie { id: args.id },
            "movies" => CatalogQuery::Movies,
            "moviesByGenre" => CatalogQuery::MoviesByGenre { genre: args.genre },
            "searchMovies" => CatalogQuery::SearchMovies { filter: args.filter },
            "createMovie" => CatalogQuery::CreateMovie {
                input: args.input.unwrap_or_default(),
            },
            "updateMovie" => CatalogQuery::UpdateMovie {
                id: args.id,
                input: args.input.unwrap_or_default(),
            },
            "deleteMovie" => CatalogQuery::DeleteMovie { id: args.id },
            other => return Err(format!("unknown operation `{}`", other)),
        };
        Ok(query)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub data: Value,
}

impl CatalogQuery {
    pub fn name(&self) -> &'static str {
        match self {
            CatalogQuery::Actor { .. } => "actor",
            CatalogQuery::Actors => "actors",
            CatalogQuery::Movie { .. } => "movie",
            CatalogQuery::Movies => "movies",
            CatalogQuery::MoviesByGenre { .. } => "moviesByGenre",
            CatalogQuery::SearchMovies { .. } => "searchMovies",
            CatalogQuery::CreateMovie { .. } => "createMovie",
            CatalogQuery::UpdateMovie { .. } => "updateMovie",
            CatalogQuery::DeleteMovie { .. } => "deleteMovie",
        }
    }

    /// Run the operation against the catalog and encode its result
    pub async fn execute<S: Store>(self, catalog: &Catalog<S>) -> Result<Value> {
        let value = match self {
            CatalogQuery::Actor { id } => {
                serde_json::to_value(catalog.get_actor(optional_id(id.as_ref())).await?)?
            }
            CatalogQuery::Actors => serde_json::to_value(catalog.list_actors().await?)?,
            CatalogQuery::Movie { id } => {
                serde_json::to_value(catalog.get_movie(optional_id(id.as_ref())).await?)?
            }
            CatalogQuery::Movies => serde_json::to_value(catalog.list_movies().await?)?,
            CatalogQuery::MoviesByGenre { genre: Some(genre) } => {
                serde_json::to_value(catalog.list_movies_by_genre(&genre).await?)?
            }
            CatalogQuery::MoviesByGenre { genre: None } => Value::Array(Vec::new()),
            CatalogQuery::SearchMovies { filter } => {
                serde_json::to_value(catalog.search_movies(filter.as_ref()).await?)?
            }
            CatalogQuery::CreateMovie { input } => {
                serde_json::to_value(catalog.create_movie(input).await)?
            }
            CatalogQuery::UpdateMovie { id, input } => serde_json::to_value(
                catalog.update_movie(optional_id(id.as_ref()), input).await,
            )?,
            CatalogQuery::DeleteMovie { id } => {
                serde_json::to_value(catalog.delete_movie(optional_id(id.as_ref())).await)?
            }
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_state;
    use crate::store::MemoryStore;
    use serde_json::json;
    use std::sync::Arc;

    fn seeded_catalog() -> Catalog<MemoryStore> {
        Catalog::new(Arc::new(MemoryStore::new(seed_state())))
    }

    fn parse(value: Value) -> CatalogQuery {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_operation_names_deserialize() {
        assert_eq!(parse(json!({"operation": "actors"})), CatalogQuery::Actors);
        assert_eq!(
            parse(json!({"operation": "movie", "arguments": {"id": "1"}})),
            CatalogQuery::Movie {
                id: Some("1".to_string())
            }
        );
        assert_eq!(
            parse(json!({"operation": "moviesByGenre", "arguments": {}})),
            CatalogQuery::MoviesByGenre { genre: None }
        );

        let query = parse(json!({
            "operation": "searchMovies",
            "arguments": {"filter": {"minRating": 9.0, "releaseYearTo": 2000}}
        }));
        assert_eq!(query.name(), "searchMovies");
        match query {
            CatalogQuery::SearchMovies { filter: Some(filter) } => {
                assert_eq!(filter.min_rating, Some(9.0));
                assert_eq!(filter.release_year_to, Some(2000));
                assert_eq!(filter.title, None);
            }
            other => panic!("unexpected query: {:?}", other),
        }
    }

    #[test]
    fn test_missing_arguments_mean_no_constraint() {
        assert_eq!(
            parse(json!({"operation": "actor"})),
            CatalogQuery::Actor { id: None }
        );
        assert_eq!(
            parse(json!({"operation": "searchMovies"})),
            CatalogQuery::SearchMovies { filter: None }
        );
        assert_eq!(
            parse(json!({"operation": "deleteMovie"})),
            CatalogQuery::DeleteMovie { id: None }
        );
        assert_eq!(
            parse(json!({"operation": "createMovie"})),
            CatalogQuery::CreateMovie {
                input: MovieInput::default()
            }
        );
    }

    #[test]
    fn test_null_arguments_are_accepted() {
        assert_eq!(
            parse(json!({"operation": "actor", "arguments": null})),
            CatalogQuery::Actor { id: None }
        );
        assert_eq!(
            parse(json!({"operation": "movies", "arguments": null})),
            CatalogQuery::Movies
        );
    }

    #[test]
    fn test_empty_arguments_on_operations_without_parameters() {
        assert_eq!(
            parse(json!({"operation": "actors", "arguments": {}})),
            CatalogQuery::Actors
        );
        assert_eq!(
            parse(json!({"operation": "movies", "arguments": {}})),
            CatalogQuery::Movies
        );
    }

    #[tokio::test]
    async fn test_search_without_arguments_lists_everything() {
        let catalog = seeded_catalog();
        let data = parse(json!({"operation": "searchMovies"}))
            .execute(&catalog)
            .await
            .unwrap();
        assert_eq!(data.as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_mistyped_arguments_are_rejected() {
        let result = serde_json::from_value::<CatalogQuery>(
            json!({"operation": "movie", "arguments": {"id": 42}}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        let result = serde_json::from_value::<CatalogQuery>(json!({"operation": "dropTables"}));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_lookup_of_missing_id_is_null() {
        let catalog = seeded_catalog();

        let data = CatalogQuery::Actor { id: None }.execute(&catalog).await.unwrap();
        assert_eq!(data, Value::Null);

        let data = CatalogQuery::Movie {
            id: Some("999".to_string()),
        }
        .execute(&catalog)
        .await
        .unwrap();
        assert_eq!(data, Value::Null);
    }

    #[tokio::test]
    async fn test_movies_by_genre_without_genre_is_empty() {
        let catalog = seeded_catalog();
        let data = CatalogQuery::MoviesByGenre { genre: None }
            .execute(&catalog)
            .await
            .unwrap();
        assert_eq!(data, json!([]));
    }

    #[tokio::test]
    async fn test_mutations_encode_response_envelope() {
        let catalog = seeded_catalog();

        let query = parse(json!({
            "operation": "createMovie",
            "arguments": {"input": {"title": "Inception", "genre": "Sci-Fi", "actorIds": ["2"]}}
        }));
        let data = query.execute(&catalog).await.unwrap();
        assert_eq!(data["success"], true);
        assert_eq!(data["message"], "Movie created successfully");
        assert_eq!(data["movie"]["title"], "Inception");
        assert_eq!(data["movie"]["actors"][0]["name"], "Morgan Freeman");

        let data = CatalogQuery::DeleteMovie { id: None }
            .execute(&catalog)
            .await
            .unwrap();
        assert_eq!(data["success"], false);
        assert_eq!(data["message"], "Movie not found");
        assert_eq!(data["movie"], Value::Null);

        assert_eq!(catalog.list_movies().await.unwrap().len(), 4);
    }
}
