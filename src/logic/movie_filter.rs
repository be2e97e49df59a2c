use crate::model::{contains_ignore_case, eq_ignore_case, Movie, MovieFilter};

/// Movie filter evaluator
pub struct MovieFilterEvaluator;

impl MovieFilterEvaluator {
    /// Filter a list of movies, keeping collection order
    pub fn filter_movies(movies: Vec<Movie>, filter: &MovieFilter) -> Vec<Movie> {
        movies
            .into_iter()
            .filter(|movie| Self::matches(movie, filter))
            .collect()
    }

    /// Evaluate the conjunction of every present predicate against one movie
    pub fn matches(movie: &Movie, filter: &MovieFilter) -> bool {
        if let Some(title) = &filter.title {
            if !contains_ignore_case(&movie.title, title) {
                return false;
            }
        }

        if let Some(genre) = &filter.genre {
            if !eq_ignore_case(&movie.genre, genre) {
                return false;
            }
        }

        // Rating and year bounds are inclusive
        if filter.min_rating.is_some_and(|min| movie.rating < min) {
            return false;
        }
        if filter.max_rating.is_some_and(|max| movie.rating > max) {
            return false;
        }
        if filter
            .release_year_from
            .is_some_and(|from| movie.release_year < from)
        {
            return false;
        }
        if filter
            .release_year_to
            .is_some_and(|to| movie.release_year > to)
        {
            return false;
        }

        true
    }
}

/// Filter movies with an optional filter; `None` keeps everything
pub fn filter_movies(movies: Vec<Movie>, filter: Option<&MovieFilter>) -> Vec<Movie> {
    match filter {
        Some(filter) => MovieFilterEvaluator::filter_movies(movies, filter),
        None => movies,
    }
}
