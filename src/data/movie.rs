use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize};

pub type MovieId = i64;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Movie {
	pub id: MovieId,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub genres: Genres,
	#[serde(default)]
	pub movie_poster: Option<String>,
	#[serde(default)]
	pub director: Option<String>,
	#[serde(default)]
	pub release_date: Option<String>,
	#[serde(default)]
	pub plot_summary: Option<String>,
}

impl Movie {
	/// Case-insensitive substring match on the title, any genre, or the director.
	/// A blank filter matches every movie.
	pub fn matches(&self, filter: &str) -> bool {
		let needle = filter.trim().to_lowercase();
		if needle.is_empty() {
			return true;
		}
		let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
		contains(&self.title)
			|| self.genres.iter().any(|genre| contains(genre))
			|| self.director.as_deref().map_or(false, contains)
	}

	pub fn poster_alt(&self) -> String {
		format!("{} poster", self.title)
	}
}

/// Movies matching `filter`, ordered by title then id.
pub fn filter_movies<'a>(movies: &'a [Movie], filter: &str) -> Vec<&'a Movie> {
	movies
		.iter()
		.filter(|movie| movie.matches(filter))
		.sorted_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)))
		.collect()
}

/// The API sends genres either as a list or as one comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Genres(Vec<String>);

impl<'de> Deserialize<'de> for Genres {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Raw {
			List(Vec<String>),
			Joined(String),
			Missing(()),
		}
		let genres = match Raw::deserialize(deserializer)? {
			Raw::List(genres) => genres,
			Raw::Joined(joined) => joined.split(',').map(str::to_owned).collect(),
			Raw::Missing(()) => Vec::new(),
		};
		Ok(Self::from(genres))
	}
}

impl From<Vec<String>> for Genres {
	fn from(genres: Vec<String>) -> Self {
		let genres = genres
			.into_iter()
			.map(|genre| genre.trim().to_owned())
			.filter(|genre| !genre.is_empty())
			.collect();
		Self(genres)
	}
}

impl std::ops::Deref for Genres {
	type Target = [String];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl std::fmt::Display for Genres {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0.iter().join(", "))
	}
}

impl Genres {
	pub fn contains_ignore_case(&self, genre: &str) -> bool {
		self.0.iter().any(|own| own.eq_ignore_ascii_case(genre))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn movie(id: MovieId, title: &str, genres: &[&str], director: Option<&str>) -> Movie {
		Movie {
			id,
			title: title.to_owned(),
			genres: Genres::from(genres.iter().map(|g| g.to_string()).collect::<Vec<_>>()),
			director: director.map(str::to_owned),
			..Default::default()
		}
	}

	#[test]
	fn genres_from_list_or_string() {
		let list: Movie = serde_json::from_str(r#"{"id":1,"title":"Alien","genres":["Horror","Science Fiction"]}"#).unwrap();
		let joined: Movie = serde_json::from_str(r#"{"id":1,"title":"Alien","genres":"Horror, Science Fiction"}"#).unwrap();
		assert_eq!(list.genres, joined.genres);
		assert_eq!(list.genres.to_string(), "Horror, Science Fiction");
	}

	#[test]
	fn missing_fields_default() {
		let movie: Movie = serde_json::from_str(r#"{"id":7,"title":"Heat","genres":null}"#).unwrap();
		assert!(movie.genres.is_empty());
		assert_eq!(movie.movie_poster, None);
		assert_eq!(movie.plot_summary, None);
	}

	#[test]
	fn full_record() {
		let movie: Movie = serde_json::from_str(
			r#"{
				"id": 3,
				"title": "Spirited Away",
				"genres": ["Animation", "Fantasy"],
				"movie_poster": "https://img.example/sa.jpg",
				"director": "Hayao Miyazaki",
				"release_date": "2001-07-20",
				"plot_summary": "A girl wanders into a world of spirits."
			}"#,
		)
		.unwrap();
		assert_eq!(movie.director.as_deref(), Some("Hayao Miyazaki"));
		assert_eq!(movie.poster_alt(), "Spirited Away poster");
	}

	#[test]
	fn filter_matches_title_genre_director() {
		let heat = movie(1, "Heat", &["Crime"], Some("Michael Mann"));
		assert!(heat.matches("hea"));
		assert!(heat.matches("CRIME"));
		assert!(heat.matches("mann"));
		assert!(heat.matches("   "));
		assert!(!heat.matches("comedy"));
	}

	#[test]
	fn filtered_movies_sorted_by_title() {
		let movies = vec![
			movie(1, "Heat", &["Crime"], None),
			movie(2, "Alien", &["Horror"], None),
			movie(3, "Fargo", &["Crime", "Comedy"], None),
		];
		let titles = filter_movies(&movies, "crime").into_iter().map(|m| m.title.as_str()).collect::<Vec<_>>();
		assert_eq!(titles, vec!["Fargo", "Heat"]);
		assert_eq!(filter_movies(&movies, "").len(), 3);
		assert!(filter_movies(&movies, "western").is_empty());
	}
}
