/// Root of the REST API every request is issued against.
pub static API_BASE_URL: &str = match option_env!("LEISURE_BUDDY_API") {
	Some(url) => url,
	None => "http://localhost:3000/api",
};

/// Name of the most verbose log level to emit, parsed with `log::LevelFilter::from_str`.
pub static LOG_LEVEL: &str = match option_env!("LEISURE_BUDDY_LOG") {
	Some(level) => level,
	None => "debug",
};

pub static APP_TITLE: &str = "Leisure Buddy";

pub const MAX_FAVORITE_GENRES: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_REVIEW_LEN: usize = 2000;

/// Genres a user may pick as favorites when registering.
pub static GENRES: &[&str] = &[
	"Action",
	"Adventure",
	"Animation",
	"Comedy",
	"Crime",
	"Documentary",
	"Drama",
	"Fantasy",
	"Horror",
	"Mystery",
	"Romance",
	"Science Fiction",
	"Thriller",
	"Western",
];

pub fn page_title(page: &str) -> String {
	format!("{page} | {APP_TITLE}")
}

pub fn set_page_title(page: &str) {
	gloo_utils::document().set_title(&page_title(page));
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn log_level_parses() {
		assert!(LOG_LEVEL.parse::<log::LevelFilter>().is_ok());
	}

	#[test]
	fn genres_are_unique() {
		let mut sorted = GENRES.to_vec();
		sorted.sort();
		sorted.dedup();
		assert_eq!(sorted.len(), GENRES.len());
	}

	#[test]
	fn titles_carry_app_name() {
		assert_eq!(page_title("Watchlist"), "Watchlist | Leisure Buddy");
	}
}
