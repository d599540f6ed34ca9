#![cfg_attr(not(target_family = "wasm"), allow(dead_code))]

use crate::data::{MovieId, UserId};
use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod auth;
mod components;
mod config;
mod data;
mod hooks;
mod logging;
mod page;
mod response;
mod route;
mod session;
mod util;

#[cfg(target_family = "wasm")]
fn main() {
	if let Err(err) = logging::wasm::init(logging::wasm::Config::default().prefer_target()) {
		web_sys::console::error_1(&format!("failed to initialize logging: {err:?}").into());
	}
	log::info!(target: env!("CARGO_PKG_NAME"), "api at {}", config::API_BASE_URL);
	yew::Renderer::<App>::new().render();
}

#[cfg(not(target_family = "wasm"))]
fn main() -> anyhow::Result<()> {
	logging::native::init(logging::native::Config::default().prefer_target())?;
	log::error!(
		target: env!("CARGO_PKG_NAME"),
		"{} runs in the browser; build it for wasm32-unknown-unknown (`trunk serve`).",
		config::APP_TITLE
	);
	Ok(())
}

#[function_component]
fn App() -> Html {
	html! {
		<BrowserRouter>
			<components::Navbar />
			<main class="container py-4">
				{ <Route as route::Route>::switch() }
			</main>
		</BrowserRouter>
	}
}

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Catalog,
	#[at("/movies")]
	Movies,
	#[at("/movies/:id")]
	Movie { id: MovieId },
	#[at("/watchlist")]
	Watchlist,
	#[at("/account")]
	Account,
	#[at("/users/:id")]
	Reviewer { id: UserId },
	#[at("/login")]
	Login,
	#[at("/register")]
	Register,
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl route::Route for Route {
	fn title(&self) -> &'static str {
		match self {
			Self::Catalog | Self::Movies => "Movies",
			Self::Movie { .. } => "Movie",
			Self::Watchlist => "Watchlist",
			Self::Account => "Account",
			Self::Reviewer { .. } => "Reviewer",
			Self::Login => "Log in",
			Self::Register => "Sign up",
			Self::NotFound => "Not found",
		}
	}

	fn html(self) -> Html {
		use components::RequireLogin;
		match self {
			Self::Catalog | Self::Movies => html!(<page::Catalog />),
			Self::Movie { id } => html!(<page::MovieDetails {id} />),
			Self::Watchlist => html! {
				<RequireLogin><page::Watchlist /></RequireLogin>
			},
			Self::Account => html! {
				<RequireLogin><page::Account /></RequireLogin>
			},
			Self::Reviewer { id } => html!(<page::Reviewer {id} />),
			Self::Login => html!(<page::Login />),
			Self::Register => html!(<page::Register />),
			Self::NotFound => html! {
				<h1>{"404: Page not found"}</h1>
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn paths_recognized() {
		assert_eq!(Route::recognize("/"), Some(Route::Catalog));
		assert_eq!(Route::recognize("/movies"), Some(Route::Movies));
		assert_eq!(Route::recognize("/movies/12"), Some(Route::Movie { id: 12 }));
		assert_eq!(Route::recognize("/users/4"), Some(Route::Reviewer { id: 4 }));
		assert_eq!(Route::recognize("/watchlist"), Some(Route::Watchlist));
		assert_eq!(Route::not_found_route(), Some(Route::NotFound));
	}

	#[test]
	fn paths_rendered() {
		assert_eq!(Route::Movie { id: 3 }.to_path(), "/movies/3");
		assert_eq!(Route::Reviewer { id: 9 }.to_path(), "/users/9");
		assert_eq!(Route::Register.to_path(), "/register");
	}

	#[test]
	fn titles() {
		use route::Route as _;
		assert_eq!(Route::Movies.title(), Route::Catalog.title());
		assert_eq!(Route::Login.title(), "Log in");
	}
}
