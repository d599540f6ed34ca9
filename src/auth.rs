use crate::{
	api,
	data::{Credentials, Registration},
	response::Error,
	session::{AccessToken, SessionValue},
	Route,
};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::*;

/// Reactive mirror of the token held in session storage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
	pub token: Option<AccessToken>,
}

impl Store for Session {
	fn new() -> Self {
		Self {
			token: AccessToken::load(),
		}
	}

	fn should_notify(&self, old: &Self) -> bool {
		self != old
	}
}

impl Session {
	pub fn is_authenticated(&self) -> bool {
		self.token.is_some()
	}
}

pub async fn login(credentials: &Credentials) -> Result<(), Error> {
	let token = api::users::login(credentials).await?;
	log::info!(target: "auth", "logged in as {:?}", credentials.username);
	establish(token);
	Ok(())
}

pub async fn register(registration: &Registration) -> Result<(), Error> {
	let token = api::users::register(registration).await?;
	log::info!(target: "auth", "registered {:?}", registration.username);
	establish(token);
	Ok(())
}

fn establish(token: AccessToken) {
	token.clone().apply_to_session();
	Dispatch::<Session>::new().set(Session { token: Some(token) });
}

pub fn logout() {
	AccessToken::delete();
	Dispatch::<Session>::new().set(Session::default());
	log::info!(target: "auth", "logged out");
}

#[hook]
pub fn use_session() -> Rc<Session> {
	use_store_value::<Session>()
}

/// Invoke `callback` whenever the session goes from anonymous to authenticated.
#[hook]
pub fn use_on_login<F>(callback: F)
where
	F: Fn() + 'static,
{
	let callback = yew_hooks::use_latest(callback);
	let session = use_session();
	let was_authenticated = use_state_eq({
		let session = session.clone();
		move || session.is_authenticated()
	});
	use_effect_with((session, was_authenticated), move |(session, was_authenticated)| {
		let is_authenticated = session.is_authenticated();
		if is_authenticated && !**was_authenticated {
			(*callback.current())();
		}
		was_authenticated.set(is_authenticated);
	});
}

#[function_component]
pub fn LogoutButton() -> Html {
	let navigator = use_navigator().unwrap();
	let onclick = Callback::from(move |_: MouseEvent| {
		logout();
		navigator.push(&Route::Catalog);
	});
	html! {
		<button class="btn btn-outline-danger btn-sm" {onclick}>
			{"Log out"}
		</button>
	}
}
