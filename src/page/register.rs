use crate::{
	auth,
	components::action_error,
	config::{GENRES, MAX_FAVORITE_GENRES},
	data::{optional_text, FavoriteGenres, Registration},
	hooks::use_action,
	util::web_ext::bind_input,
	Route,
};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};

/// Raw field values as typed; optional fields are empty strings until submitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterForm {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub username: String,
	pub password: String,
	pub bio: String,
	pub profile_image_url: String,
	pub favorite_genres: FavoriteGenres,
}

impl RegisterForm {
	pub fn to_registration(&self) -> Registration {
		Registration {
			first_name: self.first_name.trim().to_owned(),
			last_name: self.last_name.trim().to_owned(),
			email: self.email.trim().to_owned(),
			username: self.username.trim().to_owned(),
			password: self.password.clone(),
			bio: optional_text(&self.bio),
			profile_image_url: optional_text(&self.profile_image_url),
			favorite_genres: self.favorite_genres.clone(),
		}
	}
}

/// Register for a new account.
#[function_component]
pub fn Register() -> Html {
	let navigator = use_navigator().unwrap();
	let form = use_state(RegisterForm::default);
	let action = use_action();

	let onsubmit = Callback::from({
		let form = form.clone();
		let action = action.clone();
		move |ev: SubmitEvent| {
			ev.prevent_default();
			let registration = form.to_registration();
			if let Err(err) = registration.validate() {
				action.fail(err.to_string());
				return;
			}
			let navigator = navigator.clone();
			action.run(
				"register",
				async move { auth::register(&registration).await },
				move |_| navigator.push(&Route::Catalog),
			);
		}
	});

	let text_field = |label: &'static str, name: &'static str, kind: &'static str, value: &String, apply: fn(&mut RegisterForm, String)| {
		html! {
			<label class="form-label w-100">
				{label}
				<input class="form-control" type={kind} {name} value={value.clone()} oninput={bind_input(&form, apply)} />
			</label>
		}
	};

	html! {<>
		<h1>{"Register for an account"}</h1>
		<form class="auth-form" {onsubmit}>
			{text_field("First Name", "firstName", "text", &form.first_name, |form, value| form.first_name = value)}
			{text_field("Last Name", "lastName", "text", &form.last_name, |form, value| form.last_name = value)}
			{text_field("Email", "email", "email", &form.email, |form, value| form.email = value)}
			{text_field("Username", "username", "text", &form.username, |form, value| form.username = value)}
			{text_field("Password", "password", "password", &form.password, |form, value| form.password = value)}
			<label class="form-label w-100">
				{"Bio"}
				<textarea
					class="form-control" name="bio" value={form.bio.clone()}
					oninput={bind_input(&form, |form, value| form.bio = value)}
				/>
			</label>
			{text_field("Profile Image", "profileImageUrl", "url", &form.profile_image_url, |form, value| form.profile_image_url = value)}
			<GenrePicker form={form.clone()} />
			<button type="submit" class="btn btn-primary" disabled={action.pending()}>{"Register"}</button>
			{action_error(action.error())}
		</form>
		<Link<Route> to={Route::Login}>{"Already have an account? Log in here."}</Link<Route>>
	</>}
}

#[derive(Clone, PartialEq, Properties)]
struct GenrePickerProps {
	form: UseStateHandle<RegisterForm>,
}

#[function_component]
fn GenrePicker(GenrePickerProps { form }: &GenrePickerProps) -> Html {
	let favorites = &form.favorite_genres;
	html! {
		<fieldset class="mb-3">
			<legend class="fs-6">{format!("Favorite genres (up to {MAX_FAVORITE_GENRES})")}</legend>
			<div class="d-flex flex-wrap gap-3">
				{for GENRES.iter().map(|genre| {
					let checked = favorites.contains(genre);
					let onchange = Callback::from({
						let form = form.clone();
						move |_: Event| {
							let mut inner = (*form).clone();
							if !inner.favorite_genres.toggle(genre) {
								log::debug!(target: "register", "favorite genres full, ignoring {genre:?}");
							}
							form.set(inner);
						}
					});
					html! {
						<label class="form-check-label">
							<input
								class="form-check-input me-1" type="checkbox" value={*genre}
								{checked} disabled={!checked && favorites.is_full()} {onchange}
							/>
							{*genre}
						</label>
					}
				})}
			</div>
		</fieldset>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::ValidationError;

	#[test]
	fn form_trims_into_registration() {
		let form = RegisterForm {
			first_name: " Ada ".into(),
			last_name: "Lovelace".into(),
			email: "ada@example.com ".into(),
			username: "ada".into(),
			password: " spaced password ".into(),
			bio: "   ".into(),
			profile_image_url: "https://img.example/a.png".into(),
			..Default::default()
		};
		let registration = form.to_registration();
		assert_eq!(registration.first_name, "Ada");
		assert_eq!(registration.email, "ada@example.com");
		assert_eq!(registration.password, " spaced password ");
		assert_eq!(registration.bio, None);
		assert_eq!(registration.profile_image_url.as_deref(), Some("https://img.example/a.png"));
		assert_eq!(registration.validate(), Ok(()));
	}

	#[test]
	fn empty_form_reports_first_missing_field() {
		let registration = RegisterForm::default().to_registration();
		assert_eq!(registration.validate(), Err(ValidationError::Required("First name")));
	}
}
