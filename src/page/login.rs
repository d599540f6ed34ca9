use crate::{
	auth,
	components::action_error,
	data::Credentials,
	hooks::use_action,
	util::web_ext::bind_input,
	Route,
};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};

/// Log into an existing account.
#[function_component]
pub fn Login() -> Html {
	let navigator = use_navigator().unwrap();
	let credentials = use_state(Credentials::default);
	let action = use_action();

	let onsubmit = Callback::from({
		let credentials = credentials.clone();
		let action = action.clone();
		move |ev: SubmitEvent| {
			ev.prevent_default();
			if let Err(err) = credentials.validate() {
				action.fail(err.to_string());
				return;
			}
			let credentials = (*credentials).clone();
			let navigator = navigator.clone();
			action.run(
				"login",
				async move { auth::login(&credentials).await },
				move |_| navigator.push(&Route::Catalog),
			);
		}
	});

	html! {<>
		<h1>{"Log in to your account"}</h1>
		<form class="auth-form" {onsubmit}>
			<label class="form-label w-100">
				{"Username"}
				<input
					class="form-control" type="text" name="username" autocomplete="username" required=true
					value={credentials.username.clone()}
					oninput={bind_input(&credentials, |form, value| form.username = value)}
				/>
			</label>
			<label class="form-label w-100">
				{"Password"}
				<input
					class="form-control" type="password" name="password" autocomplete="current-password" required=true
					value={credentials.password.clone()}
					oninput={bind_input(&credentials, |form, value| form.password = value)}
				/>
			</label>
			<button type="submit" class="btn btn-primary" disabled={action.pending()}>{"Login"}</button>
			{action_error(action.error())}
		</form>
		<Link<Route> to={Route::Register}>{"Need an account? Register here."}</Link<Route>>
	</>}
}
