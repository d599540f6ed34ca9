use crate::{auth::LogoutButton, components::{user, AuthSwitch}, config::APP_TITLE, Route};
use yew::prelude::*;
use yew_router::prelude::Link;

#[allow(unused_parens)]
#[function_component]
pub fn Navbar() -> Html {
	html! {
		<header id="navbar" class="navbar navbar-expand navbar-dark bg-dark px-3">
			<Link<Route> classes="navbar-brand" to={Route::Catalog}>{APP_TITLE}</Link<Route>>
			<nav class="navbar-nav ms-auto align-items-center gap-2">
				<AuthSwitch
					identified={(html! {<>
						<Link<Route> classes="nav-link" to={Route::Movies}>{"See All Movies"}</Link<Route>>
						<Link<Route> classes="nav-link" to={Route::Watchlist}>{"Watchlist"}</Link<Route>>
						<Link<Route> classes="nav-link" to={Route::Account}>{"Account"}</Link<Route>>
					</>})}
					anonymous={(html! {<>
						<Link<Route> classes="nav-link" to={Route::Login}>{"Log in"}</Link<Route>>
						<Link<Route> classes="nav-link" to={Route::Register}>{"Sign Up"}</Link<Route>>
					</>})}
				/>
				<user::Identification />
				<AuthSwitch identified={(html!(<LogoutButton />))} />
			</nav>
		</header>
	}
}
