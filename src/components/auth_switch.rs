use crate::{auth::use_session, Route};
use yew::{html::ChildrenProps, prelude::*};
use yew_router::prelude::Redirect;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct AuthSwitchProps {
	#[prop_or_default]
	pub identified: Option<Html>,
	#[prop_or_default]
	pub anonymous: Option<Html>,
}

#[function_component]
pub fn AuthSwitch(props: &AuthSwitchProps) -> Html {
	let session = use_session();
	let content = match session.is_authenticated() {
		true => props.identified.clone(),
		false => props.anonymous.clone(),
	};
	content.unwrap_or_default()
}

/// Children render only with a session; otherwise redirect to the login page.
#[function_component]
pub fn RequireLogin(props: &ChildrenProps) -> Html {
	let session = use_session();
	if !session.is_authenticated() {
		return html!(<Redirect<Route> to={Route::Login} />);
	}
	html!(<>{props.children.clone()}</>)
}
