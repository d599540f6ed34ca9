use crate::hooks::QueryState;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ErrorTextProps {
	pub message: AttrValue,
}

#[function_component]
pub fn ErrorText(ErrorTextProps { message }: &ErrorTextProps) -> Html {
	html! {
		<output class="d-block text-danger my-2" role="alert">{message.clone()}</output>
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct LoadingProps {
	#[prop_or(AttrValue::Static("Loading..."))]
	pub label: AttrValue,
}

#[function_component]
pub fn Loading(LoadingProps { label }: &LoadingProps) -> Html {
	html! {
		<p class="text-muted">
			<span class="spinner-border spinner-border-sm me-2" aria-hidden="true" />
			{label.clone()}
		</p>
	}
}

/// Error from a re-fetch that failed while older data is still on screen.
pub fn stale_error<T>(state: &QueryState<T>) -> Html {
	match (&state.data, &state.error) {
		(Some(_), Some(error)) => html!(<ErrorText message={error.to_string()} />),
		_ => html!(),
	}
}

pub fn action_error(error: Option<AttrValue>) -> Html {
	match error {
		Some(message) => html!(<ErrorText {message} />),
		None => html!(),
	}
}
