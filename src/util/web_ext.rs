use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::{prelude::*, TargetCast};

pub trait InputExt {
	/// Current value of the input, textarea or select that fired the event.
	fn input_value(&self) -> Option<String>;
}

impl<T> InputExt for T
where
	T: TargetCast,
{
	fn input_value(&self) -> Option<String> {
		if let Some(input) = self.target_dyn_into::<HtmlInputElement>() {
			return Some(input.value());
		}
		if let Some(text) = self.target_dyn_into::<HtmlTextAreaElement>() {
			return Some(text.value());
		}
		if let Some(select) = self.target_dyn_into::<HtmlSelectElement>() {
			return Some(select.value());
		}
		None
	}
}

/// A callback writing the event's input value into one field of `state`.
pub fn bind_input<T, F>(state: &UseStateHandle<T>, apply: F) -> Callback<InputEvent>
where
	T: Clone + 'static,
	F: Fn(&mut T, String) + 'static,
{
	let state = state.clone();
	Callback::from(move |ev: InputEvent| {
		let Some(value) = ev.input_value() else {
			return;
		};
		let mut inner = (*state).clone();
		apply(&mut inner, value);
		state.set(inner);
	})
}
