use crate::response::Error;
use derivative::Derivative;
use std::{future::Future, rc::Rc};
use yew::prelude::*;

/// Last known result of a read request.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
	pub loading: bool,
	pub data: Option<T>,
	pub error: Option<Error>,
}

impl<T> Default for QueryState<T> {
	fn default() -> Self {
		Self {
			loading: false,
			data: None,
			error: None,
		}
	}
}

#[derive(Debug, PartialEq)]
pub enum QueryStatus<'a, T> {
	Idle,
	Pending,
	Ready(&'a T),
	Failed(&'a Error),
}

impl<T: Clone> QueryState<T> {
	/// Previously loaded data stays visible while a re-fetch is in flight.
	pub fn begin(&self) -> Self {
		Self {
			loading: true,
			data: self.data.clone(),
			error: None,
		}
	}

	/// A failure keeps the previous data and only records the error.
	pub fn settle(&self, result: Result<T, Error>) -> Self {
		match result {
			Ok(data) => Self {
				loading: false,
				data: Some(data),
				error: None,
			},
			Err(error) => Self {
				loading: false,
				data: self.data.clone(),
				error: Some(error),
			},
		}
	}
}

impl<T> QueryState<T> {
	pub fn status(&self) -> QueryStatus<'_, T> {
		if let Some(data) = &self.data {
			return QueryStatus::Ready(data);
		}
		if self.loading {
			return QueryStatus::Pending;
		}
		if let Some(error) = &self.error {
			return QueryStatus::Failed(error);
		}
		QueryStatus::Idle
	}
}

#[derive(Clone, Derivative)]
#[derivative(PartialEq(bound = "T: PartialEq"))]
pub struct QueryHandle<T> {
	state: UseStateHandle<QueryState<T>>,
	#[derivative(PartialEq = "ignore")]
	run: Rc<dyn Fn()>,
}
impl<T> QueryHandle<T> {
	pub fn run(&self) {
		(*self.run)();
	}

	pub fn refetch_callback<E: 'static>(&self) -> Callback<E> {
		let run = self.run.clone();
		Callback::from(move |_| (*run)())
	}
}
impl<T> std::ops::Deref for QueryHandle<T> {
	type Target = QueryState<T>;

	fn deref(&self) -> &Self::Target {
		&self.state
	}
}

/// Fetch on mount; `run` re-fetches.
#[hook]
pub fn use_query<F, Fut, T>(make_future: F) -> QueryHandle<T>
where
	F: Fn() -> Fut + 'static,
	Fut: Future<Output = Result<T, Error>> + 'static,
	T: Clone + 'static,
{
	use_query_with((), move |_: &()| make_future())
}

/// Fetch on mount and whenever `deps` changes.
#[hook]
pub fn use_query_with<D, F, Fut, T>(deps: D, make_future: F) -> QueryHandle<T>
where
	D: PartialEq + Clone + 'static,
	F: Fn(&D) -> Fut + 'static,
	Fut: Future<Output = Result<T, Error>> + 'static,
	T: Clone + 'static,
{
	let state = use_state(QueryState::<T>::default);
	let run: Rc<dyn Fn()> = {
		let state = state.clone();
		let deps = deps.clone();
		Rc::new(move || {
			let started = state.begin();
			state.set(started.clone());
			let future = make_future(&deps);
			let state = state.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let result = future.await;
				state.set(started.settle(result));
			});
		})
	};
	{
		let run = run.clone();
		use_effect_with(deps, move |_| {
			(*run)();
		});
	}
	QueryHandle { state, run }
}

/// Pending flag and error message of a user-triggered mutation.
#[derive(Clone, PartialEq)]
pub struct ActionHandle {
	pending: UseStateHandle<bool>,
	error: UseStateHandle<Option<AttrValue>>,
}
impl ActionHandle {
	pub fn pending(&self) -> bool {
		*self.pending
	}

	pub fn error(&self) -> Option<AttrValue> {
		(*self.error).clone()
	}

	pub fn fail(&self, message: impl Into<AttrValue>) {
		self.error.set(Some(message.into()));
	}

	pub fn clear(&self) {
		self.error.set(None);
	}

	pub fn run<Fut, T, S>(&self, target: &'static str, future: Fut, on_success: S)
	where
		Fut: Future<Output = Result<T, Error>> + 'static,
		S: FnOnce(T) + 'static,
		T: 'static,
	{
		let pending = self.pending.clone();
		let error = self.error.clone();
		pending.set(true);
		error.set(None);
		wasm_bindgen_futures::spawn_local(async move {
			let result = future.await;
			pending.set(false);
			match result {
				Ok(value) => on_success(value),
				Err(err) => {
					log::warn!(target: target, "{err:?}");
					error.set(Some(err.to_string().into()));
				}
			}
		});
	}
}

#[hook]
pub fn use_action() -> ActionHandle {
	ActionHandle {
		pending: use_state_eq(|| false),
		error: use_state_eq(|| None),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_load() {
		let idle = QueryState::<Vec<u32>>::default();
		assert_eq!(idle.status(), QueryStatus::Idle);
		let pending = idle.begin();
		assert_eq!(pending.status(), QueryStatus::Pending);
		let ready = pending.settle(Ok(vec![1]));
		assert_eq!(ready.status(), QueryStatus::Ready(&vec![1]));
	}

	#[test]
	fn failed_first_load() {
		let failed = QueryState::<u32>::default().begin().settle(Err(Error::Unauthenticated));
		assert_eq!(failed.status(), QueryStatus::Failed(&Error::Unauthenticated));
		assert!(!failed.loading);
	}

	#[test]
	fn refetch_keeps_data_and_failure_keeps_it_too() {
		let ready = QueryState::default().settle(Ok(5u32));
		let refetching = ready.begin();
		assert!(refetching.loading);
		assert_eq!(refetching.data, Some(5));

		let error = Error::Transport("offline".into());
		let failed = refetching.settle(Err(error.clone()));
		assert_eq!(failed.data, Some(5));
		assert_eq!(failed.error, Some(error));
		assert_eq!(failed.status(), QueryStatus::Ready(&5));

		let recovered = failed.begin().settle(Ok(6));
		assert_eq!(recovered.error, None);
		assert_eq!(recovered.data, Some(6));
	}
}
