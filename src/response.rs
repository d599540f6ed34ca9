use reqwest::{RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

/// A request waiting to be sent, whose successful body decodes as `T`.
pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.json(json);
		self
	}

	pub async fn send(self) -> Result<T, Error> {
		let text = self.send_checked().await?;
		parse_body(&text)
	}

	/// Send and only check the status; whatever body a 2xx carries is ignored.
	pub async fn send_discarding(self) -> Result<(), Error> {
		self.send_checked().await?;
		Ok(())
	}

	async fn send_checked(self) -> Result<String, Error> {
		let response: reqwest::Response = self.builder.send().await?;
		let status = response.status();
		let text = response.text().await?;
		check_status(status, text)
	}

	#[cfg(test)]
	pub(crate) fn build(self) -> reqwest::Request {
		self.builder.build().unwrap()
	}
}

/// Pass a 2xx body through untouched; anything else fails with the server's message.
pub fn check_status(status: StatusCode, text: String) -> Result<String, Error> {
	match status.is_success() {
		true => Ok(text),
		false => Err(Error::Status {
			status: status.as_u16(),
			message: error_message(status, &text),
		}),
	}
}

/// Decode a successful body; an empty body reads as JSON `null`.
pub fn parse_body<T>(text: &str) -> Result<T, Error>
where
	T: DeserializeOwned,
{
	let json = match text.trim() {
		"" => "null",
		trimmed => trimmed,
	};
	serde_json::from_str(json).map_err(|err| InvalidJson(text.to_owned(), err.to_string()).into())
}

/// The message a failed response carries: a JSON string body, the `error` or `message`
/// field of a JSON object, the raw text, or the status reason when the body is empty.
pub fn error_message(status: StatusCode, text: &str) -> String {
	let text = text.trim();
	match serde_json::from_str::<serde_json::Value>(text) {
		Ok(serde_json::Value::String(message)) => return message,
		Ok(serde_json::Value::Object(fields)) => {
			for key in ["error", "message"] {
				if let Some(serde_json::Value::String(message)) = fields.get(key) {
					return message.clone();
				}
			}
		}
		_ => {}
	}
	if !text.is_empty() {
		return text.to_owned();
	}
	match status.canonical_reason() {
		Some(reason) => reason.to_owned(),
		None => format!("Request failed with status {}", status.as_u16()),
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
	#[error("Could not reach the server: {0}")]
	Transport(String),
	#[error("{message}")]
	Status { status: u16, message: String },
	#[error(transparent)]
	InvalidJson(#[from] InvalidJson),
	#[error("You must be logged in to do that.")]
	Unauthenticated,
}
impl From<reqwest::Error> for Error {
	fn from(value: reqwest::Error) -> Self {
		Self::Transport(value.to_string())
	}
}
impl Error {
	pub fn is_unauthorized(&self) -> bool {
		match self {
			Self::Unauthenticated => true,
			Self::Status { status, .. } => *status == StatusCode::UNAUTHORIZED.as_u16(),
			_ => false,
		}
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub struct InvalidJson(pub String, pub String);
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {}", self.0, self.1)
	}
}
