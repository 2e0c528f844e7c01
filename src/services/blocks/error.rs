//! Block provider error types and handling.
//!
//! Wraps transport failures, difficulty decoding failures and records that do not
//! have the layout their chain family implies.

use crate::{
	services::{blocks::difficulty::DecodeError, transport::TransportError},
	utils::logging::error::{ErrorContext, TraceableError},
};
use std::collections::HashMap;
use thiserror::Error;

/// Represents errors that can occur while retrieving blocks
#[derive(Debug, Error)]
pub enum BlockProviderError {
	/// The HTTP collaborator failed (connection, status, or body)
	#[error("Transport error: {0}")]
	TransportError(ErrorContext),

	/// A record decoded but one of its derived values could not be computed
	#[error("Decode error: {0}")]
	DecodeError(ErrorContext),

	/// The response did not have the expected JSON layout
	#[error("Shape mismatch: {0}")]
	ShapeMismatch(ErrorContext),
}

impl BlockProviderError {
	pub fn transport_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::TransportError(ErrorContext::new_with_log(msg, source, metadata))
	}

	pub fn decode_error(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::DecodeError(ErrorContext::new_with_log(msg, source, metadata))
	}

	pub fn shape_mismatch(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ShapeMismatch(ErrorContext::new_with_log(msg, source, metadata))
	}

	fn context(&self) -> &ErrorContext {
		match self {
			Self::TransportError(ctx) => ctx,
			Self::DecodeError(ctx) => ctx,
			Self::ShapeMismatch(ctx) => ctx,
		}
	}

	/// Metadata value attached to this error, e.g. `chain_network` or `url`
	pub fn metadata(&self, key: &str) -> Option<&str> {
		self.context()
			.metadata
			.as_ref()
			.and_then(|m| m.get(key))
			.map(String::as_str)
	}

	/// The underlying transport failure, if this error wraps one
	pub fn transport_source(&self) -> Option<&TransportError> {
		match self {
			Self::TransportError(ctx) => ctx
				.source
				.as_deref()
				.and_then(|s| s.downcast_ref::<TransportError>()),
			_ => None,
		}
	}

	/// The underlying decode failure, if this error wraps one
	pub fn decode_source(&self) -> Option<&DecodeError> {
		match self {
			Self::DecodeError(ctx) => ctx
				.source
				.as_deref()
				.and_then(|s| s.downcast_ref::<DecodeError>()),
			_ => None,
		}
	}

	/// Attaches a metadata pair, keeping the variant and source
	pub fn with_metadata(self, key: impl Into<String>, value: impl Into<String>) -> Self {
		match self {
			Self::TransportError(ctx) => Self::TransportError(ctx.with_metadata(key, value)),
			Self::DecodeError(ctx) => Self::DecodeError(ctx.with_metadata(key, value)),
			Self::ShapeMismatch(ctx) => Self::ShapeMismatch(ctx.with_metadata(key, value)),
		}
	}
}

impl From<TransportError> for BlockProviderError {
	fn from(err: TransportError) -> Self {
		Self::transport_error(err.to_string(), Some(Box::new(err)), None)
	}
}

impl From<DecodeError> for BlockProviderError {
	fn from(err: DecodeError) -> Self {
		Self::decode_error(err.to_string(), Some(Box::new(err)), None)
	}
}

impl TraceableError for BlockProviderError {
	fn trace_id(&self) -> String {
		self.context().trace_id.clone()
	}
}
