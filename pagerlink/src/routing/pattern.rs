//! Compiled route patterns such as `/categories/{slug}`.

use percent_encoding::{
	percent_decode_str, percent_encode, AsciiSet, PercentEncode, NON_ALPHANUMERIC,
};

use crate::error::{Error, Result};
use crate::params::Params;

/// Everything but the RFC 3986 unreserved characters gets encoded, in path segments and query pairs alike.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'.')
	.remove(b'_')
	.remove(b'~');

#[inline]
fn encode(data: &str) -> PercentEncode<'_> {
	percent_encode(data.as_bytes(), COMPONENT)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Variable(String),
}

/// A route pattern: `/`-separated segments, each either a literal or a whole-segment `{variable}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
	segments: Vec<Segment>,
	variables: Vec<String>,
}

impl Pattern {
	/// Compile `raw`.
	///
	/// # Errors
	///
	/// [`Error::InvalidPattern`] if the pattern does not start with `/`, if braces do not wrap a whole segment, or if a variable name is empty, malformed, or repeated.
	pub fn compile(raw: &str) -> Result<Self> {
		let invalid = |reason| Error::InvalidPattern {
			pattern: raw.to_owned(),
			reason,
		};

		let rest = raw
			.strip_prefix('/')
			.ok_or_else(|| invalid("patterns must start with `/`"))?;

		let mut segments = Vec::new();
		let mut variables: Vec<String> = Vec::new();
		for segment in rest.split('/') {
			if let Some(name) = segment
				.strip_prefix('{')
				.and_then(|segment| segment.strip_suffix('}'))
			{
				if name.is_empty() {
					return Err(invalid("empty variable name"));
				}
				if !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
					return Err(invalid(
						"variable names may only contain ASCII letters, digits, and underscores",
					));
				}
				if variables.iter().any(|existing| existing == name) {
					return Err(invalid("duplicate variable name"));
				}
				variables.push(name.to_owned());
				segments.push(Segment::Variable(name.to_owned()));
			} else if segment.contains(['{', '}']) {
				return Err(invalid("braces must wrap a whole path segment"));
			} else {
				segments.push(Segment::Literal(segment.to_owned()));
			}
		}

		Ok(Self {
			segments,
			variables,
		})
	}

	/// Variable names in pattern order.
	pub fn variables(&self) -> &[String] {
		&self.variables
	}

	/// Fill in the variables from `params` and append the rest of `params` as the query string.
	///
	/// On failure, returns the name of the variable that had no value.
	pub(crate) fn generate(&self, params: &Params) -> Result<String, &str> {
		let mut ret = String::new();
		for segment in &self.segments {
			ret.push('/');
			match segment {
				Segment::Literal(literal) => ret.push_str(literal),
				Segment::Variable(name) => {
					let value = params.get(name).ok_or(name.as_str())?;
					ret.extend(encode(value));
				}
			}
		}

		let mut separator = '?';
		for (key, value) in params {
			if self.variables.contains(key) {
				continue;
			}
			ret.push(separator);
			ret.extend(encode(key));
			ret.push('=');
			ret.extend(encode(value));
			separator = '&';
		}

		Ok(ret)
	}

	/// The decoded path attributes if `path` matches this pattern.
	pub fn match_path(&self, path: &str) -> Option<Params> {
		let mut parts = path.strip_prefix('/')?.split('/');
		let mut attributes = Params::new();
		for segment in &self.segments {
			let part = parts.next()?;
			match segment {
				Segment::Literal(literal) => {
					if part != literal {
						return None;
					}
				}
				Segment::Variable(name) => {
					if part.is_empty() {
						return None;
					}
					let value = percent_decode_str(part).decode_utf8().ok()?;
					attributes.insert(name.clone(), value.into_owned());
				}
			}
		}
		if parts.next().is_some() {
			return None;
		}
		Some(attributes)
	}

	/// The pattern in axum's `:variable` syntax.
	pub fn axum_path(&self) -> String {
		let mut ret = String::new();
		for segment in &self.segments {
			ret.push('/');
			match segment {
				Segment::Literal(literal) => ret.push_str(literal),
				Segment::Variable(name) => {
					ret.push(':');
					ret.push_str(name);
				}
			}
		}
		ret
	}
}
