//! Deep link parsing
//!
//! 1. Parse the input as a URL (`MalformedInput` otherwise)
//! 2. Check the scheme against the allow-list, if any
//! 3. Authority → first token (`EmptyRoute` if absent); punycode labels
//!    are turned back into Unicode so `https://café` and `app://café` agree
//! 4. Non-empty path segments → following tokens
//! 5. Query → flat map, last value wins, pairs with no name or no value dropped

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::LinkError;
use crate::link::{DeepLink, QueryParameters};
use crate::Result;

pub struct LinkParser {
    /// Lowercased schemes accepted by `parse`; empty accepts any scheme
    allowed_schemes: Vec<String>,
    /// Percent-decode route tokens
    decode_segments: bool,
}

impl LinkParser {
    pub fn new() -> Self {
        Self {
            allowed_schemes: Vec::new(),
            decode_segments: true,
        }
    }

    pub fn with_allowed_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_allowed_schemes(schemes);
        self
    }

    pub fn with_decode_segments(mut self, decode: bool) -> Self {
        self.decode_segments = decode;
        self
    }

    pub fn set_allowed_schemes<I, S>(&mut self, schemes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_schemes = schemes
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
    }

    pub fn set_decode_segments(&mut self, decode: bool) {
        self.decode_segments = decode;
    }

    pub fn allowed_schemes(&self) -> &[String] {
        &self.allowed_schemes
    }

    /// Split a deep link into route tokens and query parameters
    pub fn parse(&self, input: &str) -> Result<DeepLink> {
        let input = input.trim();

        let url = Url::parse(input)
            .map_err(|e| LinkError::MalformedInput(format!("{}: {}", input, e)))?;

        // Url already lowercases the scheme
        let scheme = url.scheme();
        if !self.is_scheme_allowed(scheme) {
            return Err(LinkError::SchemeNotAllowed(scheme.to_string()));
        }

        let authority = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| LinkError::EmptyRoute(input.to_string()))?;

        let mut tokens = vec![self.decode_authority(authority)];
        if let Some(segments) = url.path_segments() {
            tokens.extend(
                segments
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| self.decode(segment)),
            );
        }

        let mut params = QueryParameters::new();
        for (key, value) in url.query_pairs() {
            if key.is_empty() || value.is_empty() {
                continue;
            }
            params.insert(key.into_owned(), value.into_owned());
        }

        tracing::trace!(
            scheme = %scheme,
            tokens = ?tokens,
            params = params.len(),
            "Decomposed deep link"
        );

        Ok(DeepLink::new(scheme, tokens, params))
    }

    fn is_scheme_allowed(&self, scheme: &str) -> bool {
        self.allowed_schemes.is_empty() || self.allowed_schemes.iter().any(|s| s == scheme)
    }

    /// Special schemes (`https`, ...) hand back lowercased punycode hosts
    fn decode_authority(&self, host: &str) -> String {
        if !self.decode_segments {
            return host.to_string();
        }

        let is_punycode = host
            .split('.')
            .any(|label| label.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("xn--")));
        if !is_punycode {
            return self.decode(host);
        }

        match idna::domain_to_unicode(host) {
            (unicode, Ok(())) => unicode,
            (_, Err(e)) => {
                tracing::trace!(host = %host, error = ?e, "Keeping punycode host");
                host.to_string()
            }
        }
    }

    /// Percent-decode a token, keeping it raw if the bytes are not UTF-8
    fn decode(&self, raw: &str) -> String {
        if !self.decode_segments {
            return raw.to_string();
        }

        match percent_decode_str(raw).decode_utf8() {
            Ok(decoded) => decoded.into_owned(),
            Err(e) => {
                tracing::trace!(segment = %raw, error = %e, "Keeping undecodable segment");
                raw.to_string()
            }
        }
    }
}

impl Default for LinkParser {
    fn default() -> Self {
        Self::new()
    }
}
