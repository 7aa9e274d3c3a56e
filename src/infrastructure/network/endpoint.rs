//! Request templates and their resolution against a [`NetworkConfig`].
//!
//! An [`Endpoint`] knows its path, method, query parameters and how to decode
//! its response, but nothing about the host it talks to. Resolution into a
//! [`RequestDescriptor`] is pure and synchronous.

use super::config::NetworkConfig;
use super::decoder::ResponseDecoder;
use super::errors::RequestGenerationError;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// Fully-qualified request ready to hand to a transport.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

pub trait Requestable: Send + Sync {
    fn path(&self) -> &str;

    /// When set, `path` is already an absolute URL and the base URL and
    /// default query parameters of the configuration are not applied.
    fn is_full_path(&self) -> bool;

    fn method(&self) -> HttpMethod;

    fn query_parameters(&self) -> &[(String, String)];

    /// Resolve the absolute URL of this request.
    ///
    /// Default query parameters of `config` come first, then the endpoint's
    /// own; on a key collision the endpoint's value wins in place.
    ///
    /// # Errors
    ///
    /// Returns [`RequestGenerationError::InvalidUrl`] when the combined base
    /// URL and path do not parse as an absolute URL.
    fn url(&self, config: &NetworkConfig) -> Result<Url, RequestGenerationError> {
        let raw = if self.is_full_path() {
            self.path().to_owned()
        } else {
            let base = config.base_url.as_str().trim_end_matches('/');
            let path = self.path().trim_start_matches('/');
            if path.is_empty() {
                base.to_owned()
            } else {
                format!("{base}/{path}")
            }
        };

        let mut url = Url::parse(&raw)
            .map_err(|source| RequestGenerationError::InvalidUrl { url: raw, source })?;

        let defaults = if self.is_full_path() {
            None
        } else {
            Some(&config.query_parameters)
        };
        let merged = merge_query_parameters(defaults, self.query_parameters());
        if !merged.is_empty() {
            url.query_pairs_mut().extend_pairs(merged);
        }
        Ok(url)
    }

    /// Resolve the URL and attach the configuration headers.
    ///
    /// # Errors
    ///
    /// Fails when the URL cannot be built or a configured header is not a
    /// valid HTTP header.
    fn url_request(&self, config: &NetworkConfig) -> Result<RequestDescriptor, RequestGenerationError> {
        let url = self.url(config)?;
        let mut headers = HeaderMap::with_capacity(config.headers.len());
        for (name, value) in &config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| RequestGenerationError::InvalidHeader(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| RequestGenerationError::InvalidHeader(name.clone()))?;
            headers.insert(header_name, header_value);
        }
        Ok(RequestDescriptor {
            method: self.method().into(),
            url,
            headers,
        })
    }
}

/// A [`Requestable`] that also knows how to decode its response.
pub trait ResponseRequestable: Requestable {
    type Response;

    fn response_decoder(&self) -> &dyn ResponseDecoder<Self::Response>;
}

fn merge_query_parameters(
    defaults: Option<&std::collections::BTreeMap<String, String>>,
    own: &[(String, String)],
) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = defaults
        .into_iter()
        .flatten()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    for (key, value) in own {
        match merged.iter_mut().find(|(existing, _)| existing == key) {
            Some(entry) => entry.1 = value.clone(),
            None => merged.push((key.clone(), value.clone())),
        }
    }
    merged
}

pub struct Endpoint<R> {
    path: String,
    is_full_path: bool,
    method: HttpMethod,
    query_parameters: Vec<(String, String)>,
    response_decoder: Box<dyn ResponseDecoder<R>>,
}

impl<R> Endpoint<R> {
    pub fn new(
        path: impl Into<String>,
        method: HttpMethod,
        response_decoder: impl ResponseDecoder<R> + 'static,
    ) -> Self {
        Self {
            path: path.into(),
            is_full_path: false,
            method,
            query_parameters: Vec::new(),
            response_decoder: Box::new(response_decoder),
        }
    }

    /// Endpoint for an absolute URL, bypassing base URL composition.
    pub fn full_path(
        url: impl Into<String>,
        method: HttpMethod,
        response_decoder: impl ResponseDecoder<R> + 'static,
    ) -> Self {
        Self {
            is_full_path: true,
            ..Self::new(url, method, response_decoder)
        }
    }

    /// Add a query parameter; a repeated key replaces the earlier value.
    pub fn with_query_parameter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let key = key.into();
        let value = value.to_string();
        match self.query_parameters.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.query_parameters.push((key, value)),
        }
        self
    }
}

impl<R> Requestable for Endpoint<R> {
    fn path(&self) -> &str {
        &self.path
    }

    fn is_full_path(&self) -> bool {
        self.is_full_path
    }

    fn method(&self) -> HttpMethod {
        self.method
    }

    fn query_parameters(&self) -> &[(String, String)] {
        &self.query_parameters
    }
}

impl<R> ResponseRequestable for Endpoint<R> {
    type Response = R;

    fn response_decoder(&self) -> &dyn ResponseDecoder<R> {
        self.response_decoder.as_ref()
    }
}
