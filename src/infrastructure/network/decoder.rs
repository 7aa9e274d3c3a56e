use super::errors::DecodeError;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Turns a response body into the value an endpoint promises.
pub trait ResponseDecoder<T>: Send + Sync {
    fn decode(&self, data: &Bytes) -> Result<T, DecodeError>;
}

/// Structured decoding through serde.
pub struct JsonResponseDecoder<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonResponseDecoder<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonResponseDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> ResponseDecoder<T> for JsonResponseDecoder<T> {
    fn decode(&self, data: &Bytes) -> Result<T, DecodeError> {
        Ok(serde_json::from_slice(data)?)
    }
}

/// Hands the body through untouched.
///
/// Only implemented for [`Bytes`], so pairing it with any other response
/// type is rejected at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawDataResponseDecoder;

impl ResponseDecoder<Bytes> for RawDataResponseDecoder {
    fn decode(&self, data: &Bytes) -> Result<Bytes, DecodeError> {
        Ok(data.clone())
    }
}
