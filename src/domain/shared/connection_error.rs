/// Opt-in signal that an error means the device has no connectivity.
///
/// Presentation code only needs this predicate to pick a message, so any
/// error type can implement it without exposing its variants.
pub trait ConnectionError {
    fn is_internet_connection_error(&self) -> bool;
}

impl<E: ConnectionError + ?Sized> ConnectionError for Box<E> {
    fn is_internet_connection_error(&self) -> bool {
        (**self).is_internet_connection_error()
    }
}
