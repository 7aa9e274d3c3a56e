/// Handle to an in-flight operation.
///
/// `cancel` must be safe to call any number of times, including after the
/// operation finished. Once it returns, the operation's completion is never
/// delivered.
pub trait Cancellable: Send + Sync {
    fn cancel(&self);

    fn is_cancelled(&self) -> bool;
}
