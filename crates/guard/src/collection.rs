//! Collection and sequence guards

use std::iter;

use crate::error::{GuardError, GuardResult};

/// Rejects an empty collection or sequence; on success returns an iterator
/// over all of the original elements, in order.
///
/// The check consumes at most one element: the first element is peeked to
/// decide emptiness and then re-presented at the front of the returned
/// iterator, so lazy sequences are neither fully drained nor lose elements.
/// Materialized collections go through the same path.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil_guard::has_any;
///
/// let items = has_any("items", vec![1, 2, 3])?;
/// assert_eq!(items.collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// assert!(has_any("items", Vec::<i32>::new()).is_err());
/// ```
pub fn has_any<I>(
    param: &'static str,
    collection: I,
) -> GuardResult<iter::Chain<iter::Once<I::Item>, I::IntoIter>>
where
    I: IntoIterator,
{
    let mut rest = collection.into_iter();
    match rest.next() {
        Some(first) => Ok(iter::once(first).chain(rest)),
        None => Err(GuardError::invalid(param, "empty collection")),
    }
}
