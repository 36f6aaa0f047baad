//! Construction macro.

/// Build a [`DynamicArray`](crate::DynamicArray) from a list of elements.
///
/// ```
/// use collection_core::collection;
///
/// let coll = collection![5, 6];
/// assert_eq!(coll.to_string(), "[5, 6]");
///
/// let empty: collection_core::DynamicArray<i32> = collection![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::DynamicArray::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($item),+])
    };
}
