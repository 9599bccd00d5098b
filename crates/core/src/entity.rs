//! Entity trait: a flat record addressed by a storage-assigned id.

/// Record stored in one table and exposed under one REST collection.
///
/// `Fields` is everything except the id: what a create or full replace
/// supplies. `Filter` narrows list queries; its default matches every row.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Strongly-typed entity identifier.
    type Id: Copy
        + Eq
        + Ord
        + core::hash::Hash
        + core::fmt::Debug
        + core::fmt::Display
        + core::str::FromStr<Err = crate::DomainError>
        + From<i64>
        + Into<i64>
        + Send
        + Sync
        + 'static;

    type Fields: Clone + Send + Sync + 'static;

    type Filter: Default + core::fmt::Debug + Send + Sync + 'static;

    /// Singular name used in log fields and error messages (`"movie"`).
    const KIND: &'static str;

    /// Collection name: table name and URL segment (`"movies"`).
    const COLLECTION: &'static str;

    fn from_parts(id: Self::Id, fields: Self::Fields) -> Self;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    fn fields(&self) -> &Self::Fields;

    /// Whether this record passes a list filter.
    fn matches(&self, filter: &Self::Filter) -> bool;
}
