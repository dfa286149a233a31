//! Opaque metadata forwarded with transition attempts.

/// Key-value payload attached to a trigger or transition attempt.
///
/// The engine and the event layer never inspect metadata; it is forwarded
/// verbatim to guards and copied onto the history record of an applied
/// transition. The default is an empty map, not an absent value, so a
/// recorded transition always carries a map.
///
/// # Example
///
/// ```rust
/// use impetus::Metadata;
///
/// let mut metadata = Metadata::new();
/// metadata.insert("actor".to_string(), "editor@example.com".into());
/// assert_eq!(metadata.len(), 1);
/// ```
pub type Metadata = serde_json::Map<String, serde_json::Value>;
