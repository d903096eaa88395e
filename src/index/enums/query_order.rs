/// Result ordering for catalog queries.
///
/// Search and top listings rank by live seeder count, recency listings by
/// creation time. Each endpoint picks exactly one, the orderings are never
/// combined.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum QueryOrder {
    SeedersDesc,
    CreatedDesc,
}
