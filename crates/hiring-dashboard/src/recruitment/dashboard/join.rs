use std::collections::HashMap;
use std::hash::Hash;

/// Builds a `key -> value` lookup in a single pass over `rows`, the build side of an in-memory
/// hash join. The probe side then resolves foreign keys with `HashMap::get`.
///
/// Rows lacking either side are skipped. When a key repeats, the later row wins.
pub(crate) fn lookup<T, K, V>(
    rows: &[T],
    key: impl Fn(&T) -> Option<K>,
    value: impl Fn(&T) -> Option<V>,
) -> HashMap<K, V>
where
    K: Eq + Hash,
{
    rows.iter()
        .filter_map(|row| Some((key(row)?, value(row)?)))
        .collect()
}
