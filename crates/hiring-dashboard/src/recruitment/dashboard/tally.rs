use std::collections::HashMap;
use std::hash::Hash;

/// Accumulators keyed by category, iterated in first-seen order.
#[derive(Debug, Clone)]
pub(crate) struct Grouping<K, V> {
    slots: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Grouping<K, V> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K, V> Grouping<K, V>
where
    K: Eq + Hash + Clone,
    V: Default,
{
    pub(crate) fn slot(&mut self, key: K) -> &mut V {
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.slots.len();
                self.index.insert(key.clone(), position);
                self.slots.push((key, V::default()));
                position
            }
        };
        &mut self.slots[position].1
    }

    pub(crate) fn into_entries(self) -> Vec<(K, V)> {
        self.slots
    }
}

/// Occurrence counter.
pub(crate) type Tally<K> = Grouping<K, usize>;

impl<K> Grouping<K, usize>
where
    K: Eq + Hash + Clone,
{
    pub(crate) fn count(&mut self, key: K) {
        *self.slot(key) += 1;
    }

    pub(crate) fn total(&self) -> usize {
        self.slots.iter().map(|(_, count)| count).sum()
    }

    /// Highest counts first; equal counts keep first-seen order.
    pub(crate) fn top(self, limit: usize) -> Vec<(K, usize)> {
        let mut entries = self.into_entries();
        entries.sort_by(|left, right| right.1.cmp(&left.1));
        entries.truncate(limit);
        entries
    }
}

impl<K> FromIterator<K> for Grouping<K, usize>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Self::default();
        for key in iter {
            tally.count(key);
        }
        tally
    }
}

/// `round(part / total * 100)`, rounding half away from zero; `0` for an empty total.
pub(crate) fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
