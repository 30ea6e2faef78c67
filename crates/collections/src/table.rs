//! Chained hash table from string keys to string values.
//!
//! Backs per-node attribute/style maps and the tag style registry.
//! Collisions chain off the bucket head; the bucket array grows to a
//! roughly doubled odd size once the load factor passes
//! [`REHASH_THRESHOLD`]. Lookups never trigger a rehash.

const DEFAULT_BUCKETS: usize = 17;
const REHASH_THRESHOLD: f64 = 0.75;

#[derive(Debug)]
struct Entry {
    key: String,
    value: String,
    next: Option<Box<Entry>>,
}

#[derive(Debug)]
pub struct StrMap {
    buckets: Vec<Option<Box<Entry>>>,
    len: usize,
    collisions: usize,
}

impl Default for StrMap {
    fn default() -> Self {
        Self::new()
    }
}

impl StrMap {
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    pub fn with_buckets(buckets: usize) -> Self {
        let buckets = buckets.max(1);
        Self {
            buckets: (0..buckets).map(|_| None).collect(),
            len: 0,
            collisions: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Number of inserts that landed in an already occupied bucket.
    pub fn collision_count(&self) -> usize {
        self.collisions
    }

    // Polynomial rolling hash (h*31 + byte) over the raw key bytes.
    fn bucket_index(key: &str, bucket_count: usize) -> usize {
        let mut hash: u64 = 0;
        for &byte in key.as_bytes() {
            hash = hash.wrapping_mul(31).wrapping_add(u64::from(byte));
        }
        (hash % bucket_count as u64) as usize
    }

    /// Inserts `key -> value`, overwriting in place when the key is
    /// already present.
    pub fn insert(&mut self, key: &str, value: &str) {
        if (self.len + 1) as f64 / self.buckets.len() as f64 > REHASH_THRESHOLD {
            self.rehash();
        }

        let index = Self::bucket_index(key, self.buckets.len());
        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.key == key {
                entry.value = value.to_string();
                return;
            }
            cursor = entry.next.as_deref_mut();
        }

        if self.buckets[index].is_some() {
            self.collisions += 1;
        }
        let entry = Box::new(Entry {
            key: key.to_string(),
            value: value.to_string(),
            next: self.buckets[index].take(),
        });
        self.buckets[index] = Some(entry);
        self.len += 1;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let index = Self::bucket_index(key, self.buckets.len());
        let mut cursor = self.buckets[index].as_deref();
        while let Some(entry) = cursor {
            if entry.key == key {
                return Some(&entry.value);
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = Self::bucket_index(key, self.buckets.len());
        let mut slot = &mut self.buckets[index];
        loop {
            match slot {
                None => return None,
                Some(entry) if entry.key == key => {
                    let mut removed = slot.take().expect("occupied slot");
                    *slot = removed.next.take();
                    self.len -= 1;
                    return Some(removed.value);
                }
                Some(entry) => {
                    slot = &mut entry.next;
                }
            }
        }
    }

    /// All keys, in bucket order. Chain order is most-recent-first
    /// within a bucket; callers must not rely on any global order.
    pub fn keys(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(self.len);
        for bucket in &self.buckets {
            let mut cursor = bucket.as_deref();
            while let Some(entry) = cursor {
                out.push(entry.key.as_str());
                cursor = entry.next.as_deref();
            }
        }
        out
    }

    // Grow to the next roughly doubled odd bucket count and rebuild
    // every chain. Entry count is unchanged.
    fn rehash(&mut self) {
        let new_count = self.buckets.len() * 2 + 1;
        let old_buckets = std::mem::replace(
            &mut self.buckets,
            (0..new_count).map(|_| None).collect(),
        );
        self.collisions = 0;

        let mut moved = 0usize;
        for bucket in old_buckets {
            let mut cursor = bucket;
            while let Some(mut entry) = cursor {
                cursor = entry.next.take();
                let index = Self::bucket_index(&entry.key, new_count);
                if self.buckets[index].is_some() {
                    self.collisions += 1;
                }
                entry.next = self.buckets[index].take();
                self.buckets[index] = Some(entry);
                moved += 1;
            }
        }
        debug_assert_eq!(moved, self.len, "rehash must preserve every entry");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get_returns_value() {
        let mut map = StrMap::new();
        map.insert("href", "https://example.com");
        map.insert("class", "nav");
        assert_eq!(map.get("href"), Some("https://example.com"));
        assert_eq!(map.get("class"), Some("nav"));
        assert_eq!(map.get("id"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn duplicate_insert_overwrites_in_place() {
        let mut map = StrMap::new();
        map.insert("class", "a");
        map.insert("class", "b");
        assert_eq!(map.get("class"), Some("b"));
        assert_eq!(map.len(), 1, "overwrite must not add a second entry");
    }

    #[test]
    fn remove_makes_key_absent() {
        let mut map = StrMap::new();
        map.insert("k1", "v1");
        map.insert("k2", "v2");
        assert_eq!(map.remove("k1"), Some("v1".to_string()));
        assert_eq!(map.get("k1"), None);
        assert_eq!(map.get("k2"), Some("v2"));
        assert_eq!(map.remove("k1"), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn remove_middle_of_chain_keeps_other_entries() {
        // "AaAa", "AaBB" and "BBAa" share the same 31-polynomial hash,
        // so they chain in one bucket at any table size.
        let mut map = StrMap::new();
        map.insert("AaAa", "1");
        map.insert("AaBB", "2");
        map.insert("BBAa", "3");
        assert!(map.collision_count() >= 2);
        map.remove("AaBB");
        assert_eq!(map.get("AaAa"), Some("1"));
        assert_eq!(map.get("AaBB"), None);
        assert_eq!(map.get("BBAa"), Some("3"));
    }

    #[test]
    fn load_factor_stays_under_threshold_across_many_inserts() {
        let mut map = StrMap::new();
        for i in 0..500 {
            let key = format!("key-{i}");
            map.insert(&key, "v");
            assert!(
                map.load_factor() <= REHASH_THRESHOLD,
                "load factor {} exceeded threshold after {} inserts",
                map.load_factor(),
                i + 1
            );
        }
        assert_eq!(map.len(), 500);
    }

    #[test]
    fn rehash_preserves_all_entries() {
        let mut map = StrMap::with_buckets(3);
        for i in 0..100 {
            map.insert(&format!("k{i}"), &format!("v{i}"));
        }
        for i in 0..100 {
            assert_eq!(
                map.get(&format!("k{i}")).map(str::to_string),
                Some(format!("v{i}")),
                "entry k{i} lost during rehashing"
            );
        }
        assert_eq!(map.keys().len(), 100);
    }

    #[test]
    fn lookups_never_grow_the_table() {
        let mut map = StrMap::with_buckets(3);
        map.insert("only", "entry");
        let buckets_before = map.buckets.len();
        for _ in 0..1_000 {
            let _ = map.get("only");
            let _ = map.get("missing");
        }
        assert_eq!(map.buckets.len(), buckets_before);
    }
}
