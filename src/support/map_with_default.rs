use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Index;

/// A map that answers every lookup, falling back to `default` for
/// keys that were never inserted
#[derive(Deref, DerefMut, Clone, Debug)]
pub struct HashMapWithDefault<K, V> {
    #[deref]
    #[deref_mut]
    map: HashMap<K, V>,
    default: V,
}

impl<K: Hash + Eq, V> Index<&K> for HashMapWithDefault<K, V> {
    type Output = V;

    fn index(&self, index: &K) -> &Self::Output {
        self.map.get(index).unwrap_or(&self.default)
    }
}

impl<K: Hash + Eq, V> HashMapWithDefault<K, V> {
    pub fn new(default: V) -> Self {
        Self { map: HashMap::new(), default }
    }

    pub fn get(&self, key: &K) -> &V {
        &self[key]
    }

    pub fn default_value(&self) -> &V {
        &self.default
    }

    #[must_use]
    pub fn with(mut self, key: K, value: V) -> Self {
        self.map.insert(key, value);
        self
    }
}

#[macro_export]
macro_rules! hash_map_with_default {
    (default => $default:expr $(, $key:expr => $value:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::support::map_with_default::HashMapWithDefault::new($default);
        $(map.insert($key, $value);)*
        map
    }};
}

#[test]
fn test_fallback() {
    let map = hash_map_with_default! {
        default => 0,
        "a" => 1,
    };
    assert_eq!(map[&"a"], 1);
    assert_eq!(*map.get(&"b"), 0);
    assert_eq!(*map.default_value(), 0);
    assert_eq!(map.with("b", 2)[&"b"], 2);
}
