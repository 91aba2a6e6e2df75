use fnv::FnvHasher;
use rand::Rng;
use std::{
    collections::{HashMap, HashSet},
    hash::{BuildHasherDefault, Hash}
};

pub type FnvHashSet<T> = HashSet<T, BuildHasherDefault<FnvHasher>>;
pub type FnvHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FnvHasher>>;

/// Construct a hash set with the specified capacity.
///
/// FNV is much faster than the default SipHash on short keys such as grid coordinates, but it is
/// not resistant to key collision attacks.
pub fn fnv_hashset<T: Hash + Eq>(capacity: usize) -> FnvHashSet<T> {
    HashSet::with_capacity_and_hasher(capacity, BuildHasherDefault::<FnvHasher>::default())
}

/// Construct a hash map with the specified capacity. See `fnv_hashset`.
pub fn fnv_hashmap<K: Hash + Eq, V>(capacity: usize) -> FnvHashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, BuildHasherDefault::<FnvHasher>::default())
}

/// A set that can hand back a uniformly random member in constant time.
///
/// Members live densely in a vec so a random index picks one; the position map makes `contains` and
/// `remove` constant time too (removal swaps the last member into the hole).
#[derive(Debug, Clone)]
pub struct RandomPickSet<T: Hash + Eq> {
    members: Vec<T>,
    positions: FnvHashMap<T, usize>,
}

impl<T: Hash + Eq + Clone> RandomPickSet<T> {
    pub fn with_capacity(capacity: usize) -> RandomPickSet<T> {
        RandomPickSet {
            members: Vec::with_capacity(capacity),
            positions: fnv_hashmap(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn contains(&self, member: &T) -> bool {
        self.positions.contains_key(member)
    }

    /// Returns false if `member` was already present.
    pub fn insert(&mut self, member: T) -> bool {
        if self.positions.contains_key(&member) {
            return false;
        }
        self.positions.insert(member.clone(), self.members.len());
        self.members.push(member);
        true
    }

    /// Returns false if `member` was not present.
    pub fn remove(&mut self, member: &T) -> bool {
        let index = match self.positions.remove(member) {
            Some(i) => i,
            None => return false,
        };

        self.members.swap_remove(index);
        if let Some(moved) = self.members.get(index) {
            self.positions.insert(moved.clone(), index);
        }
        true
    }

    /// A uniformly random member, or None when the set is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<T> {
        if self.members.is_empty() {
            None
        } else {
            let index = rng.gen_range(0..self.members.len());
            Some(self.members[index].clone())
        }
    }
}
