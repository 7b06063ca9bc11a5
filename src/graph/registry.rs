use crate::graph::*;
use ahash::RandomState;
use bimap::BiHashMap;
use std::hash::Hash;

/// Translation, in both directions, between keys of vertices and their [VertexId]'s.
///
/// A key is assigned the next dense [VertexId] the first time it is registered.
/// Registering it again returns the same ID.
#[derive(Clone)]
pub struct VertexRegistry<K>
where
    K: Hash + Eq,
{
    vid_factory: VertexIdFactory,
    keys: BiHashMap<VertexId, K, RandomState, RandomState>,
}

impl<K> Default for VertexRegistry<K>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> VertexRegistry<K>
where
    K: Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            keys: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
        }
    }

    /// Returns the ID of `key`, and whether it is freshly assigned.
    pub fn register(&mut self, key: K) -> (VertexId, bool) {
        if let Some(vid) = self.keys.get_by_right(&key) {
            (*vid, false)
        } else {
            let vid = self.vid_factory.one_more();
            self.keys.insert(vid, key);
            (vid, true)
        }
    }

    pub fn id_of(&self, key: &K) -> Option<VertexId> {
        self.keys.get_by_right(key).copied()
    }

    pub fn key_of(&self, vid: &VertexId) -> Option<&K> {
        self.keys.get_by_left(vid)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.keys.contains_right(key)
    }

    pub fn contains_id(&self, vid: &VertexId) -> bool {
        vid.to_raw() < self.vid_factory.issued()
    }

    pub fn len(&self) -> usize {
        self.vid_factory.issued()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over ID's in registration order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.len()).map(VertexId::new)
    }

    /// Iterates over keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.ids().filter_map(move |vid| self.keys.get_by_left(&vid))
    }
}
