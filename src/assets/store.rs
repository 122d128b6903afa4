//! The garment scene cache keyed by asset id.
use std::collections::HashMap;
use std::sync::Arc;

use crate::foundation::core::GarmentAssetId;
use crate::foundation::error::WeftlyResult;
use crate::scene::model::GarmentScene;

/// Read-only cache of base garment scenes, keyed by asset identifier.
///
/// Loading the model file is the host's job; the cache only guarantees that
/// each identifier is loaded once and that the cached original is never handed
/// out mutably. Painting always happens on a [`checkout`](Self::checkout)
/// deep clone.
#[derive(Debug, Default)]
pub struct SceneCache {
    scenes: HashMap<GarmentAssetId, Arc<GarmentScene>>,
}

impl SceneCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pre-loaded scene, replacing any previous entry for `id`.
    pub fn insert(&mut self, id: GarmentAssetId, scene: GarmentScene) -> Arc<GarmentScene> {
        let shared = Arc::new(scene);
        self.scenes.insert(id, shared.clone());
        shared
    }

    /// Fetch the shared base scene for `id`, running `loader` only on the
    /// first request for that identifier.
    pub fn load_with<F>(&mut self, id: &GarmentAssetId, loader: F) -> WeftlyResult<Arc<GarmentScene>>
    where
        F: FnOnce() -> WeftlyResult<GarmentScene>,
    {
        if let Some(found) = self.scenes.get(id) {
            return Ok(found.clone());
        }
        let loaded = Arc::new(loader()?);
        self.scenes.insert(id.clone(), loaded.clone());
        Ok(loaded)
    }

    /// Shared immutable handle to the cached base scene, if loaded.
    pub fn get(&self, id: &GarmentAssetId) -> Option<&Arc<GarmentScene>> {
        self.scenes.get(id)
    }

    /// Deep clone of the cached base scene, owned by the caller and safe to
    /// rebind. Returns `None` when `id` has not been loaded.
    pub fn checkout(&self, id: &GarmentAssetId) -> Option<GarmentScene> {
        self.scenes.get(id).map(|s| GarmentScene::clone(s))
    }

    /// Whether `id` has been loaded.
    pub fn contains(&self, id: &GarmentAssetId) -> bool {
        self.scenes.contains_key(id)
    }

    /// Number of cached scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
