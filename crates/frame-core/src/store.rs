//! Shared holder for the last completely built frame
//!
//! A rebuild constructs the new frame without holding the lock and swaps it
//! in afterwards, so readers always see either the previous frame or the
//! new one.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::assembly::{Frame, FrameError, build_frame};
use crate::config::FrameParams;
use crate::profile::Profile;

#[derive(Debug, Default)]
struct StoreState {
    frame: Option<Arc<Frame>>,
    /// Number of successful swaps
    generation: u64,
}

/// Atomically swapped current frame
#[derive(Debug, Default)]
pub struct FrameStore {
    state: RwLock<StoreState>,
}

impl FrameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current frame, if one has been built
    pub fn current(&self) -> Option<Arc<Frame>> {
        self.state.read().frame.clone()
    }

    pub fn generation(&self) -> u64 {
        self.state.read().generation
    }

    /// Current frame together with its generation
    pub fn snapshot(&self) -> (Option<Arc<Frame>>, u64) {
        let state = self.state.read();
        (state.frame.clone(), state.generation)
    }

    /// Replace the current frame with an already built one
    pub fn publish(&self, frame: Frame) -> Arc<Frame> {
        let frame = Arc::new(frame);
        let mut state = self.state.write();
        state.frame = Some(Arc::clone(&frame));
        state.generation += 1;
        tracing::debug!("Published frame generation {}", state.generation);
        frame
    }

    /// Build a frame and make it current.
    ///
    /// On error the previous frame stays current and the error is returned.
    pub fn rebuild(&self, profile: &Profile, params: &FrameParams) -> Result<Arc<Frame>, FrameError> {
        match build_frame(profile, params) {
            Ok(frame) => Ok(self.publish(frame)),
            Err(e) => {
                tracing::warn!("Frame rebuild failed, keeping previous frame: {}", e);
                Err(e)
            }
        }
    }

    /// Drop the current frame
    pub fn clear(&self) {
        self.state.write().frame = None;
    }
}

/// Frame store shared between the builder and renderers
pub type SharedFrameStore = Arc<FrameStore>;

/// Create a new shared frame store
pub fn create_shared_store() -> SharedFrameStore {
    Arc::new(FrameStore::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::presets;

    #[test]
    fn test_rebuild_swaps_frame() {
        let store = FrameStore::new();
        assert!(store.current().is_none());
        assert_eq!(store.generation(), 0);

        let built = store.rebuild(&presets::wedge(), &FrameParams::default()).unwrap();
        let current = store.current().unwrap();
        assert!(Arc::ptr_eq(&built, &current));
        assert_eq!(store.generation(), 1);
    }

    #[test]
    fn test_failed_rebuild_keeps_previous() {
        let store = FrameStore::new();
        let first = store.rebuild(&presets::wedge(), &FrameParams::default()).unwrap();

        let bad = FrameParams {
            height: -1.0,
            ..Default::default()
        };
        assert!(store.rebuild(&presets::classic_moulding(), &bad).is_err());

        let (current, generation) = store.snapshot();
        assert!(Arc::ptr_eq(&first, &current.unwrap()));
        assert_eq!(generation, 1);
    }

    #[test]
    fn test_readers_see_complete_frames() {
        let store = create_shared_store();
        let params = FrameParams::default();
        let expected = build_frame(&presets::classic_moulding(), &params).unwrap().elements.len();

        std::thread::scope(|s| {
            let reader = Arc::clone(&store);
            s.spawn(move || {
                for _ in 0..200 {
                    if let Some(frame) = reader.current() {
                        assert_eq!(frame.elements.len(), expected);
                    }
                }
            });
            for _ in 0..5 {
                store.rebuild(&presets::classic_moulding(), &params).unwrap();
            }
        });

        assert_eq!(store.generation(), 5);
    }

    #[test]
    fn test_clear() {
        let store = FrameStore::new();
        store.rebuild(&presets::wedge(), &FrameParams::default()).unwrap();
        store.clear();
        assert!(store.current().is_none());
        assert_eq!(store.generation(), 1);
    }
}
