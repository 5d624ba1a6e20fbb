//! Pull-based change tracking.
//!
//! Entities record what kind of work a mutation invalidates in a pending
//! [`RenderUpdate`] set. Nothing is pushed anywhere: the rasteriser asks
//! whether anything is pending before a frame and clears the sets after it.

bitflags::bitflags! {
    /// Work invalidated by a change to an entity.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RenderUpdate: u8 {
        /// The colour buffer must be redrawn.
        const NEW_RENDER = 0b0000_0001;
        /// Shadow maps depending on this entity are stale.
        const NEW_SHADOW_MAP = 0b0000_0010;
    }
}

impl RenderUpdate {
    /// What a change to geometry, placement or appearance invalidates.
    pub const GEOMETRY: Self = Self::NEW_RENDER.union(Self::NEW_SHADOW_MAP);
}

/// Something that accumulates pending [`RenderUpdate`]s.
pub trait Tracked {
    fn pending_updates(&self) -> RenderUpdate;

    fn clear_updates(&mut self);

    fn needs_render(&self) -> bool {
        self.pending_updates().contains(RenderUpdate::NEW_RENDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_updates_request_both_render_and_shadow_map() {
        assert!(RenderUpdate::GEOMETRY.contains(RenderUpdate::NEW_RENDER));
        assert!(RenderUpdate::GEOMETRY.contains(RenderUpdate::NEW_SHADOW_MAP));
        // Intersecting the two flags would request nothing at all.
        assert!((RenderUpdate::NEW_RENDER & RenderUpdate::NEW_SHADOW_MAP).is_empty());
    }
}
