//! The live marker stack for the match currently being annotated.

use tracing::debug;
use uuid::Uuid;

use super::{Color, Marker, NormalizedPoint, PixelPoint, SurfaceSize};

/// Markers in placement order. Only the most recent one can be removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerStore {
    markers: Vec<Marker>,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a marker in the given category color.
    ///
    /// Returns `None` without touching the store when `color` is the
    /// "no selection" sentinel.
    pub fn place(
        &mut self,
        point: NormalizedPoint,
        color: Color,
        label: impl Into<String>,
    ) -> Option<&Marker> {
        if color.is_none() {
            debug!("Ignored placement without an active category");
            return None;
        }
        self.markers.push(Marker::new(point, color, label));
        self.markers.last()
    }

    /// Place from a raw tap position on a surface of the given size.
    pub fn place_at(
        &mut self,
        position: PixelPoint,
        surface: SurfaceSize,
        color: Color,
        label: impl Into<String>,
    ) -> Option<&Marker> {
        self.place(NormalizedPoint::from_pixel(position, surface), color, label)
    }

    /// Set (or move) the direction end point of a marker.
    ///
    /// Returns false if no marker has that ID.
    pub fn make_directional(&mut self, id: Uuid, end: NormalizedPoint) -> bool {
        match self.markers.iter_mut().find(|m| m.id == id) {
            Some(marker) => {
                marker.set_direction(end);
                true
            }
            None => false,
        }
    }

    /// Update a marker's direction from a raw drag position.
    pub fn drag_to(&mut self, id: Uuid, position: PixelPoint, surface: SurfaceSize) -> bool {
        self.make_directional(id, NormalizedPoint::from_pixel_clamped(position, surface))
    }

    /// Remove and return the most recently placed marker.
    pub fn undo_last(&mut self) -> Option<Marker> {
        self.markers.pop()
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn get(&self, id: Uuid) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
