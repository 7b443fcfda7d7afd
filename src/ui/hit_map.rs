//! Clickable regions recorded while rendering
//!
//! Each frame registers the screen areas that respond to the mouse. The
//! mouse handler looks positions up here instead of recomputing layout.

use ratatui::layout::{Position, Rect};

use stackdeck::ColumnId;

/// What sits under a screen position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// Toolbar "add column" button for a catalog kind
    AddColumn(String),
    /// Anywhere inside a column
    Column(ColumnId),
    /// Column header row (drag handle)
    Header(ColumnId),
    Back(ColumnId),
    Forward(ColumnId),
    Remove(ColumnId),
    /// Link `index` in a column's body
    Link(ColumnId, usize),
}

impl HitTarget {
    /// Column this target belongs to
    pub fn column(&self) -> Option<&ColumnId> {
        match self {
            HitTarget::AddColumn(_) => None,
            HitTarget::Column(id)
            | HitTarget::Header(id)
            | HitTarget::Back(id)
            | HitTarget::Forward(id)
            | HitTarget::Remove(id)
            | HitTarget::Link(id, _) => Some(id),
        }
    }

    /// Whether pressing here can start a column drag
    pub fn is_drag_handle(&self) -> bool {
        matches!(
            self,
            HitTarget::Header(_) | HitTarget::Back(_) | HitTarget::Forward(_) | HitTarget::Remove(_)
        )
    }
}

/// Regions registered this frame; later registrations sit on top
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target at (column, row)
    pub fn target_at(&self, x: u16, y: u16) -> Option<&HitTarget> {
        let pos = Position::new(x, y);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| target)
    }

    /// Column under (column, row), whichever part of it was hit
    pub fn column_at(&self, x: u16, y: u16) -> Option<&ColumnId> {
        self.target_at(x, y).and_then(HitTarget::column)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Area registered for `target`, for driving input in tests
    #[cfg(test)]
    pub fn area_of(&self, target: &HitTarget) -> Option<Rect> {
        self.regions.iter().find(|(_, t)| t == target).map(|(area, _)| *area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topmost_region_wins() {
        let id = ColumnId::new("col-1");
        let mut map = HitMap::default();
        map.push(Rect::new(0, 0, 20, 10), HitTarget::Column(id.clone()));
        map.push(Rect::new(1, 1, 18, 1), HitTarget::Header(id.clone()));
        map.push(Rect::new(1, 1, 3, 1), HitTarget::Back(id.clone()));

        assert_eq!(map.target_at(2, 1), Some(&HitTarget::Back(id.clone())));
        assert_eq!(map.target_at(10, 1), Some(&HitTarget::Header(id.clone())));
        assert_eq!(map.target_at(10, 5), Some(&HitTarget::Column(id.clone())));
        assert_eq!(map.target_at(30, 5), None);
        assert_eq!(map.column_at(2, 1), Some(&id));
    }

    #[test]
    fn test_empty_regions_are_skipped() {
        let mut map = HitMap::default();
        map.push(Rect::new(0, 0, 0, 5), HitTarget::AddColumn("home".to_string()));
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_drag_handles() {
        let id = ColumnId::new("col-1");
        assert!(HitTarget::Header(id.clone()).is_drag_handle());
        assert!(HitTarget::Remove(id.clone()).is_drag_handle());
        assert!(!HitTarget::Link(id, 0).is_drag_handle());
        assert!(!HitTarget::AddColumn("home".to_string()).is_drag_handle());
    }
}
