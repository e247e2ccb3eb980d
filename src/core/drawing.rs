//! Zeichnung: geordnete Sammlung von Formen mit stabilen IDs.

use super::path_curve::{PathCurve, SegmentId};
use super::path_object::{ObjectId, PathObject};
use glam::Vec2;

/// Alle Formen eines Dokuments; Z-Reihenfolge = Einfügereihenfolge.
#[derive(Debug, Default)]
pub struct Drawing {
    objects: Vec<PathObject>,
    next_id: u64,
}

impl Drawing {
    /// Erstellt eine leere Zeichnung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Legt eine leere Form an und gibt ihre ID zurück.
    pub fn add_object(&mut self, segments_per_curve: usize) -> ObjectId {
        self.add_curve(PathCurve::new(segments_per_curve))
    }

    /// Übernimmt eine fertige Kette als neue Form.
    pub fn add_curve(&mut self, curve: PathCurve) -> ObjectId {
        let id = self.allocate_id();
        self.objects.push(PathObject::from_curve(id, curve));
        id
    }

    /// Dupliziert eine Form (Kopie liegt obenauf).
    pub fn duplicate(&mut self, id: ObjectId, offset: Vec2) -> Option<ObjectId> {
        let new_id = ObjectId(self.next_id);
        let copy = self.get(id)?.duplicate(new_id, offset);
        self.next_id += 1;
        self.objects.push(copy);
        Some(new_id)
    }

    /// Entfernt eine Form.
    pub fn remove(&mut self, id: ObjectId) -> Option<PathObject> {
        let index = self.objects.iter().position(|o| o.id() == id)?;
        Some(self.objects.remove(index))
    }

    pub fn get(&self, id: ObjectId) -> Option<&PathObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut PathObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    /// Gibt die Anzahl der Formen zurück.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Gibt `true` zurück, wenn keine Formen vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Formen in Z-Reihenfolge (unterste zuerst).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PathObject> + '_ {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut PathObject> + '_ {
        self.objects.iter_mut()
    }

    /// IDs in Z-Reihenfolge.
    pub fn ids(&self) -> Vec<ObjectId> {
        self.objects.iter().map(PathObject::id).collect()
    }

    /// IDs aller selektierten Formen.
    pub fn selected_ids(&self) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|o| o.selected)
            .map(PathObject::id)
            .collect()
    }

    /// Hebt Objekt- und Punktselektion aller Formen auf.
    pub fn unselect_all(&mut self) {
        for object in &mut self.objects {
            object.selected = false;
            object.curve_flags_mut().unselect_all_points();
        }
    }

    // ── Rechteck-Abfragen (Gummiband) ───────────────────────────────

    /// Formen, deren Bounding-Box das Rechteck `a`/`b` überlappt.
    pub fn objects_in_rect(&self, a: Vec2, b: Vec2) -> Vec<ObjectId> {
        let (min, max) = (a.min(b), a.max(b));
        self.objects
            .iter()
            .filter(|o| {
                o.bounding_box().is_some_and(|(lo, hi)| {
                    lo.x <= max.x && hi.x >= min.x && lo.y <= max.y && hi.y >= min.y
                })
            })
            .map(PathObject::id)
            .collect()
    }

    /// Anker der Form `id`, die im Rechteck `a`/`b` liegen.
    pub fn points_in_rect(&self, id: ObjectId, a: Vec2, b: Vec2) -> Vec<SegmentId> {
        let (min, max) = (a.min(b), a.max(b));
        let Some(object) = self.get(id) else {
            return Vec::new();
        };
        object
            .curve()
            .segments()
            .filter(|(_, seg)| seg.point().cmpge(min).all() && seg.point().cmple(max).all())
            .map(|(seg_id, _)| seg_id)
            .collect()
    }

    fn allocate_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(from: Vec2, to: Vec2) -> PathCurve {
        let mut curve = PathCurve::new(4);
        curve.append_tail(from);
        curve.append_tail(to);
        curve
    }

    #[test]
    fn test_ids_are_stable_after_remove() {
        let mut drawing = Drawing::new();
        let a = drawing.add_object(4);
        let b = drawing.add_object(4);
        drawing.remove(a).expect("Form a sollte existieren");
        let c = drawing.add_object(4);

        assert_ne!(b, c);
        assert_eq!(drawing.ids(), vec![b, c]);
        assert!(drawing.get(a).is_none());
    }

    #[test]
    fn test_duplicate_lands_on_top() {
        let mut drawing = Drawing::new();
        let a = drawing.add_curve(line(Vec2::ZERO, Vec2::new(10.0, 0.0)));
        let copy = drawing
            .duplicate(a, Vec2::new(10.0, -10.0))
            .expect("Duplikat sollte entstehen");

        assert_eq!(drawing.ids().last(), Some(&copy));
        assert!(drawing.duplicate(ObjectId(99), Vec2::ZERO).is_none());
    }

    #[test]
    fn test_rubber_band_queries() {
        let mut drawing = Drawing::new();
        let a = drawing.add_curve(line(Vec2::ZERO, Vec2::new(10.0, 0.0)));
        let b = drawing.add_curve(line(Vec2::new(50.0, 50.0), Vec2::new(60.0, 50.0)));

        // Rechteck von oben rechts nach unten links aufgezogen
        let hits = drawing.objects_in_rect(Vec2::new(12.0, 5.0), Vec2::new(5.0, -5.0));
        assert_eq!(hits, vec![a]);

        let points = drawing.points_in_rect(b, Vec2::new(45.0, 45.0), Vec2::new(55.0, 55.0));
        assert_eq!(points.len(), 1);
        assert_eq!(drawing.get(b).unwrap().curve().first_id(), Some(points[0]));
    }

    #[test]
    fn test_unselect_all_clears_objects_and_points() {
        let mut drawing = Drawing::new();
        let a = drawing.add_curve(line(Vec2::ZERO, Vec2::new(10.0, 0.0)));
        let object = drawing.get_mut(a).unwrap();
        object.selected = true;
        let head = object.curve().first_id().unwrap();
        object.curve_flags_mut().select_end_point(head);

        drawing.unselect_all();
        assert!(drawing.selected_ids().is_empty());
        assert!(drawing.get(a).unwrap().curve().selected_end_point().is_none());
    }
}
