use crate::camera::Ray;
use crate::constants::{HOVER_SCALE, NO_SELECTION_LABEL, SELECTED_SCALE};
use crate::scene::SceneObject;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub distance: f32,
    pub point: Vec3,
}

pub type Hits = SmallVec<[Hit; 8]>;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t = -b - sq;
    if t >= 0.0 {
        Some(t)
    } else {
        // origin inside the sphere
        let t_far = -b + sq;
        (t_far >= 0.0).then_some(t_far)
    }
}

/// Möller-Trumbore ray/triangle test, double sided. Returns the ray
/// parameter of the hit.
pub fn ray_triangle(origin: Vec3, dir: Vec3, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-7;
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = dir.cross(edge2);
    let a = edge1.dot(h);
    if a.abs() < EPSILON {
        return None;
    }
    let f = 1.0 / a;
    let s = origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(edge1);
    let v = f * dir.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = f * edge2.dot(q);
    (t > EPSILON).then_some(t)
}

/// Nearest intersection of `ray` with one object's mesh, in world units.
pub fn intersect_object(ray: &Ray, object: &SceneObject) -> Option<(f32, Vec3)> {
    let t = &object.transform;
    let world_radius = object.local_bounding_radius() * t.scale.abs().max_element();
    ray_sphere(ray.origin, ray.dir, t.position, world_radius)?;

    // Test in local space; distances are measured back in world space so
    // non-uniform scale does not skew the ordering.
    let inv = t.matrix().inverse();
    let lo = inv.transform_point3(ray.origin);
    let ld = inv.transform_vector3(ray.dir);
    let mut best: Option<f32> = None;
    for [a, b, c] in object.mesh.triangles() {
        if let Some(lt) = ray_triangle(lo, ld, a, b, c) {
            if best.map_or(true, |bt| lt < bt) {
                best = Some(lt);
            }
        }
    }
    let lt = best?;
    let point = t.matrix().transform_point3(lo + ld * lt);
    Some((point.distance(ray.origin), point))
}

/// Every object the ray hits, nearest first. Equal distances keep registry
/// order.
pub fn raycast(ray: &Ray, objects: &[SceneObject]) -> Hits {
    let mut hits: Hits = objects
        .iter()
        .enumerate()
        .filter_map(|(index, o)| {
            intersect_object(ray, o).map(|(distance, point)| Hit {
                index,
                distance,
                point,
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Pointer,
    Default,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Pointer => "pointer",
            Cursor::Default => "default",
        }
    }
}

/// What the UI should show after a click.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionChange {
    pub selected: Option<usize>,
    pub label: String,
    pub color: Option<u32>,
}

impl SelectionChange {
    pub fn none() -> Self {
        Self {
            selected: None,
            label: NO_SELECTION_LABEL.to_string(),
            color: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub selected: Option<usize>,
    pub hovered: Option<usize>,
}

impl Selection {
    /// Reset every non-selected object to unit scale, then enlarge the
    /// nearest hit unless it is the selection.
    pub fn hover(&mut self, objects: &mut [SceneObject], hits: &[Hit]) -> Cursor {
        for (i, o) in objects.iter_mut().enumerate() {
            if Some(i) != self.selected {
                o.transform.set_uniform_scale(1.0);
            }
        }
        self.hovered = hits.first().map(|h| h.index);
        match self.hovered {
            Some(i) => {
                if Some(i) != self.selected {
                    objects[i].transform.set_uniform_scale(HOVER_SCALE);
                }
                Cursor::Pointer
            }
            None => Cursor::Default,
        }
    }

    /// Move the selection to the nearest hit, or clear it on a miss.
    pub fn click(&mut self, objects: &mut [SceneObject], hits: &[Hit]) -> SelectionChange {
        if let Some(prev) = self.selected.and_then(|i| objects.get_mut(i)) {
            prev.transform.set_uniform_scale(1.0);
        }
        match hits.first() {
            Some(hit) => {
                let obj = &mut objects[hit.index];
                obj.transform.set_uniform_scale(SELECTED_SCALE);
                self.selected = Some(hit.index);
                log::info!("Selected: {}", obj.name);
                SelectionChange {
                    selected: Some(hit.index),
                    label: obj.name.clone(),
                    color: Some(obj.material.color),
                }
            }
            None => {
                self.selected = None;
                SelectionChange::none()
            }
        }
    }

    pub fn clear(&mut self, objects: &mut [SceneObject]) -> SelectionChange {
        if let Some(prev) = self.selected.take().and_then(|i| objects.get_mut(i)) {
            prev.transform.set_uniform_scale(1.0);
        }
        SelectionChange::none()
    }
}
