//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations.
//! Based on the csg.js algorithm by Evan Wallace.
//!
//! ## Algorithm
//!
//! Each BSP node contains:
//! - A dividing plane
//! - Polygons coplanar with the plane
//! - Front subtree (polygons in front of plane)
//! - Back subtree (polygons behind plane)
//!
//! ## Operations
//!
//! - `build`: Insert polygons, splitting them along existing planes
//! - `clip_to`: Remove polygons from this tree that are inside another tree
//! - `invert`: Flip all polygons and swap front/back subtrees
//! - `all_polygons`: Collect all polygons from the tree
//!
//! ## Stack Safety
//!
//! Recursive walks run through `stacker::maybe_grow`, so deep trees built
//! from finely tessellated solids do not overflow the thread stack. Reads
//! and drops are iterative.

use crate::plane::Plane;
use crate::polygon::Polygon;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};

/// A node in the BSP tree.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use solid_csg::{BspNode, Polygon, Vertex};
///
/// let triangle = Polygon::new(vec![
///     Vertex::new(DVec3::ZERO),
///     Vertex::new(DVec3::X),
///     Vertex::new(DVec3::Y),
/// ])
/// .unwrap();
/// let tree = BspNode::new(vec![triangle]);
/// assert_eq!(tree.polygon_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct BspNode {
    /// Splitting plane, taken from the first polygon inserted
    plane: Option<Plane>,
    /// Front subtree (polygons in front of plane)
    front: Option<Box<BspNode>>,
    /// Back subtree (polygons behind plane)
    back: Option<Box<BspNode>>,
    /// Polygons coplanar with this node's plane
    polygons: Vec<Polygon>,
}

impl BspNode {
    /// Creates a new BSP tree from polygons.
    ///
    /// # Arguments
    ///
    /// * `polygons` - Polygons to build the tree from
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut root = Self::default();
        root.build(polygons);
        root
    }

    /// Inserts polygons into the tree.
    ///
    /// Each polygon is filtered down the tree and split along the planes it
    /// spans. New nodes are created where a polygon reaches an empty side.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }
        stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let plane = *self.plane.get_or_insert(*polygons[0].plane());

            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();
            let mut front_polys = Vec::with_capacity(polygons.len() / 2 + 1);
            let mut back_polys = Vec::with_capacity(polygons.len() / 2 + 1);

            for poly in &polygons {
                poly.split(
                    &plane,
                    &mut coplanar_front,
                    &mut coplanar_back,
                    &mut front_polys,
                    &mut back_polys,
                );
            }
            self.polygons.extend(coplanar_front);
            self.polygons.extend(coplanar_back);

            if !front_polys.is_empty() {
                self.front.get_or_insert_with(Box::default).build(front_polys);
            }
            if !back_polys.is_empty() {
                self.back.get_or_insert_with(Box::default).build(back_polys);
            }
        });
    }

    /// Inverts this BSP tree, turning solid space into empty space and
    /// empty space into solid space.
    pub fn invert(&mut self) {
        stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            for poly in &mut self.polygons {
                poly.flip();
            }
            if let Some(plane) = self.plane.as_mut() {
                *plane = plane.flip();
            }
            if let Some(front) = self.front.as_mut() {
                front.invert();
            }
            if let Some(back) = self.back.as_mut() {
                back.invert();
            }
            std::mem::swap(&mut self.front, &mut self.back);
        });
    }

    /// Clips polygons to this BSP tree.
    ///
    /// Removes the parts of `polygons` that are inside the solid represented
    /// by this tree.
    ///
    /// # Returns
    ///
    /// Polygons that are outside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let Some(plane) = self.plane else {
            return polygons;
        };
        stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let mut coplanar_front = Vec::new();
            let mut coplanar_back = Vec::new();
            let mut front_polys = Vec::new();
            let mut back_polys = Vec::new();

            for poly in &polygons {
                poly.split(
                    &plane,
                    &mut coplanar_front,
                    &mut coplanar_back,
                    &mut front_polys,
                    &mut back_polys,
                );
            }
            front_polys.extend(coplanar_front);
            back_polys.extend(coplanar_back);

            let mut result = match self.front.as_ref() {
                Some(front) => front.clip_polygons(front_polys),
                None => front_polys,
            };
            // Without a back tree, back polygons are inside the solid
            if let Some(back) = self.back.as_ref() {
                result.extend(back.clip_polygons(back_polys));
            }
            result
        })
    }

    /// Clips this tree's polygons to another tree.
    ///
    /// Removes parts of this tree's polygons that are inside the other tree.
    ///
    /// # Arguments
    ///
    /// * `other` - The tree to clip against
    pub fn clip_to(&mut self, other: &BspNode) {
        stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));
            if let Some(front) = self.front.as_mut() {
                front.clip_to(other);
            }
            if let Some(back) = self.back.as_mut() {
                back.clip_to(other);
            }
        });
    }

    /// Collects all polygons from this tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());

            if let Some(ref back) = node.back {
                stack.push(back.as_ref());
            }
            if let Some(ref front) = node.front {
                stack.push(front.as_ref());
            }
        }

        result
    }

    /// Returns the number of polygons in this tree.
    pub fn polygon_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            count += node.polygons.len();

            if let Some(ref front) = node.front {
                stack.push(front.as_ref());
            }
            if let Some(ref back) = node.back {
                stack.push(back.as_ref());
            }
        }

        count
    }

    /// Returns the depth of this tree.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&BspNode, usize)> = vec![(self, 1)];

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);

            if let Some(ref front) = node.front {
                stack.push((front.as_ref(), depth + 1));
            }
            if let Some(ref back) = node.back {
                stack.push((back.as_ref(), depth + 1));
            }
        }

        max_depth
    }
}

impl Drop for BspNode {
    fn drop(&mut self) {
        // Detach children first so dropping a deep tree never recurses
        let mut stack = Vec::new();

        if let Some(front) = self.front.take() {
            stack.push(front);
        }
        if let Some(back) = self.back.take() {
            stack.push(back);
        }

        while let Some(mut node) = stack.pop() {
            if let Some(front) = node.front.take() {
                stack.push(front);
            }
            if let Some(back) = node.back.take() {
                stack.push(back);
            }
        }
    }
}
