//! Transform hierarchy used while building a scene.
//!
//! Groups exist only at setup time. `Scene::add_group` flattens them into
//! the world list, baking each leaf's accumulated transform into the leaf.

use crate::{Surface, Transform};
use lumen_math::{MathError, Matrix, Vec3};

/// A child of a group: either a surface or a nested group.
pub enum Node {
    Surface(Box<dyn Surface>),
    Group(Group),
}

/// Ordered collection of children sharing one local transform.
#[derive(Default)]
pub struct Group {
    children: Vec<Node>,
    transform: Matrix,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(transform: Matrix) -> Self {
        Self {
            children: Vec::new(),
            transform,
        }
    }

    /// Local transform. Builder calls right-compose onto it, so the
    /// operation added last is the first one applied to the children.
    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn translate(mut self, offset: Vec3) -> Self {
        self.transform = self.transform.right_compose(&Matrix::translation(offset));
        self
    }

    /// Rotate by Euler angles in degrees.
    ///
    /// Composes `Rz * Ry * Rx`, so children are turned about X first,
    /// then Y, then Z.
    pub fn rotate(mut self, degrees: Vec3) -> Self {
        self.transform = self
            .transform
            .right_compose(&Matrix::rotation(degrees.z, Vec3::Z))
            .right_compose(&Matrix::rotation(degrees.y, Vec3::Y))
            .right_compose(&Matrix::rotation(degrees.x, Vec3::X));
        self
    }

    pub fn scale(mut self, factors: Vec3) -> Self {
        self.transform = self.transform.right_compose(&Matrix::scale(factors));
        self
    }

    pub fn with_surface(mut self, surface: impl Surface + 'static) -> Self {
        self.add_surface(surface);
        self
    }

    pub fn with_group(mut self, group: Group) -> Self {
        self.add_group(group);
        self
    }

    pub fn add_surface(&mut self, surface: impl Surface + 'static) {
        self.children.push(Node::Surface(Box::new(surface)));
    }

    pub fn add_group(&mut self, group: Group) {
        self.children.push(Node::Group(group));
    }

    /// Flatten into world surfaces.
    ///
    /// Each leaf ends up with `parent * ... * own group transform`, inverted
    /// once here rather than per ray.
    pub fn resolve(self, parent: &Matrix) -> Result<Vec<Box<dyn Surface>>, MathError> {
        let composed = parent.right_compose(&self.transform);
        let transform = Transform::from_matrix(composed)?;
        let mut surfaces = Vec::with_capacity(self.children.len());

        for child in self.children {
            match child {
                Node::Surface(mut surface) => {
                    surface.set_transform(transform);
                    surfaces.push(surface);
                }
                Node::Group(group) => surfaces.extend(group.resolve(&composed)?),
            }
        }

        Ok(surfaces)
    }
}
