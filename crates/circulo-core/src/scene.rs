//! Plain-data scene graph handed to the renderer.
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. Children of a group
//! are drawn in order, so later siblings sit on top of earlier ones.

use crate::button::ImageRef;
use crate::geometry::{Point, Size, Transform};
use palette::Srgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Circle { radius: f64, fill: Srgba<f64> },
    Image { asset: ImageRef, origin: Point, size: Size },
    Group(Vec<NodeId>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub content: Content,
    pub place: Transform,
    pub opacity: f64,
}

impl Node {
    pub fn circle(radius: f64, fill: Srgba<f64>) -> Self {
        Self::with_content(Content::Circle { radius, fill })
    }

    pub fn image(asset: ImageRef, size: Size) -> Self {
        // centred on the node origin
        let origin = Point::new(-size.w / 2.0, -size.h / 2.0);
        Self::with_content(Content::Image {
            asset,
            origin,
            size,
        })
    }

    pub fn group(children: Vec<NodeId>, opacity: f64) -> Self {
        Self {
            opacity,
            ..Self::with_content(Content::Group(children))
        }
    }

    fn with_content(content: Content) -> Self {
        Self {
            content,
            place: Transform::IDENTITY,
            opacity: 1.0,
        }
    }

    fn contains(&self, world: &Transform, p: Point) -> bool {
        match &self.content {
            Content::Circle { radius, .. } => {
                let (rx, ry) = (radius * world.sx.abs(), radius * world.sy.abs());
                if rx <= 0.0 || ry <= 0.0 {
                    return false;
                }
                let (dx, dy) = ((p.x - world.dx) / rx, (p.y - world.dy) / ry);
                dx * dx + dy * dy <= 1.0
            }
            Content::Image { origin, size, .. } => {
                let top_left = world.apply(*origin);
                let bottom_right = world.apply(Point::new(origin.x + size.w, origin.y + size.h));
                (top_left.x.min(bottom_right.x)..=top_left.x.max(bottom_right.x)).contains(&p.x)
                    && (top_left.y.min(bottom_right.y)..=top_left.y.max(bottom_right.y))
                        .contains(&p.y)
            }
            Content::Group(_) => false,
        }
    }
}

/// A leaf as seen by the renderer: its node plus accumulated transform and opacity.
pub struct Visit<'a> {
    pub id: NodeId,
    pub node: &'a Node,
    pub world: Transform,
    pub opacity: f64,
    /// Ids from the root down to this node, inclusive.
    pub path: &'a [NodeId],
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Scene {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn add(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match &self.node(id).content {
            Content::Group(children) => children,
            _ => &[],
        }
    }

    /// Calls `f` for every non-group node in draw order.
    pub fn visit<F>(&self, mut f: F)
    where
        F: FnMut(Visit<'_>),
    {
        if let Some(root) = self.root {
            let mut path = Vec::new();
            self.visit_node(root, &Transform::IDENTITY, 1.0, &mut path, &mut f);
        }
    }

    fn visit_node<F>(
        &self,
        id: NodeId,
        parent: &Transform,
        parent_opacity: f64,
        path: &mut Vec<NodeId>,
        f: &mut F,
    ) where
        F: FnMut(Visit<'_>),
    {
        let node = self.node(id);
        let world = node.place.then(parent);
        let opacity = parent_opacity * node.opacity;
        path.push(id);

        match &node.content {
            Content::Group(children) => {
                for &child in children {
                    self.visit_node(child, &world, opacity, path, f);
                }
            }
            _ => f(Visit {
                id,
                node,
                world,
                opacity,
                path: path.as_slice(),
            }),
        }

        path.pop();
    }

    /// Path from the root to the topmost leaf under `point`.
    ///
    /// Transparent nodes still receive presses.
    pub fn hit_test(&self, point: Point) -> Option<Vec<NodeId>> {
        let mut hit = None;
        self.visit(|v| {
            if v.node.contains(&v.world, point) {
                hit = Some(v.path.to_vec());
            }
        });
        hit
    }
}
