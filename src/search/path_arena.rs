use crate::Point;

/// A reference to a node inside of a [`PathArena`]
pub type PathKey = usize;

#[derive(Clone, Copy, Debug)]
struct PathNode {
    pos: Point,
    parent: Option<PathKey>,
}

/// Storage for the steps of all partial Paths of a search.
///
/// Every node holds one step and a link to the step before it, so Paths that share a prefix
/// share the nodes of that prefix. Nodes are never removed while the search is running.
#[derive(Clone, Debug, Default)]
pub struct PathArena {
    nodes: slab::Slab<PathNode>,
}

impl PathArena {
    /// Creates an empty arena with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> PathArena {
        PathArena {
            nodes: slab::Slab::with_capacity(capacity),
        }
    }

    /// Starts a new Path at `pos`
    pub fn root(&mut self, pos: Point) -> PathKey {
        self.nodes.insert(PathNode { pos, parent: None })
    }

    /// Creates the Path `parent` followed by `pos`
    #[track_caller]
    pub fn extend(&mut self, parent: PathKey, pos: Point) -> PathKey {
        assert!(self.nodes.contains(parent), "unknown PathKey {}", parent);
        self.nodes.insert(PathNode {
            pos,
            parent: Some(parent),
        })
    }

    /// The last step of the Path ending in `key`
    pub fn pos(&self, key: PathKey) -> Point {
        self.nodes[key].pos
    }

    /// The number of nodes allocated so far
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Collects the steps of the Path ending in `key`, starting with its root
    pub fn reconstruct(&self, key: PathKey) -> Vec<Point> {
        let mut steps = vec![];
        let mut current = Some(key);
        while let Some(key) = current {
            let node = self.nodes[key];
            steps.push(node.pos);
            current = node.parent;
        }
        steps.reverse();
        steps
    }
}
