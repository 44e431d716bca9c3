// File: crates/wxline-core/src/surface.rs
// Summary: Host drawing surface contract and an in-memory SVG document implementing it.

use std::fmt::Write as _;

/// Handle to an element of a drawing surface.
/// Handles of removed elements may be reused by later appends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Retained element tree the chart draws into.
pub trait DrawingSurface {
    /// Measured (width, height) of the host element.
    fn size(&self) -> (f64, f64);
    fn root(&self) -> NodeId;
    /// Append a new `tag` element as the last child of `parent`.
    fn append(&mut self, parent: NodeId, tag: &str) -> NodeId;
    fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<String>);
    fn set_text(&mut self, node: NodeId, text: impl Into<String>);
    /// Live descendants of `scope` (not `scope` itself) with the given tag, in document order.
    fn select_all(&self, scope: NodeId, tag: &str) -> Vec<NodeId>;
    /// Detach `node` and its subtree. Removing an already removed node is a no-op.
    fn remove(&mut self, node: NodeId);
}

#[derive(Clone, Debug)]
struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    alive: bool,
}

impl Node {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self { tag: tag.to_string(), attrs: Vec::new(), text: None, parent, children: Vec::new(), alive: true }
    }
}

/// `<svg>` document held as an arena of nodes.
#[derive(Clone, Debug)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    nodes: Vec<Node>,
    free: Vec<usize>,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        let mut root = Node::new("svg", None);
        root.attrs.push(("xmlns".into(), "http://www.w3.org/2000/svg".into()));
        root.attrs.push(("width".into(), fmt_num(width)));
        root.attrs.push(("height".into(), fmt_num(height)));
        Self { width, height, nodes: vec![root], free: Vec::new() }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).filter(|n| n.alive)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).filter(|n| n.alive)
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.tag.as_str())
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)?
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id)?.text.as_deref()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn is_live(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Number of live elements, root included.
    pub fn live_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.alive).count()
    }

    /// Serialize the live tree as standalone SVG markup.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.write_node(&mut out, self.root());
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId) {
        let Some(node) = self.node(id) else { return };
        let _ = write!(out, "<{}", node.tag);
        for (k, v) in &node.attrs {
            let _ = write!(out, " {}=\"{}\"", k, escape(v));
        }
        if node.children.is_empty() && node.text.is_none() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(text) = &node.text {
            out.push_str(&escape(text));
        }
        for &child in &node.children {
            self.write_node(out, child);
        }
        let _ = write!(out, "</{}>", node.tag);
    }

    fn collect(&self, id: NodeId, tag: &str, out: &mut Vec<NodeId>) {
        for &child in self.children(id) {
            if self.tag(child) == Some(tag) {
                out.push(child);
            }
            self.collect(child, tag, out);
        }
    }

    fn kill_subtree(&mut self, id: NodeId) {
        let children = match self.node_mut(id) {
            Some(n) => {
                n.alive = false;
                n.attrs.clear();
                n.text = None;
                std::mem::take(&mut n.children)
            }
            None => return,
        };
        self.free.push(id.0);
        for child in children {
            self.kill_subtree(child);
        }
    }
}

impl DrawingSurface for SvgDocument {
    fn size(&self) -> (f64, f64) { (self.width, self.height) }

    fn root(&self) -> NodeId { NodeId(0) }

    fn append(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let node = Node::new(tag, Some(parent));
        let id = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                NodeId(slot)
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.push(id);
        }
        id
    }

    fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        let Some(n) = self.node_mut(node) else { return };
        let value = value.into();
        match n.attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => n.attrs.push((name.to_string(), value)),
        }
    }

    fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        if let Some(n) = self.node_mut(node) {
            n.text = Some(text.into());
        }
    }

    fn select_all(&self, scope: NodeId, tag: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect(scope, tag, &mut out);
        out
    }

    fn remove(&mut self, node: NodeId) {
        if node == self.root() { return; }
        let Some(parent) = self.node(node).and_then(|n| n.parent) else { return };
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|&c| c != node);
        }
        self.kill_subtree(node);
    }
}

/// Shortest decimal rendering of a coordinate (integers print without a fraction).
pub fn fmt_num(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
