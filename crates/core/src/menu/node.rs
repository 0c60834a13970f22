use bitflags::bitflags;

/// Identifier of a resolved [`Node`].
///
/// Nodes are numbered in pre-order, starting at zero, and tagged with the
/// generation of the resolution pass that produced them. Ids from an older
/// pass never match the nodes of a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    generation: u64,
    index: usize,
}

impl NodeId {
    /// Creates a [`NodeId`] from its parts, as reported back by a host.
    #[must_use]
    pub const fn new(generation: u64, index: usize) -> Self {
        Self { generation, index }
    }

    /// Returns the generation of the pass that produced the [`NodeId`].
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }

    /// Returns the pre-order index of the [`NodeId`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

/// What a resolved [`Node`] renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A separator line. Never shows a title, never dispatches.
    Divider,

    /// A non-actionable title.
    Header,

    /// An entry opening a submenu.
    Parent,

    /// An entry running an action when clicked.
    Leaf,
}

bitflags! {
    /// The style classes of a resolved [`Node`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Classes: u8 {
        /// `is-divider`
        const DIVIDER = 1 << 0;
        /// `is-disabled`
        const DISABLED = 1 << 1;
        /// `is-header`
        const HEADER = 1 << 2;
        /// `is-parent`
        const PARENT = 1 << 3;
    }
}

impl Classes {
    /// Returns the class names of the set flags.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        [
            (Classes::DIVIDER, "is-divider"),
            (Classes::DISABLED, "is-disabled"),
            (Classes::HEADER, "is-header"),
            (Classes::PARENT, "is-parent"),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
    }
}

/// A menu entry ready to be rendered.
///
/// Nodes carry no callbacks: a surface renders them and reports clicks back
/// by [`NodeId`].
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// The identifier to report when the node is clicked.
    pub id: NodeId,

    /// What the node renders as.
    pub kind: Kind,

    /// The nesting depth, `0` for top-level entries.
    pub depth: usize,

    /// The title, absent for dividers.
    pub title: Option<String>,

    /// Whether the node is disabled.
    pub disabled: bool,

    /// An extra class name for styling.
    pub class: Option<String>,

    /// The entries of the submenu, empty unless [`Kind::Parent`].
    pub children: Vec<Node>,
}

impl Node {
    /// Returns the style [`Classes`] of the [`Node`].
    #[must_use]
    pub fn classes(&self) -> Classes {
        let mut classes = match self.kind {
            Kind::Divider => Classes::DIVIDER,
            Kind::Header => Classes::HEADER,
            Kind::Parent => Classes::PARENT,
            Kind::Leaf => Classes::empty(),
        };

        classes.set(Classes::DISABLED, self.disabled);
        classes
    }

    /// Finds the first node with the given title in this subtree, in pre-order.
    #[must_use]
    pub fn find(&self, title: &str) -> Option<&Node> {
        if self.title.as_deref() == Some(title) {
            return Some(self);
        }

        self.children.iter().find_map(|child| child.find(title))
    }
}
