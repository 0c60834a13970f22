use super::{Action, Item, Kind, Menu, Node, NodeId};
use crate::Activation;

use std::fmt;

/// A menu resolved for one [`Activation`].
///
/// Holds the renderable [`Node`] tree and the actions of its entries.
pub struct Resolved<D> {
    generation: u64,
    nodes: Vec<Node>,
    actions: Vec<Option<Action<D>>>,
}

impl<D> Resolved<D> {
    /// Returns the top-level nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the generation stamped on every [`NodeId`] of the tree.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the total number of nodes, at every depth.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns whether the menu has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns whether clicking the node would dispatch an action.
    pub fn is_dispatchable(&self, id: NodeId) -> bool {
        self.action(id).is_some()
    }

    /// Runs the action of the node, if it has a dispatchable one.
    ///
    /// Dividers, disabled entries, entries without an action and ids of
    /// another generation are ignored. Returns whether an action ran.
    pub fn activate(&self, id: NodeId, activation: &Activation<D>) -> bool {
        let Some(action) = self.action(id) else {
            return false;
        };

        action(activation);
        true
    }

    fn action(&self, id: NodeId) -> Option<&Action<D>> {
        if id.generation() != self.generation {
            return None;
        }

        self.actions.get(id.index()).and_then(Option::as_ref)
    }
}

impl<D> fmt::Debug for Resolved<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolved")
            .field("generation", &self.generation)
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}

/// Resolves a [`Menu`] into renderable [`Node`]s of generation `0`.
///
/// Every value at every depth is resolved against the same [`Activation`].
/// Nothing is cached: factories run again on every call, so two resolutions
/// of the same menu may differ.
pub fn resolve<D>(menu: &Menu<D>, activation: &Activation<D>) -> Resolved<D> {
    resolve_in(menu, activation, 0)
}

/// Resolves a [`Menu`] like [`resolve`], stamping every [`NodeId`] with the
/// given generation.
pub fn resolve_in<D>(
    menu: &Menu<D>,
    activation: &Activation<D>,
    generation: u64,
) -> Resolved<D> {
    let mut resolver = Resolver {
        activation,
        generation,
        actions: Vec::new(),
    };

    let items = menu.0.resolve_ref(activation);
    let nodes = resolver.level(&items, 0);

    Resolved {
        generation,
        nodes,
        actions: resolver.actions,
    }
}

struct Resolver<'a, D> {
    activation: &'a Activation<D>,
    generation: u64,
    actions: Vec<Option<Action<D>>>,
}

impl<D> Resolver<'_, D> {
    fn level(&mut self, items: &[Item<D>], depth: usize) -> Vec<Node> {
        items.iter().map(|item| self.item(item, depth)).collect()
    }

    fn item(&mut self, item: &Item<D>, depth: usize) -> Node {
        let activation = self.activation;

        let divider = item.divider.resolve(activation);
        let disabled = item.disabled.resolve(activation);
        // Literal children are borrowed, computed ones are owned
        let children = item.children.resolve_ref(activation);
        let class = item
            .class
            .as_ref()
            .map(|class| class.resolve(activation))
            .filter(|class| !class.is_empty());

        let kind = if divider {
            Kind::Divider
        } else if children.is_some() {
            Kind::Parent
        } else if item.action.is_some() {
            Kind::Leaf
        } else {
            Kind::Header
        };

        let title = (kind != Kind::Divider).then(|| item.title.resolve(activation));

        let id = NodeId::new(self.generation, self.actions.len());
        self.actions.push(match kind {
            Kind::Divider | Kind::Header => None,
            Kind::Parent | Kind::Leaf if disabled => None,
            Kind::Parent | Kind::Leaf => item.action.clone(),
        });

        let children = children
            .as_deref()
            .map(|children| self.level(children, depth + 1))
            .unwrap_or_default();

        Node {
            id,
            kind,
            depth,
            title,
            disabled,
            class,
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{self, Item};
    use crate::{Contract, Origin, PointerEvent, Target, Trigger, Value};

    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn activation<D>(data: D) -> Activation<D> {
        Activation::new(
            Contract::Modern,
            Trigger::new(Target(1), PointerEvent::new(5.0, 5.0), data),
        )
    }

    #[test]
    fn classification_is_exclusive() {
        let menu = Menu::new(vec![
            Item::new("Header"),
            menu::item!("Leaf", |_| {}),
            menu::submenu!("Parent", [menu::item!("Child", |_| {})]),
            menu::separator!(),
        ]);

        let resolved = resolve(&menu, &activation(()));
        let kinds: Vec<_> = resolved.nodes().iter().map(|node| node.kind).collect();

        assert_eq!(
            kinds,
            vec![Kind::Header, Kind::Leaf, Kind::Parent, Kind::Divider]
        );
    }

    #[test]
    fn nodes_are_numbered_in_pre_order() {
        let menu = Menu::new(vec![
            menu::submenu!("A", [menu::item!("A1", |_| {}), menu::item!("A2", |_| {})]),
            menu::item!("B", |_| {}),
        ]);

        let resolved = resolve(&menu, &activation(()));
        let a = &resolved.nodes()[0];

        assert_eq!(resolved.len(), 4);
        assert_eq!(a.id.index(), 0);
        assert_eq!(a.children[0].id.index(), 1);
        assert_eq!(a.children[1].id.index(), 2);
        assert_eq!(resolved.nodes()[1].id.index(), 3);
    }

    #[test]
    fn depth_is_threaded_per_branch() {
        let menu = Menu::new(vec![
            menu::submenu!("A", [menu::submenu!("A1", [menu::item!("A1a", |_| {})])]),
            menu::submenu!("B", [menu::item!("B1", |_| {})]),
        ]);

        let resolved = resolve(&menu, &activation(()));
        let root = resolved.nodes();

        assert_eq!(root[0].depth, 0);
        assert_eq!(root[0].children[0].depth, 1);
        assert_eq!(root[0].children[0].children[0].depth, 2);
        // A later sibling branch starts again from its own depth
        assert_eq!(root[1].depth, 0);
        assert_eq!(root[1].children[0].depth, 1);
    }

    #[test]
    fn descendants_share_the_activation() {
        let seen = Rc::new(RefCell::new(Vec::new()));

        let title = |name: &'static str| {
            let seen = Rc::clone(&seen);

            Value::computed(move |activation: &Activation<u32>| {
                seen.borrow_mut()
                    .push((*activation.data(), activation.origin(), activation.target()));
                name.to_owned()
            })
        };

        let menu = Menu::new(vec![Item::new(title("level 0")).children(vec![
            Item::new(title("level 1")).children(vec![
                Item::new(title("level 2")).children(vec![Item::new(title("level 3"))]),
            ]),
        ])]);

        let activation = activation(99);
        let resolved = resolve(&menu, &activation);

        let deepest = resolved.nodes()[0].find("level 3").expect("deepest node");
        assert_eq!(deepest.depth, 3);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert!(seen.iter().all(|entry| {
            *entry
                == (
                    99,
                    Origin::Event(PointerEvent::new(5.0, 5.0)),
                    Target(1),
                )
        }));
    }

    #[test]
    fn divider_hides_title_and_action() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);

        let menu = Menu::new(vec![
            Item::new("Not shown")
                .divider(true)
                .action(move |_| counter.set(counter.get() + 1)),
        ]);

        let activation = activation(());
        let resolved = resolve(&menu, &activation);
        let node = &resolved.nodes()[0];

        assert_eq!(node.kind, Kind::Divider);
        assert_eq!(node.title, None);
        assert!(!resolved.activate(node.id, &activation));
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn disabled_item_does_not_dispatch() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);

        let menu = Menu::new(vec![
            Item::new("Delete")
                .disabled(true)
                .action(move |_| counter.set(counter.get() + 1)),
        ]);

        let activation = activation(());
        let resolved = resolve(&menu, &activation);
        let node = &resolved.nodes()[0];

        assert_eq!(node.kind, Kind::Leaf);
        assert!(node.disabled);
        assert!(!resolved.is_dispatchable(node.id));
        assert!(!resolved.activate(node.id, &activation));
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn header_does_not_dispatch() {
        let menu = Menu::new(vec![Item::new("Title")]);
        let activation = activation(());
        let resolved = resolve(&menu, &activation);

        assert!(!resolved.activate(resolved.nodes()[0].id, &activation));
    }

    #[test]
    fn leaf_dispatches_with_activation() {
        let received = Rc::new(Cell::new(None));
        let sink = Rc::clone(&received);

        let menu = Menu::new(vec![menu::item!("Open", move |activation: &Activation<u32>| {
            sink.set(Some(*activation.data()));
        })]);

        let activation = activation(7);
        let resolved = resolve(&menu, &activation);

        assert!(resolved.activate(resolved.nodes()[0].id, &activation));
        assert_eq!(received.get(), Some(7));
    }

    #[test]
    fn ids_of_another_generation_do_not_dispatch() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);

        let menu = Menu::new(vec![
            menu::item!("Open", move |_| counter.set(counter.get() + 1)),
        ]);

        let activation = activation(());
        let old = resolve_in(&menu, &activation, 1);
        let new = resolve_in(&menu, &activation, 2);
        let stale = old.nodes()[0].id;

        assert_eq!(stale.index(), new.nodes()[0].id.index());
        assert_eq!(new.nodes()[0].id.generation(), 2);
        assert!(!new.is_dispatchable(stale));
        assert!(!new.activate(stale, &activation));
        assert_eq!(runs.get(), 0);

        assert!(new.activate(new.nodes()[0].id, &activation));
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn flags_are_recomputed_on_every_pass() {
        let menu = Menu::new(vec![
            Item::new("Toggle")
                .disabled(Value::computed(|activation: &Activation<bool>| {
                    *activation.data()
                }))
                .children(Value::computed(|activation: &Activation<bool>| {
                    (!*activation.data()).then(Vec::<Item<bool>>::new)
                })),
        ]);

        let enabled = resolve(&menu, &activation(false));
        let disabled = resolve(&menu, &activation(true));

        assert_eq!(enabled.nodes()[0].kind, Kind::Parent);
        assert!(!enabled.nodes()[0].disabled);
        assert_eq!(disabled.nodes()[0].kind, Kind::Header);
        assert!(disabled.nodes()[0].disabled);
    }

    #[test]
    fn empty_children_still_mark_a_parent() {
        let menu: Menu<()> = Menu::new(vec![Item::new("Empty").children(Vec::new())]);
        let resolved = resolve(&menu, &activation(()));

        assert_eq!(resolved.nodes()[0].kind, Kind::Parent);
        assert!(resolved.nodes()[0].children.is_empty());
    }

    #[test]
    fn computed_root_and_class() {
        let menu = Menu::computed(|activation: &Activation<usize>| {
            (0..*activation.data())
                .map(|i| Item::new(format!("Item {i}")).class(""))
                .collect()
        });

        let resolved = resolve(&menu, &activation(3));

        assert_eq!(resolved.nodes().len(), 3);
        assert_eq!(resolved.nodes()[2].title.as_deref(), Some("Item 2"));
        // Empty class names are dropped
        assert_eq!(resolved.nodes()[0].class, None);
    }
}
