//! Per-node semantic tags written by the tokenizer.
//!
//! The tokenizer never touches rendered output. It records tags here, keyed by
//! [`NodeId`], and a renderer decides what a tag looks like (see
//! [`TagSet::class_names`]).

use crate::node::NodeId;
use bitflags::bitflags;
use std::collections::HashMap;

bitflags! {
    /// Semantic tags attached to one node. Adding a tag twice is a no-op.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TagSet: u8 {
        /// Part of an object name or property chain.
        const IDENTIFIER = 1 << 0;
        const OBJECT = 1 << 1;
        const PROPERTY = 1 << 2;
        const PERIOD = 1 << 3;
        /// Part of a quoted string literal.
        const LITERAL = 1 << 4;
        const COMMA = 1 << 5;
        /// Inside a unit brace, e.g. the `cm` of `5{cm}`.
        const UNIT = 1 << 6;
    }
}

const CLASS_NAMES: &[(TagSet, &str)] = &[
    (TagSet::IDENTIFIER, "identifier"),
    (TagSet::OBJECT, "identifier-object"),
    (TagSet::PROPERTY, "identifier-property"),
    (TagSet::PERIOD, "identifier-period"),
    (TagSet::LITERAL, "literal"),
    (TagSet::COMMA, "comma"),
    (TagSet::UNIT, "units"),
];

impl TagSet {
    /// Style class names for these tags, e.g. `mq-identifier`.
    pub fn class_names(self, prefix: &str) -> Vec<String> {
        CLASS_NAMES
            .iter()
            .filter(|(tag, _)| self.contains(*tag))
            .map(|(_, name)| format!("{}{}", prefix, name))
            .collect()
    }
}

/// The annotation slots of every tagged node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    slots: HashMap<NodeId, TagSet>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `tags` to the node's slot.
    pub fn tag(&mut self, id: NodeId, tags: TagSet) {
        if tags.is_empty() {
            return;
        }
        *self.slots.entry(id).or_insert(TagSet::empty()) |= tags;
    }

    pub fn tags(&self, id: NodeId) -> TagSet {
        self.slots.get(&id).copied().unwrap_or(TagSet::empty())
    }

    /// Whether the node carries all of `tags`.
    pub fn has(&self, id: NodeId, tags: TagSet) -> bool {
        self.tags(id).contains(tags)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, TagSet)> + '_ {
        self.slots.iter().map(|(id, tags)| (*id, *tags))
    }

    /// All slots ordered by node id.
    pub fn sorted(&self) -> Vec<(NodeId, TagSet)> {
        let mut slots: Vec<_> = self.iter().collect();
        slots.sort_by_key(|(id, _)| *id);
        slots
    }
}
