//! Topic selection and the sequenced walk through every demonstration.

use clap::ValueEnum;
use std::io::{self, Write};
use tracing::info;

use crate::{
    arrays, bits, dp, graph, heap, linked_list, lists, maps, number_theory, queue, searching, sets,
    sorting, stack, strings, tree, trie, union_find,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Topic {
    Arrays,
    Lists,
    Stack,
    Queue,
    Heap,
    Sets,
    Maps,
    Strings,
    Trie,
    LinkedList,
    UnionFind,
    Tree,
    Graph,
    Dp,
    Sorting,
    Searching,
    Bits,
    NumberTheory,
}

impl Topic {
    /// Every topic, in presentation order.
    pub const ALL: [Topic; 18] = [
        Topic::Arrays,
        Topic::Lists,
        Topic::Stack,
        Topic::Queue,
        Topic::Heap,
        Topic::Sets,
        Topic::Maps,
        Topic::Strings,
        Topic::Trie,
        Topic::LinkedList,
        Topic::UnionFind,
        Topic::Tree,
        Topic::Graph,
        Topic::Dp,
        Topic::Sorting,
        Topic::Searching,
        Topic::Bits,
        Topic::NumberTheory,
    ];

    /// Name used on the command line and in section headers.
    pub fn name(self) -> &'static str {
        match self {
            Topic::Arrays => "arrays",
            Topic::Lists => "lists",
            Topic::Stack => "stack",
            Topic::Queue => "queue",
            Topic::Heap => "heap",
            Topic::Sets => "sets",
            Topic::Maps => "maps",
            Topic::Strings => "strings",
            Topic::Trie => "trie",
            Topic::LinkedList => "linked-list",
            Topic::UnionFind => "union-find",
            Topic::Tree => "tree",
            Topic::Graph => "graph",
            Topic::Dp => "dp",
            Topic::Sorting => "sorting",
            Topic::Searching => "searching",
            Topic::Bits => "bits",
            Topic::NumberTheory => "number-theory",
        }
    }

    pub fn demonstrate<W: Write>(self, out: &mut W) -> io::Result<()> {
        match self {
            Topic::Arrays => arrays::demonstrate(out),
            Topic::Lists => lists::demonstrate(out),
            Topic::Stack => stack::demonstrate(out),
            Topic::Queue => queue::demonstrate(out),
            Topic::Heap => heap::demonstrate(out),
            Topic::Sets => sets::demonstrate(out),
            Topic::Maps => maps::demonstrate(out),
            Topic::Strings => strings::demonstrate(out),
            Topic::Trie => trie::demonstrate(out),
            Topic::LinkedList => linked_list::demonstrate(out),
            Topic::UnionFind => union_find::demonstrate(out),
            Topic::Tree => tree::demonstrate(out),
            Topic::Graph => graph::demonstrate(out),
            Topic::Dp => dp::demonstrate(out),
            Topic::Sorting => sorting::demonstrate(out),
            Topic::Searching => searching::demonstrate(out),
            Topic::Bits => bits::demonstrate(out),
            Topic::NumberTheory => number_theory::demonstrate(out),
        }
    }
}

/// Runs the given topics in order, each under an `== name ==` header and
/// separated by a blank line. An empty selection runs every topic.
pub fn run_all<W: Write>(topics: &[Topic], out: &mut W) -> io::Result<()> {
    let topics = if topics.is_empty() { &Topic::ALL[..] } else { topics };
    for (i, topic) in topics.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        info!(topic = topic.name(), "demonstrating");
        writeln!(out, "== {} ==", topic.name())?;
        topic.demonstrate(out)?;
    }
    out.flush()
}
