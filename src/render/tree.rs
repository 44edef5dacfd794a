//! A small document tree, independent of how it eventually gets written out.
//!
//! Trusted markup gets its own node kind so it is obvious at construction time which content is
//! escaped and which content is passed through untouched.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    /// Plain text, escaped when written
    Text { text: String },
    /// Trusted markup, written verbatim
    Markup { markup: String },
    /// A group of nodes without a wrapping element
    Fragment {
        #[serde(skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        children: Vec<Node>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Elements which can never have children
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "link", "meta"];

impl Element {
    pub fn new(tag: &'static str) -> Element {
        Element {
            tag,
            class: None,
            attributes: Vec::default(),
            children: Vec::default(),
        }
    }

    pub fn class<S: Into<String>>(mut self, class: S) -> Element {
        self.class = Some(class.into());
        self
    }

    pub fn attr<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Element {
        self.attributes.push((key.into(), value.to_string()));
        self
    }

    pub fn child<N: Into<Node>>(mut self, child: N) -> Element {
        self.children.push(child.into());
        self
    }

    pub fn children<I: IntoIterator<Item = Node>>(mut self, children: I) -> Element {
        self.children.extend(children);
        self
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag)
    }
}

#[cfg(test)]
impl Element {
    /// Look up an attribute by name
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    pub fn text<S: Into<String>>(text: S) -> Node {
        Node::Text { text: text.into() }
    }

    pub fn markup<S: Into<String>>(markup: S) -> Node {
        Node::Markup {
            markup: markup.into(),
        }
    }

    pub fn fragment<I: IntoIterator<Item = Node>>(key: Option<String>, children: I) -> Node {
        Node::Fragment {
            key,
            children: children.into_iter().collect(),
        }
    }

    pub fn line_break() -> Node {
        Element::new("br").into()
    }
}

/// Queries over the tree, used to make assertions about rendered pages
#[cfg(test)]
impl Node {
    /// The immediate children of this node, if it has any
    pub fn child_nodes(&self) -> &[Node] {
        match self {
            Node::Element(element) => element.children.as_slice(),
            Node::Fragment { children, .. } => children.as_slice(),
            Node::Text { .. } | Node::Markup { .. } => &[],
        }
    }

    /// Keys of the keyed fragments directly beneath this node
    pub fn keys(&self) -> Vec<&str> {
        self.child_nodes()
            .iter()
            .filter_map(|child| match child {
                Node::Fragment { key: Some(key), .. } => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Depth-first search for every element with the given tag
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_elements(tag, &mut found);
        found
    }

    fn collect_elements<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            if element.tag == tag {
                found.push(element);
            }
        }
        for child in self.child_nodes() {
            child.collect_elements(tag, found);
        }
    }

    /// All text and markup beneath this node, concatenated without any escaping
    pub fn inner_text(&self) -> String {
        match self {
            Node::Text { text } => text.clone(),
            Node::Markup { markup } => markup.clone(),
            _ => self.child_nodes().iter().map(Node::inner_text).collect(),
        }
    }
}
