use super::{CommandDefinition, Registry};

/// A level of the command picker's category tree.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CategoryNode {
    pub name: String,
    /// Category names from the root down to and including this node. Empty at the root.
    pub path: Vec<String>,
    /// Sorted by name.
    pub children: Vec<CategoryNode>,
    /// Command types filed directly under this node, sorted by label.
    pub commands: Vec<String>,
}
impl CategoryNode {
    fn new(name: String, path: Vec<String>) -> Self {
        Self {
            name,
            path,
            children: Vec::new(),
            commands: Vec::new(),
        }
    }
    fn insert(&mut self, def: &CommandDefinition) {
        let mut node = self;
        for (depth, name) in def.category.iter().enumerate() {
            let idx = match node.children.iter().position(|child| &child.name == name) {
                Some(idx) => idx,
                None => {
                    let path = def.category[..=depth].to_vec();
                    node.children.push(Self::new(name.clone(), path));
                    node.children.len() - 1
                }
            };
            node = &mut node.children[idx];
        }
        node.commands.push(def.id.clone());
    }
    fn sort(&mut self, label_of: &impl Fn(&str) -> String) {
        self.children.sort_by(|a, b| a.name.cmp(&b.name));
        self.commands.sort_by_cached_key(|id| label_of(id));
        for child in &mut self.children {
            child.sort(label_of);
        }
    }
    /// Find the node at `path` below this one.
    #[must_use]
    pub fn find(&self, path: &[impl AsRef<str>]) -> Option<&Self> {
        path.iter().try_fold(self, |node, name| {
            node.children
                .iter()
                .find(|child| child.name == name.as_ref())
        })
    }
}

impl Registry {
    /// Definitions arranged by their category paths. Uncategorised ones sit at the root.
    #[must_use]
    pub fn categories(&self) -> CategoryNode {
        let mut root = CategoryNode::new("root".to_owned(), Vec::new());
        for def in self.definitions() {
            root.insert(def);
        }
        root.sort(&|id| {
            self.lookup(id)
                .map(|def| def.label.clone())
                .unwrap_or_default()
        });
        root
    }
}
