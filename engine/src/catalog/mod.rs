mod iter;

pub use crate::catalog::iter::Iter;

use tracing::{debug, info};

use crate::storage::record::Record;
use crate::storage::{Link, Node, detach, seek, splice};

/// Food records kept in a singly-linked chain, sorted by name and then id.
///
/// The catalog owns the head link; every node owns its successor.
#[derive(Debug, Default)]
pub struct Catalog {
    head: Link,
    len: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: i32) -> Option<&Record> {
        self.iter().find(|record| record.id == id)
    }

    /// In-order traversal from the head. Restart by calling again.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.head)
    }

    /// Adds a record at its sorted position. Duplicate ids are not rejected.
    pub fn insert(&mut self, name: impl Into<String>, id: i32, price: f64) -> bool {
        let record = Record::new(name, id, price);
        debug!(id, name = %record.name, "inserting record");
        self.insert_node(Node::boxed(record));
        true
    }

    pub fn remove_by_id(&mut self, id: i32) -> bool {
        match detach(seek(&mut self.head, |record| record.id != id)) {
            Some(node) => {
                self.len -= 1;
                debug!(id, name = %node.record.name, "removed record");
                true
            }
            None => false,
        }
    }

    /// Removes every record carrying `name`.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        let mut removed = 0;
        let mut link = &mut self.head;

        loop {
            link = seek(link, |record| record.name != name);
            match detach(link) {
                Some(node) => {
                    debug!(id = node.record.id, name, "removed record");
                    removed += 1;
                }
                None => break,
            }
        }

        self.len -= removed;
        removed > 0
    }

    /// Renames the record and moves it to the position its new name sorts to.
    pub fn rename_by_id(&mut self, id: i32, new_name: impl Into<String>) -> bool {
        let Some(mut node) = detach(seek(&mut self.head, |record| record.id != id)) else {
            return false;
        };
        node.record.name = new_name.into();
        debug!(id, name = %node.record.name, "renamed record");
        self.len -= 1;
        self.insert_node(node);
        true
    }

    pub fn reprice_by_id(&mut self, id: i32, new_price: f64) -> bool {
        match seek(&mut self.head, |record| record.id != id) {
            Some(node) => {
                node.record.price = new_price;
                true
            }
            None => false,
        }
    }

    /// Releases every record, leaving the catalog empty. Returns the count released.
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        // Unlink one node at a time so dropping a long chain never recurses.
        while detach(&mut self.head).is_some() {
            released += 1;
        }
        self.len = 0;
        released
    }

    /// Consumes the catalog and returns how many records were released.
    pub fn teardown(self) -> usize {
        let released = self.len;
        drop(self);
        released
    }

    fn insert_node(&mut self, node: Box<Node>) {
        let (name, id) = node.record.key();
        let link = seek(&mut self.head, |record| record.name.as_str() < name);
        let link = seek(link, |record| record.key() < (name, id));
        splice(link, node);
        self.len += 1;
    }
}

impl Drop for Catalog {
    fn drop(&mut self) {
        let released = self.clear();
        info!(released, "catalog torn down");
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
