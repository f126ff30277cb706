use std::collections::HashMap;

use crate::models::item::Item;

/// File items partitioned by extension. Buckets keep first-encounter order.
#[derive(Debug, Default)]
pub struct GroupedFiles {
    buckets: Vec<(String, Vec<Item>)>,
    index: HashMap<String, usize>,
}

impl GroupedFiles {
    fn push(&mut self, extension: &str, item: Item) {
        match self.index.get(extension) {
            Some(&slot) => self.buckets[slot].1.push(item),
            None => {
                self.index.insert(extension.to_string(), self.buckets.len());
                self.buckets.push((extension.to_string(), vec![item]));
            }
        }
    }

    pub fn get(&self, extension: &str) -> Option<&[Item]> {
        self.index
            .get(extension)
            .map(|&slot| self.buckets[slot].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Item])> {
        self.buckets
            .iter()
            .map(|(ext, items)| (ext.as_str(), items.as_slice()))
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|(ext, _)| ext.as_str())
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.buckets.iter().map(|(_, items)| items.len()).sum()
    }
}

impl IntoIterator for GroupedFiles {
    type Item = (String, Vec<Item>);
    type IntoIter = std::vec::IntoIter<(String, Vec<Item>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

/// Buckets every file item by its extension in a single pass. Non-files are
/// skipped.
pub fn group_files(items: impl IntoIterator<Item = Item>) -> GroupedFiles {
    let mut grouped = GroupedFiles::default();
    for item in items {
        let Some(extension) = item.extension().map(str::to_owned) else {
            continue;
        };
        grouped.push(&extension, item);
    }
    grouped
}
