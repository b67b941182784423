use crate::core::{Fixlet, SortField};

/// Ordered in-memory collection of fixlets. Insertion order is display order.
#[derive(Debug, Default, Clone)]
pub struct FixletStore {
    fixlets: Vec<Fixlet>,
}

impl FixletStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fixlets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixlets.is_empty()
    }

    pub fn as_slice(&self) -> &[Fixlet] {
        &self.fixlets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fixlet> {
        self.fixlets.iter()
    }

    /// Bulk append used by the loader once a whole file has parsed.
    pub fn extend(&mut self, fixlets: impl IntoIterator<Item = Fixlet>) {
        self.fixlets.extend(fixlets);
    }

    /// Header line followed by one rendered line per record, in store order.
    pub fn list(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(crate::domain::model::LIST_HEADER.to_string())
            .chain(self.fixlets.iter().map(Fixlet::to_string))
    }

    /// Exact, case-sensitive match on `name`.
    pub fn query_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Fixlet> + 'a {
        self.fixlets.iter().filter(move |f| f.name == name)
    }

    /// Stable ascending sort; reorders the store in place.
    pub fn sort_by_field(&mut self, field: SortField) {
        match field {
            SortField::SiteId => self.fixlets.sort_by(|a, b| a.site_id.cmp(&b.site_id)),
            SortField::Criticality => {
                self.fixlets.sort_by(|a, b| a.criticality.cmp(&b.criticality))
            }
            SortField::RelevantComputerCount => {
                self.fixlets.sort_by_key(|f| f.relevant_computer_count)
            }
        }
    }

    /// Appends without checking `fixlet_id` uniqueness.
    pub fn add(&mut self, fixlet: Fixlet) {
        self.fixlets.push(fixlet);
    }

    /// Removes the first record whose `fixlet_id` matches; later duplicates stay.
    pub fn delete(&mut self, fixlet_id: &str) -> Option<Fixlet> {
        let index = self.fixlets.iter().position(|f| f.fixlet_id == fixlet_id)?;
        Some(self.fixlets.remove(index))
    }
}

impl FromIterator<Fixlet> for FixletStore {
    fn from_iter<I: IntoIterator<Item = Fixlet>>(iter: I) -> Self {
        Self {
            fixlets: iter.into_iter().collect(),
        }
    }
}
