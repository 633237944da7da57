//! Alternate names over an existing set.

use crate::element::{Set, SetMembers};

/// An alternate name for a set, used where one domain must appear twice
/// in an index list. The alias renders under its own name and delegates
/// everything else to the aliased set.
#[derive(Debug, Clone)]
pub struct Alias {
    name: String,
    aliased: Set,
}

impl Alias {
    pub fn new(name: impl Into<String>, aliased: &Set) -> Alias {
        Alias {
            name: name.into(),
            aliased: aliased.clone(),
        }
    }

    /// The alias's own name, rendered in index positions.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The set this alias stands in for.
    pub fn aliased(&self) -> &Set {
        &self.aliased
    }

    pub fn dim(&self) -> usize {
        self.aliased.dim()
    }

    pub fn level(&self) -> u32 {
        self.aliased.level()
    }

    pub fn members(&self) -> Option<&SetMembers> {
        self.aliased.members()
    }

    pub fn labels(&self) -> Option<&[String]> {
        self.aliased.labels()
    }

    pub fn cardinality(&self) -> Option<usize> {
        self.aliased.cardinality()
    }
}

#[cfg(test)]
mod tests {
    use super::Alias;
    use crate::element::Set;

    #[test]
    fn alias_renders_under_its_own_name() {
        let i = Set::new("i", ["seattle", "san-diego"]);
        let ip = Alias::new("ip", &i);
        assert_eq!(ip.name(), "ip");
        assert_eq!(ip.aliased().name(), "i");
    }

    #[test]
    fn alias_delegates_members_and_level() {
        let i = Set::new("i", ["a", "b", "c"]);
        let ip = Alias::new("ip", &i);
        assert_eq!(ip.cardinality(), Some(3));
        assert_eq!(ip.level(), 0);
        assert_eq!(ip.dim(), 1);
        assert_eq!(ip.labels(), i.labels());
    }

    #[test]
    fn alias_shares_the_aliased_set_data() {
        let i = Set::new("i", ["a"]);
        let ip = Alias::new("ip", &i);
        assert!(ip.aliased().shares_data_with(&i));
    }
}
