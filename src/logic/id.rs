use super::*;

/// Identity of a placed object. Unique for the whole session, so a key keeps its id
/// while it travels between levels. Ordering follows creation.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Id(u64);

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.0)
    }
}

/// Hands out ids in creation order.
#[derive(Debug, Default)]
pub struct Gen(u64);

impl Gen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gen(&mut self) -> Id {
        let id = Id(self.0);
        self.0 += 1;
        id
    }
}

#[test]
fn ids_follow_creation_order() {
    let mut ids = Gen::new();
    let first = ids.gen();
    let second = ids.gen();
    assert!(first < second);
    assert_eq!(format!("{second:?}"), "object#1");
}
