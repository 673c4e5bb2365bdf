use crate::crossword::Slot;
use rustc_hash::FxHashMap;

/// The words each slot can still take. Values keep the order of the word list,
/// so iteration is deterministic. Values are only ever removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Domains {
    values: FxHashMap<Slot, Vec<String>>,
}

impl Domains {
    /// Every slot gets its own copy of `words`.
    pub fn initialize(slots: &[Slot], words: &[String]) -> Domains {
        let values = slots
            .iter()
            .map(|slot| (*slot, words.to_vec()))
            .collect();

        Domains { values }
    }

    pub fn get(&self, slot: &Slot) -> &[String] {
        self.values
            .get(slot)
            .map(|values| values.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self, slot: &Slot) -> usize {
        self.get(slot).len()
    }

    pub fn is_empty(&self, slot: &Slot) -> bool {
        self.get(slot).is_empty()
    }

    pub fn contains(&self, slot: &Slot, word: &str) -> bool {
        self.get(slot).iter().any(|value| value == word)
    }

    /// The first slot, in `slots` order, with nothing left to try.
    pub fn first_empty<'s>(&self, slots: &'s [Slot]) -> Option<&'s Slot> {
        slots.iter().find(|slot| self.is_empty(slot))
    }

    /// Drops every value of `slot` for which `keep` is false and returns how
    /// many were dropped.
    pub fn restrict<F>(&mut self, slot: &Slot, mut keep: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        match self.values.get_mut(slot) {
            Some(values) => {
                let before = values.len();
                values.retain(|value| keep(value.as_str()));
                before - values.len()
            }
            None => 0,
        }
    }

    /// Narrows `slot` to the single value `word`.
    pub fn assign(&mut self, slot: &Slot, word: &str) -> usize {
        self.restrict(slot, |value| value == word)
    }

    pub fn total(&self) -> usize {
        self.values.values().map(|values| values.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::Domains;
    use crate::crossword::{Direction, Slot};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| String::from(*w)).collect()
    }

    #[test]
    fn copies_are_independent() {
        let a = Slot::new(0, 0, 3, Direction::Across);
        let b = Slot::new(0, 0, 3, Direction::Down);
        let mut domains = Domains::initialize(&[a, b], &words(&["CAT", "CAR", "DOG"]));

        assert_eq!(2, domains.restrict(&a, |w| w.starts_with('D')));

        assert_eq!(&[String::from("DOG")], domains.get(&a));
        assert_eq!(3, domains.len(&b));
    }

    #[test]
    fn restrict_reports_removals() {
        let a = Slot::new(0, 0, 3, Direction::Across);
        let mut domains = Domains::initialize(&[a], &words(&["CAT", "CAR", "DOG"]));

        assert_eq!(0, domains.restrict(&a, |_| true));
        assert_eq!(1, domains.restrict(&a, |w| w != "CAR"));
        assert_eq!(&[String::from("CAT"), String::from("DOG")], domains.get(&a));
        assert!(domains.contains(&a, "DOG"));
        assert!(!domains.contains(&a, "CAR"));

        let unknown = Slot::new(4, 4, 2, Direction::Down);
        assert_eq!(0, domains.restrict(&unknown, |_| false));
        assert!(domains.is_empty(&unknown));
    }

    #[test]
    fn assign_narrows_to_one_value() {
        let a = Slot::new(0, 0, 3, Direction::Across);
        let b = Slot::new(0, 0, 3, Direction::Down);
        let mut domains = Domains::initialize(&[a, b], &words(&["CAT", "CAR", "DOG"]));

        assert_eq!(2, domains.assign(&b, "CAR"));
        assert_eq!(&[String::from("CAR")], domains.get(&b));
        assert_eq!(4, domains.total());
        assert_eq!(None, domains.first_empty(&[a, b]));

        domains.assign(&a, "EEL");
        assert_eq!(Some(&a), domains.first_empty(&[a, b]));
    }
}
