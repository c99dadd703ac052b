//! Item ownership.
//!
//! Items are plain names. Anything that can hold them (a room, the player)
//! implements [`ItemHolder`], and items only ever change hands through
//! [`transfer_item`] so that a name is never in two places at once.

/// Something that holds an ordered list of item names.
pub trait ItemHolder {
    fn items(&self) -> &[String];
    fn add_item(&mut self, item: String);
    /// Remove the first item with exactly this name, returning it.
    fn remove_item(&mut self, item: &str) -> Option<String>;

    fn contains_item(&self, item: &str) -> bool {
        self.items().iter().any(|held| held == item)
    }
}

/// Move `item` from one holder to the end of another.
///
/// Returns `false` and changes nothing if `from` does not hold the item.
pub fn transfer_item(from: &mut impl ItemHolder, to: &mut impl ItemHolder, item: &str) -> bool {
    match from.remove_item(item) {
        Some(moved) => {
            to.add_item(moved);
            true
        },
        None => false,
    }
}

/// Shared `remove_item` for holders backed by a `Vec<String>`.
pub(crate) fn remove_from(items: &mut Vec<String>, item: &str) -> Option<String> {
    let index = items.iter().position(|held| held == item)?;
    Some(items.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Pocket(Vec<String>);

    impl ItemHolder for Pocket {
        fn items(&self) -> &[String] {
            &self.0
        }
        fn add_item(&mut self, item: String) {
            self.0.push(item);
        }
        fn remove_item(&mut self, item: &str) -> Option<String> {
            remove_from(&mut self.0, item)
        }
    }

    #[test]
    fn transfer_moves_exactly_one_item() {
        let mut left = Pocket(vec!["coin".into(), "string".into()]);
        let mut right = Pocket::default();
        assert!(transfer_item(&mut left, &mut right, "coin"));
        assert_eq!(left.items(), ["string"]);
        assert_eq!(right.items(), ["coin"]);
        assert!(right.contains_item("coin"));
    }

    #[test]
    fn failed_transfer_changes_nothing() {
        let mut left = Pocket(vec!["coin".into()]);
        let mut right = Pocket(vec!["lint".into()]);
        assert!(!transfer_item(&mut left, &mut right, "Coin"));
        assert_eq!(left.items(), ["coin"]);
        assert_eq!(right.items(), ["lint"]);
    }
}
