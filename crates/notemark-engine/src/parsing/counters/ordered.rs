use std::collections::BTreeMap;

use super::numbering::NumberFormat;

/// An ordered list item as seen by the counter machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedItem {
    /// Indent level of the item.
    pub level: usize,
    /// The number written in the source.
    pub literal: u32,
    /// The block right before this one was an ordered item at the same level.
    pub continues_run: bool,
}

/// The number an item displays and its formatted label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedLabel {
    pub number: u32,
    pub text: String,
}

/// Next number to display, per indent level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedListCounters {
    next: BTreeMap<usize, u32>,
}

impl OrderedListCounters {
    /// Advances the machine by one item.
    ///
    /// A continuing item takes the stored counter; anything else restarts from
    /// the literal and forgets every deeper level.
    pub fn advance(mut self, item: OrderedItem) -> (OrderedLabel, Self) {
        let stored = item
            .continues_run
            .then(|| self.next.get(&item.level).copied())
            .flatten();
        let number = match stored {
            Some(n) => n,
            None => {
                self.next.retain(|&level, _| level <= item.level);
                item.literal
            }
        };
        self.next.insert(item.level, number.saturating_add(1));
        let text = NumberFormat::for_level(item.level).label(number);
        (OrderedLabel { number, text }, self)
    }

    /// Stored next value for `level`, if any.
    pub fn peek(&self, level: usize) -> Option<u32> {
        self.next.get(&level).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(level: usize, literal: u32, continues_run: bool) -> OrderedItem {
        OrderedItem {
            level,
            literal,
            continues_run,
        }
    }

    fn run(items: &[OrderedItem]) -> Vec<u32> {
        let mut state = OrderedListCounters::default();
        let mut out = vec![];
        for &i in items {
            let (label, next) = state.advance(i);
            out.push(label.number);
            state = next;
        }
        out
    }

    #[test]
    fn continuing_items_ignore_literal() {
        assert_eq!(
            run(&[item(0, 5, false), item(0, 1, true), item(0, 1, true)]),
            vec![5, 6, 7]
        );
    }

    #[test]
    fn restart_uses_literal() {
        assert_eq!(
            run(&[item(0, 1, false), item(0, 2, true), item(0, 9, false)]),
            vec![1, 2, 9]
        );
    }

    #[test]
    fn restart_clears_deeper_levels() {
        let state = OrderedListCounters::default();
        let (_, state) = state.advance(item(0, 1, false));
        let (_, state) = state.advance(item(1, 1, false));
        let (_, state) = state.advance(item(2, 1, false));
        assert_eq!(state.peek(2), Some(2));

        let (_, state) = state.advance(item(0, 2, false));
        assert_eq!(state.peek(0), Some(3));
        assert_eq!(state.peek(1), None);
        assert_eq!(state.peek(2), None);
    }

    #[test]
    fn label_uses_level_format() {
        let (label, _) = OrderedListCounters::default().advance(item(1, 3, false));
        assert_eq!(label.text, "③");
        assert_eq!(label.number, 3);
    }

    #[test]
    fn continue_without_stored_counter_falls_back_to_literal() {
        let (label, _) = OrderedListCounters::default().advance(item(2, 4, true));
        assert_eq!(label.number, 4);
        assert_eq!(label.text, "iv.");
    }
}
