/// Chapter counters for heading levels 2 through 6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadingCounters {
    counts: [u32; 5],
}

impl HeadingCounters {
    /// Advances on a heading of `level` (1-6).
    ///
    /// `h1` resets everything and never gets a label. `hK` bumps its own
    /// counter and zeroes the deeper ones; its label is the dot-joined
    /// counters `h2..hK`, produced only when `numbering` is on.
    pub fn advance(mut self, level: u8, numbering: bool) -> (Option<String>, Self) {
        let depth = match level {
            2..=6 => (level - 2) as usize,
            _ => {
                self.counts = [0; 5];
                return (None, self);
            }
        };
        self.counts[depth] = self.counts[depth].saturating_add(1);
        for c in &mut self.counts[depth + 1..] {
            *c = 0;
        }
        let label = numbering.then(|| {
            let mut label = String::new();
            for c in &self.counts[..=depth] {
                label.push_str(&c.to_string());
                label.push('.');
            }
            label
        });
        (label, self)
    }
}
