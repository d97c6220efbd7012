//! Indentation Stack
//!
//! Nested regions request one more level on entry and give it back on
//! exit, but a level is only added when the previous one was actually
//! written out. If an enclosing region already added a level that has
//! not been used yet, the inner region takes that level over instead of
//! stacking another, and the enclosing region's record is cleared so the
//! level is given back exactly once.

#[derive(Debug, Default)]
pub(crate) struct IndentStack {
    /// Current level
    level: usize,
    /// Level of the last indentation written out
    last_level: usize,
    /// Whether each open region really incremented `level`
    incs: Vec<bool>,
}

impl IndentStack {
    #[cfg(test)]
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn increase(&mut self) {
        let inc = if self.level <= self.last_level {
            self.level += 1;
            true
        } else {
            match self.incs.last_mut() {
                Some(last) if *last => {
                    *last = false;
                    true
                }
                _ => false,
            }
        };
        self.incs.push(inc);
    }

    pub fn decrease(&mut self) {
        if self.incs.pop() == Some(true) {
            self.level -= 1;
        }
    }

    /// Temporarily indent one level deeper, bypassing the stack. Used for
    /// comments that precede a closing keyword.
    pub fn raise(&mut self) {
        self.level += 1;
    }

    pub fn lower(&mut self) {
        self.level -= 1;
    }

    /// Record that the current level is being written out and return it.
    pub fn mark_used(&mut self) -> usize {
        self.last_level = self.level;
        self.level
    }
}
