/// Output buffer with a hard byte capacity.
///
/// `capacity` counts a terminator slot, so at most `capacity - 1` bytes are
/// ever stored. `budget` starts at the same value and shrinks by one for every
/// directive marker consumed; value copies are clamped against it. A literal
/// `%` from `%%` is only bounded by the hard limit.
#[derive(Debug)]
pub(crate) struct BoundedBuf {
    out: String,
    limit: usize,
    budget: usize,
    truncated: bool,
}

impl BoundedBuf {
    pub(crate) fn new(capacity: usize) -> Self {
        let limit = capacity.saturating_sub(1);
        Self {
            out: String::with_capacity(limit),
            limit,
            budget: limit,
            truncated: false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.out.len()
    }

    /// Whether the scanner may keep consuming template input.
    pub(crate) fn has_room(&self) -> bool {
        !self.truncated && self.out.len() < self.budget
    }

    pub(crate) fn was_clamped(&self) -> bool {
        self.truncated
    }

    /// Account for a consumed `%` marker.
    pub(crate) fn charge_marker(&mut self) {
        self.budget = self.budget.saturating_sub(1);
    }

    /// Copy one literal template character.
    pub(crate) fn push_char(&mut self, c: char) {
        if self.out.len() + c.len_utf8() <= self.budget {
            self.out.push(c);
        } else {
            self.truncated = true;
        }
    }

    /// Write the `%` produced by `%%`.
    pub(crate) fn push_percent(&mut self) {
        if self.out.len() < self.limit {
            self.out.push('%');
        } else {
            self.truncated = true;
        }
    }

    /// Copy a substituted value, clamped to the remaining budget.
    pub(crate) fn push_value(&mut self, value: &str) {
        let room = self.budget.saturating_sub(self.out.len());
        if value.len() <= room {
            self.out.push_str(value);
            return;
        }

        let cut = floor_char_boundary(value, room);
        self.out.push_str(&value[..cut]);
        self.truncated = true;
    }

    pub(crate) fn into_string(self) -> String {
        self.out
    }
}

/// Largest index `<= max` that does not split a UTF-8 sequence.
fn floor_char_boundary(s: &str, max: usize) -> usize {
    (0..=max.min(s.len()))
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0)
}
