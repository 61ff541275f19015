/// Fixed-length input with an immutable original and a working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    original: Vec<i32>,
    working: Vec<i32>,
}

impl Sequence {
    #[must_use]
    pub fn new(values: Vec<i32>) -> Self {
        Self {
            working: values.clone(),
            original: values,
        }
    }

    #[must_use]
    pub fn original(&self) -> &[i32] {
        &self.original
    }

    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.working
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.working.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    pub fn restore(&mut self) {
        self.working.clone_from(&self.original);
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.working.swap(a, b);
    }

    /// Moves the value at `end` to `start`, shifting `start..end` one slot right.
    pub fn rotate_right(&mut self, start: usize, end: usize) {
        if start < end {
            self.working[start..=end].rotate_right(1);
        }
    }

    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.working.windows(2).all(|pair| pair[0] <= pair[1])
    }

    #[must_use]
    pub fn max_value(&self) -> i32 {
        self.original.iter().copied().max().unwrap_or(0)
    }
}
