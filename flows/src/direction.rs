//! Forward/back inference for page transitions.

#[cfg(test)]
#[path = "direction_test.rs"]
mod direction_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Back,
}

impl Direction {
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Back => "back",
        }
    }
}

/// Stack of visited location keys.
///
/// Seeing a new key pushes it (forward). Seeing a key already on the stack
/// truncates back to it; that is a back move unless it was already on top.
#[derive(Clone, Debug, Default)]
pub struct DirectionTracker {
    stack: Vec<String>,
}

impl DirectionTracker {
    pub fn observe(&mut self, key: &str) -> Direction {
        if let Some(index) = self.stack.iter().position(|k| k == key) {
            let is_back = index + 1 < self.stack.len();
            self.stack.truncate(index + 1);
            return if is_back { Direction::Back } else { Direction::Forward };
        }
        self.stack.push(key.to_owned());
        Direction::Forward
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
