use crate::bail_empty;
use crate::error::Result;
use std::collections::VecDeque;

/// First-in first-out queue
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an element at the rear
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the element at the front
    pub fn dequeue(&mut self) -> Result<T> {
        match self.items.pop_front() {
            Some(item) => Ok(item),
            None => bail_empty!("queue"),
        }
    }

    /// Borrow the element at the front without removing it
    pub fn front(&self) -> Result<&T> {
        match self.items.front() {
            Some(item) => Ok(item),
            None => bail_empty!("queue"),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
