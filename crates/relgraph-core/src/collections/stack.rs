use crate::bail_empty;
use crate::error::Result;

/// Last-in first-out stack
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top element
    pub fn pop(&mut self) -> Result<T> {
        match self.items.pop() {
            Some(item) => Ok(item),
            None => bail_empty!("stack"),
        }
    }

    /// Borrow the top element without removing it
    pub fn peek(&self) -> Result<&T> {
        match self.items.last() {
            Some(item) => Ok(item),
            None => bail_empty!("stack"),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
