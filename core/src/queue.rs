use std::collections::VecDeque;

use crate::error::{GraphError, Result};

/// Anything a priority-mode [`Queue`] can order: a value carrying the
/// cumulative weight of the path that produced it.
pub trait PathLength {
    fn path_length(&self) -> f64;
}

/// Ordering discipline of a [`Queue`], fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueMode {
    /// Enqueue at the rear, dequeue from the front.
    Fifo,
    /// Keep items in ascending path-length order; equal lengths stay in
    /// insertion order.
    Priority,
}

/// A FIFO queue that can alternatively keep its items sorted by path length.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
    mode: QueueMode,
}

impl<T: PathLength> Queue<T> {
    pub fn new(mode: QueueMode) -> Self {
        Self {
            items: VecDeque::new(),
            mode,
        }
    }

    pub fn fifo() -> Self {
        Self::new(QueueMode::Fifo)
    }

    pub fn priority() -> Self {
        Self::new(QueueMode::Priority)
    }

    pub fn mode(&self) -> QueueMode {
        self.mode
    }

    pub fn enqueue(&mut self, item: T) {
        match self.mode {
            QueueMode::Fifo => self.items.push_back(item),
            QueueMode::Priority => {
                // Insert after every item that is not longer: ties stay FIFO.
                let len = item.path_length();
                let pos = self.items.partition_point(|queued| queued.path_length() <= len);
                self.items.insert(pos, item);
            }
        }
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(GraphError::EmptyQueue)
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn peek_rear(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// LIFO stack. Popping an empty stack yields `None`.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
