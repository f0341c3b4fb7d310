//! The automaton stack.
//!
//! A [`Stack`] is a persistent value: every operation returns a new stack
//! that shares its unchanged cells with the receiver, so a stack captured in
//! an earlier configuration never changes underneath its holder and cloning
//! one costs a reference count.

use super::symbol::StackOp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// One pushed symbol and everything beneath it.
struct Cell {
    symbol: char,
    below: Link,
}

type Link = Option<Arc<Cell>>;

/// Last-in-first-out store of stack symbols over a fixed bottom marker.
///
/// The bottom marker is always present and is never removed: popping it is
/// a no-op.
///
/// # Example
///
/// ```rust
/// use pushdown::core::Stack;
///
/// let stack = Stack::new('Z');
/// let pushed = stack.push('a').push('b');
///
/// assert_eq!(pushed.top(), 'b');
/// assert_eq!(pushed.render_top_down(), "baZ");
/// assert_eq!(pushed.pop().pop(), stack);
/// assert_eq!(stack.pop(), stack); // bottom marker stays
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "StackDocument", into = "StackDocument")]
pub struct Stack {
    bottom: char,
    top: Link,
    // symbols above the bottom marker
    depth: usize,
}

/// Serialized form: the bottom marker, then pushed symbols bottom-to-top.
#[derive(Serialize, Deserialize)]
struct StackDocument {
    bottom: char,
    above: Vec<char>,
}

impl Stack {
    /// Create a stack holding only the bottom marker.
    pub fn new(bottom: char) -> Self {
        Self {
            bottom,
            top: None,
            depth: 0,
        }
    }

    /// The bottom marker.
    pub fn bottom(&self) -> char {
        self.bottom
    }

    /// The current top; the bottom marker when nothing is pushed.
    pub fn top(&self) -> char {
        self.top.as_ref().map_or(self.bottom, |cell| cell.symbol)
    }

    /// Number of symbols, bottom marker included.
    pub fn len(&self) -> usize {
        self.depth + 1
    }

    /// Always `false`: the bottom marker cannot be removed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// True when only the bottom marker remains.
    pub fn holds_only_bottom(&self) -> bool {
        self.top.is_none()
    }

    /// Push a symbol, returning the new stack.
    pub fn push(&self, symbol: char) -> Self {
        let mut stack = self.clone();
        stack.push_in_place(symbol);
        stack
    }

    /// Pop the top, returning the new stack. No-op on the bottom marker.
    pub fn pop(&self) -> Self {
        let mut stack = self.clone();
        stack.pop_in_place();
        stack
    }

    /// Apply an action list left-to-right, returning the new stack.
    ///
    /// Pushing `[s1, s2, ..., sk]` leaves `sk` on top and `s1` deepest.
    ///
    /// ```rust
    /// use pushdown::core::{Stack, StackOp};
    ///
    /// let stack = Stack::new('Z').push('S');
    /// let expanded = stack.apply(&[
    ///     StackOp::Pop,
    ///     StackOp::Push('b'),
    ///     StackOp::Push('S'),
    ///     StackOp::Push('a'),
    /// ]);
    /// assert_eq!(expanded.render_top_down(), "aSbZ");
    /// ```
    pub fn apply(&self, actions: &[StackOp]) -> Self {
        let mut stack = self.clone();
        for action in actions {
            match action {
                StackOp::Pop => stack.pop_in_place(),
                StackOp::Push(symbol) => stack.push_in_place(*symbol),
            }
        }
        stack
    }

    /// Symbols from top to bottom.
    pub fn iter_top_down(&self) -> impl Iterator<Item = char> + '_ {
        let mut cell = self.top.as_deref();
        std::iter::from_fn(move || {
            let current = cell?;
            cell = current.below.as_deref();
            Some(current.symbol)
        })
        .chain(std::iter::once(self.bottom))
    }

    /// Symbols from bottom to top.
    pub fn iter_bottom_up(&self) -> impl Iterator<Item = char> {
        let mut symbols: Vec<char> = self.iter_top_down().collect();
        symbols.reverse();
        symbols.into_iter()
    }

    pub fn render_top_down(&self) -> String {
        self.iter_top_down().collect()
    }

    pub fn render_bottom_up(&self) -> String {
        self.iter_bottom_up().collect()
    }

    fn push_in_place(&mut self, symbol: char) {
        let below = self.top.take();
        self.top = Some(Arc::new(Cell { symbol, below }));
        self.depth += 1;
    }

    fn pop_in_place(&mut self) {
        if let Some(cell) = self.top.take() {
            self.top = cell.below.clone();
            self.depth -= 1;
        }
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("bottom", &self.bottom)
            .field("top_down", &self.render_top_down())
            .finish()
    }
}

impl PartialEq for Stack {
    fn eq(&self, other: &Self) -> bool {
        if self.bottom != other.bottom || self.depth != other.depth {
            return false;
        }
        match (&self.top, &other.top) {
            (Some(a), Some(b)) if Arc::ptr_eq(a, b) => true,
            _ => self.iter_top_down().eq(other.iter_top_down()),
        }
    }
}

impl Eq for Stack {}

impl Hash for Stack {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.depth.hash(state);
        for symbol in self.iter_top_down() {
            symbol.hash(state);
        }
    }
}

// Unlink cell by cell so that dropping a deep stack does not recurse.
impl Drop for Stack {
    fn drop(&mut self) {
        let mut link = self.top.take();
        while let Some(cell) = link {
            match Arc::try_unwrap(cell) {
                Ok(mut owned) => link = owned.below.take(),
                Err(_) => break,
            }
        }
    }
}

impl From<StackDocument> for Stack {
    fn from(document: StackDocument) -> Self {
        let mut stack = Stack::new(document.bottom);
        for symbol in document.above {
            stack.push_in_place(symbol);
        }
        stack
    }
}

impl From<Stack> for StackDocument {
    fn from(stack: Stack) -> Self {
        let mut above: Vec<char> = stack.iter_top_down().collect();
        // drop the bottom marker, then read upwards
        above.pop();
        above.reverse();
        StackDocument {
            bottom: stack.bottom,
            above,
        }
    }
}

/// Renders top-to-bottom.
impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.iter_top_down() {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
