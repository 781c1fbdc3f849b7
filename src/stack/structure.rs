
use super::error::StackError;

/// LIFO stack. Implemented internally as a vector whose "top" is at
/// the end, allowing for constant-time pushes and pops.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stack<T> {
  elements: Vec<T>,
}

impl<T> Stack<T> {

  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, element: T) {
    self.elements.push(element);
  }

  /// Removes and returns the top of the stack. On an empty stack,
  /// returns [`StackError::Empty`] and leaves the stack untouched.
  pub fn pop(&mut self) -> Result<T, StackError> {
    self.elements.pop().ok_or(StackError::Empty)
  }

  /// Returns the top of the stack without removing it.
  pub fn peek(&self) -> Result<&T, StackError> {
    let top = self.top_index()?;
    Ok(&self.elements[top])
  }

  pub fn size(&self) -> usize {
    self.elements.len()
  }

  /// Synonym for [`Stack::size`].
  pub fn len(&self) -> usize {
    self.size()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// Removes every element. Calling this on an empty stack is a
  /// no-op.
  pub fn clear(&mut self) {
    self.elements.clear();
  }

  /// Iterates from the bottom of the stack.
  pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
    self.elements.iter()
  }

  /// Index of the top element in the internal vector. Guaranteed
  /// in-bounds if `Ok`.
  fn top_index(&self) -> Result<usize, StackError> {
    self.elements.len().checked_sub(1).ok_or(StackError::Empty)
  }

}

impl<T> IntoIterator for Stack<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<Self::Item>;

  /// Iterates (by value) from the bottom of the stack.
  fn into_iter(self) -> Self::IntoIter {
    self.elements.into_iter()
  }
}

/// Converts a vector to a stack, where the top of the stack is at the
/// end.
impl<T> From<Vec<T>> for Stack<T> {
  fn from(elements: Vec<T>) -> Self {
    Self { elements }
  }
}

impl<T> Default for Stack<T> {

  fn default() -> Self {
    Self {
      elements: Vec::with_capacity(10),
    }
  }

}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::matches_ignore_case;

  use proptest::prelude::*;

  #[test]
  fn test_new_empty() {
    let empty_stack = Stack::<i32>::new();
    assert_eq!(empty_stack.size(), 0);
    assert!(empty_stack.is_empty());
    let empty_stack = Stack::<i32>::default();
    assert_eq!(empty_stack.size(), 0);
  }

  #[test]
  fn test_from_vec() {
    let stack1 = Stack::from(vec![0, 10, 20, 25]);
    let stack2 = {
      let mut stack2 = Stack::new();
      stack2.push(0);
      stack2.push(10);
      stack2.push(20);
      stack2.push(25);
      stack2
    };
    assert_eq!(stack2, stack1);
  }

  #[test]
  fn test_push_increments_size() {
    let mut stack = Stack::new();
    stack.push(1);
    assert_eq!(stack.size(), 1);
    assert_eq!(stack.len(), 1);
  }

  #[test]
  fn test_push_pop() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.pop(), Ok(2));
    assert_eq!(stack.size(), 1);
    assert_eq!(stack.pop(), Ok(1));
    assert_eq!(stack.pop(), Err(StackError::Empty));
  }

  #[test]
  fn test_pop_empty_message() {
    let mut stack = Stack::<i32>::new();
    let err = stack.pop().unwrap_err();
    assert!(matches_ignore_case(&err.to_string(), "empty"));
  }

  #[test]
  fn test_peek() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.peek(), Ok(&2));
    assert_eq!(stack.size(), 2);
  }

  #[test]
  fn test_peek_empty() {
    let stack = Stack::<i32>::new();
    let err = stack.peek().unwrap_err();
    assert_eq!(err, StackError::Empty);
    assert!(matches_ignore_case(&err.to_string(), "empty"));
  }

  #[test]
  fn test_is_empty() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());
    stack.push(1);
    assert!(!stack.is_empty());
  }

  #[test]
  fn test_size() {
    let stack = Stack::from(vec![1, 2]);
    assert_eq!(stack.size(), 2);
  }

  #[test]
  fn test_clear() {
    let mut stack = Stack::from(vec![1, 2]);
    stack.clear();
    assert!(stack.is_empty());
    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), Err(StackError::Empty));
    assert_eq!(stack.peek(), Err(StackError::Empty));
  }

  #[test]
  fn test_push_after_failed_pop() {
    let mut stack = Stack::new();
    assert!(stack.pop().is_err());
    assert_eq!(stack.size(), 0);
    stack.push("a");
    assert_eq!(stack.peek(), Ok(&"a"));
    assert_eq!(stack.pop(), Ok("a"));
  }

  #[test]
  fn test_iter_from_bottom() {
    let stack = Stack::from(vec![1, 2, 3]);
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(stack.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    assert_eq!(stack.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
  }

  proptest! {
    #[test]
    fn pops_come_back_in_reverse_order(items in prop::collection::vec(any::<i64>(), 0..64)) {
      let mut stack = Stack::new();
      for item in &items {
        stack.push(*item);
      }
      prop_assert_eq!(stack.size(), items.len());
      let mut popped = Vec::with_capacity(items.len());
      while let Ok(item) = stack.pop() {
        popped.push(item);
      }
      popped.reverse();
      prop_assert_eq!(popped, items);
      prop_assert_eq!(stack.size(), 0);
    }

    #[test]
    fn size_tracks_pushes_minus_successful_pops(ops in prop::collection::vec(any::<Option<u8>>(), 0..128)) {
      let mut stack = Stack::new();
      let mut expected = 0usize;
      for op in ops {
        match op {
          Some(value) => {
            stack.push(value);
            expected += 1;
          }
          None => {
            if stack.pop().is_ok() {
              expected -= 1;
            }
          }
        }
        prop_assert_eq!(stack.size(), expected);
        prop_assert_eq!(stack.is_empty(), expected == 0);
      }
    }
  }
}
