use std::{fmt, str::FromStr};

use crate::{error::TreeError, util::stack::ensure_sufficient_stack};

/// An ordered n-ary tree that exclusively owns its value and its children.
///
/// There is no shared ownership and there are no parent pointers: every
/// mutating insert takes the new child by value. A subtree therefore can never
/// be attached below itself, because attaching it would require moving a tree
/// that is still borrowed through one of its own descendants. The compiler
/// rejects the attempt:
///
/// ```compile_fail
/// use turtle_logo::ast::Tree;
///
/// let mut root = Tree::new("root");
/// root.add_child(Tree::new("child"));
///
/// let child = root.child_mut(0).unwrap();
/// child.add_child(root); // `root` is still borrowed by `child`
/// ```
///
/// Equality is structural: two trees are equal when their values are equal,
/// they have the same number of children, and the children are pairwise equal
/// in order.
///
/// Comparing, cloning, formatting and dropping work at any depth, including
/// the long left spines that chained operators produce.
///
/// # Example
/// ```
/// use turtle_logo::ast::Tree;
///
/// let mut sum = Tree::new("+");
/// sum.add_children([Tree::new("a"), Tree::new("b")]);
///
/// assert_eq!(sum.to_string(), "+(a b)");
///
/// let described: Tree<String> = "+(a b)".parse().unwrap();
/// assert_eq!(described.map(&mut |v| v.len()), Tree::with_children(1, [Tree::new(1), Tree::new(1)]));
/// ```
pub struct Tree<V> {
    value:    V,
    children: Vec<Self>,
}

impl<V> Tree<V> {
    /// Creates a leaf holding `value`.
    pub const fn new(value: V) -> Self {
        Self { value,
               children: Vec::new() }
    }

    /// Creates a node holding `value` whose children are `children`, in
    /// order. Ownership of every child moves into the new node.
    pub fn with_children(value: V, children: impl IntoIterator<Item = Self>) -> Self {
        Self { value,
               children: children.into_iter().collect() }
    }

    /// The value stored at this node.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Replaces the value stored at this node.
    pub fn set_value(&mut self, value: V) {
        self.value = value;
    }

    /// The number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The child at `index`.
    ///
    /// # Errors
    /// `TreeError::NoSuchElement` when `index` is out of range.
    pub fn child(&self, index: usize) -> Result<&Self, TreeError> {
        let count = self.children.len();
        self.children
            .get(index)
            .ok_or(TreeError::NoSuchElement { index, count })
    }

    /// The child at `index`, mutably.
    ///
    /// # Errors
    /// `TreeError::NoSuchElement` when `index` is out of range.
    pub fn child_mut(&mut self, index: usize) -> Result<&mut Self, TreeError> {
        let count = self.children.len();
        self.children
            .get_mut(index)
            .ok_or(TreeError::NoSuchElement { index, count })
    }

    /// The first child, if any.
    pub fn first_child(&self) -> Option<&Self> {
        self.children.first()
    }

    /// The last child, if any.
    pub fn last_child(&self) -> Option<&Self> {
        self.children.last()
    }

    /// Iterates over the direct children in insertion order.
    ///
    /// Every call starts a fresh pass.
    pub fn children(&self) -> std::slice::Iter<'_, Self> {
        self.children.iter()
    }

    /// Returns a cursor over the direct children that can remove the child it
    /// last yielded from this node.
    pub const fn children_cursor(&mut self) -> ChildCursor<'_, V> {
        ChildCursor { children: &mut self.children,
                      next:     0,
                      current:  None, }
    }

    /// Appends `child` as the last child.
    pub fn add_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Inserts `child` so that it ends up at `index`, shifting later children
    /// to the right. `index` may equal the current child count.
    ///
    /// # Errors
    /// `TreeError::InvalidArgument` when `index` is past the end; the tree is
    /// left unchanged and the rejected child is dropped.
    pub fn add_child_at(&mut self, index: usize, child: Self) -> Result<(), TreeError> {
        if index > self.children.len() {
            return Err(TreeError::InvalidArgument { details: format!("cannot insert a child at index {index} of a node with {} children",
                                                                     self.children.len()), });
        }
        self.children.insert(index, child);
        Ok(())
    }

    /// Appends every tree in `children`, in order.
    pub fn add_children(&mut self, children: impl IntoIterator<Item = Self>) {
        self.children.extend(children);
    }

    /// Removes and returns the child at `index`.
    ///
    /// # Errors
    /// `TreeError::NoSuchElement` when `index` is out of range.
    pub fn remove_child(&mut self, index: usize) -> Result<Self, TreeError> {
        if index >= self.children.len() {
            return Err(TreeError::NoSuchElement { index,
                                                  count: self.children.len() });
        }
        Ok(self.children.remove(index))
    }

    /// Builds a tree of the same shape whose values are `f` applied to the
    /// values of this tree, visiting nodes in pre-order.
    pub fn map<U>(&self, f: &mut impl FnMut(&V) -> U) -> Tree<U> {
        ensure_sufficient_stack(|| {
            let value = f(&self.value);
            let children = self.children.iter().map(|child| child.map(f)).collect();
            Tree { value, children }
        })
    }

    fn project(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result
        where V: fmt::Display
    {
        ensure_sufficient_stack(|| {
            writeln!(f, "{:indent$}{}", "", self.value, indent = depth * 2)?;
            for child in &self.children {
                child.project(f, depth + 1)?;
            }
            Ok(())
        })
    }
}

/// A cursor over the direct children of a [`Tree`], created by
/// [`Tree::children_cursor`].
pub struct ChildCursor<'a, V> {
    children: &'a mut Vec<Tree<V>>,
    next:     usize,
    current:  Option<usize>,
}

impl<V> ChildCursor<'_, V> {
    /// Moves to the next child and returns it.
    pub fn advance(&mut self) -> Option<&Tree<V>> {
        let child = self.children.get(self.next)?;
        self.current = Some(self.next);
        self.next += 1;
        Some(child)
    }

    /// Removes the child most recently returned by [`advance`](Self::advance)
    /// from the parent node.
    ///
    /// # Errors
    /// `TreeError::NoSuchElement` when nothing has been yielded yet or the
    /// current child was already removed.
    pub fn remove(&mut self) -> Result<Tree<V>, TreeError> {
        let index = self.current
                        .take()
                        .ok_or(TreeError::NoSuchElement { index: self.next,
                                                          count: self.children.len() })?;
        self.next = index;
        Ok(self.children.remove(index))
    }
}

impl<V: fmt::Display> fmt::Display for Tree<V> {
    /// Writes the compact description `value(child child ...)`.
    ///
    /// The alternate form (`{:#}`) writes one value per line instead,
    /// indented two spaces per level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.project(f, 0);
        }
        ensure_sufficient_stack(|| {
            write!(f, "{}", self.value)?;
            if self.children.is_empty() {
                return Ok(());
            }
            f.write_str("(")?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{child}")?;
            }
            f.write_str(")")
        })
    }
}

impl<V: fmt::Debug> fmt::Debug for Tree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.debug_struct("Tree")
             .field("value", &self.value)
             .field("children", &self.children)
             .finish()
        })
    }
}

impl<V: Clone> Clone for Tree<V> {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Self { value:    self.value.clone(),
                                          children: self.children.clone(), })
    }
}

impl<V: PartialEq> PartialEq for Tree<V> {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| self.value == other.value && self.children == other.children)
    }
}

impl<V: Eq> Eq for Tree<V> {}

impl<V> Drop for Tree<V> {
    /// Drops descendants one at a time so that deep trees do not recurse.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}

impl FromStr for Tree<String> {
    type Err = TreeError;

    /// Reads a description such as `+(*(a b) c)`.
    ///
    /// Values are separated by spaces and parentheses, so a value can never
    /// itself contain a parenthesis.
    fn from_str(description: &str) -> Result<Self, Self::Err> {
        let mut pieces = split_description(description).into_iter().peekable();
        // nodes whose closing parenthesis has not been read yet, outermost first
        let mut open: Vec<Self> = Vec::new();

        loop {
            let mut node = match pieces.next() {
                Some("(" | ")") | None => {
                    return Err(TreeError::InvalidArgument { details: "expected a value in tree description".to_string(), });
                },
                Some(value) => Self::new(value.to_string()),
            };
            if pieces.next_if_eq(&"(").is_some() && pieces.next_if_eq(&")").is_none() {
                if pieces.peek().is_none() {
                    return Err(unclosed(&node));
                }
                open.push(node);
                continue;
            }

            // `node` is complete: attach it, closing every parent whose `)` follows
            loop {
                let Some(mut parent) = open.pop() else {
                    if let Some(leftover) = pieces.next() {
                        return Err(TreeError::InvalidArgument { details: format!("leftover text '{leftover}' in tree description"), });
                    }
                    return Ok(node);
                };
                parent.add_child(node);
                if pieces.next_if_eq(&")").is_some() {
                    node = parent;
                    continue;
                }
                if pieces.peek().is_none() {
                    return Err(unclosed(&parent));
                }
                open.push(parent);
                break;
            }
        }
    }
}

fn unclosed(node: &Tree<String>) -> TreeError {
    TreeError::InvalidArgument { details: format!("unclosed children of '{}' in tree description", node.value), }
}

fn split_description(description: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = None;
    for (i, c) in description.char_indices() {
        if c == ' ' || c == '(' || c == ')' {
            if let Some(begin) = start.take() {
                pieces.push(&description[begin..i]);
            }
            if c != ' ' {
                pieces.push(&description[i..=i]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(begin) = start {
        pieces.push(&description[begin..]);
    }
    pieces
}
