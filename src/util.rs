use std::cmp::Ordering;

/// Outcome of a recursive insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Insertion {
    /// A new leaf was linked into the tree.
    Inserted,
    /// An equal value was already stored so nothing changed.
    Duplicate,
}

impl From<Insertion> for bool {
    fn from(outcome: Insertion) -> Self {
        outcome == Insertion::Inserted
    }
}

/// Outcome of a recursive remove.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Removal {
    /// A node was unlinked (or had its value replaced by its predecessor's).
    Removed,
    /// The value wasn't found so nothing was removed.
    NotFound,
}

impl From<Removal> for bool {
    fn from(outcome: Removal) -> Self {
        outcome == Removal::Removed
    }
}

/// Read access to a node plus the ability to sever its children. Both trees implement this for
/// their `Node` so searching, traversing, and tearing down are written once.
pub(crate) trait Branch: Sized {
    type Value;

    fn value(&self) -> &Self::Value;
    fn left(&self) -> Option<&Self>;
    fn right(&self) -> Option<&Self>;

    /// Takes both children out of this node, leaving it a leaf.
    fn detach(&mut self) -> [Option<Box<Self>>; 2];
}

pub(crate) fn contains<N>(mut node: Option<&N>, value: &N::Value) -> bool
where
    N: Branch,
    N::Value: Ord,
{
    while let Some(n) = node {
        node = match value.cmp(n.value()) {
            Ordering::Less => n.left(),
            Ordering::Equal => return true,
            Ordering::Greater => n.right(),
        };
    }
    false
}

/// Left subtree, then the node, then the right subtree.
pub(crate) fn in_order<'a, N: Branch>(node: Option<&'a N>, out: &mut Vec<&'a N::Value>) {
    if let Some(n) = node {
        in_order(n.left(), out);
        out.push(n.value());
        in_order(n.right(), out);
    }
}

/// The node, then the left subtree, then the right subtree.
pub(crate) fn pre_order<'a, N: Branch>(node: Option<&'a N>, out: &mut Vec<&'a N::Value>) {
    if let Some(n) = node {
        out.push(n.value());
        pre_order(n.left(), out);
        pre_order(n.right(), out);
    }
}

/// Left subtree, then the right subtree, then the node.
pub(crate) fn post_order<'a, N: Branch>(node: Option<&'a N>, out: &mut Vec<&'a N::Value>) {
    if let Some(n) = node {
        post_order(n.left(), out);
        post_order(n.right(), out);
        out.push(n.value());
    }
}

/// Runs one of the collectors above from `root` and clones out the values.
pub(crate) fn snapshot<'a, N, F>(root: Option<&'a N>, visit: F) -> Vec<N::Value>
where
    N: Branch + 'a,
    N::Value: Clone,
    F: FnOnce(Option<&'a N>, &mut Vec<&'a N::Value>),
{
    let mut out = Vec::new();
    visit(root, &mut out);
    out.into_iter().cloned().collect()
}

/// Returns whether every node under `node` has children whose heights differ by at most one,
/// along with the height of `node` itself (`-1` for an empty subtree).
pub(crate) fn balanced_height<N: Branch>(node: Option<&N>) -> (bool, i32) {
    match node {
        None => (true, -1),
        Some(n) => {
            let (left_balanced, left_height) = balanced_height(n.left());
            let (right_balanced, right_height) = balanced_height(n.right());

            let balanced =
                left_balanced && right_balanced && (left_height - right_height).abs() <= 1;
            (balanced, 1 + left_height.max(right_height))
        }
    }
}

pub(crate) fn min<N: Branch>(mut node: &N) -> &N::Value {
    while let Some(left) = node.left() {
        node = left;
    }
    node.value()
}

pub(crate) fn max<N: Branch>(mut node: &N) -> &N::Value {
    while let Some(right) = node.right() {
        node = right;
    }
    node.value()
}

/// Drops a whole subtree using a work stack instead of recursion so a degenerate (list shaped)
/// tree can't blow the stack.
pub(crate) fn teardown<N: Branch>(root: Option<Box<N>>) {
    let mut stack: Vec<Box<N>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        let [left, right] = node.detach();
        stack.extend(left);
        stack.extend(right);
        // `node` has no children left so dropping it here doesn't recurse.
    }
}
