pub(super) type Link<T> = Option<Box<Node<T>>>;


pub(super) struct Node<T> {
    pub(super) value: T,
    pub(super) left:  Link<T>,
    pub(super) right: Link<T>,
}

impl<T> Node<T> {
    #[inline]
    #[must_use]
    pub(super) const fn leaf(value: T) -> Self {
        Self {
            value,
            left:  None,
            right: None,
        }
    }
}

/// Follow left links from `link` for as long as possible, and return the last link reached.
///
/// If `link` is `Some`, the returned link is `Some` and its node has no left child.
pub(super) fn leftmost_link<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }
    link
}

/// Detach the leftmost node of the subtree at `link`, splicing its right subtree into its place.
pub(super) fn take_leftmost<T>(link: &mut Link<T>) -> Option<Box<Node<T>>> {
    let slot = leftmost_link(link);
    let mut leftmost = slot.take()?;
    *slot = leftmost.right.take();
    Some(leftmost)
}

/// Build the subtree which replaces `removed` after its value is deleted.
///
/// Without a right child, the left subtree moves up. Otherwise, the minimum of the right subtree
/// (the in-order successor) is detached and takes the removed node's place, adopting both of its
/// remaining subtrees.
pub(super) fn promote_successor<T>(removed: Box<Node<T>>) -> (T, Link<T>) {
    let Node { value, left, mut right } = *removed;

    let replacement = match take_leftmost(&mut right) {
        None => left,
        Some(mut successor) => {
            successor.left = left;
            successor.right = right;
            Some(successor)
        }
    };

    (value, replacement)
}

/// Drop every node of the subtree at `link` without recursion.
pub(super) fn dismantle<T>(link: Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = link.into_iter().collect();

    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}
