//! Stack of open tag names.

/// LIFO of open tag names. Its length is the current depth.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagStack {
    items: Vec<String>,
}

impl TagStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str) {
        self.items.push(name.to_owned());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Names from the outermost to the innermost open tag.
    pub fn into_names(self) -> Vec<String> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_is_lifo() {
        let mut stack = TagStack::new();
        stack.push("html");
        stack.push("body");
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop().as_deref(), Some("body"));
        assert_eq!(stack.pop().as_deref(), Some("html"));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn names_run_outermost_first() {
        let mut stack = TagStack::new();
        stack.push("a");
        stack.push("b");
        assert_eq!(stack.into_names(), vec!["a".to_string(), "b".to_string()]);
    }
}
