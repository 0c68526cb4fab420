//! Conditional mutation inside a method chain.

/// Runs a closure against a container when a condition holds.
///
/// `When` takes the container by value, lends it mutably to the chosen
/// closure and hands it back, so a chain can branch without breaking.
///
/// ```
/// use standout_collect::{Arr, Key, Operations, Writable};
///
/// let verbose = true;
/// let flags = Arr::new()
///     .when()
///     .is(verbose, |flags| flags.set("on".into(), Key::from("verbose")));
/// assert_eq!(flags.len(), 1);
/// ```
pub struct When<C> {
    container: C,
}

impl<C> When<C> {
    pub fn new(container: C) -> Self {
        When { container }
    }

    /// Runs `then` if `condition` holds.
    pub fn is<F>(self, condition: bool, then: F) -> C
    where
        F: FnOnce(&mut C),
    {
        self.is_else(condition, then, |_| {})
    }

    /// Runs `then` if `condition` holds, `otherwise` if not.
    pub fn is_else<F, G>(mut self, condition: bool, then: F, otherwise: G) -> C
    where
        F: FnOnce(&mut C),
        G: FnOnce(&mut C),
    {
        if condition {
            then(&mut self.container);
        } else {
            otherwise(&mut self.container);
        }
        self.container
    }

    /// Runs `then` unless `condition` holds.
    pub fn unless<F>(self, condition: bool, then: F) -> C
    where
        F: FnOnce(&mut C),
    {
        self.is_else(!condition, then, |_| {})
    }

    /// Runs `then` unless `condition` holds, `otherwise` if it does.
    pub fn unless_else<F, G>(self, condition: bool, then: F, otherwise: G) -> C
    where
        F: FnOnce(&mut C),
        G: FnOnce(&mut C),
    {
        self.is_else(!condition, then, otherwise)
    }
}
