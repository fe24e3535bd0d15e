//! Identifier Allocator
//!
//! Names the locals of one generated function without colliding with the
//! function's own parameters.

use std::collections::HashSet;

/// Set of identifiers in use inside a single generated function.
///
/// An allocator is seeded with the parameter names of the function it serves
/// and dropped once that function is emitted. Allocated names stay reserved
/// for the allocator's lifetime.
#[derive(Debug, Clone, Default)]
pub struct IdentifierAllocator {
    taken: HashSet<String>,
}

impl IdentifierAllocator {
    pub fn new<I, S>(taken: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            taken: taken.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `want` if it is free, otherwise the first free name of
    /// `want_2`, `want_3`, ...
    pub fn allocate(&mut self, want: &str) -> String {
        if self.taken.insert(want.to_string()) {
            return want.to_string();
        }

        let mut counter = 2;
        let mut name = format!("{}_{}", want, counter);
        while self.taken.contains(&name) {
            counter += 1;
            name = format!("{}_{}", want, counter);
        }

        self.taken.insert(name.clone());
        name
    }

    pub fn is_taken(&self, name: &str) -> bool {
        self.taken.contains(name)
    }

    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}
