//! Root-to-node paths recorded by lookups.
//!
//! A [`PathTracker`] remembers which way each lookup turned on its way down. `delete` replays a
//! path left behind by `find` to reach the target's slot again without comparing keys.

/// One edge taken while descending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Left,
    Right,
}

/// The steps taken by the most recent lookup and whether it ended on a node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct PathTracker {
    steps: Vec<Step>,
    found: bool,
}

impl PathTracker {
    /// Forgets the previous lookup.
    pub(crate) fn clear(&mut self) {
        self.steps.clear();
        self.found = false;
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Marks the last step as ending on a node equal to the searched key.
    pub(crate) fn mark_found(&mut self) {
        self.found = true;
    }

    pub(crate) fn is_found(&self) -> bool {
        self.found
    }

    pub(crate) fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of edges descended.
    pub(crate) fn depth(&self) -> usize {
        self.steps.len()
    }
}
