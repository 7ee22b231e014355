//! Day entries and the solver interface they carry

use std::fmt;

/// Interface implemented by every day solver
///
/// A solver receives the title it was registered under and may perform
/// arbitrary work, including printing. Any `Fn(&str) + Send + Sync` closure or
/// function item implements this trait through a blanket impl, so most tables
/// never name the trait directly.
///
/// # Example
///
/// ```
/// use aoc_dispatch::DaySolver;
///
/// struct Shout;
///
/// impl DaySolver for Shout {
///     fn solve(&self, title: &str) {
///         println!("{}!", title.to_uppercase());
///     }
/// }
///
/// Shout.solve("Not Quite Lisp");
/// ```
pub trait DaySolver: Send + Sync {
    /// Run the solver once
    ///
    /// # Arguments
    /// * `title` - The title stored alongside this solver in its table
    fn solve(&self, title: &str);
}

impl<F> DaySolver for F
where
    F: Fn(&str) + Send + Sync,
{
    fn solve(&self, title: &str) {
        self(title)
    }
}

/// One day of a year table: its title and the solver to run for it
///
/// Entries are immutable once built; title and behaviour always travel
/// together.
pub struct DayEntry {
    title: &'static str,
    solver: Box<dyn DaySolver>,
}

impl DayEntry {
    /// Create an entry from a title and any solver
    pub fn new<S>(title: &'static str, solver: S) -> Self
    where
        S: DaySolver + 'static,
    {
        Self {
            title,
            solver: Box::new(solver),
        }
    }

    /// The title this entry was registered with
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Invoke the solver with this entry's title
    pub fn solve(&self) {
        self.solver.solve(self.title)
    }
}

impl fmt::Debug for DayEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DayEntry")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
