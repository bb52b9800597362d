//! Derived State
//!
//! Progress ratio, empty-state layout and the celebration trigger.

use crate::config::CelebrationPolicy;

/// Completion ratio of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Percentage in `[0, 100]`; an empty list is 0
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }

    /// Counter text, e.g. `"2 / 3"`
    pub fn counter(&self) -> String {
        format!("{} / {}", self.completed, self.total)
    }

    /// CSS width for the progress bar fill
    pub fn bar_width(&self) -> String {
        format!("width: {}%;", self.percent())
    }

    pub fn all_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Layout derived from list size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub show_placeholder: bool,
    pub container_width: &'static str,
}

impl Layout {
    pub fn from_len(len: usize) -> Self {
        if len == 0 {
            Self { show_placeholder: true, container_width: "50%" }
        } else {
            Self { show_placeholder: false, container_width: "100%" }
        }
    }
}

/// Decides whether a progress recomputation fires the celebration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CelebrationGate {
    policy: CelebrationPolicy,
    was_complete: bool,
}

impl CelebrationGate {
    pub fn new(policy: CelebrationPolicy) -> Self {
        Self { policy, was_complete: false }
    }

    /// Feed one recomputation; returns `true` if the effect should run.
    pub fn observe(&mut self, progress: &Progress) -> bool {
        let complete = progress.all_complete();
        let fire = match self.policy {
            CelebrationPolicy::EveryRecompute => complete,
            CelebrationPolicy::OncePerTransition => complete && !self.was_complete,
        };
        self.was_complete = complete;
        fire
    }
}

impl Default for CelebrationGate {
    fn default() -> Self {
        Self::new(CelebrationPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_progress() {
        let p = Progress::new(2, 3);
        assert!((p.percent() - 66.67).abs() < 0.01);
        assert_eq!(p.counter(), "2 / 3");
        assert!(!p.all_complete());
    }

    #[test]
    fn test_empty_progress() {
        let p = Progress::new(0, 0);
        assert_eq!(p.percent(), 0.0);
        assert_eq!(p.counter(), "0 / 0");
        assert_eq!(p.bar_width(), "width: 0%;");
        assert!(!p.all_complete());
    }

    #[test]
    fn test_full_progress() {
        let p = Progress::new(4, 4);
        assert_eq!(p.percent(), 100.0);
        assert_eq!(p.bar_width(), "width: 100%;");
        assert!(p.all_complete());
    }

    #[test]
    fn test_layout() {
        assert_eq!(Layout::from_len(0), Layout { show_placeholder: true, container_width: "50%" });
        assert_eq!(Layout::from_len(3), Layout { show_placeholder: false, container_width: "100%" });
    }

    #[test]
    fn test_gate_never_fires_on_empty() {
        for policy in [CelebrationPolicy::EveryRecompute, CelebrationPolicy::OncePerTransition] {
            let mut gate = CelebrationGate::new(policy);
            assert!(!gate.observe(&Progress::new(0, 0)));
            assert!(!gate.observe(&Progress::new(0, 0)));
        }
    }

    #[test]
    fn test_gate_once_per_transition() {
        let mut gate = CelebrationGate::new(CelebrationPolicy::OncePerTransition);

        assert!(!gate.observe(&Progress::new(1, 2)));
        assert!(gate.observe(&Progress::new(2, 2)));
        // Still all-complete (e.g. an edit commit): no repeat
        assert!(!gate.observe(&Progress::new(2, 2)));
        // Toggle one off and back on: a new transition
        assert!(!gate.observe(&Progress::new(1, 2)));
        assert!(gate.observe(&Progress::new(2, 2)));
    }

    #[test]
    fn test_gate_every_recompute() {
        let mut gate = CelebrationGate::new(CelebrationPolicy::EveryRecompute);

        assert!(gate.observe(&Progress::new(2, 2)));
        assert!(gate.observe(&Progress::new(2, 2)));
        assert!(!gate.observe(&Progress::new(1, 2)));
    }

    #[test]
    fn test_gate_fires_on_restored_complete_list() {
        let mut gate = CelebrationGate::default();
        assert!(gate.observe(&Progress::new(3, 3)));
    }
}
