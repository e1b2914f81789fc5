/// State of the block-comment tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentState {
    #[default]
    Normal,
    InBlockComment,
}

/// Swallows `/* ... */` spans that start a line, including spans that open
/// and close on different lines.
#[derive(Debug, Default)]
pub struct CommentBlockTracker {
    state: CommentState,
}

impl CommentBlockTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CommentState {
        self.state
    }

    /// Feeds one normalized line; returns true when the line is commented
    /// out and must be dropped.
    pub fn consume(&mut self, line: &str) -> bool {
        match self.state {
            CommentState::InBlockComment => {
                if line.starts_with("*/") || line.ends_with("*/") {
                    tracing::trace!("leaving block comment");
                    self.state = CommentState::Normal;
                }
                true
            }
            CommentState::Normal => {
                if !line.starts_with("/*") {
                    return false;
                }
                if !line.ends_with("*/") {
                    tracing::trace!("entering block comment");
                    self.state = CommentState::InBlockComment;
                }
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> Vec<bool> {
        let mut tracker = CommentBlockTracker::new();
        lines.iter().map(|l| tracker.consume(l)).collect()
    }

    #[test]
    fn ordinary_lines_pass() {
        assert_eq!(run(&["create table t (", "f_id int"]), vec![false, false]);
    }

    #[test]
    fn single_line_block_is_dropped() {
        let mut tracker = CommentBlockTracker::new();
        assert!(tracker.consume("/* one line */"));
        assert_eq!(tracker.state(), CommentState::Normal);
        assert!(!tracker.consume("f_id int"));
    }

    #[test]
    fn multi_line_block_swallows_everything() {
        let dropped = run(&[
            "/* begin",
            "create table t_hidden (",
            "f_secret int",
            "end */",
            "f_id int",
        ]);
        assert_eq!(dropped, vec![true, true, true, true, false]);
    }

    #[test]
    fn block_closed_by_leading_marker() {
        let dropped = run(&["/*", "anything", "*/ trailing text", "f_id int"]);
        assert_eq!(dropped, vec![true, true, true, false]);
    }

    #[test]
    fn empty_block_stays_normal() {
        let mut tracker = CommentBlockTracker::new();
        assert!(tracker.consume("/**/"));
        assert_eq!(tracker.state(), CommentState::Normal);
    }

    #[test]
    fn inline_comment_after_code_is_not_a_block() {
        assert_eq!(run(&["f_id int /* id */", "f_name text"]), vec![false, false]);
    }
}
