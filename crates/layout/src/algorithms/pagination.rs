pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Centralized logic to check if a block fits above the page's bottom limit.
///
/// * `cursor_y`: The current vertical cursor on the page.
/// * `block_height`: The height the next block needs.
/// * `limit_y`: The lowest y content may reach on this page.
pub fn check_fit(cursor_y: f32, block_height: f32, limit_y: f32) -> BreakAnalysis {
    let available = (limit_y - cursor_y).max(0.0);
    // Use a small epsilon to handle floating point inaccuracies
    const EPSILON: f32 = 0.01;
    BreakAnalysis {
        should_break: block_height > available + EPSILON,
        remaining_height: available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fit_does_not_break() {
        let a = check_fit(200.0, 70.0, 270.0);
        assert!(!a.should_break);
        assert_eq!(a.remaining_height, 70.0);
    }

    #[test]
    fn overflow_breaks() {
        assert!(check_fit(265.0, 8.0, 270.0).should_break);
    }

    #[test]
    fn cursor_past_limit_has_no_room() {
        let a = check_fit(280.0, 1.0, 270.0);
        assert!(a.should_break);
        assert_eq!(a.remaining_height, 0.0);
    }
}
