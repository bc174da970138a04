//! Freedom level classification

/// Coarse bucket of a 0..=100 freedom score, used to color the freedom bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreedomTier {
    High,
    Medium,
    Low,
}

impl FreedomTier {
    /// # Examples
    /// ```
    /// use licensetui::logic::freedom::FreedomTier;
    ///
    /// assert_eq!(FreedomTier::from_level(95), FreedomTier::High);
    /// assert_eq!(FreedomTier::from_level(75), FreedomTier::Medium);
    /// assert_eq!(FreedomTier::from_level(70), FreedomTier::Low);
    /// ```
    pub fn from_level(level: u8) -> Self {
        if level >= 90 {
            FreedomTier::High
        } else if level >= 75 {
            FreedomTier::Medium
        } else {
            FreedomTier::Low
        }
    }
}

/// Number of filled cells for a bar `width` cells wide, rounded to nearest
///
/// # Examples
/// ```
/// use licensetui::logic::freedom::filled_cells;
///
/// assert_eq!(filled_cells(50, 20), 10);
/// assert_eq!(filled_cells(95, 20), 19);
/// assert_eq!(filled_cells(100, 7), 7);
/// ```
pub fn filled_cells(level: u8, width: u16) -> u16 {
    let level = u32::from(level.min(100));
    ((level * u32::from(width) + 50) / 100) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(FreedomTier::from_level(100), FreedomTier::High);
        assert_eq!(FreedomTier::from_level(90), FreedomTier::High);
        assert_eq!(FreedomTier::from_level(89), FreedomTier::Medium);
        assert_eq!(FreedomTier::from_level(74), FreedomTier::Low);
        assert_eq!(FreedomTier::from_level(0), FreedomTier::Low);
    }

    #[test]
    fn test_filled_cells_bounds() {
        assert_eq!(filled_cells(0, 30), 0);
        assert_eq!(filled_cells(100, 30), 30);
        assert_eq!(filled_cells(100, 0), 0);
    }
}
