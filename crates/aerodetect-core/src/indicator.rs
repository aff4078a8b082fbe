//! Binary loading indicator.

/// Visual state of the loading bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingIndicator {
    #[default]
    Idle,
    /// A submission is in flight
    Active,
}

impl LoadingIndicator {
    pub fn is_active(&self) -> bool {
        matches!(self, LoadingIndicator::Active)
    }

    /// Bar width in percent.
    pub fn width_pct(&self) -> u8 {
        match self {
            LoadingIndicator::Active => 100,
            LoadingIndicator::Idle => 0,
        }
    }

    pub fn opacity(&self) -> u8 {
        match self {
            LoadingIndicator::Active => 1,
            LoadingIndicator::Idle => 0,
        }
    }

    /// Inline style for the bar element.
    pub fn style(&self) -> String {
        format!("width: {}%; opacity: {};", self.width_pct(), self.opacity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles() {
        assert_eq!(LoadingIndicator::default(), LoadingIndicator::Idle);
        assert_eq!(LoadingIndicator::Idle.style(), "width: 0%; opacity: 0;");
        assert_eq!(LoadingIndicator::Active.style(), "width: 100%; opacity: 1;");
        assert!(LoadingIndicator::Active.is_active());
    }
}
