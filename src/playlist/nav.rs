/// Enabled state of the Back / Forward buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButtons {
    pub back: bool,
    pub forward: bool,
}

impl NavButtons {
    /// With fewer than two tracks nothing can be navigated. With no selection
    /// both directions are offered; otherwise the ends disable their side.
    pub fn compute(len: usize, selected: Option<usize>) -> Self {
        if len <= 1 {
            return Self {
                back: false,
                forward: false,
            };
        }
        match selected {
            None => Self {
                back: true,
                forward: true,
            },
            Some(idx) => Self {
                back: idx != 0,
                forward: idx != len - 1,
            },
        }
    }
}
