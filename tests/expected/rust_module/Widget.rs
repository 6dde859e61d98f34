//! Widget, created as Widget.rs.

#[derive(Debug, Default)]
pub struct Widget;

impl Widget {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates() {
        let _ = Widget::new();
    }
}
