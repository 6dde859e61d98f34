//! $itemname$, created as $fileinputname$.

#[derive(Debug, Default)]
pub struct $safeitemname$;

impl $safeitemname$ {
    pub fn new() -> Self {
        Self
    }
}
