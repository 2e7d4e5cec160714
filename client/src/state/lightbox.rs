//! Image lightbox navigation.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxItem {
    pub src: String,
    pub caption: String,
}

/// Keyboard commands understood while the lightbox is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Next,
    Previous,
}

impl LightboxKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(Self::Close),
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Lightbox {
    items: Vec<LightboxItem>,
    current: Option<usize>,
}

impl Lightbox {
    pub fn new(items: Vec<LightboxItem>) -> Self {
        Self { items, current: None }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&LightboxItem> {
        self.current.and_then(|index| self.items.get(index))
    }

    /// Open at `index`. Out-of-range indices leave the lightbox unchanged.
    pub fn open(&mut self, index: usize) -> Option<&LightboxItem> {
        if index >= self.items.len() {
            return None;
        }
        self.current = Some(index);
        self.items.get(index)
    }

    /// Close. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Step forward with wrap-around. No-op while closed.
    pub fn next(&mut self) -> Option<&LightboxItem> {
        self.step(1)
    }

    /// Step backward with wrap-around. No-op while closed.
    pub fn previous(&mut self) -> Option<&LightboxItem> {
        self.step(self.items.len().saturating_sub(1))
    }

    /// Apply a key command. Returns whether anything changed.
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            LightboxKey::Close => self.close(),
            LightboxKey::Next => self.next().is_some(),
            LightboxKey::Previous => self.previous().is_some(),
        }
    }

    fn step(&mut self, offset: usize) -> Option<&LightboxItem> {
        let index = self.current?;
        let next = (index + offset) % self.items.len();
        self.current = Some(next);
        self.items.get(next)
    }
}
