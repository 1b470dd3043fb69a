// content/typewriter.rs

/// Reveals a string one character at a time
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    interval: f32,
    elapsed: f32,
    revealed: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, interval: f32) -> Self {
        Self {
            text: text.into(),
            interval,
            elapsed: 0.0,
            revealed: 0,
        }
    }

    /// Advance by `dt` seconds. Returns true if more text became visible.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.is_done() {
            return false;
        }

        self.elapsed += dt;
        let total = self.text.chars().count();
        let before = self.revealed;

        while self.elapsed >= self.interval && self.revealed < total {
            self.elapsed -= self.interval;
            self.revealed += 1;
        }

        self.revealed != before
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.text.chars().count()
    }

    /// Currently visible prefix
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.revealed) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}

/// On/off toggle with a fixed half-period, for text carets
#[derive(Debug, Clone)]
pub struct Blink {
    period: f32,
    elapsed: f32,
    on: bool,
}

impl Blink {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
            on: true,
        }
    }

    /// Advance by `dt` seconds. A non-positive period never toggles.
    pub fn tick(&mut self, dt: f32) {
        if self.period <= 0.0 {
            return;
        }

        self.elapsed += dt;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            self.on = !self.on;
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
