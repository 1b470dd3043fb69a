// content/count_up.rs

/// Counts from zero up to a target over a fixed duration
#[derive(Debug, Clone)]
pub struct CountUp {
    end: u64,
    duration: f32,
    elapsed: Option<f32>,
}

impl CountUp {
    /// Default count-up duration in seconds
    pub const DEFAULT_DURATION: f32 = 2.0;

    pub fn new(end: u64, duration: f32) -> Self {
        Self {
            end,
            duration,
            elapsed: None,
        }
    }

    /// Begin counting. Further calls do nothing.
    pub fn start(&mut self) {
        if self.elapsed.is_none() {
            self.elapsed = Some(0.0);
        }
    }

    #[cfg(test)]
    pub fn is_started(&self) -> bool {
        self.elapsed.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Advance by `dt` seconds. Ignored until started.
    pub fn tick(&mut self, dt: f32) {
        if let Some(elapsed) = self.elapsed.as_mut() {
            *elapsed += dt;
        }
    }

    /// Progress in [0, 1]
    pub fn progress(&self) -> f32 {
        match self.elapsed {
            None => 0.0,
            Some(_) if self.duration <= 0.0 => 1.0,
            Some(elapsed) => (elapsed / self.duration).min(1.0),
        }
    }

    /// Number to display right now
    pub fn value(&self) -> u64 {
        if self.is_finished() {
            return self.end;
        }
        (self.progress() as f64 * self.end as f64).floor() as u64
    }
}

/// Format with comma thousands separators: 1157 -> "1,157"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
