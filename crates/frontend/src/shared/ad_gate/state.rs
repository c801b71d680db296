//! Ad gate state machine: `Counting(n) → [PostAd] → Download`.
//!
//! The gate holds no timer. Whoever owns it calls [`AdGate::tick`] once per
//! elapsed second while it is open, so the countdown can be driven by a real
//! interval in the browser and by plain calls in tests.

use contracts::domain::a001_catalog::Program;

pub const AD_COUNTDOWN_SECS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStep {
    /// Seconds left before the ad can be skipped.
    Counting(u32),
    /// Waiting for the visitor to open the post-ad link.
    PostAd,
    /// The real download link is available.
    Download,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdGate {
    countdown: u32,
    open: bool,
    step: GateStep,
    download_url: String,
    post_ad_url: Option<String>,
}

impl Default for AdGate {
    fn default() -> Self {
        Self::with_countdown(AD_COUNTDOWN_SECS)
    }
}

impl AdGate {
    pub fn with_countdown(countdown: u32) -> Self {
        Self {
            countdown,
            open: false,
            step: GateStep::Counting(countdown),
            download_url: String::new(),
            post_ad_url: None,
        }
    }

    /// Opens the gate for `program`, discarding whatever an earlier program left behind.
    pub fn open_for(&mut self, program: &Program) {
        self.open = true;
        self.download_url = program.download_url.clone();
        self.post_ad_url = program.post_ad_link().map(str::to_owned);
        self.step = GateStep::Counting(self.countdown);
        if self.countdown == 0 {
            self.step = self.after_countdown();
        }
    }

    fn after_countdown(&self) -> GateStep {
        if self.post_ad_url.is_some() {
            GateStep::PostAd
        } else {
            GateStep::Download
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn step(&self) -> GateStep {
        self.step
    }

    pub fn is_counting(&self) -> bool {
        self.open && matches!(self.step, GateStep::Counting(_))
    }

    pub fn remaining(&self) -> u32 {
        match self.step {
            GateStep::Counting(n) => n,
            _ => 0,
        }
    }

    pub fn post_ad_url(&self) -> Option<&str> {
        self.post_ad_url.as_deref()
    }

    /// One elapsed second. No effect unless the gate is open and counting.
    pub fn tick(&mut self) -> GateStep {
        if let (true, GateStep::Counting(n)) = (self.open, self.step) {
            self.step = if n > 1 {
                GateStep::Counting(n - 1)
            } else {
                self.after_countdown()
            };
        }
        self.step
    }

    pub fn advance(&mut self, seconds: u32) -> GateStep {
        for _ in 0..seconds {
            self.tick();
        }
        self.step
    }

    /// Moves on to the download step and returns the link the caller should
    /// open in a new tab. Whether that page loads does not matter.
    pub fn visit_post_ad(&mut self) -> Option<String> {
        if !self.open || self.step != GateStep::PostAd {
            return None;
        }
        self.step = GateStep::Download;
        self.post_ad_url.clone()
    }

    /// Hands out the download link once and closes the gate.
    pub fn take_download(&mut self) -> Option<String> {
        if !self.open || self.step != GateStep::Download {
            return None;
        }
        self.open = false;
        Some(self.download_url.clone())
    }

    pub fn can_dismiss(&self) -> bool {
        self.open && !matches!(self.step, GateStep::Counting(_))
    }

    /// Closes the gate unless the countdown is still running.
    pub fn dismiss(&mut self) -> bool {
        if self.can_dismiss() {
            self.open = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(post_ad: Option<&str>) -> Program {
        let mut program = Program::new_placeholder();
        program.download_url = "https://dl.example.com/app.zip".into();
        program.post_ad_url = post_ad.map(str::to_owned);
        program
    }

    #[test]
    fn test_open_starts_counting_from_twenty() {
        let mut gate = AdGate::default();
        assert!(!gate.is_open());
        gate.open_for(&program(None));
        assert!(gate.is_open());
        assert_eq!(gate.step(), GateStep::Counting(20));
    }

    #[test]
    fn test_countdown_without_post_ad_reaches_download() {
        let mut gate = AdGate::default();
        gate.open_for(&program(None));
        assert_eq!(gate.advance(19), GateStep::Counting(1));
        assert_eq!(gate.tick(), GateStep::Download);
        assert_eq!(gate.take_download().as_deref(), Some("https://dl.example.com/app.zip"));
        assert!(!gate.is_open());
        assert_eq!(gate.take_download(), None);
    }

    #[test]
    fn test_post_ad_waits_for_visit() {
        let mut gate = AdGate::default();
        gate.open_for(&program(Some("https://post.example.com")));
        assert_eq!(gate.advance(20), GateStep::PostAd);
        assert_eq!(gate.advance(100), GateStep::PostAd);
        assert_eq!(gate.take_download(), None);

        assert_eq!(gate.visit_post_ad().as_deref(), Some("https://post.example.com"));
        assert_eq!(gate.step(), GateStep::Download);
        assert_eq!(gate.visit_post_ad(), None);
    }

    #[test]
    fn test_blank_post_ad_link_is_skipped() {
        let mut gate = AdGate::default();
        gate.open_for(&program(Some("  ")));
        assert_eq!(gate.advance(20), GateStep::Download);
    }

    #[test]
    fn test_dismiss_blocked_while_counting() {
        let mut gate = AdGate::default();
        gate.open_for(&program(None));
        gate.advance(5);
        let before = gate.clone();
        assert!(!gate.can_dismiss());
        assert!(!gate.dismiss());
        assert_eq!(gate, before);

        gate.advance(15);
        assert!(gate.dismiss());
        assert!(!gate.is_open());
    }

    #[test]
    fn test_closed_gate_does_not_count() {
        let mut gate = AdGate::default();
        gate.open_for(&program(Some("https://post.example.com")));
        gate.advance(20);
        gate.dismiss();
        let closed = gate.clone();
        gate.advance(3);
        assert_eq!(gate, closed);
        assert!(!gate.is_counting());
    }

    #[test]
    fn test_reopen_resets_state() {
        let mut gate = AdGate::default();
        gate.open_for(&program(Some("https://post.example.com")));
        gate.advance(20);
        gate.visit_post_ad();
        gate.dismiss();

        gate.open_for(&program(None));
        assert_eq!(gate.step(), GateStep::Counting(20));
        assert_eq!(gate.post_ad_url(), None);
    }

    #[test]
    fn test_zero_countdown_opens_past_counting() {
        let mut gate = AdGate::with_countdown(0);
        gate.open_for(&program(None));
        assert_eq!(gate.step(), GateStep::Download);
    }
}
