use crate::config;
use crate::donation::timers::{Effect, PendingTimers, TimerKind, TimerToken};

/// Rows of the bank details panel that can be copied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CopyField {
    Bank,
    Cooperative,
    Account,
    PixKey,
}

impl CopyField {
    pub fn value(self) -> &'static str {
        match self {
            CopyField::Bank => config::BANK_CODE,
            CopyField::Cooperative => config::COOPERATIVE,
            CopyField::Account => config::ACCOUNT,
            CopyField::PixKey => config::PIX_KEY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CopyField::Bank => "Banco",
            CopyField::Cooperative => "Cooperativa",
            CopyField::Account => "Conta",
            CopyField::PixKey => "Chave Pix (CNPJ)",
        }
    }

    pub fn copy_title(self) -> &'static str {
        match self {
            CopyField::Bank => "Copiar Banco",
            CopyField::Cooperative => "Copiar Agência",
            CopyField::Account => "Copiar Conta",
            CopyField::PixKey => "Copiar PIX",
        }
    }
}

/// The "copied" tick shown next to a row. Only one row shows it at a time.
#[derive(Debug)]
pub struct CopyFeedback {
    active: Option<CopyField>,
    clear_after_ms: u32,
    timers: PendingTimers,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(config::COPY_FEEDBACK_MS)
    }
}

impl CopyFeedback {
    pub fn new(clear_after_ms: u32) -> Self {
        Self {
            active: None,
            clear_after_ms,
            timers: PendingTimers::default(),
        }
    }

    pub fn active(&self) -> Option<CopyField> {
        self.active
    }

    pub fn is_active(&self, field: CopyField) -> bool {
        self.active == Some(field)
    }

    /// Marks `field` as just copied and restarts the clear timer.
    pub fn copied(&mut self, field: CopyField) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.active = Some(field);
        self.timers
            .arm(TimerKind::FeedbackClear, self.clear_after_ms, &mut effects);
        effects
    }

    /// Returns whether the feedback changed.
    pub fn elapsed(&mut self, token: TimerToken) -> bool {
        if self.timers.fire(token) {
            self.active = None;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.active = None;
        self.timers.disarm_all(&mut effects);
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(effects: &[Effect]) -> TimerToken {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::Schedule { token, delay_ms } => {
                    assert_eq!(*delay_ms, 2000);
                    Some(*token)
                }
                _ => None,
            })
            .expect("a clear timer is scheduled")
    }

    #[test]
    fn copying_the_account_shows_feedback_until_cleared() {
        assert_eq!(CopyField::Account.value(), "06909-8");

        let mut feedback = CopyFeedback::default();
        let token = scheduled(&feedback.copied(CopyField::Account));
        assert_eq!(feedback.active(), Some(CopyField::Account));

        assert!(feedback.elapsed(token));
        assert_eq!(feedback.active(), None);
    }

    #[test]
    fn copying_the_same_field_again_restarts_the_clear() {
        let mut feedback = CopyFeedback::default();
        let first = scheduled(&feedback.copied(CopyField::PixKey));

        let effects = feedback.copied(CopyField::PixKey);
        assert_eq!(effects[0], Effect::Cancel(first));
        let second = scheduled(&effects);

        // The first clear was superseded, so it must not hide the tick.
        assert!(!feedback.elapsed(first));
        assert!(feedback.is_active(CopyField::PixKey));
        assert!(feedback.elapsed(second));
        assert_eq!(feedback.active(), None);
    }

    #[test]
    fn a_different_field_replaces_the_active_one_immediately() {
        let mut feedback = CopyFeedback::default();
        let first = scheduled(&feedback.copied(CopyField::Bank));
        let second = scheduled(&feedback.copied(CopyField::Cooperative));

        assert!(!feedback.is_active(CopyField::Bank));
        assert!(feedback.is_active(CopyField::Cooperative));
        assert!(!feedback.elapsed(first));
        assert!(feedback.elapsed(second));
    }

    #[test]
    fn reset_cancels_the_pending_clear() {
        let mut feedback = CopyFeedback::default();
        let token = scheduled(&feedback.copied(CopyField::Bank));
        assert_eq!(feedback.reset(), vec![Effect::Cancel(token)]);
        assert_eq!(feedback.active(), None);
        assert!(!feedback.elapsed(token));
    }

    #[test]
    fn payment_values_match_the_published_details() {
        assert_eq!(CopyField::Bank.value(), "748");
        assert_eq!(CopyField::Cooperative.value(), "0221");
        assert_eq!(CopyField::PixKey.value(), "52.966.894/0001-72");
    }
}
