//! State machine behind the "Dados Bancários" panel in the footer.
//!
//! The machine is plain data: it takes an [`Input`], updates itself and
//! returns the [`Effect`]s the view has to perform (arm or cancel a timeout,
//! attach or drop the document-level outside-pointer listener). Nothing in
//! here touches the DOM, so every transition can be driven from a unit test.

use log::debug;

use crate::config::DisclosureConfig;
use crate::donation::timers::{Effect, PendingTimers, TimerKind, TimerToken};
use crate::donation::viewport::ViewportClass;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    TriggerEnter,
    TriggerLeave,
    PanelEnter,
    PanelLeave,
    TriggerTap,
    PanelTap,
    EnteredViewport,
    LeftViewport,
    OutsidePointer,
    ViewportChanged(ViewportClass),
    Elapsed(TimerToken),
    Unmount,
}

#[derive(Debug)]
pub struct Disclosure {
    config: DisclosureConfig,
    viewport: ViewportClass,
    visibility: Visibility,
    locked: bool,
    timers: PendingTimers,
}

impl Disclosure {
    pub fn new(config: DisclosureConfig, viewport: ViewportClass) -> Self {
        Self {
            config,
            viewport,
            visibility: Visibility::Hidden,
            locked: false,
            timers: PendingTimers::default(),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Set by an explicit tap; keeps the auto-close timer from hiding the panel.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn handle(&mut self, input: Input) -> Vec<Effect> {
        let mut effects = Vec::new();
        let wide = self.viewport == ViewportClass::Wide;

        match input {
            Input::TriggerEnter if wide => {
                self.timers.disarm(TimerKind::HoverGrace, &mut effects);
                self.show(&mut effects);
            }
            Input::PanelEnter if wide => {
                self.timers.disarm(TimerKind::HoverGrace, &mut effects);
            }
            Input::TriggerLeave | Input::PanelLeave if wide => {
                if self.is_visible() {
                    self.timers
                        .arm(TimerKind::HoverGrace, self.config.hover_grace_ms, &mut effects);
                }
            }
            Input::TriggerTap if !wide => {
                self.disarm_auto(&mut effects);
                if self.is_visible() {
                    self.hide(&mut effects);
                } else {
                    self.show(&mut effects);
                    self.locked = true;
                }
            }
            Input::PanelTap if !wide => {
                self.disarm_auto(&mut effects);
                self.show(&mut effects);
                self.locked = true;
            }
            Input::EnteredViewport => {
                if !wide && !self.is_visible() {
                    self.timers
                        .arm(TimerKind::AutoOpen, self.config.auto_open_ms, &mut effects);
                }
            }
            Input::LeftViewport | Input::Unmount => {
                self.timers.disarm_all(&mut effects);
                self.hide(&mut effects);
            }
            Input::OutsidePointer => {
                if self.is_visible() {
                    self.timers.disarm_all(&mut effects);
                    self.hide(&mut effects);
                }
            }
            Input::ViewportChanged(class) => {
                if class != self.viewport {
                    debug!("donation panel: viewport is now {:?}", class);
                    self.viewport = class;
                    // Timers armed under the other interaction rules no longer apply.
                    match class {
                        ViewportClass::Narrow => {
                            self.timers.disarm(TimerKind::HoverGrace, &mut effects)
                        }
                        ViewportClass::Wide => self.disarm_auto(&mut effects),
                    }
                }
            }
            Input::Elapsed(token) => {
                if self.timers.fire(token) {
                    self.on_elapsed(token.kind(), &mut effects);
                } else {
                    debug!("donation panel: ignoring stale {:?} timer", token.kind());
                }
            }
            // Hover input on narrow screens and taps on wide ones.
            _ => {}
        }

        effects
    }

    fn on_elapsed(&mut self, kind: TimerKind, effects: &mut Vec<Effect>) {
        match kind {
            TimerKind::AutoOpen => {
                self.show(effects);
                self.timers
                    .arm(TimerKind::AutoClose, self.config.auto_close_ms, effects);
            }
            TimerKind::AutoClose => {
                if !self.locked {
                    self.hide(effects);
                }
            }
            TimerKind::HoverGrace => self.hide(effects),
            TimerKind::FeedbackClear => {}
        }
    }

    fn disarm_auto(&mut self, effects: &mut Vec<Effect>) {
        self.timers.disarm(TimerKind::AutoOpen, effects);
        self.timers.disarm(TimerKind::AutoClose, effects);
    }

    fn show(&mut self, effects: &mut Vec<Effect>) {
        if self.visibility == Visibility::Hidden {
            debug!("donation panel: visible");
            self.visibility = Visibility::Visible;
            effects.push(Effect::AcquireOutsideListener);
        }
    }

    fn hide(&mut self, effects: &mut Vec<Effect>) {
        self.locked = false;
        self.timers.disarm(TimerKind::AutoClose, effects);
        self.timers.disarm(TimerKind::HoverGrace, effects);
        if self.visibility == Visibility::Visible {
            debug!("donation panel: hidden");
            self.visibility = Visibility::Hidden;
            effects.push(Effect::ReleaseOutsideListener);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drives a [`Disclosure`] against a virtual clock.
    struct Harness {
        machine: Disclosure,
        now: u64,
        queue: Vec<(u64, TimerToken)>,
        listening: bool,
    }

    impl Harness {
        fn new(viewport: ViewportClass) -> Self {
            Self {
                machine: Disclosure::new(DisclosureConfig::default(), viewport),
                now: 0,
                queue: Vec::new(),
                listening: false,
            }
        }

        fn send(&mut self, input: Input) {
            let effects = self.machine.handle(input);
            for effect in effects {
                match effect {
                    Effect::Schedule { token, delay_ms } => {
                        self.queue.push((self.now + u64::from(delay_ms), token))
                    }
                    Effect::Cancel(token) => self.queue.retain(|(_, t)| *t != token),
                    Effect::AcquireOutsideListener => {
                        assert!(!self.listening, "listener acquired twice");
                        self.listening = true;
                    }
                    Effect::ReleaseOutsideListener => {
                        assert!(self.listening, "listener released while not held");
                        self.listening = false;
                    }
                }
            }
            assert_eq!(self.listening, self.machine.is_visible());
            if self.machine.is_locked() {
                assert!(self.machine.is_visible());
            }
        }

        fn advance(&mut self, ms: u64) {
            let target = self.now + ms;
            loop {
                let next = self
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _))| *at <= target)
                    .min_by_key(|(_, (at, _))| *at)
                    .map(|(i, _)| i);
                let Some(index) = next else { break };
                let (at, token) = self.queue.remove(index);
                self.now = at;
                self.send(Input::Elapsed(token));
            }
            self.now = target;
        }

        fn visible(&self) -> bool {
            self.machine.is_visible()
        }
    }

    #[test]
    fn hover_shows_immediately_and_hides_after_grace() {
        let mut h = Harness::new(ViewportClass::Wide);
        h.send(Input::TriggerEnter);
        assert!(h.visible());

        h.send(Input::TriggerLeave);
        h.advance(1999);
        assert!(h.visible());
        h.advance(1);
        assert!(!h.visible());
    }

    #[test]
    fn moving_from_trigger_to_panel_keeps_it_open() {
        let mut h = Harness::new(ViewportClass::Wide);
        h.send(Input::TriggerEnter);
        h.send(Input::TriggerLeave);
        h.advance(500);
        h.send(Input::PanelEnter);
        h.advance(10_000);
        assert!(h.visible());

        h.send(Input::PanelLeave);
        h.advance(2000);
        assert!(!h.visible());
    }

    #[test]
    fn hover_sequences_follow_the_latest_event() {
        use Input::*;
        // (event, ms to wait afterwards, expected visibility after the wait)
        let scripts: Vec<Vec<(Input, u64, bool)>> = vec![
            vec![(TriggerEnter, 0, true), (TriggerLeave, 2000, false)],
            vec![
                (TriggerEnter, 100, true),
                (TriggerLeave, 1500, true),
                (TriggerEnter, 5000, true),
                (TriggerLeave, 1999, true),
                (PanelEnter, 0, true),
                (PanelLeave, 2500, false),
            ],
            vec![
                (TriggerEnter, 0, true),
                (TriggerLeave, 1000, true),
                (TriggerEnter, 0, true),
                (TriggerLeave, 1000, true),
                (TriggerEnter, 0, true),
                (TriggerLeave, 1999, true),
                (TriggerEnter, 4000, true),
            ],
            vec![(TriggerLeave, 3000, false), (PanelLeave, 3000, false)],
        ];

        for (n, script) in scripts.into_iter().enumerate() {
            let mut h = Harness::new(ViewportClass::Wide);
            for (step, (input, wait, expected)) in script.into_iter().enumerate() {
                h.send(input);
                h.advance(wait);
                assert_eq!(h.visible(), expected, "script {} step {}", n, step);
            }
        }
    }

    #[test]
    fn hover_is_ignored_on_narrow_viewports() {
        let mut h = Harness::new(ViewportClass::Narrow);
        h.send(Input::TriggerEnter);
        assert!(!h.visible());
        h.send(Input::PanelEnter);
        assert!(!h.visible());
    }

    #[test]
    fn taps_are_ignored_on_wide_viewports() {
        let mut h = Harness::new(ViewportClass::Wide);
        h.send(Input::TriggerTap);
        assert!(!h.visible());
        h.send(Input::PanelTap);
        assert!(!h.visible());
    }

    #[test]
    fn tapping_the_trigger_toggles_and_locks() {
        let mut h = Harness::new(ViewportClass::Narrow);
        h.send(Input::TriggerTap);
        assert!(h.visible());
        assert!(h.machine.is_locked());

        h.send(Input::TriggerTap);
        assert!(!h.visible());
        assert!(!h.machine.is_locked());

        h.send(Input::TriggerTap);
        assert!(h.visible());
        assert!(h.machine.is_locked());
    }

    #[test]
    fn tapping_an_auto_opened_panel_closed_then_open_again() {
        let mut h = Harness::new(ViewportClass::Narrow);
        h.send(Input::EnteredViewport);
        h.advance(2000);
        assert!(h.visible());

        h.send(Input::TriggerTap);
        assert!(!h.visible());
        h.send(Input::TriggerTap);
        assert!(h.visible());
        assert!(h.machine.is_locked());

        // The auto-close from the first reveal was cancelled by the taps.
        h.advance(60_000);
        assert!(h.visible());
    }

    #[test]
    fn auto_open_and_auto_close_fire_at_the_configured_delays() {
        let mut h = Harness::new(ViewportClass::Narrow);
        h.send(Input::EnteredViewport);
        h.advance(1999);
        assert!(!h.visible());
        h.advance(1);
        assert!(h.visible());

        h.advance(3999);
        assert!(h.visible());
        h.advance(1);
        assert!(!h.visible());
    }

    #[test]
    fn lock_suppresses_auto_close() {
        let mut h = Harness::new(ViewportClass::Narrow);
        h.send(Input::EnteredViewport);
        h.advance(2000);
        h.advance(1000);
        h.send(Input::PanelTap);
        assert!(h.machine.is_locked());

        h.advance(10_000);
        assert!(h.visible());
    }

    #[test]
    fn outside_pointer_overrides_lock_and_pending_auto_close() {
        let mut h = Harness::new(ViewportClass::Narrow);
        h.send(Input::EnteredViewport);
        h.advance(2000);
        h.send(Input::PanelTap);

        h.send(Input::OutsidePointer);
        assert!(!h.visible());
        assert!(!h.machine.is_locked());
        assert!(h.queue.is_empty());
        assert!(!h.listening);
    }

    #[test]
    fn outside_pointer_dismisses_on_wide_viewports_too() {
        let mut h = Harness::new(ViewportClass::Wide);
        h.send(Input::TriggerEnter);
        h.send(Input::OutsidePointer);
        assert!(!h.visible());
    }

    #[test]
    fn leaving_the_viewport_cancels_pending_timers() {
        let mut h = Harness::new(ViewportClass::Narrow);
        h.send(Input::EnteredViewport);
        h.advance(1500);
        h.send(Input::LeftViewport);
        assert!(h.queue.is_empty());
        h.advance(10_000);
        assert!(!h.visible());
    }

    #[test]
    fn leaving_the_viewport_resets_a_locked_panel() {
        let mut h = Harness::new(ViewportClass::Narrow);
        h.send(Input::TriggerTap);
        h.send(Input::LeftViewport);
        assert!(!h.visible());
        assert!(!h.machine.is_locked());
    }

    #[test]
    fn stale_tokens_are_ignored() {
        let mut machine = Disclosure::new(DisclosureConfig::default(), ViewportClass::Narrow);
        let effects = machine.handle(Input::EnteredViewport);
        let stale = match effects[0] {
            Effect::Schedule { token, .. } => token,
            other => panic!("unexpected effect {:?}", other),
        };
        machine.handle(Input::LeftViewport);

        let effects = machine.handle(Input::Elapsed(stale));
        assert!(effects.is_empty());
        assert_eq!(machine.visibility(), Visibility::Hidden);
    }

    #[test]
    fn entering_the_viewport_on_wide_screens_does_nothing() {
        let mut h = Harness::new(ViewportClass::Wide);
        h.send(Input::EnteredViewport);
        assert!(h.queue.is_empty());
    }

    #[test]
    fn switching_to_wide_cancels_auto_timers() {
        let mut h = Harness::new(ViewportClass::Narrow);
        h.send(Input::EnteredViewport);
        h.advance(2000);
        h.send(Input::ViewportChanged(ViewportClass::Wide));
        assert_eq!(h.machine.viewport(), ViewportClass::Wide);
        h.advance(10_000);
        assert!(h.visible());

        h.send(Input::TriggerLeave);
        h.advance(2000);
        assert!(!h.visible());
    }

    #[test]
    fn unmount_releases_everything() {
        let mut h = Harness::new(ViewportClass::Wide);
        h.send(Input::TriggerEnter);
        h.send(Input::TriggerLeave);
        h.send(Input::Unmount);
        assert!(h.queue.is_empty());
        assert!(!h.listening);
    }
}
