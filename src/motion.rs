/// How long a completed skill bar keeps its highlight.
pub const HIGHLIGHT_MS: u64 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Power2Out,
    Power3Out,
    BackOut,
}

impl Ease {
    pub fn css(self) -> &'static str {
        match self {
            Ease::Power2Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Ease::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Ease::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }

    /// Eased progress for `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::BackOut => {
                let c1 = 1.70158;
                let c3 = c1 + 1.0;
                1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
            }
        }
    }
}

/// When an element counts as "entered": its top edge has passed
/// `start_pct` percent of the viewport height.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub start_pct: u8,
}

impl Trigger {
    pub const fn at(start_pct: u8) -> Self {
        Self { start_pct }
    }

    /// `rootMargin` that shrinks the observed viewport to the trigger line.
    pub fn root_margin(&self) -> String {
        let shrink = 100 - self.start_pct.min(100);
        format!("0px 0px -{shrink}% 0px")
    }

    pub fn threshold(&self) -> f64 {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Hero,
    SectionTitle,
    TimelineItem,
    SkillCard,
    PortfolioCard,
    AboutCard,
    ContactForm,
    ContactInput,
    SkillBar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnterAnimation {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub stagger_ms: u32,
    pub ease: Ease,
    pub trigger: Trigger,
    pub reverse_on_exit: bool,
}

impl EnterAnimation {
    const BASE: EnterAnimation = EnterAnimation {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        duration_ms: 800,
        delay_ms: 0,
        stagger_ms: 0,
        ease: Ease::Power2Out,
        trigger: Trigger::at(85),
        reverse_on_exit: true,
    };

    pub fn for_target(target: Target) -> Self {
        match target {
            Target::Hero => EnterAnimation {
                y: 50.0,
                duration_ms: 1000,
                delay_ms: 200,
                stagger_ms: 200,
                ease: Ease::Power3Out,
                trigger: Trigger::at(100),
                reverse_on_exit: false,
                ..Self::BASE
            },
            Target::SectionTitle => EnterAnimation {
                y: 30.0,
                ..Self::BASE
            },
            Target::TimelineItem => EnterAnimation {
                x: -50.0,
                stagger_ms: 150,
                trigger: Trigger::at(80),
                ..Self::BASE
            },
            Target::SkillCard => EnterAnimation {
                y: 40.0,
                scale: 0.95,
                duration_ms: 600,
                stagger_ms: 100,
                ease: Ease::BackOut,
                trigger: Trigger::at(90),
                ..Self::BASE
            },
            Target::PortfolioCard => EnterAnimation {
                y: 60.0,
                duration_ms: 700,
                stagger_ms: 100,
                ..Self::BASE
            },
            Target::AboutCard => EnterAnimation {
                x: 50.0,
                duration_ms: 900,
                trigger: Trigger::at(80),
                ..Self::BASE
            },
            Target::ContactForm => EnterAnimation {
                y: 40.0,
                ..Self::BASE
            },
            Target::ContactInput => EnterAnimation {
                x: -20.0,
                duration_ms: 500,
                delay_ms: 200,
                stagger_ms: 100,
                ..Self::BASE
            },
            Target::SkillBar => EnterAnimation {
                duration_ms: 1500,
                delay_ms: 200,
                trigger: Trigger::at(90),
                ..Self::BASE
            },
        }
    }

    /// Mirrors the horizontal offset, used for right-hand timeline items.
    pub fn mirrored(mut self) -> Self {
        self.x = -self.x;
        self
    }

    pub fn delay_for(&self, index: usize) -> u32 {
        self.delay_ms + self.stagger_ms * index as u32
    }

    /// Inline style for the element at `index` of its group.
    pub fn style(&self, visible: bool, index: usize) -> String {
        let (opacity, x, y, scale) = if visible {
            (1.0, 0.0, 0.0, 1.0)
        } else {
            (0.0, self.x, self.y, self.scale)
        };
        let ease = self.ease.css();
        let duration = self.duration_ms;
        let delay = if visible { self.delay_for(index) } else { 0 };
        format!(
            "opacity: {opacity}; transform: translate({x}px, {y}px) scale({scale}); \
             transition: opacity {duration}ms {ease} {delay}ms, transform {duration}ms {ease} {delay}ms;"
        )
    }
}

/// An engine that reports when registered elements cross their trigger.
/// Components only pick the [`EnterAnimation`]; playing it is up to the engine.
pub trait AnimateOnEnter: Send + Sync {
    /// Starts watching `element`; `on_change` receives `true` when it enters
    /// and `false` when it leaves.
    fn observe(
        &self,
        element: web_sys::Element,
        trigger: &Trigger,
        on_change: Box<dyn Fn(bool) + 'static>,
    );
}

/// Engine for environments without a browser: never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEngine;

impl AnimateOnEnter for NoopEngine {
    fn observe(&self, _: web_sys::Element, _: &Trigger, _: Box<dyn Fn(bool) + 'static>) {}
}

/// One frame of a skill-bar fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarFrame {
    pub width_pct: f64,
    pub counter: u8,
    pub done: bool,
}

/// Bar fill and percentage counter, sampled from the same eased progress so
/// the number tracks the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillBarTween {
    pub target: u8,
    pub duration_ms: f64,
    pub ease: Ease,
}

impl SkillBarTween {
    pub fn new(target: u8) -> Self {
        let anim = EnterAnimation::for_target(Target::SkillBar);
        Self {
            target: target.min(100),
            duration_ms: f64::from(anim.duration_ms),
            ease: anim.ease,
        }
    }

    pub fn sample(&self, elapsed_ms: f64) -> BarFrame {
        let t = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        };
        if t >= 1.0 {
            return BarFrame {
                width_pct: f64::from(self.target),
                counter: self.target,
                done: true,
            };
        }
        let width_pct = self.ease.apply(t) * f64::from(self.target);
        BarFrame {
            width_pct,
            counter: (width_pct.floor() as u8).min(self.target),
            done: false,
        }
    }
}
