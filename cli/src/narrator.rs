use rand::{SeedableRng, rngs::SmallRng, seq::IndexedRandom};
use std::cell::RefCell;
use std::rc::Rc;
use sweepling_core::{GameEvent, SessionObserver};

const START: &[&str] = &[
    "Hello, brave little hero! Open a square to start hunting for treasure.",
    "A new adventure begins, watch out for the sneaky mines!",
    "Put your thinking cap on, how fast can you clear it today?",
];

const WIN: &[&str] = &[
    "You did it! Every mine found, just like a real hero.",
    "A perfect victory, all the treasure is yours!",
    "Wow, your logic was flawless!",
];

const LOSE: &[&str] = &[
    "No worries, even great explorers slip up. Try again!",
    "Oops, that one was a mine. Take a deep breath, next round is yours.",
    "Don't give up, you were doing great!",
];

const HINT: &[&str] = &[
    "Tip: the number on a square tells you how many of its 8 neighbors hide a mine.",
    "If a square says 1, exactly one of its neighbors is a mine.",
    "Sure a square hides a mine? Plant a flag on it.",
];

const FALLBACK: &str = "Every click is a clever one, keep going!";

/// Picks a flavor line after game events, kept until the front-end takes it.
pub struct Narrator {
    rng: SmallRng,
    pending: Option<&'static str>,
}

impl Narrator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            pending: None,
        }
    }

    pub fn greeting(&mut self) -> &'static str {
        self.pick(START)
    }

    pub fn hint(&mut self) -> &'static str {
        self.pick(HINT)
    }

    pub fn take_line(&mut self) -> Option<&'static str> {
        self.pending.take()
    }

    fn pick(&mut self, pool: &[&'static str]) -> &'static str {
        pool.choose(&mut self.rng).copied().unwrap_or(FALLBACK)
    }
}

impl SessionObserver for Narrator {
    fn notify(&mut self, event: &GameEvent) {
        self.pending = match event {
            GameEvent::Restarted { .. } => Some(self.pick(START)),
            GameEvent::Won => Some(self.pick(WIN)),
            GameEvent::Lost { .. } => Some(self.pick(LOSE)),
            _ => return,
        };
    }
}

/// Forwards events to a narrator shared with the front-end. A narrator that is busy elsewhere misses the event.
pub fn observe(narrator: &Rc<RefCell<Narrator>>) -> impl SessionObserver + 'static {
    let narrator = Rc::clone(narrator);
    move |event: &GameEvent| {
        if let Ok(mut narrator) = narrator.try_borrow_mut() {
            narrator.notify(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweepling_core::{Difficulty, GameConfig};

    #[test]
    fn speaks_on_end_and_restart_only() {
        let mut narrator = Narrator::new(1);

        narrator.notify(&GameEvent::Started { first_click: (0, 0) });
        assert_eq!(narrator.take_line(), None);

        narrator.notify(&GameEvent::Won);
        assert!(WIN.contains(&narrator.take_line().unwrap()));
        assert_eq!(narrator.take_line(), None);

        narrator.notify(&GameEvent::Lost { exploded: (1, 1) });
        assert!(LOSE.contains(&narrator.take_line().unwrap()));

        let config = GameConfig::from(Difficulty::Easy);
        narrator.notify(&GameEvent::Restarted { config });
        assert!(START.contains(&narrator.take_line().unwrap()));
    }

    #[test]
    fn busy_narrator_misses_events() {
        let narrator = Rc::new(RefCell::new(Narrator::new(1)));
        let mut observer = observe(&narrator);

        {
            let _held = narrator.borrow();
            observer.notify(&GameEvent::Won);
        }
        assert_eq!(narrator.borrow_mut().take_line(), None);

        observer.notify(&GameEvent::Won);
        assert!(narrator.borrow_mut().take_line().is_some());
    }

    #[test]
    fn hints_come_from_the_hint_pool() {
        let mut narrator = Narrator::new(9);
        assert!(HINT.contains(&narrator.hint()));
        assert!(START.contains(&narrator.greeting()));
    }
}
