use chrono::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use sweepling_core::{GameEvent, SessionObserver};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct Span {
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

/// Elapsed game time, started by the first open and stopped when the game ends.
#[derive(Clone, Debug, Default)]
pub struct Stopwatch {
    span: Rc<Cell<Span>>,
}

impl Stopwatch {
    /// How many seconds have passed since game started, 0 if it hasn't started
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs_at(Utc::now())
    }

    fn elapsed_secs_at(&self, now: DateTime<Utc>) -> u32 {
        let span = self.span.get();
        if let Some(started_at) = span.started_at {
            (span.ended_at.unwrap_or(now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }

    fn record(&self, event: &GameEvent, now: DateTime<Utc>) {
        let mut span = self.span.get();
        match event {
            GameEvent::Started { .. } => {
                log::debug!("started at {}", now);
                span.started_at = Some(now);
            }
            GameEvent::Won | GameEvent::Lost { .. } => {
                log::debug!("ended at {}", now);
                span.ended_at = Some(now);
            }
            GameEvent::Restarted { .. } => span = Span::default(),
            GameEvent::Opened { .. } | GameEvent::Flagged { .. } => {}
        }
        self.span.set(span);
    }
}

impl SessionObserver for Stopwatch {
    fn notify(&mut self, event: &GameEvent) {
        self.record(event, Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn counts_from_start_to_end() {
        let watch = Stopwatch::default();
        let start = Utc::now();
        assert_eq!(watch.elapsed_secs_at(start), 0);

        watch.record(&GameEvent::Started { first_click: (0, 0) }, start);
        assert_eq!(watch.elapsed_secs_at(start + TimeDelta::seconds(5)), 5);

        watch.record(&GameEvent::Won, start + TimeDelta::seconds(7));
        assert_eq!(watch.elapsed_secs_at(start + TimeDelta::seconds(60)), 7);
    }

    #[test]
    fn restart_resets() {
        let watch = Stopwatch::default();
        let shared = watch.clone();
        let start = Utc::now();

        watch.record(&GameEvent::Started { first_click: (0, 0) }, start);
        watch.record(
            &GameEvent::Restarted {
                config: sweepling_core::Difficulty::Easy.into(),
            },
            start,
        );
        assert_eq!(shared.elapsed_secs_at(start + TimeDelta::seconds(3)), 0);
    }
}
