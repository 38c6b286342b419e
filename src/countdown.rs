//! Time remaining until a task's due date.
//!
//! A due date is a calendar day; the countdown runs to midnight UTC at the
//! start of that day. Evaluation is pure ([`time_left`]); [`CountdownTimer`]
//! re-evaluates once per second for as long as it is kept alive.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::COUNTDOWN_TICK;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Remaining(TimeLeft),
    /// Still ahead, but by less than a whole second.
    TimesUp,
    Overdue,
}

/// The instant a calendar due date falls due.
pub fn due_instant(date: NaiveDate) -> DateTime<Utc> {
    // NaiveTime::default() is midnight
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}

pub fn time_left(due: DateTime<Utc>, now: DateTime<Utc>) -> Countdown {
    let diff = (due - now).num_milliseconds();
    if diff <= 0 {
        return Countdown::Overdue;
    }
    let left = TimeLeft {
        days: diff / MS_PER_DAY,
        hours: (diff / MS_PER_HOUR) % 24,
        minutes: (diff / MS_PER_MINUTE) % 60,
        seconds: (diff / MS_PER_SECOND) % 60,
    };
    if left == (TimeLeft { days: 0, hours: 0, minutes: 0, seconds: 0 }) {
        Countdown::TimesUp
    } else {
        Countdown::Remaining(left)
    }
}

pub fn time_left_for_date(date: NaiveDate, now: DateTime<Utc>) -> Countdown {
    time_left(due_instant(date), now)
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Overdue => f.write_str("Overdue"),
            Countdown::TimesUp => f.write_str("Time's up!"),
            Countdown::Remaining(left) => {
                let units = [
                    (left.days, "Days"),
                    (left.hours, "Hours"),
                    (left.minutes, "Minutes"),
                    (left.seconds, "Seconds"),
                ];
                let parts: Vec<String> = units
                    .iter()
                    .filter(|(n, _)| *n != 0)
                    .map(|(n, label)| format!("{n} {label}"))
                    .collect();
                f.write_str(&parts.join(" "))
            }
        }
    }
}

/// Background ticker that publishes a fresh [`Countdown`] every second.
///
/// The first value is sent immediately. Dropping the timer stops it.
pub struct CountdownTimer {
    handle: JoinHandle<()>,
}

impl CountdownTimer {
    pub fn spawn(due: DateTime<Utc>, tx: mpsc::Sender<Countdown>) -> Self {
        Self::spawn_with_clock(due, Utc::now, tx)
    }

    pub fn spawn_with_clock<C>(due: DateTime<Utc>, clock: C, tx: mpsc::Sender<Countdown>) -> Self
    where
        C: Fn() -> DateTime<Utc> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(COUNTDOWN_TICK);
            loop {
                interval.tick().await;
                if tx.send(time_left(due, clock())).await.is_err() {
                    tracing::debug!("countdown receiver gone, stopping timer");
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
