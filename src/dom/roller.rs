//! Timer scheduling for the two delayed roll steps.
//!
//! Each die owns at most one pending `Timeout`. Scheduling a step replaces the
//! previous handle, and dropping a `Timeout` clears it, so a re-roll cancels
//! whatever the earlier roll still had queued. A callback that fires anyway
//! carries a stale ticket and the animator ignores it.

use std::rc::Rc;

use dice::{RestStep, SettleStep};
use gloo_timers::callback::Timeout;

use super::page::Shared;

fn millis(duration: std::time::Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Queue phase two of the roll described by `step` on die `id`.
pub(crate) fn schedule_settle(shared: &Rc<Shared>, id: &str, step: SettleStep) {
    let for_cb = Rc::clone(shared);
    let die_id = id.to_owned();
    let timeout = Timeout::new(millis(step.delay), move || {
        let rest = for_cb.state.borrow_mut().dice_mut().settle(&die_id, step.ticket);
        match rest {
            Some(rest) => schedule_finish(&for_cb, &die_id, rest),
            None => log::debug!("[dice] stale settle for #{die_id} ignored"),
        }
    });
    replace(shared, id, timeout);
}

fn schedule_finish(shared: &Rc<Shared>, id: &str, rest: RestStep) {
    let for_cb = Rc::clone(shared);
    let die_id = id.to_owned();
    let timeout = Timeout::new(millis(rest.after), move || {
        if for_cb.state.borrow_mut().dice_mut().finish(&die_id, rest.ticket) {
            log::debug!("[dice] #{die_id} resting on {}", rest.ticket.face);
        }
        for_cb.timers.borrow_mut().remove(&die_id);
    });
    replace(shared, id, timeout);
}

fn replace(shared: &Shared, id: &str, timeout: Timeout) {
    shared.timers.borrow_mut().insert(id.to_owned(), timeout);
}
