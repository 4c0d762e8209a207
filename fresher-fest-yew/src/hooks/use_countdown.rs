use fresher_fest_core::{Countdown, CountdownTick};
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Handle returned by [`use_countdown`]
#[derive(Clone, PartialEq)]
pub struct CountdownHandle {
    pub remaining: u32,
    pub running: bool,
    pub finished: bool,
    pub start: Callback<()>,
    /// Stop and reload with the given number of seconds
    pub reset: Callback<u32>,
}

/// Once-per-second countdown driven by a `gloo_timers` interval.
///
/// The interval handle is owned by the hook and dropped when the owning
/// component unmounts, which cancels the timer; it also cancels itself as
/// soon as the countdown reaches zero.
#[hook]
pub fn use_countdown(seconds: u32) -> CountdownHandle {
    let countdown = use_state(|| Countdown::new(seconds));
    let finished = use_state(|| false);
    let interval: Rc<RefCell<Option<Interval>>> = use_mut_ref(|| None);

    let start = {
        let countdown = countdown.clone();
        let finished = finished.clone();
        let interval = interval.clone();

        Callback::from(move |_| {
            if interval.borrow().is_some() {
                return;
            }
            let mut started = (*countdown).clone();
            started.start();
            if !started.is_running() {
                return;
            }
            countdown.set(started.clone());
            finished.set(false);

            let tick_state = Rc::new(RefCell::new(started));
            let handle = {
                let countdown = countdown.clone();
                let finished = finished.clone();
                let interval = interval.clone();
                let tick_state = tick_state.clone();

                Interval::new(1_000, move || {
                    let outcome = tick_state.borrow_mut().tick();
                    countdown.set(tick_state.borrow().clone());
                    match outcome {
                        CountdownTick::Finished => {
                            finished.set(true);
                            // Self-cancel: the countdown stopped itself
                            interval.borrow_mut().take();
                        }
                        CountdownTick::Running(_) | CountdownTick::Idle => {}
                    }
                })
            };
            interval.borrow_mut().replace(handle);
        })
    };

    let reset = {
        let countdown = countdown.clone();
        let finished = finished.clone();
        let interval = interval.clone();

        Callback::from(move |seconds: u32| {
            interval.borrow_mut().take();
            let mut fresh = (*countdown).clone();
            fresh.reset(seconds);
            countdown.set(fresh);
            finished.set(false);
        })
    };

    {
        // Cancel the interval when the owning screen unmounts
        let interval = interval.clone();
        use_effect_with((), move |_| {
            move || {
                interval.borrow_mut().take();
            }
        });
    }

    CountdownHandle {
        remaining: countdown.remaining(),
        running: countdown.is_running(),
        finished: *finished,
        start,
        reset,
    }
}
