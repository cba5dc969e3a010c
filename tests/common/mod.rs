//! A logging element type shared by the integration tests.
//!
//! Every observable operation on a [`Probe`] is appended to a thread-local
//! log; [`record`] runs a closure against a fresh log and returns what it saw.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use delayed_init::ElementSwap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Construct,
    Clone,
    CloneFrom,
    Drop,
    Eq,
    Value,
    ValueMut,
    Swap,
}

thread_local! {
    static CALLS: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
    static PANIC_ON_CLONE: Cell<bool> = const { Cell::new(false) };
}

fn log(call: Call) {
    CALLS.with(|calls| calls.borrow_mut().push(call));
}

/// Runs `f` with an empty log and returns its result along with the calls it made.
pub fn record<R>(f: impl FnOnce() -> R) -> (R, Vec<Call>) {
    CALLS.with(|calls| calls.borrow_mut().clear());
    let result = f();
    let calls = CALLS.with(|calls| calls.borrow_mut().drain(..).collect());
    (result, calls)
}

/// Runs `f` with `Probe::clone` / `Probe::clone_from` panicking.
pub fn with_panicking_clone<R>(f: impl FnOnce() -> R) -> R {
    PANIC_ON_CLONE.with(|p| p.set(true));
    let result = f();
    PANIC_ON_CLONE.with(|p| p.set(false));
    result
}

fn check_clone_panic() {
    if PANIC_ON_CLONE.with(Cell::get) {
        PANIC_ON_CLONE.with(|p| p.set(false));
        panic!("probe clone failed");
    }
}

#[derive(Debug)]
pub struct Probe {
    id: i32,
}

impl Probe {
    pub fn new(id: i32) -> Self {
        log(Call::Construct);
        Self { id }
    }

    pub fn value(&self) -> i32 {
        log(Call::Value);
        self.id
    }

    pub fn value_mut(&mut self) -> &mut i32 {
        log(Call::ValueMut);
        &mut self.id
    }

    /// Reads the id without logging.
    pub fn id(&self) -> i32 {
        self.id
    }
}

impl From<i32> for Probe {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl Clone for Probe {
    fn clone(&self) -> Self {
        check_clone_panic();
        log(Call::Clone);
        Self { id: self.id }
    }

    fn clone_from(&mut self, source: &Self) {
        check_clone_panic();
        log(Call::CloneFrom);
        self.id = source.id;
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        log(Call::Drop);
    }
}

impl PartialEq for Probe {
    fn eq(&self, other: &Self) -> bool {
        log(Call::Eq);
        self.id == other.id
    }
}

impl ElementSwap for Probe {
    fn swap_with(&mut self, other: &mut Self) {
        log(Call::Swap);
        std::mem::swap(&mut self.id, &mut other.id);
    }
}
