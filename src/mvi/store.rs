//! Observable store holding the single current state.

use std::mem;

use super::reducer::Reducer;

type Subscriber<S> = Box<dyn FnMut(&S) + Send>;

/// Owns the current state value and publishes every replacement.
///
/// [`Store::dispatch`] runs the reducer over the current state, swaps in
/// the result, and notifies subscribers in registration order before
/// returning. Dispatch is synchronous and the store is single-owner: the
/// UI thread is the only dispatcher, so the state itself needs no lock.
pub struct Store<R: Reducer> {
    state: R::State,
    subscribers: Vec<Subscriber<R::State>>,
}

impl<R: Reducer> Store<R> {
    /// Create a store seeded with `initial`.
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            subscribers: Vec::new(),
        }
    }

    /// Borrow the current state.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Register a callback invoked with every state replacement.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&R::State) + Send + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Run the reducer over the current state and publish the result.
    pub fn dispatch(&mut self, intent: R::Intent) {
        let current = mem::take(&mut self.state);
        self.state = R::reduce(current, intent);
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    /// A store holding the zero state.
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvi::{Intent, StoreState};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct Counter(i32);

    impl StoreState for Counter {}

    #[derive(Debug, Clone, Copy)]
    enum CounterIntent {
        Add(i32),
    }

    impl Intent for CounterIntent {}

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = Counter;
        type Intent = CounterIntent;

        fn reduce(state: Counter, intent: CounterIntent) -> Counter {
            match intent {
                CounterIntent::Add(n) => Counter(state.0 + n),
            }
        }
    }

    #[test]
    fn default_store_holds_zero_state() {
        let store = Store::<CounterReducer>::default();
        assert_eq!(*store.state(), Counter(0));
    }

    #[test]
    fn dispatch_replaces_state() {
        let mut store = Store::<CounterReducer>::new(Counter(5));
        store.dispatch(CounterIntent::Add(3));
        assert_eq!(*store.state(), Counter(8));
    }

    #[test]
    fn subscribers_see_every_replacement() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut store = Store::<CounterReducer>::default();
        store.subscribe(move |state: &Counter| sink.lock().unwrap().push(state.0));

        store.dispatch(CounterIntent::Add(1));
        store.dispatch(CounterIntent::Add(2));

        assert_eq!(*seen.lock().unwrap(), vec![1, 3]);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let first = Arc::clone(&order);
        let second = Arc::clone(&order);

        let mut store = Store::<CounterReducer>::default();
        store.subscribe(move |_: &Counter| first.lock().unwrap().push("first"));
        store.subscribe(move |_: &Counter| second.lock().unwrap().push("second"));

        store.dispatch(CounterIntent::Add(1));

        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }
}
