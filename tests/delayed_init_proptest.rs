use delayed_init::{DelayedInit, DelayedInitError};
use proptest::prelude::*;
use std::rc::Rc;

#[derive(Debug, Clone)]
enum Operation {
    Init(u8),
    Set(u8),
    SetCloned(u8),
    Clear,
    Take,
    CloneFromOther,
    AssignOther,
    SwapWithOther,
    RefillOther(u8),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<u8>().prop_map(Operation::Init),
        any::<u8>().prop_map(Operation::Set),
        any::<u8>().prop_map(Operation::SetCloned),
        Just(Operation::Clear),
        Just(Operation::Take),
        Just(Operation::CloneFromOther),
        Just(Operation::AssignOther),
        Just(Operation::SwapWithOther),
        any::<u8>().prop_map(Operation::RefillOther),
    ]
}

proptest! {
    #[test]
    fn test_holder_matches_option_model(ops in proptest::collection::vec(operation(), 1..64)) {
        // Every element shares one `Rc`, so the strong count tracks live elements.
        let tracker = Rc::new(());
        let element = |v: u8| (v, Rc::clone(&tracker));

        let mut holder: DelayedInit<(u8, Rc<()>)> = DelayedInit::new();
        let mut other: DelayedInit<(u8, Rc<()>)> = DelayedInit::new();
        let mut model: Option<u8> = None;
        let mut other_model: Option<u8> = None;

        for op in ops {
            match op {
                Operation::Init(v) => {
                    let result = holder.init(element(v)).map(|e| e.0);
                    if model.is_some() {
                        prop_assert_eq!(result, Err(DelayedInitError::DoubleInitialization));
                    } else {
                        prop_assert_eq!(result, Ok(v));
                        model = Some(v);
                    }
                }
                Operation::Set(v) => {
                    holder.set(element(v));
                    model = Some(v);
                }
                Operation::SetCloned(v) => {
                    let source = element(v);
                    holder.set_cloned(&source);
                    model = Some(v);
                }
                Operation::Clear => {
                    holder.clear();
                    model = None;
                }
                Operation::Take => {
                    prop_assert_eq!(holder.take().map(|e| e.0), model.take());
                }
                Operation::CloneFromOther => {
                    holder.clone_from(&other);
                    model = other_model;
                }
                Operation::AssignOther => {
                    holder.assign(core::mem::take(&mut other));
                    model = other_model.take();
                }
                Operation::SwapWithOther => {
                    holder.swap(&mut other);
                    core::mem::swap(&mut model, &mut other_model);
                }
                Operation::RefillOther(v) => {
                    other = DelayedInit::from_value(element(v));
                    other_model = Some(v);
                }
            }

            prop_assert_eq!(holder.is_initialized(), model.is_some());
            prop_assert_eq!(holder.get().map(|e| e.0), model);
            prop_assert_eq!(other.get().map(|e| e.0), other_model);

            let live = usize::from(model.is_some()) + usize::from(other_model.is_some());
            prop_assert_eq!(Rc::strong_count(&tracker), 1 + live);
        }

        drop(holder);
        drop(other);
        prop_assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_clone_equals_source(value in proptest::option::of(any::<i64>())) {
        let source: DelayedInit<i64> = value.into();
        let copy = source.clone();
        prop_assert_eq!(&copy, &source);
        prop_assert_eq!(copy.into_inner(), value);
    }
}
