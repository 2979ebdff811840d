use std::{cell::Cell, rc::Rc};

use viewport_reactive::{create_effect, RwSignal};

#[test]
fn effect_runs_immediately_and_on_set() {
    let width = RwSignal::new(1024u32);
    let count = Rc::new(Cell::new(0));

    create_effect({
        let count = count.clone();
        move |_| {
            width.get();
            count.set(count.get() + 1);
        }
    });
    assert_eq!(count.get(), 1);

    width.set(1920);
    assert_eq!(count.get(), 2);
    assert_eq!(width.with_untracked(|w| *w), 1920);
}

#[test]
fn effect_receives_previous_value() {
    let width = RwSignal::new(640u32);
    let seen = Rc::new(Cell::new(None));

    create_effect({
        let seen = seen.clone();
        move |prev: Option<u32>| {
            seen.set(prev);
            width.get()
        }
    });
    assert_eq!(seen.get(), None);

    width.set(768);
    assert_eq!(seen.get(), Some(640));

    width.set(1366);
    assert_eq!(seen.get(), Some(768));
}

#[test]
fn untracked_reads_do_not_subscribe() {
    let tracked = RwSignal::new(0);
    let ignored = RwSignal::new(0);
    let count = Rc::new(Cell::new(0));

    create_effect({
        let count = count.clone();
        move |_| {
            tracked.get();
            ignored.with_untracked(|_| ());
            count.set(count.get() + 1);
        }
    });

    ignored.set(1);
    ignored.set(2);
    assert_eq!(count.get(), 1);

    tracked.set(1);
    assert_eq!(count.get(), 2);
}

#[test]
fn effect_retracks_on_each_run() {
    let use_height = RwSignal::new(true);
    let width = RwSignal::new(0);
    let height = RwSignal::new(0);
    let count = Rc::new(Cell::new(0));

    create_effect({
        let count = count.clone();
        move |_| {
            if use_height.get() {
                height.get();
            } else {
                width.get();
            }
            count.set(count.get() + 1);
        }
    });
    assert_eq!(count.get(), 1);

    width.set(1);
    assert_eq!(count.get(), 1);

    use_height.set(false);
    assert_eq!(count.get(), 2);

    // height is no longer read by the effect
    height.set(1);
    assert_eq!(count.get(), 2);

    width.set(2);
    assert_eq!(count.get(), 3);
}
