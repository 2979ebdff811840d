use std::{cell::Cell, rc::Rc};

use viewport_class::reactive::{create_effect, with_scope, Scope};
use viewport_class::{
    use_viewport, use_viewport_with, Breakpoints, MockSurface, ResponsiveClass, ScreenInfo,
};

#[test]
fn initial_reading_is_classified() {
    let surface = MockSurface::new(1024, 768);
    let scope = Scope::new();
    let viewport = with_scope(scope, || use_viewport(surface.clone()));

    let state = viewport.get();
    assert_eq!(state.width, 1024);
    assert_eq!(state.height, 768);
    assert_eq!(state.responsive_class, ResponsiveClass::Lg);
    assert!(state.is_hd_resolution);
    assert!(!state.is_hd_1366x768);
    assert!(!state.is_fhd_resolution);

    scope.dispose();
}

#[test]
fn resize_updates_derived_fields_without_remount() {
    let surface = MockSurface::new(1024, 768);
    let scope = Scope::new();
    let viewport = with_scope(scope, || use_viewport(surface.clone()));
    assert!(viewport.is(ResponsiveClass::Lg));

    surface.resize(1920, 1080);
    let state = viewport.get();
    assert_eq!(state.responsive_class, ResponsiveClass::XlPlus);
    assert_eq!(viewport.screen_info(), ScreenInfo::new(1920, 1080));
    assert!(state.is_fhd_resolution);
    assert!(!state.is_hd_resolution);

    surface.resize(1366, 768);
    let state = viewport.get();
    assert_eq!(state.responsive_class, ResponsiveClass::Hd1366);
    assert!(state.is_hd_1366x768);

    scope.dispose();
}

#[test]
fn dependents_rerun_on_each_resize() {
    let surface = MockSurface::new(1024, 768);
    let scope = Scope::new();
    let runs = Rc::new(Cell::new(0));
    let last = Rc::new(Cell::new(None));

    with_scope(scope, || {
        let viewport = use_viewport(surface.clone());
        let runs = runs.clone();
        let last = last.clone();
        create_effect(move |_| {
            last.set(Some(viewport.responsive_class()));
            runs.set(runs.get() + 1);
        });
    });
    assert_eq!(runs.get(), 1);
    assert_eq!(last.get(), Some(ResponsiveClass::Lg));

    surface.resize(600, 900);
    assert_eq!(runs.get(), 2);
    assert_eq!(last.get(), Some(ResponsiveClass::Mobile));

    surface.resize(1920, 1080);
    assert_eq!(runs.get(), 3);
    assert_eq!(last.get(), Some(ResponsiveClass::XlPlus));

    scope.dispose();
}

#[test]
fn dispose_releases_listener_and_ignores_later_resizes() {
    let surface = MockSurface::new(1024, 768);
    let scope = Scope::new();
    let runs = Rc::new(Cell::new(0));

    let viewport = with_scope(scope, || {
        let viewport = use_viewport(surface.clone());
        let runs = runs.clone();
        create_effect(move |_| {
            viewport.try_get();
            runs.set(runs.get() + 1);
        });
        viewport
    });
    assert_eq!(surface.listener_count(), 1);
    assert_eq!(runs.get(), 1);

    scope.dispose();
    assert_eq!(surface.listener_count(), 0);
    assert!(viewport.is_disposed());

    surface.resize(1920, 1080);
    assert_eq!(runs.get(), 1);
    assert_eq!(viewport.try_get(), None);
}

#[test]
fn hooks_on_one_surface_are_independent() {
    let surface = MockSurface::new(800, 600);
    let first = Scope::new();
    let second = Scope::new();
    let a = with_scope(first, || use_viewport(surface.clone()));
    let b = with_scope(second, || use_viewport(surface.clone()));
    assert_eq!(surface.listener_count(), 2);

    first.dispose();
    assert_eq!(surface.listener_count(), 1);

    surface.resize(1280, 720);
    assert!(a.try_get().is_none());
    assert_eq!(b.responsive_class(), ResponsiveClass::Xl);

    second.dispose();
    assert_eq!(surface.listener_count(), 0);
}

#[test]
fn custom_breakpoints_drive_the_class() {
    let breakpoints = Breakpoints::new([576, 768, 992, 1200, 1366, 1367, 1400]).unwrap();
    let surface = MockSurface::new(1000, 800);
    let scope = Scope::new();
    let viewport = with_scope(scope, || use_viewport_with(surface.clone(), breakpoints));
    assert_eq!(viewport.responsive_class(), ResponsiveClass::Lg);
    assert_eq!(viewport.breakpoints(), breakpoints);

    surface.resize(1400, 900);
    assert_eq!(viewport.responsive_class(), ResponsiveClass::XlPlus);
    // the resolution flags ignore the breakpoint table
    assert!(viewport.get().is_fhd_resolution);

    scope.dispose();
}

#[test]
fn zero_height_is_carried_through() {
    let surface = MockSurface::new(1024, 768);
    let scope = Scope::new();
    let viewport = with_scope(scope, || use_viewport(surface.clone()));

    surface.resize(1024, 0);
    let state = viewport.get_untracked();
    assert_eq!(state.ratio, f64::INFINITY);
    assert_eq!(state.responsive_class, ResponsiveClass::Lg);

    scope.dispose();
}

#[test]
fn effect_in_unmounted_component_stops_following_app_viewport() {
    let surface = MockSurface::new(1024, 768);
    let app = Scope::new();
    let viewport = with_scope(app, || use_viewport(surface.clone()));

    let runs = Rc::new(Cell::new(0));
    let component = app.create_child();
    with_scope(component, || {
        let runs = runs.clone();
        create_effect(move |_| {
            viewport.responsive_class();
            runs.set(runs.get() + 1);
        });
    });
    assert_eq!(runs.get(), 1);

    component.dispose();
    surface.resize(1920, 1080);
    assert_eq!(runs.get(), 1);
    // the app-level hook is still live
    assert_eq!(viewport.responsive_class(), ResponsiveClass::XlPlus);
    assert_eq!(surface.listener_count(), 1);

    app.dispose();
    assert_eq!(surface.listener_count(), 0);
}

#[test]
fn viewport_dispose_leaves_caller_scope_alive() {
    let surface = MockSurface::new(1024, 768);
    let scope = Scope::new();
    let runs = Rc::new(Cell::new(0));

    let viewport = with_scope(scope, || {
        let viewport = use_viewport(surface.clone());
        let runs = runs.clone();
        create_effect(move |_| {
            viewport.try_get();
            runs.set(runs.get() + 1);
        });
        viewport
    });
    assert_eq!(surface.listener_count(), 1);

    viewport.dispose();
    assert_eq!(surface.listener_count(), 0);
    assert!(viewport.is_disposed());

    surface.resize(1920, 1080);
    assert_eq!(runs.get(), 1);

    scope.dispose();
}
