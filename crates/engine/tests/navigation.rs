//! End-to-end scenarios driving the composed navigation component the way
//! a host adapter would: deliver an event, apply the returned effects,
//! then drain the scheduler and feed fired tasks back in.

use wayfind_engine::{
    MENU_CLOSED_MSG, MENU_OPENED_MSG, NavComponent, QueueScheduler, Task, env::StaticEnv,
};
use wayfind_types::{Effect, KeyInput, NavItem, NavKey};

fn host() -> (NavComponent, QueueScheduler, StaticEnv) {
    let env = StaticEnv {
        location_path: "/portfolio/".to_string(),
        base_path: "/portfolio".to_string(),
        wide_viewport: false,
    };
    let mut component = NavComponent::new();
    component.connected(&env);
    (component, QueueScheduler::new(), env)
}

/// Drains fired tasks back into the component, collecting any effects.
fn settle(component: &mut NavComponent, sched: &mut QueueScheduler) -> Vec<Effect> {
    let mut effects = Vec::new();
    for task in sched.take_frame_tasks() {
        effects.extend(component.run_task(task));
    }
    for task in sched.take_timer_tasks() {
        effects.extend(component.run_task(task));
    }
    effects
}

#[test]
fn open_close_cycle_announces_and_moves_focus() {
    let (mut component, mut sched, _env) = host();

    let effects = component.handle_toggle_click(&mut sched);
    assert!(effects.is_empty());
    assert!(component.state().is_menu_open);

    // Next frame: focus lands on the first item; timer: announcement set.
    let effects = settle(&mut component, &mut sched);
    assert_eq!(effects, vec![Effect::FocusItem(0)]);
    assert_eq!(component.state().announcement, MENU_OPENED_MSG);

    let effects = component.handle_toggle_click(&mut sched);
    assert_eq!(effects, vec![Effect::FocusToggle]);
    assert!(!component.state().is_menu_open);
    assert_eq!(component.state().announcement, "", "clear precedes the delayed set");

    let _ = settle(&mut component, &mut sched);
    assert_eq!(component.state().announcement, MENU_CLOSED_MSG);
}

#[test]
fn end_then_home_traversal_over_two_items() {
    let (mut component, mut sched, _env) = host();
    component.set_navigation_items(vec![
        NavItem::new("home", "Home", "/"),
        NavItem::new("contact", "Contact", "/contact"),
    ]);

    let effects = component.handle_key(&mut sched, KeyInput::plain(NavKey::End), Some(0));
    assert_eq!(effects, vec![Effect::FocusItem(1)]);
    let effects = component.handle_key(&mut sched, KeyInput::plain(NavKey::Home), Some(1));
    assert_eq!(effects, vec![Effect::FocusItem(0)]);
}

#[test]
fn escape_is_a_no_op_when_closed_and_closes_when_open() {
    let (mut component, mut sched, _env) = host();

    let effects = component.handle_key(&mut sched, KeyInput::plain(NavKey::Escape), Some(2));
    assert!(effects.is_empty(), "closed menu: no state change, no announcement");
    assert_eq!(sched.pending_len(), 0);

    let _ = component.handle_toggle_click(&mut sched);
    let _ = settle(&mut component, &mut sched);

    let effects = component.handle_key(&mut sched, KeyInput::plain(NavKey::Escape), Some(2));
    assert_eq!(effects, vec![Effect::FocusToggle]);
    assert!(!component.state().is_menu_open);

    let _ = settle(&mut component, &mut sched);
    assert_eq!(component.state().announcement, MENU_CLOSED_MSG);

    // Idempotence: a later close produces no second announcement.
    let effects = component.handle_key(&mut sched, KeyInput::plain(NavKey::Escape), Some(2));
    assert!(effects.is_empty());
    assert_eq!(sched.pending_len(), 0);
}

#[test]
fn full_arrow_cycle_returns_to_the_start() {
    let (mut component, mut sched, _env) = host();
    let n = component.state().items.len();

    for start in 0..n {
        let mut index = start;
        for _ in 0..n {
            let effects = component.handle_key(&mut sched, KeyInput::plain(NavKey::ArrowRight), Some(index));
            match effects.as_slice() {
                [Effect::FocusItem(next)] => index = *next,
                other => panic!("expected a focus effect, got {other:?}"),
            }
        }
        assert_eq!(index, start);
    }
}

#[test]
fn nav_click_closes_navigates_and_updates_the_path() {
    let (mut component, mut sched, env) = host();
    let _ = component.handle_toggle_click(&mut sched);

    let effects = component.handle_nav_click(&env, &mut sched, "/experience");
    assert_eq!(
        effects,
        vec![
            Effect::FocusToggle,
            Effect::Navigate("/portfolio/experience".into()),
        ]
    );
    assert!(!component.state().is_menu_open);
    assert_eq!(component.state().current_path, "/experience");

    let view = component.view();
    let active: Vec<_> = view.items.iter().filter(|item| item.is_active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, "experience");
    assert_eq!(active[0].aria_current, Some("page"));
}

#[test]
fn brand_click_goes_home() {
    let (mut component, mut sched, mut env) = host();
    env.location_path = "/portfolio/projects".to_string();
    component.on_pop_state(&env);
    assert_eq!(component.state().current_path, "/projects");

    let effects = component.handle_brand_click(&env, &mut sched);
    assert_eq!(effects, vec![Effect::Navigate("/portfolio/".into())]);
    assert_eq!(component.state().current_path, "/");
}

#[test]
fn widening_resize_closes_the_open_menu_once() {
    let (mut component, mut sched, mut env) = host();
    let _ = component.handle_toggle_click(&mut sched);
    let _ = settle(&mut component, &mut sched);

    env.wide_viewport = true;
    let effects = component.on_resize(&env, &mut sched);
    assert_eq!(effects, vec![Effect::FocusToggle]);
    assert!(!component.state().is_menu_open);

    // A second resize event in the wide viewport must not re-announce.
    let effects = component.on_resize(&env, &mut sched);
    assert!(effects.is_empty());
    assert_eq!(sched.take_timer_tasks(), vec![Task::SetAnnouncement(MENU_CLOSED_MSG.into())]);
}

#[test]
fn rapid_toggles_announce_only_the_latest_state() {
    let (mut component, mut sched, _env) = host();

    let _ = component.handle_toggle_click(&mut sched);
    let _ = component.handle_toggle_click(&mut sched);

    // Both announcements were scheduled within the delay window; only the
    // most recent one survives.
    let timers = sched.take_timer_tasks();
    assert_eq!(timers, vec![Task::SetAnnouncement(MENU_CLOSED_MSG.into())]);
}

#[test]
fn skip_link_requests_main_content_focus() {
    let (component, _sched, _env) = host();
    assert_eq!(component.handle_skip_to_main(), vec![Effect::FocusMain]);
}

#[test]
fn empty_configuration_never_opens_the_menu() {
    let (mut component, mut sched, _env) = host();
    component.set_navigation_items_json("[]");
    assert!(component.state().items.is_empty());

    let effects = component.handle_toggle_click(&mut sched);
    assert!(effects.is_empty());
    assert!(!component.state().is_menu_open);
    assert_eq!(sched.pending_len(), 0);
}
