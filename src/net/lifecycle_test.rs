use super::*;
use std::collections::HashSet;

#[test]
fn names_round_trip_through_from_name() {
    for event in LifecycleEvent::ALL {
        assert_eq!(LifecycleEvent::from_name(event.name()), Some(event));
    }
}

#[test]
fn names_are_unique() {
    let names: HashSet<_> = LifecycleEvent::ALL.iter().map(|e| e.name()).collect();
    assert_eq!(names.len(), LifecycleEvent::ALL.len());
}

#[test]
fn unknown_name_is_none() {
    assert_eq!(LifecycleEvent::from_name("htmx:wsReconnect"), None);
    assert_eq!(LifecycleEvent::from_name("wsOpen"), None);
}

#[test]
fn only_lifecycle_events_carry_a_connection_state() {
    assert_eq!(LifecycleEvent::WsConnecting.connection_state(), Some(ConnectionState::Connecting));
    assert_eq!(LifecycleEvent::WsOpen.connection_state(), Some(ConnectionState::Open));
    assert_eq!(LifecycleEvent::WsClose.connection_state(), Some(ConnectionState::Closed));
    assert_eq!(LifecycleEvent::WsError.connection_state(), Some(ConnectionState::Error));
    let with_state = LifecycleEvent::ALL.iter().filter(|e| e.connection_state().is_some()).count();
    assert_eq!(with_state, 4);
}

#[test]
fn trace_labels_are_kebab_case() {
    assert_eq!(LifecycleEvent::WsOpen.trace_label(), "htmx-ws-open");
    assert_eq!(LifecycleEvent::WsBeforeMessage.trace_label(), "htmx-ws-before-message");
    assert_eq!(LifecycleEvent::ConfigRequest.trace_label(), "htmx-config-request");
}
