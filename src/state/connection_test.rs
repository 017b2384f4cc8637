use super::*;

#[derive(Default)]
struct FakeIndicator {
    class_name: String,
    writes: usize,
}

impl StatusIndicator for FakeIndicator {
    fn set_class_name(&mut self, class_name: &str) {
        self.class_name = class_name.to_owned();
        self.writes += 1;
    }
}

// =============================================================
// ConnectionState
// =============================================================

#[test]
fn tokens_follow_indicator_convention() {
    let tokens: Vec<_> = ConnectionState::ALL.iter().map(|s| s.token()).collect();
    assert_eq!(tokens, vec!["connecting", "on", "off", "error"]);
}

#[test]
fn display_uses_token() {
    assert_eq!(ConnectionState::Closed.to_string(), "off");
}

// =============================================================
// ConnectionBridge
// =============================================================

#[test]
fn bridge_starts_without_state() {
    assert_eq!(ConnectionBridge::default().state(), None);
}

#[test]
fn last_signal_wins() {
    let mut bridge = ConnectionBridge::default();
    let mut indicator = FakeIndicator::default();
    for state in [ConnectionState::Connecting, ConnectionState::Open, ConnectionState::Error] {
        bridge.apply(state, Some(&mut indicator));
    }
    assert_eq!(bridge.state(), Some(ConnectionState::Error));
    assert_eq!(indicator.class_name, "cloud-error");
    assert_eq!(indicator.writes, 3);
}

#[test]
fn each_state_maps_to_one_class() {
    let mut bridge = ConnectionBridge::default();
    let mut indicator = FakeIndicator::default();
    bridge.apply(ConnectionState::Open, Some(&mut indicator));
    assert_eq!(indicator.class_name, "cloud-on");
    bridge.apply(ConnectionState::Closed, Some(&mut indicator));
    assert_eq!(indicator.class_name, "cloud-off");
    bridge.apply(ConnectionState::Connecting, Some(&mut indicator));
    assert_eq!(indicator.class_name, "cloud-connecting");
}

#[test]
fn missing_indicator_is_a_noop_but_state_is_kept() {
    let mut bridge = ConnectionBridge::default();
    bridge.apply::<FakeIndicator>(ConnectionState::Open, None);
    assert_eq!(bridge.state(), Some(ConnectionState::Open));
}

#[test]
fn custom_prefix_is_used() {
    let mut bridge = ConnectionBridge::new("net-");
    let mut indicator = FakeIndicator::default();
    bridge.apply(ConnectionState::Closed, Some(&mut indicator));
    assert_eq!(indicator.class_name, "net-off");
}
