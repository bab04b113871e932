use px_app::AccessSnapshot;
use px_core::gate::AccessDecision;

/// One line describing what the rendering layer would show.
pub fn describe(snapshot: &AccessSnapshot) -> String {
    match snapshot.decision() {
        AccessDecision::Loading => "[loading]".to_string(),
        AccessDecision::SignIn => "[sign in] use `login <name>`".to_string(),
        AccessDecision::Locked => "[locked] ProXplore is locked, use `unlock`".to_string(),
        AccessDecision::App => match &snapshot.session.user {
            Some(user) => format!("[app] welcome, {user}"),
            None => "[app]".to_string(),
        },
    }
}

pub fn render_status(snapshot: &AccessSnapshot) -> String {
    let user = snapshot
        .session
        .user
        .as_ref()
        .map(|user| user.as_str())
        .unwrap_or("-");
    format!(
        "screen={:?} phase={:?} user={} theme={} biometric_lock={} authenticated={}",
        snapshot.decision(),
        snapshot.gate.phase,
        user,
        snapshot.theme,
        if snapshot.is_biometric_enabled() { "on" } else { "off" },
        snapshot.is_authenticated(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use px_core::{
        gate::{GatePhase, GateState},
        preferences::ThemeMode,
        session::{SessionSnapshot, UserRef},
    };

    fn snapshot(phase: GatePhase, session: SessionSnapshot) -> AccessSnapshot {
        AccessSnapshot {
            theme: ThemeMode::Dark,
            gate: GateState {
                phase,
                preferences_loaded: true,
                biometric_enabled: true,
                session_user: session.user.clone(),
            },
            session,
        }
    }

    #[test]
    fn describes_each_screen() {
        let alice = SessionSnapshot::signed_in(UserRef::new("alice"));

        assert_eq!(describe(&AccessSnapshot::default()), "[loading]");
        assert!(describe(&snapshot(GatePhase::Bypassed, SessionSnapshot::signed_out()))
            .starts_with("[sign in]"));
        assert!(describe(&snapshot(GatePhase::Locked, alice.clone())).starts_with("[locked]"));
        assert_eq!(
            describe(&snapshot(GatePhase::Unlocked, alice)),
            "[app] welcome, alice"
        );
    }

    #[test]
    fn status_lists_gate_fields() {
        let status = render_status(&snapshot(
            GatePhase::Locked,
            SessionSnapshot::signed_in(UserRef::new("bob")),
        ));

        assert_eq!(
            status,
            "screen=Locked phase=Locked user=bob theme=dark biometric_lock=on authenticated=false"
        );
    }
}
