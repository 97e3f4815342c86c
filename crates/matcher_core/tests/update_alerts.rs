use std::sync::Once;
use std::time::Duration;

use matcher_core::{
    update, AlertId, AppState, Effect, ExistingAlert, KeyPress, Msg, PageSnapshot, SelectedFile,
    TimerId,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(matcher_logging::initialize_for_tests);
}

fn scheduled(effects: &[Effect]) -> Vec<(TimerId, Duration)> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::ScheduleTimer { timer, delay } => Some((*timer, *delay)),
            _ => None,
        })
        .collect()
}

fn page_with_alerts(alerts: Vec<ExistingAlert>) -> (AppState, Vec<Effect>) {
    update(
        AppState::new(),
        Msg::PageLoaded(PageSnapshot {
            alerts,
            ..PageSnapshot::default()
        }),
    )
}

#[test]
fn shown_alert_expires_after_delay() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::FileSelected(Some(SelectedFile::new("a.txt", 1))),
    );
    let timers = scheduled(&effects);
    assert_eq!(timers, vec![(1, Duration::from_millis(5_000))]);

    let (state, effects) = update(state, Msg::TimerFired(1));
    assert_eq!(effects, vec![Effect::RemoveAlert(AlertId(1))]);
    assert!(state.view().alerts.is_empty());

    // The timer is spent; firing it again is harmless.
    let (_, effects) = update(state, Msg::TimerFired(1));
    assert!(effects.is_empty());
}

#[test]
fn manual_dismissal_then_expiry_is_noop() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::FileSelected(Some(SelectedFile::new("a.txt", 1))),
    );
    let (state, effects) = update(state, Msg::AlertDismissed(AlertId(1)));
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::TimerFired(1));
    assert!(effects.is_empty());

    // Dismissing twice is harmless too.
    let (_, effects) = update(state, Msg::AlertDismissed(AlertId(1)));
    assert!(effects.is_empty());
}

#[test]
fn server_alerts_auto_hide_unless_permanent_or_unclosable() {
    init_logging();
    let (state, effects) = page_with_alerts(vec![
        ExistingAlert {
            id: AlertId(1),
            permanent: false,
            closable: true,
        },
        ExistingAlert {
            id: AlertId(2),
            permanent: true,
            closable: true,
        },
        ExistingAlert {
            id: AlertId(3),
            permanent: false,
            closable: false,
        },
    ]);

    assert_eq!(scheduled(&effects), vec![(1, Duration::from_millis(5_000))]);
    let (state, effects) = update(state, Msg::TimerFired(1));
    assert_eq!(effects, vec![Effect::RemoveAlert(AlertId(1))]);
    assert_eq!(state.view().alerts.len(), 2);
}

#[test]
fn new_alert_ids_follow_server_alerts() {
    init_logging();
    let (state, _) = page_with_alerts(vec![ExistingAlert {
        id: AlertId(4),
        permanent: true,
        closable: true,
    }]);
    let (_, effects) = update(
        state,
        Msg::FileSelected(Some(SelectedFile::new("a.doc", 1))),
    );

    assert!(matches!(
        effects.first(),
        Some(Effect::ShowAlert { id: AlertId(5), .. })
    ));
}

#[test]
fn escape_closes_every_closable_alert() {
    init_logging();
    let (state, _) = page_with_alerts(vec![
        ExistingAlert {
            id: AlertId(1),
            permanent: true,
            closable: true,
        },
        ExistingAlert {
            id: AlertId(2),
            permanent: false,
            closable: false,
        },
    ]);
    let (state, _) = update(
        state,
        Msg::FileSelected(Some(SelectedFile::new("a.doc", 1))),
    );

    let (state, effects) = update(state, Msg::KeyPressed(KeyPress::plain("Escape")));
    assert_eq!(
        effects,
        vec![Effect::RemoveAlert(AlertId(1)), Effect::RemoveAlert(AlertId(3))]
    );
    assert_eq!(state.view().alerts.len(), 1);

    let (_, effects) = update(state, Msg::KeyPressed(KeyPress::plain("Escape")));
    assert!(effects.is_empty());
}
