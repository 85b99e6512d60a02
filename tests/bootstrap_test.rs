//! Bootstrap invariants: single mount, theme probe from the environment.

use serial_test::serial;

use tunnelview::bootstrap::claim_mount;
use tunnelview::error::BootstrapError;
use tunnelview::theme::{Locale, Mode, ThemeState};

#[test]
#[serial]
fn test_second_mount_is_rejected_while_first_is_live() {
    let guard = claim_mount().unwrap();
    match claim_mount() {
        Err(BootstrapError::AlreadyMounted) => {}
        other => panic!("expected AlreadyMounted, got {other:?}"),
    }
    drop(guard);
    // After a clean shutdown the process can mount again.
    let _guard = claim_mount().unwrap();
}

#[test]
#[serial]
fn test_fresh_load_with_dark_preference_starts_dark() {
    std::env::set_var("COLORFGBG", "15;0");
    let theme = ThemeState::detect(Locale::ZhCn);
    assert_eq!(theme.mode(), Mode::Dark);
    std::env::remove_var("COLORFGBG");
}

#[test]
#[serial]
fn test_probe_failure_falls_back_to_light() {
    std::env::remove_var("COLORFGBG");
    let theme = ThemeState::detect(Locale::ZhCn);
    assert_eq!(theme.mode(), Mode::Light);
}

#[test]
#[serial]
fn test_light_background_probe() {
    std::env::set_var("COLORFGBG", "0;15");
    let theme = ThemeState::detect(Locale::EnUs);
    assert_eq!(theme.mode(), Mode::Light);
    std::env::remove_var("COLORFGBG");
}
