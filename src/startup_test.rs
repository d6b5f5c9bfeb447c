use super::*;

#[test]
fn installs_every_subsystem_in_order() {
    let mut seen = Vec::new();
    let report = install_each(|s| {
        seen.push(s);
        Ok(())
    });
    assert_eq!(seen, Subsystem::ALL.to_vec());
    assert_eq!(report.installed, Subsystem::ALL.to_vec());
    assert!(report.is_complete());
}

#[test]
fn missing_navbar_does_not_block_reveals_or_anchors() {
    let report = install_each(|s| match s {
        Subsystem::ScrollChrome => Err(UiError::MissingElement(".navbar-custom".to_owned())),
        _ => Ok(()),
    });
    assert_eq!(report.installed, vec![Subsystem::Theme, Subsystem::Reveals, Subsystem::AnchorLinks]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, Subsystem::ScrollChrome);
    assert!(matches!(report.failed[0].1, UiError::MissingElement(ref sel) if sel == ".navbar-custom"));
    assert!(!report.is_complete());
}

#[test]
fn every_failure_is_recorded() {
    let report = install_each(|s| match s {
        Subsystem::Theme | Subsystem::AnchorLinks => Err(UiError::Js("SyntaxError".to_owned())),
        _ => Ok(()),
    });
    let failed: Vec<_> = report.failed.iter().map(|(s, _)| *s).collect();
    assert_eq!(failed, vec![Subsystem::Theme, Subsystem::AnchorLinks]);
    assert_eq!(report.installed, vec![Subsystem::ScrollChrome, Subsystem::Reveals]);
}

#[test]
fn subsystem_names_are_readable() {
    assert_eq!(Subsystem::ScrollChrome.to_string(), "scroll chrome");
    assert_eq!(Subsystem::AnchorLinks.to_string(), "anchor links");
}
