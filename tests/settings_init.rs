//! The settings singleton is set once per process, so everything that
//! touches it lives in this one test binary and runs in order.

use phony::api::settings_load_config;
use phony::settings::{self, SettingsError};
use phony::{Phony, PhonyError, TranslateOptions};

const CUSTOM: &str = r#"
[defaults]
alphabet = "foo"
letter_splitter = "-"
word_splitter = "stop"

[alphabets.foo]
fallback = "itu"

[alphabets.foo.characters]
"F" = "feck"
"O" = "off"
"#;

#[test]
fn custom_settings_seed_new_engines() {
    let dir = tempfile::tempdir().unwrap();

    // Failed loads leave the singleton unset.
    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        settings_load_config(&missing).unwrap_err(),
        PhonyError::Io { .. }
    ));
    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "[defaults]\nword_splitter = \"(\"\n").unwrap();
    assert!(matches!(
        settings_load_config(&bad).unwrap_err(),
        PhonyError::InvalidData { .. }
    ));

    let path = dir.path().join("settings.toml");
    std::fs::write(&path, CUSTOM).unwrap();
    settings_load_config(&path).unwrap();

    let phony = Phony::new();
    assert_eq!(phony.defaults().alphabet, "foo");
    assert!(phony.alphabets().contains("itu"));
    assert_eq!(
        phony.translate_to("FOO fa", &TranslateOptions::new()),
        "Feck-Off-Off-Stop-Feck-Alfa"
    );
    assert_eq!(
        phony
            .translate_from("Feck-Off-Off-Stop-Feck-Alfa", &TranslateOptions::new())
            .unwrap(),
        "FOO FA"
    );
    assert_ne!(phony, Phony::builtin());

    let err = settings::init_custom(CUSTOM.to_string()).unwrap_err();
    assert!(matches!(err, SettingsError::AlreadyInitialized));
    assert!(matches!(
        settings_load_config(&path).unwrap_err(),
        PhonyError::InvalidData { .. }
    ));
}
