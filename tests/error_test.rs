use std::io;
use std::path::PathBuf;

use inam_ui::error::Error;

#[test]
fn test_io_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::UnknownComponent {
        name: "buttn".to_string(),
        suggestions: vec!["Button".to_string()],
        available: vec![],
    };
    assert_eq!(err.to_string(), "\"buttn\" is not a valid component.");

    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::TemplateNotFound {
        name: "Badge".to_string(),
        path: PathBuf::from("/opt/inam-ui/templates/Badge.tsx"),
    };
    assert_eq!(
        err.to_string(),
        "Template for \"Badge\" not found at /opt/inam-ui/templates/Badge.tsx."
    );
}

#[test]
fn test_template_root_not_found_lists_all_paths() {
    let err = Error::TemplateRootNotFound {
        tried: vec![PathBuf::from("/a/templates"), PathBuf::from("/b/templates")],
    };
    assert_eq!(
        err.to_string(),
        "No templates directory found (tried: /a/templates, /b/templates)."
    );
}
