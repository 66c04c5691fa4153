use client_env as env;

#[test]
fn version_macros() {
    assert_eq!(env::version!(), env!("CARGO_PKG_VERSION"));
    assert_eq!(env::service_name!(), "env");
}

#[test]
fn config_file_name_follows_environment() {
    assert_eq!(env::Env::Development.config_file_name(), "development.toml");
    assert_eq!(env::Env::Sandbox.config_file_name(), "sandbox.toml");
    assert_eq!(env::Env::Production.config_file_name(), "production.toml");
}

#[test]
fn env_parses_case_insensitively() {
    assert_eq!("sandbox".parse::<env::Env>().ok(), Some(env::Env::Sandbox));
    assert_eq!("Production".parse::<env::Env>().ok(), Some(env::Env::Production));
    assert!("staging".parse::<env::Env>().is_err());
}

#[test]
fn config_path_points_into_workspace() {
    let path = env::Config::config_path(env::Env::Sandbox, None);

    assert!(path.ends_with("config/sandbox.toml"));
    assert_eq!(path.parent().and_then(|p| p.parent()), Some(env::workspace_path().as_path()));
}
