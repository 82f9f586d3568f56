use clap::Parser;
use ovkinfo::cli::Cli;

#[test]
fn parses_bare_invocation() {
    let cli = Cli::try_parse_from(["ovkinfo"]).expect("cli parse should work");
    assert_eq!(cli.profile, "default");
    assert!(!cli.json);
    assert_eq!(cli.verbose, 0);
    assert!(cli.identifier.is_none());
}

#[test]
fn parses_identifier_argument() {
    let cli = Cli::try_parse_from(["ovkinfo", "https://ovk.to/someuser"])
        .expect("cli parse should work");
    assert_eq!(cli.identifier.as_deref(), Some("https://ovk.to/someuser"));
}

#[test]
fn parses_json_flag() {
    let cli = Cli::try_parse_from(["ovkinfo", "--json", "12345"]).expect("cli parse should work");
    assert!(cli.json);
    assert_eq!(cli.identifier.as_deref(), Some("12345"));
}

#[test]
fn counts_verbose_flags() {
    let cli = Cli::try_parse_from(["ovkinfo", "-vv", "id42"]).expect("cli parse should work");
    assert_eq!(cli.verbose, 2);
}

#[test]
fn parses_profile_name() {
    let cli = Cli::try_parse_from(["ovkinfo", "--profile", "work", "durov"])
        .expect("cli parse should work");
    assert_eq!(cli.profile, "work");
    assert_eq!(cli.identifier.as_deref(), Some("durov"));
}
