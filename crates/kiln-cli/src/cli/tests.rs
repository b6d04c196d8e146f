#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command};
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_defaults() {
        let cli = Cli::try_parse_from(["kiln", "resolve"]).unwrap();
        match cli.command {
            Command::Resolve(args) => {
                assert!(args.target.mode.is_none());
                assert!(args.target.root.is_none());
                assert!(!args.compact);
            }
            other => panic!("expected resolve, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_with_mode_and_root() {
        let cli = Cli::try_parse_from([
            "kiln", "resolve", "--mode", "production", "--root", "web", "--compact",
        ])
        .unwrap();
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.target.mode.as_deref(), Some("production"));
                assert_eq!(args.target.root, Some(PathBuf::from("web")));
                assert!(args.compact);
            }
            other => panic!("expected resolve, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["kiln", "check", "-m", "staging", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Check(_)));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["kiln", "-v", "-q", "resolve"]).is_err());
    }

    #[test]
    fn test_env_reveal_flag() {
        let cli = Cli::try_parse_from(["kiln", "env", "--reveal"]).unwrap();
        match cli.command {
            Command::Env(args) => assert!(args.reveal),
            other => panic!("expected env, got {other:?}"),
        }
    }

    #[test]
    fn test_config_flag() {
        let cli = Cli::try_parse_from(["kiln", "--config", "ci/kiln.toml", "resolve"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("ci/kiln.toml")));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["kiln"]).is_err());
    }
}
