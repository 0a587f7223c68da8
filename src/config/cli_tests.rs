//! Tests for CLI argument parsing.

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_args() {
        let cli = Cli::parse_from_iter([
            "slack-feedback",
            "--webhook",
            "https://hooks.slack.com/services/T/B/X",
            "Love the new layout",
        ]);

        assert_eq!(
            cli.webhook.as_deref(),
            Some("https://hooks.slack.com/services/T/B/X")
        );
        assert_eq!(cli.text.as_deref(), Some("Love the new layout"));
        assert!(cli.command.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_identity_and_metadata() {
        let cli = Cli::parse_from_iter([
            "slack-feedback",
            "--user-id",
            "U123",
            "--email",
            "jo@example.com",
            "--os-version",
            "iOS 17.2",
            "--device",
            "iPhone16,1",
            "--app-version",
            "2.0.1",
            "text",
        ]);

        assert_eq!(cli.user_id.as_deref(), Some("U123"));
        assert_eq!(cli.email.as_deref(), Some("jo@example.com"));
        assert_eq!(cli.os_version.as_deref(), Some("iOS 17.2"));
        assert_eq!(cli.device.as_deref(), Some("iPhone16,1"));
        assert_eq!(cli.app_version.as_deref(), Some("2.0.1"));
    }

    #[test]
    fn parse_runtime_flags() {
        let cli = Cli::parse_from_iter([
            "slack-feedback",
            "--timeout",
            "15",
            "-c",
            "custom.toml",
            "--dry-run",
            "-v",
            "text",
        ]);

        assert_eq!(cli.timeout, Some(15));
        assert_eq!(
            cli.config.as_deref(),
            Some(std::path::Path::new("custom.toml"))
        );
        assert!(cli.dry_run);
        assert!(cli.verbose);
    }

    #[test]
    fn text_is_optional_at_parse_time() {
        let cli = Cli::parse_from_iter(["slack-feedback"]);

        assert!(cli.text.is_none());
    }
}

mod init_command {
    use super::*;

    #[test]
    fn init_uses_default_output() {
        let cli = Cli::parse_from_iter(["slack-feedback", "init"]);

        assert_eq!(
            cli.init_output(),
            Some(std::path::Path::new("slack-feedback.toml"))
        );
        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, std::path::PathBuf::from("slack-feedback.toml"));
            }
            None => panic!("Expected init command"),
        }
    }

    #[test]
    fn init_accepts_output_path() {
        let cli = Cli::parse_from_iter(["slack-feedback", "init", "-o", "/tmp/sf.toml"]);

        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, std::path::PathBuf::from("/tmp/sf.toml"));
            }
            None => panic!("Expected init command"),
        }
    }

    #[test]
    fn plain_invocation_is_not_init() {
        let cli = Cli::parse_from_iter(["slack-feedback", "hello"]);

        assert!(cli.init_output().is_none());
    }
}
