use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::ffi::OsString;

/// Port the fixture server has always listened on; client test suites hardcode it.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "127.0.0.1")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory of static demo assets served for any path that is not a fixture
    #[arg(long, env, default_value = "public")]
    static_dir: String,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new([
            "OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE",
        ])
        .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Builds a config from explicit arguments instead of the process command line.
    /// Environment variables still apply.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Config::parse_from(args)
    }

    pub fn interface(&self) -> &str {
        self.interface.as_deref().unwrap_or("127.0.0.1")
    }

    /// Host and port to bind. The host may be a name (`localhost`) or an IP
    /// literal, with or without IPv6 brackets.
    pub fn listen_addr(&self) -> (&str, u16) {
        let host = self.interface();
        let host = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);
        (host, self.port)
    }

    pub fn static_dir(&self) -> &str {
        &self.static_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["sse_fixture_server"];
        argv.extend_from_slice(args);
        Config::from_args(argv)
    }

    #[test]
    fn test_defaults_listen_on_localhost_8080() {
        let config = parse(&[]);
        assert_eq!(config.listen_addr(), ("127.0.0.1", 8080));
    }

    #[test]
    fn test_host_names_are_kept_for_resolution_at_bind_time() {
        let config = parse(&["--interface", "localhost", "--port", "9000"]);
        assert_eq!(config.listen_addr(), ("localhost", 9000));
    }

    #[test]
    fn test_ipv6_interface_is_accepted_with_or_without_brackets() {
        let config = parse(&["--interface", "::1", "--port", "9000"]);
        assert_eq!(config.listen_addr(), ("::1", 9000));

        let config = parse(&["--interface", "[::1]", "--port", "9000"]);
        assert_eq!(config.listen_addr(), ("::1", 9000));
    }

    #[test]
    fn test_log_level_filter_is_parsed_from_its_uppercase_name() {
        let config = parse(&["--log-level-filter", "TRACE"]);
        assert_eq!(config.log_level_filter, LevelFilter::Trace);
    }
}
