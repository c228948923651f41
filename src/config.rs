use std::time::Duration;

const DEFAULT_LISTEN: &str = "127.0.0.1:8080";
const DEFAULT_DEADLINE_SECS: u64 = 60;

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: String,
    /// How long a connection may take end-to-end before it is aborted.
    pub deadline: Duration,
}

impl Config {
    /// Builds the config from positional `<address> <port>` arguments,
    /// falling back to the `LISTEN` env var, then the default address.
    ///
    /// `args` is the argument list without the program name. An explicit
    /// port that does not parse is a startup error.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();

        let listen_addr = match args.as_slice() {
            [] => std::env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string()),
            [address, port] => {
                let port: u16 = port
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid port '{port}'"))?;
                format!("{address}:{port}")
            }
            _ => anyhow::bail!("usage: rimo <address> <port>"),
        };

        let deadline = std::env::var("DEADLINE_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_DEADLINE_SECS));

        Ok(Self {
            listen_addr,
            deadline,
        })
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }
}
