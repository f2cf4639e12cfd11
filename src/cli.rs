//! CLI flag parsing. Takes the argument iterator as input instead of reading
//! process state, so tests can drive it with plain vectors.

#[derive(Debug, Default)]
pub struct ParsedArgs {
    pub prog: String,
    pub cpu: bool,
    pub ram: bool,
    pub pid: bool,
    pub file_name: Option<String>,
    pub delay: Option<u64>,
    pub help: bool,
}

pub fn usage(prog: &str) -> String {
    format!("Usage: {prog} [--cpu] [--ram] [--pid] [--file-name PATH] [--delay SECONDS]")
}

/// Parse the raw argument list (program name first, as in `std::env::args()`).
/// Unknown flags, missing values and malformed delays are errors; `--help`
/// is not, it just sets the flag for the caller.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "hoststats".into());
    let mut parsed = ParsedArgs {
        prog: prog.clone(),
        ..ParsedArgs::default()
    };

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--cpu" => parsed.cpu = true,
            "--ram" => parsed.ram = true,
            "--pid" => parsed.pid = true,
            "--file-name" => {
                parsed.file_name = Some(
                    it.next()
                        .ok_or_else(|| format!("--file-name needs a path. {}", usage(&prog)))?,
                );
            }
            "--delay" => {
                let raw = it
                    .next()
                    .ok_or_else(|| format!("--delay needs a value. {}", usage(&prog)))?;
                parsed.delay = Some(parse_delay(&raw, &prog)?);
            }
            _ if arg.starts_with("--file-name=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        parsed.file_name = Some(v.to_string());
                    }
                }
            }
            _ if arg.starts_with("--delay=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    parsed.delay = Some(parse_delay(v, &prog)?);
                }
            }
            _ => {
                return Err(format!("Unexpected argument '{arg}'. {}", usage(&prog)));
            }
        }
    }
    Ok(parsed)
}

fn parse_delay(raw: &str, prog: &str) -> Result<u64, String> {
    raw.parse::<u64>().map_err(|_| {
        format!(
            "--delay expects a whole number of seconds, got '{raw}'. {}",
            usage(prog)
        )
    })
}
