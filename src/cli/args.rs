//! Splits the positional pull request number from ortho-config flags.

use std::ffi::OsString;

use downstream_prs::IntakeError;

/// Usage line shown with argument errors.
pub const USAGE: &str = "downstream-prs [OPTIONS] <PR_NUMBER>";

/// Option list printed by `--help`.
const OPTIONS: &str = "\
Arguments:
  <PR_NUMBER>                  Pull request whose comments are scanned

Options:
  -t, --token <TOKEN>          GitHub token (falls back to GH_TOKEN, then GITHUB_TOKEN)
  -o, --owner <OWNER>          Repository owner [default: GoogleCloudPlatform]
  -r, --repo <REPO>            Repository name [default: magic-modules]
      --api-base <URL>         GitHub API base URL [default: https://api.github.com]
      --marker <TEXT>          Text that starts a dependency line [default: \"depends: \"]
      --url-prefix <PREFIX>    Prefix a dependency URL must carry [default: https://github.com/]
  -h, --help                   Print help
  -V, --version                Print version
";

/// Flags that take a value, as understood by the configuration loader.
const VALUE_FLAGS: [&str; 9] = [
    "--token",
    "-t",
    "--owner",
    "-o",
    "--repo",
    "-r",
    "--api-base",
    "--marker",
    "--url-prefix",
];

/// Informational output requested in place of a scan.
///
/// Help outranks version when both are given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InfoRequest {
    /// `--version` or `-V`.
    Version,
    /// `--help` or `-h`.
    Help,
}

impl InfoRequest {
    fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "--help" | "-h" => Some(Self::Help),
            "--version" | "-V" => Some(Self::Version),
            _ => None,
        }
    }

    /// Text printed to stdout for this request.
    pub fn text(self) -> String {
        match self {
            Self::Help => format!(
                "Lists the downstream pull requests declared in a pull request's comments.\n\n\
                 Usage: {USAGE}\n\n{OPTIONS}"
            ),
            Self::Version => format!("downstream-prs {}\n", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Command line split into positional values and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    positionals: Vec<OsString>,
    flags: Vec<OsString>,
    unknown_flags: Vec<String>,
    info: Option<InfoRequest>,
}

impl CommandLine {
    /// Help or version output requested on the command line, if any.
    pub const fn info_request(&self) -> Option<InfoRequest> {
        self.info
    }

    /// Returns the single pull request number.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::Usage`] for an unrecognised option, or unless
    /// exactly one positional argument was given and it is a positive
    /// integer.
    pub fn pull_request_number(&self) -> Result<u64, IntakeError> {
        if let Some(flag) = self.unknown_flags.first() {
            return Err(IntakeError::Usage {
                message: format!("unrecognised option {flag:?} ({USAGE})"),
            });
        }

        let [value] = self.positionals.as_slice() else {
            return Err(IntakeError::Usage {
                message: format!(
                    "expected exactly one pull request number, got {count} ({USAGE})",
                    count = self.positionals.len()
                ),
            });
        };

        let text = value.to_string_lossy();
        match text.parse::<u64>() {
            Ok(number) if number > 0 => Ok(number),
            _ => Err(IntakeError::Usage {
                message: format!("pull request number must be a positive integer, got {text:?}"),
            }),
        }
    }

    /// Program name and flags, ready for ortho-config.
    pub fn into_flags(self) -> Vec<OsString> {
        self.flags
    }
}

/// Separates positional values from flags.
///
/// The first argument is the program name and is kept with the flags. A
/// known option consumes the following argument as its value unless it uses
/// `--flag=value` syntax. Unrecognised options are recorded and never take a
/// value. Everything after `--` is positional.
pub fn split_command_line<I>(raw_args: I) -> CommandLine
where
    I: IntoIterator<Item = OsString>,
{
    let mut iter = raw_args.into_iter();
    let mut flags: Vec<OsString> = iter.next().into_iter().collect();
    let mut positionals = Vec::new();
    let mut unknown_flags = Vec::new();
    let mut info = None;

    while let Some(argument) = iter.next() {
        let text = argument.to_string_lossy().into_owned();

        if text == "--" {
            positionals.extend(iter.by_ref());
            break;
        }

        if !text.starts_with('-') || text == "-" {
            positionals.push(argument);
            continue;
        }

        if let Some(request) = InfoRequest::from_flag(&text) {
            info = info.max(Some(request));
            flags.push(argument);
            continue;
        }

        let (name, inline_value) = match text.split_once('=') {
            Some((name, _)) => (name, true),
            None => (text.as_str(), false),
        };
        if !VALUE_FLAGS.contains(&name) {
            unknown_flags.push(name.to_owned());
            continue;
        }

        flags.push(argument);
        if !inline_value && let Some(value) = iter.next() {
            flags.push(value);
        }
    }

    CommandLine {
        positionals,
        flags,
        unknown_flags,
        info,
    }
}
