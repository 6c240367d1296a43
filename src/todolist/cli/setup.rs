use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

/// Long flags that may also be written with a single dash (`-title`, `-id=2`).
const LONG_FLAGS: &[&str] = &["title", "id", "file", "verbose", "help", "version"];

/// Long flags whose value is the following argument, whatever it looks like.
const VALUE_FLAGS: &[&str] = &["title", "id", "file"];

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "todo", bin_name = "todo", version = get_version())]
#[command(about = "A small, file-backed todo list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Todo file to use instead of ./storage/todos.json
    #[arg(long, global = true, env = "TODO_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a todo
    #[command(display_order = 1)]
    Add {
        /// Title of the todo
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        title: String,
    },

    /// List todos
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Mark a todo as done
    #[command(display_order = 3)]
    Done {
        /// Position of the todo in the list, starting at 0
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        id: i64,
    },

    /// Delete a todo
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// Position of the todo in the list, starting at 0
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        id: i64,
    },

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Rewrites single-dash long flags into the double-dash form clap expects.
///
/// The argument after a value-taking flag (`-title -id`) is left untouched.
pub fn normalize_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    let mut takes_value = false;
    args.into_iter()
        .map(|arg| {
            if passthrough || std::mem::take(&mut takes_value) {
                return arg;
            }
            let rewritten = match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    None
                }
                Some(s) => {
                    let flag = s.strip_prefix("--").or_else(|| s.strip_prefix('-'));
                    match flag {
                        Some(name) if VALUE_FLAGS.contains(&name) => takes_value = true,
                        _ => {}
                    }
                    s.strip_prefix('-')
                        .filter(|rest| !rest.starts_with('-') && is_long_flag(rest))
                        .map(|_| OsString::from(format!("-{}", s)))
                }
                None => None,
            };
            rewritten.unwrap_or(arg)
        })
        .collect()
}

fn is_long_flag(flag: &str) -> bool {
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}
