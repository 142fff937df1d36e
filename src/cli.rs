// Command-line arguments.
// Two optional positionals: ranking size and fork inclusion.

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "langstat",
    version,
    about = "Ranked language statistics across a GitHub user's repositories",
    long_about = None
)]
pub struct Args {
    /// How many languages to show in the ranking
    #[arg(value_name = "TOP_N", default_value_t = 10)]
    pub top_n: usize,

    /// Include forked repositories (literal "true" to enable)
    #[arg(value_name = "INCLUDE_FORKS", default_value = "false")]
    include_forks: String,
}

impl Args {
    /// Whether forks count toward the totals. Only a case-insensitive
    /// "true" enables them; any other value means originals only.
    pub fn include_forks(&self) -> bool {
        self.include_forks.eq_ignore_ascii_case("true")
    }
}
