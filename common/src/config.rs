#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Skips the banner printed before a page is opened.
    pub no_banner: bool,
    /// Verbosity reduction. `0` prints everything, `1` drops headers and
    /// decorations, `2` only prints the final result line.
    pub quiet: u8,
    /// Does not listen for `q` / Ctrl-C while a page is busy.
    ///
    /// Pages then run until their pending operation resolves.
    pub disable_input: bool,
}
