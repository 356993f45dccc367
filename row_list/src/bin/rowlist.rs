// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Load rows from a JSON file, run them through the engine, and print one
//! `<key>\t<text>` line per row. Handy to inspect fixtures, and to see how keys stay put
//! when rows are reordered.
//!
//! ```text
//! rowlist --family team-page --input team.json --roster roster.json --width 60
//! rowlist --family team-list --input props.json --platform mobile
//! rowlist --family inbox --input inbox.json --enable-logging
//! ```

use std::path::{Path, PathBuf};

use clap::{Args, Parser, ValueEnum};
use r3bl_row_list::{CommonResult, DefaultSubteamRenderer, HostBinding, InboxDispatcher,
                    InboxRow, JsonFile, MemberRoster, PlainTextHost, Platform,
                    RosterMemberRenderer, TeamListDispatcher, TeamListProps,
                    TeamPageDispatcher, TeamRow, TextFragment, get_terminal_width,
                    log::{DisplayPreference, TracingConfig, WriterConfig,
                          try_initialize_logging_global,
                          tracing_config_options::DEFAULT_LOG_FILE_NAME},
                    ok, project, setup_default_miette_global_report_handler,
                    team_list_rows, throws};

/// `mimalloc` is a replacement for the default global allocator. It's optimized for
/// multi-threaded use cases where lots of small objects are created and destroyed.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const ISSUES_URL: &str = "https://github.com/r3bl-org/r3bl-open-core/issues/new";

#[derive(Debug, Parser)]
#[command(bin_name = "rowlist")]
#[command(about = "🧾 Render typed row lists as keyed lines of text")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
pub struct CLIArg {
    #[arg(long, short = 'f', value_enum, help = "Which kind of rows the input holds")]
    pub family: RowFamily,

    #[arg(
        long,
        short = 'i',
        help = "JSON file w/ an array of rows (or the team list props for `team-list`)"
    )]
    pub input: PathBuf,

    #[arg(long, short = 'w', help = "Max display width of each line [default: terminal width]")]
    pub width: Option<usize>,

    #[arg(long, short = 'p', value_enum, default_value_t = Platform::Desktop)]
    pub platform: Platform,

    #[arg(
        long,
        short = 'r',
        help = "JSON file w/ the member roster, used to render `member` rows of a team page"
    )]
    pub roster: Option<PathBuf>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        long,
        short = 'l',
        help = "Log app output to a file (see `--log-file`) for debugging"
    )]
    pub enable_logging: bool,

    #[arg(long, help = "Log file to use w/ `--enable-logging`", default_value = DEFAULT_LOG_FILE_NAME)]
    pub log_file: String,

    #[arg(long, help = "Also log to stderr w/ `--enable-logging`")]
    pub log_to_stderr: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RowFamily {
    TeamPage,
    TeamList,
    Inbox,
}

fn main() -> CommonResult<()> {
    throws!({
        // If no args are passed, the following line will fail, and help will be printed
        // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
        let cli_arg = CLIArg::parse();

        setup_default_miette_global_report_handler(ISSUES_URL);

        let enable_logging = cli_arg.global_options.enable_logging;
        if enable_logging {
            try_initialize_logging_global(tracing_config(&cli_arg.global_options))?;
            // % is Display, ? is Debug.
            tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
        }

        let width = cli_arg
            .width
            .unwrap_or_else(|| usize::from(get_terminal_width()));

        let fragment = match cli_arg.family {
            RowFamily::TeamPage => {
                render_team_page(&cli_arg.input, cli_arg.roster.as_deref(), width)?
            }
            RowFamily::TeamList => render_team_list(&cli_arg.input, cli_arg.platform, width)?,
            RowFamily::Inbox => render_inbox(&cli_arg.input, width)?,
        };
        print!("{fragment}");

        if enable_logging {
            tracing::debug!(message = "Stop logging...");
        }
    })
}

fn tracing_config(options: &GlobalOption) -> TracingConfig {
    let writer_config = if options.log_to_stderr {
        WriterConfig::DisplayAndFile(DisplayPreference::Stderr, options.log_file.clone())
    } else {
        WriterConfig::File(options.log_file.clone())
    };
    // Defaults to the `DEBUG` level.
    TracingConfig::from(writer_config)
}

fn render_team_page(
    input: &Path,
    roster: Option<&Path>,
    width: usize,
) -> CommonResult<TextFragment> {
    let rows: Vec<TeamRow> = JsonFile::new(input, "rows").try_load_rows()?;
    let mut host = PlainTextHost::new(width);

    let fragment = match roster {
        Some(roster) => {
            let roster: MemberRoster = JsonFile::new(roster, "roster").try_load()?;
            let dispatcher = TeamPageDispatcher::with_renderers(
                RosterMemberRenderer::new(roster),
                DefaultSubteamRenderer,
            );
            host.render(project(&rows, &dispatcher)?.iter())?
        }
        None => {
            let dispatcher = TeamPageDispatcher::new();
            host.render(project(&rows, &dispatcher)?.iter())?
        }
    };

    ok!(fragment)
}

fn render_team_list(
    input: &Path,
    platform: Platform,
    width: usize,
) -> CommonResult<TextFragment> {
    let props: TeamListProps = JsonFile::new(input, "props").try_load()?;
    let rows = team_list_rows(&props);
    let dispatcher = TeamListDispatcher::new(platform);
    PlainTextHost::new(width).render(project(&rows, &dispatcher)?.iter())
}

fn render_inbox(input: &Path, width: usize) -> CommonResult<TextFragment> {
    let rows: Vec<InboxRow> = JsonFile::new(input, "rows").try_load_rows()?;
    PlainTextHost::new(width).render(project(&rows, &InboxDispatcher)?.iter())
}
