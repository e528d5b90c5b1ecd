use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "focal")]
#[command(about = "A Pomodoro-style focus session timer for the command line")]
#[command(long_about = "focal - a focus session timer for the command line

Run timed focus sessions with paired breaks, keep your history in a
local SQLite database, link sessions to tasks, and track streaks and
productivity over time.

QUICK START:
  focal start               Start a 25-minute session with a 5-minute break
  focal start 45m -b 10m    Start a 45-minute session with a 10-minute break
  focal status              Show the active session
  focal stats --period week Show this week's dashboard

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  focal <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Run against in-memory stores instead of the database
    ///
    /// Sessions recorded in offline mode live only for the lifetime of
    /// the process and get ids prefixed with 'offline-'. Useful when
    /// the database is unavailable or for trying focal out.
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Reporting period for the stats dashboard.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeriodArg {
    /// The current calendar day.
    Today,
    /// The last 7 days, including today.
    Week,
    /// The last 30 days, including today.
    Month,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a focus session with an interactive countdown
    ///
    /// Runs a full-screen countdown for the session, then for the
    /// break. The session is recorded when it starts and updated when
    /// it completes or is cancelled; if recording fails the countdown
    /// keeps running and the warning is printed afterwards.
    ///
    /// # Keys during the countdown
    ///
    ///   space      Pause / resume
    ///   q, Esc     Cancel (during a break: skip the break)
    ///
    /// # Examples
    ///
    ///   focal start                  Use configured defaults (25m / 5m)
    ///   focal start 45m              45-minute session
    ///   focal start 1h30m -b 15m     Long session with a long break
    ///   focal start 25m -b 0         No break afterwards
    ///   focal start -t 12            Link the session to task 12
    #[command(alias = "s")]
    Start(StartArgs),

    /// Show the active focus session
    ///
    /// Reads the most recent in-progress session from the store. Exits
    /// with a message when nothing is running.
    ///
    /// # Examples
    ///
    ///   focal status
    ///   focal st -o json
    #[command(alias = "st")]
    Status,

    /// List recent focus sessions
    ///
    /// Shows the most recently started sessions, newest first, with
    /// their status, duration, and linked task.
    ///
    /// # Examples
    ///
    ///   focal history              Last 10 sessions
    ///   focal history -n 50        Last 50 sessions
    ///   focal h -o json            JSON for scripting
    #[command(alias = "h")]
    History(HistoryArgs),

    /// Show productivity statistics
    ///
    /// Without a period, shows lifetime statistics and a daily focus
    /// chart for the last two weeks. With --period, shows the dashboard
    /// for that window: focus time, sessions, tasks completed, streak,
    /// productivity score, and deltas against the previous window.
    ///
    /// # Examples
    ///
    ///   focal stats                   Lifetime overview
    ///   focal stats --period today    Today's dashboard
    ///   focal stats --period week     Last 7 days with deltas
    Stats(StatsArgs),

    /// Manage tasks that sessions can link to
    ///
    /// # Examples
    ///
    ///   focal tasks                      List open tasks
    ///   focal tasks add "Write report"   Add a task
    ///   focal tasks done 3               Mark task 3 completed
    Tasks(TasksArgs),

    /// Show or initialize configuration
    ///
    /// Configuration lives in ~/.focal/config.yaml. 'show' prints the
    /// effective configuration including defaults; 'init' writes a
    /// config file with the defaults so it can be edited.
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Writes a completion script to stdout.
    ///
    /// # Examples
    ///
    ///   focal completions zsh > ~/.zfunc/_focal
    ///   focal completions bash > /etc/bash_completion.d/focal
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Arguments for starting a focus session.
#[derive(Args)]
pub struct StartArgs {
    /// Session duration (e.g. "25", "45m", "1h30m"); defaults to config
    pub duration: Option<String>,

    /// Break duration after the session; "0" disables the break
    #[arg(short, long, value_name = "DURATION")]
    pub break_duration: Option<String>,

    /// Task id to link the session to
    #[arg(short, long, value_name = "ID")]
    pub task: Option<String>,

    /// Notes to attach to the session
    #[arg(short, long)]
    pub notes: Option<String>,
}

/// Arguments for listing session history.
#[derive(Args)]
pub struct HistoryArgs {
    /// Maximum number of sessions to show
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for the stats dashboard.
#[derive(Args)]
pub struct StatsArgs {
    /// Reporting period; omit for the lifetime overview
    #[arg(short, long, value_enum)]
    pub period: Option<PeriodArg>,
}

/// Task management arguments.
#[derive(Args)]
pub struct TasksArgs {
    #[command(subcommand)]
    pub command: Option<TaskCommands>,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List open tasks
    List {
        /// Include completed tasks
        #[arg(short, long)]
        all: bool,
    },

    /// Add a task
    Add {
        /// Task title
        title: String,

        /// Priority: high, medium, or low
        #[arg(short, long, default_value = "medium")]
        priority: String,

        /// Estimated effort in minutes
        #[arg(short, long, value_name = "MINUTES")]
        estimate: Option<u32>,
    },

    /// Mark a task completed
    Done {
        /// Task id
        id: String,
    },
}

/// Configuration arguments.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Write a config file with the defaults
    Init,
}
