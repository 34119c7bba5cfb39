use anyhow::Result;
use clap::{Parser, Subcommand};

use student_finance::cli::{
    handle_classify_command, handle_expense_command, handle_goal_command, handle_summary_command,
    ExpenseCommands, GoalCommands,
};
use student_finance::config::Settings;
use student_finance::ledger::Session;

#[derive(Parser)]
#[command(
    name = "stufin",
    version,
    about = "Student-focused personal finance tracker",
    long_about = "stufin tracks expenses and savings goals for one in-memory \
                  session. Nothing is written to disk: every run starts from \
                  the built-in demo dataset (or empty with --empty), mirrors \
                  the changes a command makes, and prints the result."
)]
struct Cli {
    /// Start from an empty session instead of the built-in demo data
    #[arg(long, global = true)]
    empty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense tracking commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Infer the category for an expense description
    Classify {
        /// Free-text description, e.g. "Bus ticket"
        description: String,
    },

    /// Show spending and goal summaries
    Summary,
}

fn main() -> Result<()> {
    student_finance::logging::init();

    let cli = Cli::parse();
    let settings = Settings::default();
    let mut session = if cli.empty {
        Session::new()
    } else {
        Session::demo()
    };

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut session, &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&mut session, &settings, cmd)?;
        }
        Some(Commands::Classify { description }) => {
            handle_classify_command(&description)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&session, &settings)?;
        }
        None => {
            println!("stufin - student-focused personal finance tracker");
            println!();
            println!("Run 'stufin --help' for usage information.");
        }
    }

    Ok(())
}
