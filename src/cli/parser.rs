use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rTiffin
/// CLI client for the tiffin-service order sheet
#[derive(Parser)]
#[command(
    name = "rtiffin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tiffin Manager CLI: generate the daily kitchen order list and export it",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the stored-login file (useful for tests or several endpoints)
    #[arg(global = true, long = "session", value_name = "FILE")]
    pub session: Option<String>,

    /// Verbose diagnostics (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Store the API URL and token for later commands
    Login {
        /// Apps Script Web App URL (default: $RTIFFIN_API_URL or `default_endpoint` in config)
        #[arg(long = "url", value_name = "URL")]
        url: Option<String>,

        /// API token ("Show API Token" in the order sheet menu)
        #[arg(long = "token", value_name = "TOKEN")]
        token: Option<String>,
    },

    /// Forget the stored API URL and token
    Logout,

    /// Show the stored login
    Session,

    /// Show dashboard counters
    Stats,

    /// Generate the kitchen order list for a day and meal
    Generate {
        /// Date (DD/MM/YYYY), default today
        #[arg(long, short = 'd', value_name = "DD/MM/YYYY")]
        date: Option<String>,

        /// Meal type: lunch or dinner (default from config)
        #[arg(long, short = 'm', value_name = "MEAL")]
        meal: Option<String>,

        /// Order numbers to skip, comma separated
        #[arg(long, short = 's', value_name = "ORDERS", default_value = "")]
        skip: String,

        /// Do not load dashboard counters first
        #[arg(long = "no-stats")]
        no_stats: bool,

        /// Export the generated list right away
        #[arg(long, short = 'x')]
        export: bool,

        /// Export format (default from config)
        #[arg(long, value_enum, requires = "export")]
        format: Option<ExportFormat>,

        /// Output directory for the export (default from config)
        #[arg(long, value_name = "DIR", requires = "export")]
        out: Option<String>,

        /// Save the raw result as JSON, to export it later
        #[arg(long, value_name = "FILE")]
        save: Option<String>,

        /// Overwrite existing files without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export a result saved with `generate --save`
    Export {
        /// Saved result (JSON)
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        /// Date used in the file name (default: the saved summary date)
        #[arg(long, short = 'd', value_name = "DD/MM/YYYY")]
        date: Option<String>,

        /// Meal used in the file name (default: the saved summary meal)
        #[arg(long, short = 'm', value_name = "MEAL")]
        meal: Option<String>,

        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "DIR")]
        out: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// List all orders
    Orders {
        /// Print the raw JSON data
        #[arg(long)]
        json: bool,
    },

    /// Show the kitchen order list currently stored in the sheet
    KitchenList {
        #[arg(long)]
        json: bool,
    },

    /// Update the payment status of an order
    Payment {
        /// Order number (e.g. ORD20260209-0001)
        order: String,
        /// New payment status (e.g. Paid, Pending)
        status: String,
    },

    /// Update the status of an order
    OrderStatus {
        order: String,
        /// New order status (e.g. Active, Paused, Completed)
        status: String,
    },

    /// Create an order from JSON (`--data '{...}'` or `--data @file.json`)
    CreateOrder {
        #[arg(long, value_name = "JSON")]
        data: String,
    },
}
