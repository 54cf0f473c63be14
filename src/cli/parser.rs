use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for hotellog
#[derive(Parser)]
#[command(
    name = "hotellog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record employee hotel stays into a shared CSV log; admins review, edit and export it",
    long_about = None
)]
pub struct Cli {
    /// Override the log file path (useful for tests or a shared drive)
    #[arg(global = true, long = "log", value_name = "FILE")]
    pub log: Option<String>,

    /// Role to log in as: admin or employee
    #[arg(global = true, long = "user", short = 'u')]
    pub user: Option<String>,

    /// Secret for the role (prompted on stdin when omitted)
    #[arg(
        global = true,
        long = "password",
        env = "HOTELLOG_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// More diagnostics on stderr (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(global = true, short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the log directory
    Init {
        /// Store this admin secret in the new config file
        #[arg(long = "admin-secret")]
        admin_secret: Option<String>,

        /// Store this employee secret in the new config file
        #[arg(long = "employee-secret")]
        employee_secret: Option<String>,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration (secrets masked)")]
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

    /// Employee view: log one hotel stay with 1 to 20 rooms
    ///
    /// Rooms are given as ROOM,DAY,NIGHT,CHECKIN,CHECKOUT[,COST], e.g.
    ///   --room "101,Ana Ruiz,Bo Chen,2025-03-01,2025-03-04,250"
    /// Dates may be YYYY-MM-DD or MM/DD/YYYY.
    Submit {
        /// Read the whole submission from a YAML file (hotel, admin, rooms)
        #[arg(
            long = "from-file",
            value_name = "FILE",
            conflicts_with_all = ["hotel_name", "rooms"]
        )]
        from_file: Option<String>,

        #[arg(long = "hotel")]
        hotel_name: Option<String>,

        #[arg(long = "address")]
        hotel_address: Option<String>,

        #[arg(long = "phone")]
        hotel_phone: Option<String>,

        #[arg(long = "contact")]
        hotel_contact: Option<String>,

        #[arg(long = "confirmation")]
        confirmation: Option<String>,

        /// Negotiated nightly rate
        #[arg(long = "rate")]
        nightly_rate: Option<f64>,

        /// One room; repeat for several rooms
        #[arg(long = "room", value_name = "ROOM,DAY,NIGHT,IN,OUT[,COST]")]
        rooms: Vec<String>,

        #[arg(long = "prepared-by")]
        prepared_by: Option<String>,

        /// Defaults to today
        #[arg(long = "date-prepared")]
        date_prepared: Option<String>,

        #[arg(long = "job")]
        job_number: Option<String>,

        /// E-mail a summary after saving (also enabled by notify_on_submit)
        #[arg(long = "notify")]
        notify: bool,
    },

    /// Admin view: show the whole log
    List {
        /// Only show rows with this job number
        #[arg(long = "job")]
        job: Option<String>,
    },

    /// Admin view: overwrite one cell of the log
    Edit {
        /// Zero-based row index as shown by `list`
        #[arg(long = "row")]
        row: usize,

        /// Column header, e.g. "Job Number"
        #[arg(long = "column")]
        column: String,

        /// New cell text (stored as-is)
        #[arg(long = "value")]
        value: String,
    },

    /// Admin view: download the log exactly as stored
    Export {
        /// Output file path (absolute); stdout when omitted
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
