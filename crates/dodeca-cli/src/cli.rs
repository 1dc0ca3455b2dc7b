use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dodeca-shape",
    about = "Dodeca marker shapes: name and spinner-index conversions",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every shape with its index and icon
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up a shape by exact canonical name (e.g. VERTICAL_BAR)
    Parse {
        /// Canonical shape name
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the spinner index of a shape
    Index {
        /// Canonical shape name
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the shape at a spinner index
    FromIndex {
        /// Spinner index (0-4)
        #[arg(allow_negative_numbers = true)]
        index: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode a stored shape preference, falling back to a default
    Preference {
        /// Stored preference text; omitted means unset
        raw: Option<String>,

        /// Shape used when the preference is unset or unreadable
        #[arg(long, default_value = "CIRCLE")]
        default: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
